//! Player module - identity marker and first-person walking controls.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::PlayerPlugin;
