//! World module housing the demo scene layout.
pub mod plugin;
pub mod systems;

pub use plugin::WorldPlugin;
