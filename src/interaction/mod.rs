//! Interaction module: trigger volumes, overlap dispatch, and interact-key input.
pub mod components;
pub mod config;
pub mod errors;
pub mod events;
pub mod handler;
pub mod input;
pub mod plugin;
pub mod systems;

pub use plugin::{InteractionPlugin, InteractionSet};
