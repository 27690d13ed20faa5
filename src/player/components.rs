//! Player identity and first-person controller state.
use bevy::prelude::*;

/// Identity marker: colliders carrying it count as "the player" for
/// interactables that only react to the player.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Player;

/// Walking first-person controller attached to the player camera.
#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    pub yaw: f32,
    pub pitch: f32,
    pub walk_speed: f32,
    pub look_sensitivity: f32,
    /// Camera height kept constant while walking.
    pub eye_height: f32,
}

impl PlayerController {
    pub fn new(yaw: f32, eye_height: f32) -> Self {
        Self {
            yaw,
            pitch: 0.0,
            walk_speed: 3.5,
            look_sensitivity: 0.15,
            eye_height,
        }
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_axis_angle(Vec3::Y, self.yaw) * Quat::from_axis_angle(Vec3::X, self.pitch)
    }
}
