//! WorldPlugin assembles the demo hall around the interaction props.
use bevy::prelude::*;

use crate::world::systems::{spawn_candle, spawn_door, spawn_player, spawn_world_environment};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                spawn_world_environment,
                spawn_player,
                spawn_candle,
                spawn_door,
            ),
        );
    }
}
