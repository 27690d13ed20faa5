//! Player plugin wiring the first-person walking controls.
use bevy::prelude::*;

use crate::{
    interaction::InteractionSet,
    player::systems::{player_mouse_look, player_walk, update_cursor_grab},
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        // Movement settles before overlaps are tested for the frame.
        app.add_systems(
            Update,
            (
                update_cursor_grab,
                player_mouse_look.after(update_cursor_grab),
                player_walk,
            )
                .before(InteractionSet::Detect),
        );
    }
}
