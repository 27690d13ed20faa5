use bevy::prelude::*;

mod interaction;
mod player;
mod props;
mod ui;
mod world;

use crate::{
    interaction::InteractionPlugin, player::PlayerPlugin, props::PropsPlugin, world::WorldPlugin,
};

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins,
            InteractionPlugin::default(),
            PropsPlugin, // After InteractionPlugin to reuse its sets and messages
            PlayerPlugin,
            WorldPlugin,
        ))
        .run();
}
