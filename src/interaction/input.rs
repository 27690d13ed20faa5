//! Per-frame snapshot of the interact key, handed to overlap handlers.
use bevy::prelude::*;

use super::config::InteractionSettings;

/// Edge state of the interact key for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionInput {
    pub just_pressed: bool,
    pub just_released: bool,
}

impl InteractionInput {
    #[cfg_attr(not(test), allow(dead_code))]
    pub const IDLE: Self = Self {
        just_pressed: false,
        just_released: false,
    };

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn pressed() -> Self {
        Self {
            just_pressed: true,
            ..Self::IDLE
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn released() -> Self {
        Self {
            just_released: true,
            ..Self::IDLE
        }
    }

    pub fn from_keyboard(keyboard: &ButtonInput<KeyCode>, key: KeyCode) -> Self {
        Self {
            just_pressed: keyboard.just_pressed(key),
            just_released: keyboard.just_released(key),
        }
    }
}

/// Latest sampled interact key state.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct InteractionInputState {
    pub current: InteractionInput,
}

/// Samples the configured interact key once per frame.
pub fn sample_interaction_input(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    settings: Res<InteractionSettings>,
    mut state: ResMut<InteractionInputState>,
) {
    state.current = keyboard
        .map(|keyboard| InteractionInput::from_keyboard(&keyboard, settings.interact_key))
        .unwrap_or_default();
}
