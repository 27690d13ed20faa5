//! InteractionPlugin wires trigger detection, input sampling, and messages.
use bevy::prelude::*;

use super::{
    config::InteractionSettings,
    events::{AnimationTriggerMessage, InteractableToggledMessage, TriggerOverlapMessage},
    input::{sample_interaction_input, InteractionInputState},
    systems::detect_trigger_overlaps,
};

/// Frame phases of the interaction pipeline, run in declaration order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionSet {
    /// Interact key sampled into `InteractionInputState`.
    Sample,
    /// Trigger volumes tested against colliders.
    Detect,
    /// Overlap messages handed to interactables.
    Dispatch,
    /// Animators consume triggers and advance.
    Animate,
}

/// Registers overlap detection and the shared interaction resources.
#[derive(Debug, Clone, Default)]
pub struct InteractionPlugin {
    settings: Option<InteractionSettings>,
}

impl InteractionPlugin {
    /// Uses the given settings instead of reading `config/interaction.toml`.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_settings(settings: InteractionSettings) -> Self {
        Self {
            settings: Some(settings),
        }
    }
}

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        let settings = self
            .settings
            .clone()
            .unwrap_or_else(InteractionSettings::load_or_default);

        app.insert_resource(settings)
            .init_resource::<InteractionInputState>()
            .add_message::<TriggerOverlapMessage>()
            .add_message::<AnimationTriggerMessage>()
            .add_message::<InteractableToggledMessage>()
            .configure_sets(
                Update,
                (
                    InteractionSet::Sample,
                    InteractionSet::Detect,
                    InteractionSet::Dispatch,
                    InteractionSet::Animate,
                )
                    .chain(),
            )
            .add_systems(Startup, log_interaction_settings)
            .add_systems(PostUpdate, log_interactable_toggles)
            .add_systems(
                Update,
                (
                    sample_interaction_input.in_set(InteractionSet::Sample),
                    detect_trigger_overlaps.in_set(InteractionSet::Detect),
                ),
            );
    }
}

fn log_interaction_settings(settings: Res<InteractionSettings>) {
    info!(
        "InteractionPlugin initialised with interact key {:?} (door swing {:.0} deg over {:.2}s)",
        settings.interact_key,
        settings.door_swing_radians.to_degrees(),
        settings.door_swing_seconds
    );
}

fn log_interactable_toggles(mut toggles: MessageReader<InteractableToggledMessage>) {
    for toggle in toggles.read() {
        info!(
            "{} {:?} is now {}",
            toggle.label,
            toggle.interactable,
            if toggle.active { "active" } else { "inactive" }
        );
    }
}
