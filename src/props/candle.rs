//! Candle: a proximity toggle that lights or snuffs its light and flame.
use bevy::prelude::*;

use crate::interaction::{
    handler::{InteractionEffect, OverlapContact, OverlapHandler},
    input::InteractionInput,
};

/// Binary toggle driven by the interact key while something stands in the
/// candle's trigger volume. Starts lit.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleProximityControl {
    active: bool,
}

impl ToggleProximityControl {
    pub fn new() -> Self {
        Self { active: true }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn active(&self) -> bool {
        self.active
    }
}

impl Default for ToggleProximityControl {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlapHandler for ToggleProximityControl {
    const LABEL: &'static str = "Candle";

    fn is_active(&self) -> bool {
        self.active
    }

    // Any collider shows the prompt and re-applies the state; only the player
    // can flip it.
    fn on_overlap_stay(
        &mut self,
        contact: OverlapContact,
        input: InteractionInput,
        effects: &mut Vec<InteractionEffect>,
    ) {
        effects.push(InteractionEffect::ShowPrompt(true));
        if contact.is_player && input.just_released {
            self.active = !self.active;
            debug!("Candle toggled by {:?}", contact.collider);
        }
        effects.push(InteractionEffect::SetTargetsActive(self.active));
    }

    fn on_overlap_exit(
        &mut self,
        _contact: OverlapContact,
        _input: InteractionInput,
        effects: &mut Vec<InteractionEffect>,
    ) {
        effects.push(InteractionEffect::ShowPrompt(false));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(is_player: bool) -> OverlapContact {
        OverlapContact {
            collider: Entity::PLACEHOLDER,
            is_player,
        }
    }

    fn stay(
        candle: &mut ToggleProximityControl,
        is_player: bool,
        input: InteractionInput,
    ) -> Vec<InteractionEffect> {
        let mut effects = Vec::new();
        candle.on_overlap_stay(contact(is_player), input, &mut effects);
        effects
    }

    #[test]
    fn starts_lit() {
        assert!(ToggleProximityControl::default().active());
    }

    #[test]
    fn player_release_inverts_once_per_release() {
        let mut candle = ToggleProximityControl::new();

        let effects = stay(&mut candle, true, InteractionInput::released());
        assert!(!candle.active());
        assert_eq!(
            effects,
            vec![
                InteractionEffect::ShowPrompt(true),
                InteractionEffect::SetTargetsActive(false)
            ]
        );

        stay(&mut candle, true, InteractionInput::IDLE);
        assert!(!candle.active());

        stay(&mut candle, true, InteractionInput::released());
        assert!(candle.active());
    }

    #[test]
    fn key_press_without_release_does_not_toggle() {
        let mut candle = ToggleProximityControl::new();
        stay(&mut candle, true, InteractionInput::pressed());
        assert!(candle.active());
    }

    #[test]
    fn non_player_shows_prompt_and_reapplies_state_without_toggling() {
        let mut candle = ToggleProximityControl::new();
        let effects = stay(&mut candle, false, InteractionInput::released());

        assert!(candle.active());
        assert_eq!(
            effects,
            vec![
                InteractionEffect::ShowPrompt(true),
                InteractionEffect::SetTargetsActive(true)
            ]
        );
    }

    #[test]
    fn exit_hides_prompt_and_keeps_state() {
        let mut candle = ToggleProximityControl::new();
        stay(&mut candle, true, InteractionInput::released());

        let mut effects = Vec::new();
        candle.on_overlap_exit(contact(true), InteractionInput::IDLE, &mut effects);
        assert_eq!(effects, vec![InteractionEffect::ShowPrompt(false)]);
        assert!(!candle.active());
    }

    #[test]
    fn enter_alone_has_no_effect() {
        let mut candle = ToggleProximityControl::new();
        let mut effects = Vec::new();
        candle.on_overlap_enter(contact(true), InteractionInput::released(), &mut effects);
        assert!(effects.is_empty());
        assert!(candle.active());
    }
}
