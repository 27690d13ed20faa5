//! Door: opens on the interact key while the player is near, closes when they leave.
use std::fmt;

use bevy::prelude::*;

use crate::interaction::{
    events::AnimationTrigger,
    handler::{InteractionEffect, OverlapContact, OverlapHandler},
    input::InteractionInput,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoorState {
    #[default]
    Closed,
    Open,
}

impl fmt::Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Closed => "closed",
            Self::Open => "open",
        };
        write!(f, "{}", label)
    }
}

/// Proximity door controller. `Open` is only ever entered through the
/// interact key and only left through a trigger exit, so every "Close"
/// trigger is paired with an earlier "Open".
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoorProximityControl {
    state: DoorState,
}

impl DoorProximityControl {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn state(&self) -> DoorState {
        self.state
    }
}

impl OverlapHandler for DoorProximityControl {
    const LABEL: &'static str = "Door";

    fn is_active(&self) -> bool {
        self.state == DoorState::Open
    }

    fn on_overlap_stay(
        &mut self,
        contact: OverlapContact,
        input: InteractionInput,
        effects: &mut Vec<InteractionEffect>,
    ) {
        if !contact.is_player {
            return;
        }

        effects.push(InteractionEffect::ShowPrompt(true));
        if input.just_pressed && self.state == DoorState::Closed {
            self.state = DoorState::Open;
            debug!("Door opened by {:?}", contact.collider);
            effects.push(InteractionEffect::FireAnimation(AnimationTrigger::Open));
        }
    }

    fn on_overlap_exit(
        &mut self,
        _contact: OverlapContact,
        _input: InteractionInput,
        effects: &mut Vec<InteractionEffect>,
    ) {
        if self.state == DoorState::Open {
            self.state = DoorState::Closed;
            effects.push(InteractionEffect::FireAnimation(AnimationTrigger::Close));
        }
        effects.push(InteractionEffect::ShowPrompt(false));
    }
}
