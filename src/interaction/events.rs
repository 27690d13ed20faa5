//! Messages broadcast by the interaction systems.
use std::fmt;

use bevy::prelude::{Entity, Message};

/// Phase of a collider's stay inside a trigger volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlapPhase {
    Enter,
    Stay,
    Exit,
}

/// Raised by the overlap detector for every volume/collider pair each frame
/// the pair is (or just stopped being) in contact.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerOverlapMessage {
    pub volume: Entity,
    pub collider: Entity,
    pub phase: OverlapPhase,
    pub is_player: bool,
}

/// Named animation transition addressed to an animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationTrigger {
    Open,
    Close,
}

impl AnimationTrigger {
    pub fn name(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Close => "Close",
        }
    }
}

impl fmt::Display for AnimationTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fire-and-forget request for an animator to play a transition.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTriggerMessage {
    pub animator: Entity,
    pub trigger: AnimationTrigger,
}

/// Fired whenever an interactable's binary state changes.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct InteractableToggledMessage {
    pub interactable: Entity,
    pub label: &'static str,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_names_match_animator_states() {
        assert_eq!(AnimationTrigger::Open.name(), "Open");
        assert_eq!(AnimationTrigger::Close.to_string(), "Close");
    }
}
