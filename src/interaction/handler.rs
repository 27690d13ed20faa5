//! Capability implemented by components that react to trigger overlaps.
use bevy::prelude::Entity;

use super::{events::AnimationTrigger, input::InteractionInput};

/// The collider on the other side of an overlap notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapContact {
    pub collider: Entity,
    /// Whether the collider carries the player identity.
    pub is_player: bool,
}

/// Side effect requested by a handler; applied by the dispatcher to the
/// entities referenced in the interactable's links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionEffect {
    ShowPrompt(bool),
    SetTargetsActive(bool),
    FireAnimation(AnimationTrigger),
}

/// Overlap callbacks invoked by the scene dispatcher.
///
/// Handlers never touch the world directly. They update their own state and
/// push effects into `effects`, which keeps them testable without an `App`.
pub trait OverlapHandler {
    /// Short name used in logs and toggle messages.
    const LABEL: &'static str;

    /// Current binary state, reported in toggle messages when it changes.
    fn is_active(&self) -> bool;

    fn on_overlap_enter(
        &mut self,
        _contact: OverlapContact,
        _input: InteractionInput,
        _effects: &mut Vec<InteractionEffect>,
    ) {
    }

    fn on_overlap_stay(
        &mut self,
        contact: OverlapContact,
        input: InteractionInput,
        effects: &mut Vec<InteractionEffect>,
    );

    fn on_overlap_exit(
        &mut self,
        contact: OverlapContact,
        input: InteractionInput,
        effects: &mut Vec<InteractionEffect>,
    );
}
