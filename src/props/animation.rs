//! Minimal animator for door panels: swings between a closed and an open yaw
//! in response to "Open"/"Close" triggers.
use bevy::{log::warn, prelude::*};

use crate::interaction::events::{AnimationTrigger, AnimationTriggerMessage};

/// Animator state for a hinged panel. The panel's `Transform` rotation is
/// driven from `closed_rotation` toward `closed_rotation * Y(swing)`.
#[derive(Component, Debug, Clone)]
pub struct DoorSwing {
    closed_rotation: Quat,
    swing_radians: f32,
    duration_secs: f32,
    progress: f32,
    opening: bool,
}

impl DoorSwing {
    pub fn new(closed_rotation: Quat, swing_radians: f32, duration_secs: f32) -> Self {
        Self {
            closed_rotation,
            swing_radians,
            duration_secs: duration_secs.max(0.01),
            progress: 0.0,
            opening: false,
        }
    }

    pub fn apply(&mut self, trigger: AnimationTrigger) {
        self.opening = matches!(trigger, AnimationTrigger::Open);
    }

    /// Normalised position: 0 is fully closed, 1 fully open.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_opening(&self) -> bool {
        self.opening
    }

    pub fn is_settled(&self) -> bool {
        let target = if self.opening { 1.0 } else { 0.0 };
        self.progress == target
    }

    /// Moves progress toward the current target by `delta_secs`.
    pub fn advance(&mut self, delta_secs: f32) {
        let step = delta_secs.max(0.0) / self.duration_secs;
        self.progress = if self.opening {
            (self.progress + step).min(1.0)
        } else {
            (self.progress - step).max(0.0)
        };
    }

    pub fn rotation(&self) -> Quat {
        let t = self.progress;
        let eased = t * t * (3.0 - 2.0 * t);
        self.closed_rotation * Quat::from_rotation_y(self.swing_radians * eased)
    }
}

/// Hands incoming animation triggers to the addressed `DoorSwing`.
pub fn apply_animation_triggers(
    mut triggers: MessageReader<AnimationTriggerMessage>,
    mut swings: Query<&mut DoorSwing>,
) {
    for message in triggers.read() {
        match swings.get_mut(message.animator) {
            Ok(mut swing) => swing.apply(message.trigger),
            Err(_) => warn!(
                "Animation trigger {} sent to {:?}, which has no animator",
                message.trigger, message.animator
            ),
        }
    }
}

/// Advances every unsettled door panel and writes its rotation.
pub fn animate_door_swings(time: Res<Time>, mut swings: Query<(&mut DoorSwing, &mut Transform)>) {
    let delta = time.delta_secs();
    for (mut swing, mut transform) in swings.iter_mut() {
        if swing.is_settled() {
            continue;
        }
        swing.advance(delta);
        transform.rotation = swing.rotation();
    }
}
