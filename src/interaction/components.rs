//! Components describing trigger volumes, the colliders that enter them, and
//! the scene references an interactable drives.
use std::collections::HashMap;

use bevy::prelude::*;

/// Shape of a trigger volume, expressed in the volume's local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerShape {
    Sphere { radius: f32 },
    /// Box centred on the volume origin, oriented by its rotation.
    Cuboid { half_extents: Vec3 },
}

/// Non-solid region that reports which colliders currently overlap it.
#[derive(Component, Debug, Clone)]
pub struct TriggerVolume {
    pub shape: TriggerShape,
    /// Colliders currently inside, with whether each was the player.
    occupants: HashMap<Entity, bool>,
}

impl TriggerVolume {
    pub fn sphere(radius: f32) -> Self {
        Self::new(TriggerShape::Sphere {
            radius: radius.max(0.0),
        })
    }

    pub fn cuboid(half_extents: Vec3) -> Self {
        Self::new(TriggerShape::Cuboid {
            half_extents: half_extents.abs(),
        })
    }

    fn new(shape: TriggerShape) -> Self {
        Self {
            shape,
            occupants: HashMap::new(),
        }
    }

    /// Returns true when a sphere collider at `point` with `radius` touches the
    /// volume placed at `volume_transform`.
    pub fn overlaps(&self, volume_transform: &Transform, point: Vec3, radius: f32) -> bool {
        let local = volume_transform.rotation.inverse() * (point - volume_transform.translation);
        match self.shape {
            TriggerShape::Sphere { radius: volume_radius } => {
                let reach = volume_radius + radius;
                local.length_squared() <= reach * reach
            }
            TriggerShape::Cuboid { half_extents } => {
                let closest = local.clamp(-half_extents, half_extents);
                local.distance_squared(closest) <= radius * radius
            }
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn contains(&self, collider: Entity) -> bool {
        self.occupants.contains_key(&collider)
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn occupant_count(&self) -> usize {
        self.occupants.len()
    }

    pub(crate) fn occupants(&self) -> impl Iterator<Item = (Entity, bool)> + '_ {
        self.occupants
            .iter()
            .map(|(collider, is_player)| (*collider, *is_player))
    }

    /// Records the collider as inside. Returns true if it just entered.
    pub(crate) fn admit(&mut self, collider: Entity, is_player: bool) -> bool {
        self.occupants.insert(collider, is_player).is_none()
    }

    /// Removes the collider, returning its player flag if it was inside.
    pub(crate) fn release(&mut self, collider: Entity) -> Option<bool> {
        self.occupants.remove(&collider)
    }
}

/// Sphere collider that can enter trigger volumes.
#[derive(Component, Debug, Clone, Copy)]
pub struct ProximityCollider {
    pub radius: f32,
}

impl ProximityCollider {
    pub fn new(radius: f32) -> Self {
        Self {
            radius: radius.max(0.0),
        }
    }
}

/// Scene entities an interactable borrows. They are owned by the scene graph;
/// the interaction systems only flip their visibility or address messages to them.
#[derive(Component, Debug, Clone, Default)]
pub struct InteractionLinks {
    /// On-screen prompt shown while the interaction is available.
    pub prompt: Option<Entity>,
    /// Objects whose enabled flag mirrors the interactable's state.
    pub targets: Vec<Entity>,
    /// Entity receiving animation triggers. Falls back to the interactable itself.
    pub animator: Option<Entity>,
}

impl InteractionLinks {
    pub fn with_prompt(prompt: Entity) -> Self {
        Self {
            prompt: Some(prompt),
            ..Default::default()
        }
    }

    pub fn targets(mut self, targets: impl IntoIterator<Item = Entity>) -> Self {
        self.targets.extend(targets);
        self
    }

    pub fn animator(mut self, animator: Entity) -> Self {
        self.animator = Some(animator);
        self
    }
}

/// Maps an enabled flag onto Bevy visibility.
pub fn visibility_for(enabled: bool) -> Visibility {
    if enabled {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_overlap_accounts_for_collider_radius() {
        let volume = TriggerVolume::sphere(2.0);
        let at_origin = Transform::default();

        assert!(volume.overlaps(&at_origin, Vec3::new(2.4, 0.0, 0.0), 0.5));
        assert!(!volume.overlaps(&at_origin, Vec3::new(2.6, 0.0, 0.0), 0.5));
    }

    #[test]
    fn cuboid_overlap_respects_rotation() {
        let volume = TriggerVolume::cuboid(Vec3::new(3.0, 1.0, 0.5));
        let rotated = Transform::from_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));

        // Long axis now runs along world Z.
        assert!(volume.overlaps(&rotated, Vec3::new(0.0, 0.0, 2.5), 0.1));
        assert!(!volume.overlaps(&rotated, Vec3::new(2.5, 0.0, 0.0), 0.1));
    }

    #[test]
    fn admit_and_release_report_transitions() {
        let mut volume = TriggerVolume::sphere(1.0);
        let collider = World::new().spawn_empty().id();

        assert!(volume.admit(collider, true));
        assert!(!volume.admit(collider, true));
        assert!(volume.contains(collider));
        assert_eq!(volume.occupant_count(), 1);
        assert_eq!(volume.release(collider), Some(true));
        assert_eq!(volume.release(collider), None);
    }

    #[test]
    fn visibility_maps_enabled_flag() {
        assert_eq!(visibility_for(true), Visibility::Inherited);
        assert_eq!(visibility_for(false), Visibility::Hidden);
    }
}
