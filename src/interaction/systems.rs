//! Overlap detection and dispatch of overlap callbacks to interactables.
use bevy::{
    ecs::component::Mutable,
    log::{debug, warn_once},
    prelude::*,
};

use crate::player::components::Player;

use super::{
    components::{visibility_for, InteractionLinks, ProximityCollider, TriggerVolume},
    events::{
        AnimationTriggerMessage, InteractableToggledMessage, OverlapPhase, TriggerOverlapMessage,
    },
    handler::{InteractionEffect, OverlapContact, OverlapHandler},
    input::InteractionInputState,
};

/// Tests every collider against every trigger volume and reports enter, stay
/// and exit transitions. Stay is reported on every overlapping frame,
/// including the frame of entry.
pub fn detect_trigger_overlaps(
    mut volumes: Query<(Entity, &Transform, &mut TriggerVolume)>,
    colliders: Query<(Entity, &Transform, &ProximityCollider, Has<Player>)>,
    mut overlaps: MessageWriter<TriggerOverlapMessage>,
) {
    for (volume_entity, volume_transform, mut volume) in volumes.iter_mut() {
        let departed: Vec<(Entity, bool)> = volume
            .occupants()
            .filter(|(collider, _)| !colliders.contains(*collider))
            .collect();
        for (collider, is_player) in departed {
            volume.release(collider);
            overlaps.write(TriggerOverlapMessage {
                volume: volume_entity,
                collider,
                phase: OverlapPhase::Exit,
                is_player,
            });
        }

        for (collider_entity, collider_transform, collider, is_player) in colliders.iter() {
            if collider_entity == volume_entity {
                continue;
            }

            let inside = volume.overlaps(
                volume_transform,
                collider_transform.translation,
                collider.radius,
            );

            if inside {
                if volume.admit(collider_entity, is_player) {
                    overlaps.write(TriggerOverlapMessage {
                        volume: volume_entity,
                        collider: collider_entity,
                        phase: OverlapPhase::Enter,
                        is_player,
                    });
                }
                overlaps.write(TriggerOverlapMessage {
                    volume: volume_entity,
                    collider: collider_entity,
                    phase: OverlapPhase::Stay,
                    is_player,
                });
            } else if let Some(was_player) = volume.release(collider_entity) {
                overlaps.write(TriggerOverlapMessage {
                    volume: volume_entity,
                    collider: collider_entity,
                    phase: OverlapPhase::Exit,
                    is_player: was_player,
                });
            }
        }
    }
}

/// Hides the prompt of every interactable of type `T` as soon as it spawns.
pub fn hide_prompts_on_spawn<T: Component>(
    added: Query<&InteractionLinks, Added<T>>,
    mut visibilities: Query<&mut Visibility>,
) {
    for links in added.iter() {
        if let Some(prompt) = links.prompt {
            set_enabled(prompt, false, &mut visibilities);
        }
    }
}

/// Routes overlap messages to the `T` handler on the volume entity and applies
/// the effects it requests.
pub fn dispatch_overlaps<T>(
    mut overlaps: MessageReader<TriggerOverlapMessage>,
    input: Res<InteractionInputState>,
    mut handlers: Query<(&mut T, Option<&InteractionLinks>)>,
    mut visibilities: Query<&mut Visibility>,
    mut animations: MessageWriter<AnimationTriggerMessage>,
    mut toggles: MessageWriter<InteractableToggledMessage>,
    mut effects: Local<Vec<InteractionEffect>>,
) where
    T: Component<Mutability = Mutable> + OverlapHandler,
{
    for overlap in overlaps.read() {
        let Ok((mut handler, links)) = handlers.get_mut(overlap.volume) else {
            continue;
        };

        #[cfg(feature = "interaction_debug")]
        debug!(
            target: "interaction_debug",
            "{} {:?} <- {:?} (player: {})",
            T::LABEL,
            overlap.phase,
            overlap.collider,
            overlap.is_player
        );

        let contact = OverlapContact {
            collider: overlap.collider,
            is_player: overlap.is_player,
        };
        let was_active = handler.is_active();

        effects.clear();
        match overlap.phase {
            OverlapPhase::Enter => handler.on_overlap_enter(contact, input.current, &mut effects),
            OverlapPhase::Stay => handler.on_overlap_stay(contact, input.current, &mut effects),
            OverlapPhase::Exit => handler.on_overlap_exit(contact, input.current, &mut effects),
        }

        let active = handler.is_active();
        if active != was_active {
            toggles.write(InteractableToggledMessage {
                interactable: overlap.volume,
                label: T::LABEL,
                active,
            });
        }

        let Some(links) = links else {
            if !effects.is_empty() {
                warn_once!("{} {:?} has no InteractionLinks", T::LABEL, overlap.volume);
            }
            continue;
        };

        for effect in effects.drain(..) {
            match effect {
                InteractionEffect::ShowPrompt(visible) => {
                    if let Some(prompt) = links.prompt {
                        set_enabled(prompt, visible, &mut visibilities);
                    }
                }
                InteractionEffect::SetTargetsActive(enabled) => {
                    for target in &links.targets {
                        set_enabled(*target, enabled, &mut visibilities);
                    }
                }
                InteractionEffect::FireAnimation(trigger) => {
                    let animator = links.animator.unwrap_or(overlap.volume);
                    debug!("{} {:?} fires {}", T::LABEL, overlap.volume, trigger);
                    animations.write(AnimationTriggerMessage { animator, trigger });
                }
            }
        }
    }
}

fn set_enabled(entity: Entity, enabled: bool, visibilities: &mut Query<&mut Visibility>) {
    match visibilities.get_mut(entity) {
        Ok(mut visibility) => {
            visibility.set_if_neq(visibility_for(enabled));
        }
        Err(_) => {
            warn_once!("Interaction target {:?} has no Visibility", entity);
        }
    }
}
