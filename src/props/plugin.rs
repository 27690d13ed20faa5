//! PropsPlugin registers the candle and door controllers and the door animator.
use bevy::prelude::*;

use crate::interaction::{
    systems::{dispatch_overlaps, hide_prompts_on_spawn},
    InteractionSet,
};

use super::{
    animation::{animate_door_swings, apply_animation_triggers},
    candle::ToggleProximityControl,
    door::DoorProximityControl,
};

/// Requires `InteractionPlugin` for the overlap messages and system sets.
pub struct PropsPlugin;

impl Plugin for PropsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                (
                    hide_prompts_on_spawn::<ToggleProximityControl>,
                    hide_prompts_on_spawn::<DoorProximityControl>,
                ),
                (
                    dispatch_overlaps::<ToggleProximityControl>,
                    dispatch_overlaps::<DoorProximityControl>,
                ),
            )
                .chain()
                .in_set(InteractionSet::Dispatch),
        )
        .add_systems(
            Update,
            (apply_animation_triggers, animate_door_swings)
                .chain()
                .in_set(InteractionSet::Animate),
        );
    }
}

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use super::PropsPlugin;
    use crate::{
        interaction::{
            components::{InteractionLinks, ProximityCollider, TriggerVolume},
            config::InteractionSettings,
            events::InteractableToggledMessage,
            InteractionPlugin,
        },
        player::components::Player,
        props::{
            animation::DoorSwing,
            candle::ToggleProximityControl,
            door::{DoorProximityControl, DoorState},
        },
    };

    const FAR_AWAY: Vec3 = Vec3::new(20.0, 0.0, 0.0);

    #[derive(Resource, Default)]
    struct Toggles(Vec<InteractableToggledMessage>);

    fn record_toggles(
        mut reader: MessageReader<InteractableToggledMessage>,
        mut toggles: ResMut<Toggles>,
    ) {
        toggles.0.extend(reader.read().cloned());
    }

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins((
            InteractionPlugin::with_settings(InteractionSettings::default()),
            PropsPlugin,
        ))
        .init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<Time>()
        .init_resource::<Toggles>()
        .add_systems(Last, record_toggles);
        app
    }

    fn spawn_player(app: &mut App) -> Entity {
        app.world_mut()
            .spawn((
                Transform::from_translation(FAR_AWAY),
                ProximityCollider::new(0.4),
                Player,
            ))
            .id()
    }

    fn move_to(app: &mut App, entity: Entity, position: Vec3) {
        app.world_mut()
            .entity_mut(entity)
            .insert(Transform::from_translation(position));
    }

    fn keyboard(app: &mut App) -> Mut<'_, ButtonInput<KeyCode>> {
        app.world_mut().resource_mut::<ButtonInput<KeyCode>>()
    }

    fn visibility(app: &App, entity: Entity) -> Visibility {
        *app.world()
            .get::<Visibility>(entity)
            .expect("entity has visibility")
    }

    #[test]
    fn candle_scenario() {
        let mut app = test_app();
        let prompt = app.world_mut().spawn(Visibility::Visible).id();
        let light = app.world_mut().spawn(Visibility::Inherited).id();
        let flame = app.world_mut().spawn(Visibility::Inherited).id();
        let candle = app
            .world_mut()
            .spawn((
                Transform::default(),
                TriggerVolume::sphere(1.5),
                ToggleProximityControl::new(),
                InteractionLinks::with_prompt(prompt).targets([light, flame]),
            ))
            .id();
        let player = spawn_player(&mut app);

        app.update();
        assert_eq!(visibility(&app, prompt), Visibility::Hidden);

        move_to(&mut app, player, Vec3::ZERO);
        app.update();
        assert_eq!(visibility(&app, prompt), Visibility::Inherited);
        assert_eq!(visibility(&app, light), Visibility::Inherited);

        // Key down alone does not toggle; the release does.
        keyboard(&mut app).press(KeyCode::KeyE);
        app.update();
        assert!(app
            .world()
            .get::<ToggleProximityControl>(candle)
            .expect("candle")
            .active());

        keyboard(&mut app).clear();
        keyboard(&mut app).release(KeyCode::KeyE);
        app.update();
        keyboard(&mut app).clear();
        assert_eq!(visibility(&app, light), Visibility::Hidden);
        assert_eq!(visibility(&app, flame), Visibility::Hidden);

        move_to(&mut app, player, FAR_AWAY);
        app.update();
        assert_eq!(visibility(&app, prompt), Visibility::Hidden);
        assert_eq!(visibility(&app, light), Visibility::Hidden);
        assert_eq!(visibility(&app, flame), Visibility::Hidden);

        let toggles = &app.world().resource::<Toggles>().0;
        assert_eq!(toggles.len(), 1);
        assert_eq!(toggles[0].interactable, candle);
        assert!(!toggles[0].active);
    }

    #[test]
    fn unrelated_key_leaves_candle_alone() {
        let mut app = test_app();
        let light = app.world_mut().spawn(Visibility::Inherited).id();
        app.world_mut().spawn((
            Transform::default(),
            TriggerVolume::sphere(1.5),
            ToggleProximityControl::new(),
            InteractionLinks::default().targets([light]),
        ));
        spawn_player_at_origin(&mut app);

        keyboard(&mut app).press(KeyCode::KeyQ);
        app.update();
        keyboard(&mut app).clear();
        keyboard(&mut app).release(KeyCode::KeyQ);
        app.update();

        assert_eq!(visibility(&app, light), Visibility::Inherited);
        assert!(app.world().resource::<Toggles>().0.is_empty());
    }

    fn spawn_player_at_origin(app: &mut App) -> Entity {
        let player = spawn_player(app);
        move_to(app, player, Vec3::ZERO);
        player
    }

    #[test]
    fn door_scenario() {
        let mut app = test_app();
        let prompt = app.world_mut().spawn(Visibility::Visible).id();
        let panel = app
            .world_mut()
            .spawn((
                Transform::default(),
                DoorSwing::new(Quat::IDENTITY, 1.5, 0.5),
            ))
            .id();
        let door = app
            .world_mut()
            .spawn((
                Transform::default(),
                TriggerVolume::cuboid(Vec3::new(1.0, 1.5, 1.5)),
                DoorProximityControl::new(),
                InteractionLinks::with_prompt(prompt).animator(panel),
            ))
            .id();
        let player = spawn_player(&mut app);

        app.update();
        assert_eq!(visibility(&app, prompt), Visibility::Hidden);

        move_to(&mut app, player, Vec3::new(0.5, 0.0, 0.0));
        keyboard(&mut app).press(KeyCode::KeyE);
        app.update();
        keyboard(&mut app).clear();

        let state = |app: &App| {
            app.world()
                .get::<DoorProximityControl>(door)
                .expect("door")
                .state()
        };
        assert_eq!(state(&app), DoorState::Open);
        assert_eq!(visibility(&app, prompt), Visibility::Inherited);
        assert!(app
            .world()
            .get::<DoorSwing>(panel)
            .expect("panel")
            .is_opening());

        move_to(&mut app, player, FAR_AWAY);
        app.update();
        assert_eq!(state(&app), DoorState::Closed);
        assert_eq!(visibility(&app, prompt), Visibility::Hidden);
        assert!(!app
            .world()
            .get::<DoorSwing>(panel)
            .expect("panel")
            .is_opening());

        let toggles = &app.world().resource::<Toggles>().0;
        assert_eq!(
            toggles.iter().map(|toggle| toggle.active).collect::<Vec<_>>(),
            vec![true, false]
        );
    }

    #[test]
    fn door_without_animator_link_addresses_itself() {
        let mut app = test_app();
        let door = app
            .world_mut()
            .spawn((
                Transform::default(),
                TriggerVolume::sphere(1.0),
                DoorProximityControl::new(),
                DoorSwing::new(Quat::IDENTITY, 1.0, 1.0),
                InteractionLinks::default(),
            ))
            .id();
        spawn_player_at_origin(&mut app);

        keyboard(&mut app).press(KeyCode::KeyE);
        app.update();

        assert!(app
            .world()
            .get::<DoorSwing>(door)
            .expect("door swing")
            .is_opening());
    }
}
