//! Startup systems assembling the demo hall: ground, lighting, player, candle and door.
use bevy::{math::primitives::Plane3d, prelude::*};

use crate::{
    interaction::{
        components::{InteractionLinks, ProximityCollider, TriggerVolume},
        config::InteractionSettings,
    },
    player::components::{Player, PlayerController},
    props::{animation::DoorSwing, candle::ToggleProximityControl, door::DoorProximityControl},
    ui::prompt::spawn_prompt,
};

const GROUND_SIZE: f32 = 40.0;
const EYE_HEIGHT: f32 = 1.6;
const PLAYER_START: Vec3 = Vec3::new(0.0, EYE_HEIGHT, 6.0);

const CANDLE_POSITION: Vec3 = Vec3::new(-2.5, 0.9, -2.0);
const CANDLE_REACH: f32 = 1.6;

const DOOR_POSITION: Vec3 = Vec3::new(3.0, 1.1, -3.0);
const DOOR_WIDTH: f32 = 1.0;
const DOOR_HEIGHT: f32 = 2.2;
const DOOR_REACH: Vec3 = Vec3::new(1.3, 1.4, 1.8);

/// Ground, dim evening light, and ambient fill.
pub fn spawn_world_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Name::new("Ground"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(92, 78, 64),
            perceptual_roughness: 0.95,
            ..default()
        })),
    ));

    commands.spawn((
        Name::new("Moonlight"),
        DirectionalLight {
            illuminance: 400.0,
            color: Color::srgb(0.6, 0.65, 0.9),
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(-8.0, 14.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.35, 0.35, 0.5),
        brightness: 60.0,
        ..default()
    });
}

/// Player camera carrying the identity marker and a proximity collider.
pub fn spawn_player(mut commands: Commands, settings: Res<InteractionSettings>) {
    commands.spawn((
        Name::new("Player"),
        Camera3d::default(),
        Transform::from_translation(PLAYER_START),
        PlayerController::new(0.0, EYE_HEIGHT),
        Player,
        ProximityCollider::new(settings.player_collider_radius),
    ));
}

/// Candle on a pedestal; its light and flame are the toggle targets.
pub fn spawn_candle(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<InteractionSettings>,
) {
    let prompt = spawn_prompt(&mut commands, &settings, settings.candle_prompt.clone());

    let pedestal = commands
        .spawn((
            Mesh3d(meshes.add(Cuboid::new(0.5, 0.9, 0.5))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb_u8(70, 60, 55),
                ..default()
            })),
            Transform::from_xyz(0.0, -0.45, 0.0),
        ))
        .id();

    let body = commands
        .spawn((
            Mesh3d(meshes.add(Cylinder::new(0.06, 0.3))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.93, 0.9, 0.8),
                ..default()
            })),
            Transform::from_xyz(0.0, 0.15, 0.0),
        ))
        .id();

    let flame = commands
        .spawn((
            Name::new("Candle Flame"),
            Mesh3d(meshes.add(Sphere::new(0.035))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(1.0, 0.75, 0.3),
                emissive: LinearRgba::rgb(12.0, 6.0, 1.5),
                unlit: true,
                ..default()
            })),
            Transform::from_xyz(0.0, 0.34, 0.0).with_scale(Vec3::new(1.0, 1.8, 1.0)),
        ))
        .id();

    let light = commands
        .spawn((
            Name::new("Candle Light"),
            PointLight {
                color: Color::srgb(1.0, 0.72, 0.4),
                intensity: 60_000.0,
                range: 8.0,
                shadows_enabled: true,
                ..default()
            },
            Transform::from_xyz(0.0, 0.45, 0.0),
        ))
        .id();

    commands
        .spawn((
            Name::new("Candle"),
            Transform::from_translation(CANDLE_POSITION),
            Visibility::default(),
            TriggerVolume::sphere(CANDLE_REACH),
            ToggleProximityControl::new(),
            InteractionLinks::with_prompt(prompt).targets([light, flame]),
        ))
        .add_children(&[pedestal, body, flame, light]);
}

/// Door frame with a hinged panel; the panel swings on "Open"/"Close".
pub fn spawn_door(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<InteractionSettings>,
) {
    let prompt = spawn_prompt(&mut commands, &settings, settings.door_prompt.clone());

    let frame_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(60, 42, 30),
        ..default()
    });
    let post_mesh = meshes.add(Cuboid::new(0.15, DOOR_HEIGHT + 0.15, 0.2));
    let half_width = DOOR_WIDTH * 0.5;

    let mut frame = Vec::new();
    for x in [-(half_width + 0.075), half_width + 0.075] {
        frame.push(
            commands
                .spawn((
                    Mesh3d(post_mesh.clone()),
                    MeshMaterial3d(frame_material.clone()),
                    Transform::from_xyz(x, 0.075, 0.0),
                ))
                .id(),
        );
    }
    frame.push(
        commands
            .spawn((
                Mesh3d(meshes.add(Cuboid::new(DOOR_WIDTH + 0.3, 0.15, 0.2))),
                MeshMaterial3d(frame_material),
                Transform::from_xyz(0.0, DOOR_HEIGHT * 0.5 + 0.075, 0.0),
            ))
            .id(),
    );

    let panel = commands
        .spawn((
            Name::new("Door Panel"),
            Mesh3d(meshes.add(Cuboid::new(DOOR_WIDTH, DOOR_HEIGHT, 0.06))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb_u8(120, 82, 50),
                perceptual_roughness: 0.8,
                ..default()
            })),
            Transform::from_xyz(half_width, 0.0, 0.0),
        ))
        .id();

    let hinge = commands
        .spawn((
            Name::new("Door Hinge"),
            Transform::from_xyz(-half_width, 0.0, 0.0),
            Visibility::default(),
            DoorSwing::new(
                Quat::IDENTITY,
                settings.door_swing_radians,
                settings.door_swing_seconds,
            ),
        ))
        .add_child(panel)
        .id();

    frame.push(hinge);

    commands
        .spawn((
            Name::new("Door"),
            Transform::from_translation(DOOR_POSITION),
            Visibility::default(),
            TriggerVolume::cuboid(DOOR_REACH),
            DoorProximityControl::new(),
            InteractionLinks::with_prompt(prompt).animator(hinge),
        ))
        .add_children(&frame);
}
