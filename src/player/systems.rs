//! Systems for walking and looking around as the player.
use bevy::{
    ecs::message::MessageReader,
    input::{mouse::MouseMotion, ButtonInput},
    prelude::*,
    window::{CursorGrabMode, CursorOptions},
};

use crate::player::components::PlayerController;

const MAX_PITCH: f32 = 1.45;
const RUN_MULTIPLIER: f32 = 1.8;

/// Locks the cursor while the right mouse button is held for looking around.
pub fn update_cursor_grab(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut cursor_options: Single<&mut CursorOptions>,
) {
    if mouse_buttons.just_pressed(MouseButton::Right) {
        cursor_options.visible = false;
        cursor_options.grab_mode = CursorGrabMode::Locked;
    } else if mouse_buttons.just_released(MouseButton::Right) {
        cursor_options.visible = true;
        cursor_options.grab_mode = CursorGrabMode::None;
    }
}

/// Turns the player view with mouse motion while the right button is held.
pub fn player_mouse_look(
    mut motion: MessageReader<MouseMotion>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    time: Res<Time>,
    mut query: Query<(&mut PlayerController, &mut Transform)>,
) {
    let delta: Vec2 = motion.read().map(|event| event.delta).sum();
    if !mouse_buttons.pressed(MouseButton::Right) || delta == Vec2::ZERO {
        return;
    }

    let Ok((mut controller, mut transform)) = query.single_mut() else {
        return;
    };
    let scale = controller.look_sensitivity * time.delta_secs();
    controller.yaw -= delta.x * scale;
    controller.pitch = (controller.pitch - delta.y * scale).clamp(-MAX_PITCH, MAX_PITCH);
    transform.rotation = controller.rotation().normalize();
}

/// Walks the player across the ground plane with WASD; hold Shift to run.
pub fn player_walk(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut query: Query<(&PlayerController, &mut Transform)>,
) {
    let Ok((controller, mut transform)) = query.single_mut() else {
        return;
    };

    let direction = walk_direction(&keyboard, controller.yaw);
    if direction != Vec3::ZERO {
        let speed = if keyboard.pressed(KeyCode::ShiftLeft) {
            controller.walk_speed * RUN_MULTIPLIER
        } else {
            controller.walk_speed
        };
        transform.translation += direction * speed * time.delta_secs();
    }
    transform.translation.y = controller.eye_height;
}

/// Horizontal unit direction requested by the movement keys, relative to `yaw`.
fn walk_direction(keyboard: &ButtonInput<KeyCode>, yaw: f32) -> Vec3 {
    let facing = Quat::from_rotation_y(yaw);
    let forward = facing * Vec3::NEG_Z;
    let right = facing * Vec3::X;

    let mut direction = Vec3::ZERO;
    for (key, step) in [
        (KeyCode::KeyW, forward),
        (KeyCode::KeyS, -forward),
        (KeyCode::KeyD, right),
        (KeyCode::KeyA, -right),
    ] {
        if keyboard.pressed(key) {
            direction += step;
        }
    }
    direction.normalize_or_zero()
}
