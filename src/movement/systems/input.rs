//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::hazard::HazardTracker;
use crate::movement::{MovementInput, Player};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    trackers: Query<&HazardTracker, With<Player>>,
    mut input: ResMut<MovementInput>,
) {
    // Respawn in progress: forward nothing
    if trackers.iter().any(HazardTracker::game_over) {
        input.clear();
        return;
    }

    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Forward axis
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y).normalize_or_zero();
    if keyboard.just_pressed(KeyCode::Space) {
        input.queue_jump();
    }
}
