//! Camera domain: tests for drag, follow and framing.

use bevy::prelude::{Entity, Vec3};

use super::OrbitCamera;
use crate::content::CameraConfig;

const FRAME: f32 = 0.016;

fn camera() -> OrbitCamera {
    OrbitCamera::new(Entity::PLACEHOLDER)
}

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

// -----------------------------------------------------------------------------
// Drag tests
// -----------------------------------------------------------------------------

#[test]
fn test_drag_needs_active_gesture() {
    let config = CameraConfig::default();
    let mut orbit = camera();

    orbit.drag(100.0, &config, FRAME);
    assert_eq!(orbit.rotation_angle(), 0.0);

    orbit.begin_drag();
    orbit.drag(100.0, &config, FRAME);
    assert!((orbit.rotation_angle() - 16.0).abs() < 1e-4);

    orbit.end_drag();
    orbit.drag(100.0, &config, FRAME);
    assert!((orbit.rotation_angle() - 16.0).abs() < 1e-4);
}

#[test]
fn test_yaw_stays_clamped_under_adversarial_drags() {
    let config = CameraConfig::default();
    let max = config.max_rotation_angle;
    let mut orbit = camera();
    orbit.begin_drag();

    let deltas = [
        1.0e6, -1.0e6, 5_000.0, -3.0, f32::MAX, f32::MIN, 0.5, -9_999.0, f32::NAN, f32::INFINITY,
    ];
    for _ in 0..10 {
        for &dx in &deltas {
            orbit.drag(dx, &config, FRAME);
            assert!(orbit.rotation_angle() >= -max && orbit.rotation_angle() <= max);
        }
    }
}

// -----------------------------------------------------------------------------
// Follow tests
// -----------------------------------------------------------------------------

#[test]
fn test_first_frame_only_records_target() {
    let config = CameraConfig::default();
    let mut orbit = camera();

    orbit.follow(Vec3::new(10.0, 0.0, 0.0), &config, FRAME);
    assert_eq!(orbit.rotation_angle(), 0.0);
}

#[test]
fn test_small_moves_do_not_turn_camera() {
    let config = CameraConfig::default();
    let mut orbit = camera();
    let mut position = Vec3::ZERO;

    for _ in 0..100 {
        orbit.follow(position, &config, FRAME);
        position.x += config.move_threshold * 0.5;
    }
    assert_eq!(orbit.rotation_angle(), 0.0);
}

#[test]
fn test_follow_turns_toward_negated_heading() {
    let config = CameraConfig::default();
    let mut orbit = camera();
    let mut position = Vec3::ZERO;

    // Heading of +X travel is -90, so yaw heads to +90
    for _ in 0..500 {
        orbit.follow(position, &config, FRAME);
        position.x += 0.1;
    }
    assert!(orbit.rotation_angle() > 70.0);
    assert!(orbit.rotation_angle() <= config.max_rotation_angle);
}

#[test]
fn test_follow_mirrors_for_leftward_travel() {
    let config = CameraConfig::default();
    let mut orbit = camera();
    let mut position = Vec3::ZERO;

    for _ in 0..500 {
        orbit.follow(position, &config, FRAME);
        position.x -= 0.1;
    }
    assert!(orbit.rotation_angle() < -70.0);
    assert!(orbit.rotation_angle() >= -config.max_rotation_angle);
}

#[test]
fn test_forward_travel_keeps_camera_behind() {
    let config = CameraConfig::default();
    let mut orbit = camera();
    let mut position = Vec3::ZERO;

    for _ in 0..200 {
        orbit.follow(position, &config, FRAME);
        position.z -= 0.1;
    }
    assert!(orbit.rotation_angle().abs() < 1e-3);
}

#[test]
fn test_vertical_motion_is_ignored() {
    let config = CameraConfig::default();
    let mut orbit = camera();
    let mut position = Vec3::ZERO;

    for _ in 0..50 {
        orbit.follow(position, &config, FRAME);
        position.y += 1.0;
    }
    assert_eq!(orbit.rotation_angle(), 0.0);
}

#[test]
fn test_follow_heading_behind_is_clamped() {
    let config = CameraConfig::default();
    let mut orbit = camera();
    let mut position = Vec3::ZERO;

    // Walking toward the camera asks for a half turn
    for _ in 0..500 {
        orbit.follow(position, &config, FRAME);
        position.z += 0.1;
        position.x += 0.01;
        assert!(orbit.rotation_angle().abs() <= config.max_rotation_angle);
    }
}

#[test]
fn test_drag_suppresses_follow_but_tracks_target() {
    let config = CameraConfig::default();
    let mut orbit = camera();
    orbit.follow(Vec3::ZERO, &config, FRAME);

    orbit.begin_drag();
    orbit.follow(Vec3::new(5.0, 0.0, 0.0), &config, FRAME);
    assert_eq!(orbit.rotation_angle(), 0.0);

    // Released: the move made during the drag is not replayed
    orbit.end_drag();
    orbit.follow(Vec3::new(5.0, 0.0, 0.0), &config, FRAME);
    assert_eq!(orbit.rotation_angle(), 0.0);
}

#[test]
fn test_forgotten_target_ignores_teleport() {
    let config = CameraConfig::default();
    let mut orbit = camera();
    orbit.follow(Vec3::new(30.0, 0.0, -40.0), &config, FRAME);

    orbit.forget_target_position();
    orbit.follow(Vec3::new(0.0, 1.5, 6.0), &config, FRAME);

    assert_eq!(orbit.rotation_angle(), 0.0);
}

// -----------------------------------------------------------------------------
// Framing tests
// -----------------------------------------------------------------------------

#[test]
fn test_rest_framing_sits_behind_and_above() {
    let config = CameraConfig::default();
    let orbit = camera();
    let target = Vec3::new(1.0, 2.0, 3.0);

    assert!(close(orbit.desired_position(target, &config), Vec3::new(1.0, 4.0, 8.0)));
    assert!(close(orbit.look_target(target, &config), Vec3::new(1.0, 3.0, 3.0)));
}

#[test]
fn test_turned_framing_sits_opposite_heading() {
    let config = CameraConfig::default();
    let mut orbit = camera();
    let mut position = Vec3::ZERO;

    for _ in 0..2000 {
        orbit.follow(position, &config, FRAME);
        position.x += 0.1;
    }

    // Clamped at 80: swung round to the +X side of a target moving +X
    let offset = orbit.desired_position(Vec3::ZERO, &config);
    assert!(offset.x > 4.0);
    assert!((offset.y - 2.0).abs() < 1e-4);
}

#[test]
fn test_position_smoothing_converges_without_overshoot() {
    let config = CameraConfig::default();
    let mut orbit = camera();
    let target = Vec3::new(0.0, 0.0, -10.0);
    let desired = orbit.desired_position(target, &config);

    let mut position = Vec3::new(0.0, 2.0, 5.0);
    let start_distance = (desired - position).length();
    let mut previous_distance = start_distance;

    for _ in 0..200 {
        position = orbit.smooth_position(position, target, &config, FRAME);
        let distance = (desired - position).length();
        assert!(distance <= previous_distance + 1e-5);
        assert!(position.z >= desired.z - 1e-4);
        previous_distance = distance;
    }
    assert!(close(position, desired));
}
