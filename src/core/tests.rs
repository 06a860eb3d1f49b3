//! Core domain: tests for smoothing and angle helpers.

use bevy::prelude::Vec3;

use super::math::{delta_angle, lerp_angle, move_towards_angle, smooth_damp_vec3};

const DT: f32 = 1.0 / 64.0;

#[test]
fn test_smooth_damp_vec3_approaches_without_overshoot() {
    let target = Vec3::new(10.0, 0.0, 0.0);
    let mut value = Vec3::ZERO;
    let mut velocity = Vec3::ZERO;
    let mut previous = value;

    for _ in 0..256 {
        value = smooth_damp_vec3(value, target, &mut velocity, 0.1, DT);
        assert!(value.x >= previous.x, "value went backwards: {previous} -> {value}");
        assert!(value.x <= 10.0, "overshot target: {value}");
        previous = value;
    }

    assert!(value.distance(target) < 1e-3);
}

#[test]
fn test_smooth_damp_vec3_is_not_instant() {
    let mut velocity = Vec3::ZERO;
    let value = smooth_damp_vec3(Vec3::ZERO, Vec3::X * 10.0, &mut velocity, 0.1, DT);
    assert!(value.x > 0.0);
    assert!(value.x < 5.0);
}

#[test]
fn test_smooth_damp_vec3_zero_dt_keeps_value() {
    let mut velocity = Vec3::ZERO;
    let start = Vec3::new(3.0, 1.0, -2.0);
    let value = smooth_damp_vec3(start, Vec3::X * 10.0, &mut velocity, 0.1, 0.0);
    assert_eq!(value, start);
}

#[test]
fn test_smooth_damp_vec3_settles_on_target() {
    let target = Vec3::new(4.0, 0.0, -3.0);
    let mut current = Vec3::ZERO;
    let mut velocity = Vec3::ZERO;

    for _ in 0..512 {
        current = smooth_damp_vec3(current, target, &mut velocity, 0.125, DT);
        assert!(current.length() <= target.length() + 1e-4);
    }

    assert!(current.distance(target) < 1e-3);
}

#[test]
fn test_delta_angle_wraps_to_shortest_arc() {
    assert_eq!(delta_angle(10.0, 30.0), 20.0);
    assert_eq!(delta_angle(350.0, 10.0), 20.0);
    assert_eq!(delta_angle(10.0, 350.0), -20.0);
    assert_eq!(delta_angle(0.0, 180.0), 180.0);
    assert_eq!(delta_angle(-170.0, 170.0), -20.0);
}

#[test]
fn test_lerp_angle_takes_short_way_round() {
    assert_eq!(lerp_angle(170.0, -170.0, 0.5), 180.0);
    assert_eq!(lerp_angle(0.0, 90.0, 2.0), 90.0);
    assert_eq!(lerp_angle(0.0, 90.0, -1.0), 0.0);
}

#[test]
fn test_move_towards_angle_limits_step() {
    assert_eq!(move_towards_angle(0.0, 90.0, 30.0), 30.0);
    assert_eq!(move_towards_angle(0.0, -90.0, 30.0), -30.0);
    assert_eq!(move_towards_angle(0.0, 20.0, 30.0), 20.0);
}
