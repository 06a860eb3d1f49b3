//! Core domain: frame-rate independent smoothing and angle helpers.
//!
//! Angles here are in degrees, matching the units used by the tuning file.

use bevy::prelude::*;

/// Lower bound on smoothing times so the spring constant stays finite.
const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Decay factor of a critically damped spring over `dt`.
///
/// Uses the usual rational approximation of `exp(-omega * dt)`.
fn spring_decay(omega: f32, dt: f32) -> f32 {
    let x = omega * dt;
    1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x)
}

/// Critically damped approach of `current` toward `target`.
///
/// `velocity` is the spring state and must be carried between calls by the
/// caller. The result never overshoots `target`.
pub fn smooth_damp_vec3(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    dt: f32,
) -> Vec3 {
    let omega = 2.0 / smooth_time.max(MIN_SMOOTH_TIME);
    let decay = spring_decay(omega, dt);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // Passed the target this step
    if (target - current).dot(output - target) > 0.0 {
        output = target;
        *velocity = Vec3::ZERO;
    }
    output
}

/// Shortest signed difference `to - from`, wrapped into (-180, 180].
pub fn delta_angle(from: f32, to: f32) -> f32 {
    let mut delta = (to - from).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}

/// Interpolates between two angles along the shortest arc. `t` is clamped to [0, 1].
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    from + delta_angle(from, to) * t.clamp(0.0, 1.0)
}

/// Turns `current` toward `target` by at most `max_delta` degrees.
pub fn move_towards_angle(current: f32, target: f32, max_delta: f32) -> f32 {
    current + delta_angle(current, target).clamp(-max_delta, max_delta)
}
