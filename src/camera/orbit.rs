//! Camera domain: orbit camera state.
//!
//! Yaw is in degrees about +Y, zero behind a target facing -Z. Headings use
//! the same counter-clockwise convention as the player model's facing, and
//! the follow turn aims at the negated heading, so a target running to +X
//! swings the camera round to its +X side.

use bevy::prelude::*;

use crate::content::CameraConfig;
use crate::core::math::{lerp_angle, smooth_damp_vec3};
use crate::movement::intent_yaw;

/// Third-person camera orbiting a target entity.
#[derive(Component, Debug, Clone)]
pub struct OrbitCamera {
    target: Entity,
    rotation_angle: f32,
    dragging: bool,
    /// Spring state of the position smoothing
    velocity: Vec3,
    /// Target position seen on the previous frame
    last_target_position: Option<Vec3>,
}

impl OrbitCamera {
    pub fn new(target: Entity) -> Self {
        Self {
            target,
            rotation_angle: 0.0,
            dragging: false,
            velocity: Vec3::ZERO,
            last_target_position: None,
        }
    }

    pub fn target(&self) -> Entity {
        self.target
    }

    #[cfg(test)]
    pub fn rotation_angle(&self) -> f32 {
        self.rotation_angle
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Manual yaw from horizontal pointer travel. Only while a drag is active.
    pub fn drag(&mut self, delta_x: f32, config: &CameraConfig, dt: f32) {
        if !self.dragging || !delta_x.is_finite() {
            return;
        }
        self.rotation_angle += delta_x * config.rotation_speed * dt;
        self.clamp_rotation(config);
    }

    /// Turns toward the target's travel direction when it moved more than
    /// `move_threshold` since the last frame. Records the target position
    /// every frame, dragging or not.
    pub fn follow(&mut self, target_position: Vec3, config: &CameraConfig, dt: f32) {
        let previous = self.last_target_position.replace(target_position);
        if self.dragging {
            return;
        }
        let Some(previous) = previous else {
            return;
        };

        let displacement = target_position - previous;
        let horizontal = Vec2::new(displacement.x, displacement.z);
        if horizontal.length() <= config.move_threshold {
            return;
        }

        let heading = intent_yaw(Vec2::new(displacement.x, -displacement.z));
        self.rotation_angle = lerp_angle(self.rotation_angle, -heading, dt * config.follow_speed);
        self.clamp_rotation(config);
    }

    /// Drops the remembered target position so the next frame does not
    /// count a jump cut as travel.
    pub fn forget_target_position(&mut self) {
        self.last_target_position = None;
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.rotation_angle.to_radians())
    }

    /// Where the camera wants to be for a target at `target_position`.
    pub fn desired_position(&self, target_position: Vec3, config: &CameraConfig) -> Vec3 {
        target_position + self.rotation() * config.offset()
    }

    /// Point the camera aims at: above the target by half the offset height.
    pub fn look_target(&self, target_position: Vec3, config: &CameraConfig) -> Vec3 {
        target_position + Vec3::Y * config.offset().y * 0.5
    }

    /// One smoothing step of the camera position toward its desired spot.
    pub fn smooth_position(
        &mut self,
        current: Vec3,
        target_position: Vec3,
        config: &CameraConfig,
        dt: f32,
    ) -> Vec3 {
        let desired = self.desired_position(target_position, config);
        smooth_damp_vec3(current, desired, &mut self.velocity, config.smooth_speed, dt)
    }

    fn clamp_rotation(&mut self, config: &CameraConfig) {
        let max = config.max_rotation_angle;
        self.rotation_angle = self.rotation_angle.clamp(-max, max);
    }
}
