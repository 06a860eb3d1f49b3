//! Movement domain: horizontal velocity smoothing and the double-jump state machine.

use bevy::prelude::*;

use crate::content::LocomotionConfig;
use crate::core::math::{move_towards_angle, smooth_damp_vec3};

/// Jump availability between two grounded states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum JumpState {
    #[default]
    Grounded,
    /// First jump spent; one airborne jump left
    AirborneFirstJumpAvailable,
    /// Both jumps spent until the next landing
    AirborneDoubleJumpUsed,
}

/// Which impulse a jump request produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    First,
    Double,
}

/// Locomotion controller state for one body.
///
/// Only ever edits the body's velocity. Horizontal velocity follows the
/// move intent through a critically damped spring; vertical velocity is
/// left to gravity except for the instantaneous jump impulses.
#[derive(Component, Debug, Default)]
pub struct Locomotion {
    move_intent: Vec2,
    jump_state: JumpState,
    grounded: bool,
    /// Model yaw in degrees, 0 facing -Z
    facing_yaw: f32,
    smooth_velocity: Vec3,
}

impl Locomotion {
    #[cfg(test)]
    pub fn move_intent(&self) -> Vec2 {
        self.move_intent
    }

    pub fn jump_state(&self) -> JumpState {
        self.jump_state
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn facing_yaw(&self) -> f32 {
        self.facing_yaw
    }

    /// Stores the desired horizontal direction (x right, y forward).
    pub fn set_move_intent(&mut self, direction: Vec2) {
        self.move_intent = direction.normalize_or_zero();
    }

    /// Records this tick's ground probe result.
    ///
    /// A landing resets the jump state to `Grounded`; this is the only way
    /// back to it. Landing means support appeared this tick, or support
    /// while not rising. The probe reaches below the feet, so it keeps
    /// reporting support for a few ticks after takeoff; those ticks must not
    /// count. Returns true when the reset happened.
    pub fn sense_ground(&mut self, grounded: bool, vertical_velocity: f32) -> bool {
        let landed = grounded && (!self.grounded || vertical_velocity <= 0.0);
        self.grounded = grounded;
        if landed && self.jump_state != JumpState::Grounded {
            self.jump_state = JumpState::Grounded;
            return true;
        }
        false
    }

    /// Handles one jump press. No-op outside the two legal transitions.
    pub fn request_jump(&mut self, velocity: &mut Vec3, config: &LocomotionConfig) -> Option<JumpKind> {
        let (kind, force, next) = match (self.jump_state, self.grounded) {
            (JumpState::Grounded, true) => (
                JumpKind::First,
                config.jump_force,
                JumpState::AirborneFirstJumpAvailable,
            ),
            (JumpState::AirborneFirstJumpAvailable, false) => (
                JumpKind::Double,
                config.double_jump_force,
                JumpState::AirborneDoubleJumpUsed,
            ),
            _ => return None,
        };

        velocity.y = config.impulse_velocity(force);
        self.jump_state = next;
        Some(kind)
    }

    /// Blends horizontal velocity toward `intent * move_speed`.
    ///
    /// With no intent the target is zero, so the body glides to a stop.
    pub fn step_physics(&mut self, velocity: &mut Vec3, config: &LocomotionConfig, dt: f32) {
        let target = intent_to_world(self.move_intent) * config.move_speed;
        let horizontal = Vec3::new(velocity.x, 0.0, velocity.z);

        let blended = smooth_damp_vec3(
            horizontal,
            target,
            &mut self.smooth_velocity,
            config.smooth_time,
            dt,
        );

        velocity.x = blended.x;
        velocity.z = blended.z;
    }

    /// Turns the model yaw toward the move direction at `rotation_speed`.
    pub fn turn_toward_intent(&mut self, config: &LocomotionConfig, dt: f32) {
        if self.move_intent == Vec2::ZERO {
            return;
        }
        let target = intent_yaw(self.move_intent);
        self.facing_yaw = move_towards_angle(self.facing_yaw, target, config.rotation_speed * dt);
    }

    /// Horizontal part of `velocity` while supported, zero while airborne.
    pub fn grounded_velocity(&self, velocity: Vec3) -> Vec3 {
        if self.grounded {
            Vec3::new(velocity.x, 0.0, velocity.z)
        } else {
            Vec3::ZERO
        }
    }

    /// Clears motion state after a teleport. Facing is kept.
    pub fn reset(&mut self) {
        self.move_intent = Vec2::ZERO;
        self.jump_state = JumpState::Grounded;
        self.smooth_velocity = Vec3::ZERO;
    }
}

/// Maps (right, forward) intent onto the XZ plane; forward is -Z.
pub fn intent_to_world(intent: Vec2) -> Vec3 {
    Vec3::new(intent.x, 0.0, -intent.y)
}

/// Yaw in degrees that turns -Z onto the intent direction.
pub fn intent_yaw(intent: Vec2) -> f32 {
    (-intent.x).atan2(intent.y).to_degrees()
}
