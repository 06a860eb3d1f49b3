//! Data structures deserialized from `assets/data/tuning.ron`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Root of the tuning file.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Reflect)]
pub struct GameTuning {
    pub schema_version: u32,
    pub locomotion: LocomotionConfig,
    pub hazard: HazardConfig,
    pub camera: CameraConfig,
}

/// Player locomotion tunables. Immutable once the app is running.
#[derive(Resource, Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct LocomotionConfig {
    /// Target horizontal speed at full stick deflection (units/s)
    pub move_speed: f32,
    /// Turn rate of the player model toward the move direction (deg/s)
    pub rotation_speed: f32,
    /// Time constant of the horizontal velocity spring (s)
    pub smooth_time: f32,
    /// Upward impulse of the grounded jump
    pub jump_force: f32,
    /// Upward impulse of the airborne jump
    pub double_jump_force: f32,
    pub body_mass: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,
    /// Radius of the ground probe sphere
    pub ground_check_radius: f32,
    /// Distance from the body origin down to the probe centre
    pub ground_check_offset: f32,
    pub body_radius: f32,
    /// Half length of the capsule's cylindrical section
    pub body_half_height: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            rotation_speed: 720.0,
            smooth_time: 0.1,
            jump_force: 7.0,
            double_jump_force: 6.0,
            body_mass: 1.0,
            linear_damping: 0.5,
            angular_damping: 0.05,
            ground_check_radius: 0.2,
            ground_check_offset: 1.0,
            body_radius: 0.4,
            body_half_height: 0.5,
        }
    }
}

impl LocomotionConfig {
    /// Vertical velocity change produced by an impulse of `force` on this body.
    pub fn impulse_velocity(&self, force: f32) -> f32 {
        force / self.body_mass
    }
}

/// Dangerous terrain timing.
#[derive(Resource, Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct HazardConfig {
    /// Seconds of continuous hazard contact before a respawn
    pub max_contact_time: f32,
    /// Length of each half of the fade (s)
    pub fade_duration: f32,
}

impl Default for HazardConfig {
    fn default() -> Self {
        Self {
            max_contact_time: 3.0,
            fade_duration: 1.0,
        }
    }
}

/// Orbit camera tunables.
#[derive(Resource, Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct CameraConfig {
    /// Camera offset from the target before yaw is applied
    pub offset: [f32; 3],
    /// Drag yaw per pixel of pointer travel per second (deg)
    pub rotation_speed: f32,
    /// Time constant of the position spring (s)
    pub smooth_speed: f32,
    /// Yaw limit either side of the rest angle (deg)
    pub max_rotation_angle: f32,
    /// Per-frame horizontal target displacement that counts as movement
    pub move_threshold: f32,
    /// Rate of the automatic follow rotation (1/s)
    pub follow_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset: [0.0, 2.0, 5.0],
            rotation_speed: 10.0,
            smooth_speed: 0.125,
            max_rotation_angle: 80.0,
            move_threshold: 0.05,
            follow_speed: 2.0,
        }
    }
}

impl CameraConfig {
    pub fn offset(&self) -> Vec3 {
        Vec3::from_array(self.offset)
    }
}
