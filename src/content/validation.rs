//! Range checks on tuning values. Any failure is fatal at startup.

use super::data::{CameraConfig, GameTuning, HazardConfig, LocomotionConfig};

/// A tuning value outside its allowed range.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: f32,
    pub requirement: &'static str,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} = {} but must be {}",
            self.field, self.value, self.requirement
        )
    }
}

/// Helper macro for checking a value against a predicate
macro_rules! check {
    ($errors:expr, $field:expr, $value:expr, $ok:expr, $requirement:expr) => {
        let value: f32 = $value;
        if !value.is_finite() || !$ok(value) {
            $errors.push(ConfigError {
                field: $field,
                value,
                requirement: $requirement,
            });
        }
    };
}

fn positive(value: f32) -> bool {
    value > 0.0
}

fn non_negative(value: f32) -> bool {
    value >= 0.0
}

pub fn validate_locomotion(config: &LocomotionConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    check!(errors, "locomotion.move_speed", config.move_speed, positive, "> 0");
    check!(errors, "locomotion.rotation_speed", config.rotation_speed, positive, "> 0");
    check!(errors, "locomotion.smooth_time", config.smooth_time, positive, "> 0");
    check!(errors, "locomotion.jump_force", config.jump_force, non_negative, ">= 0");
    check!(
        errors,
        "locomotion.double_jump_force",
        config.double_jump_force,
        non_negative,
        ">= 0"
    );
    check!(errors, "locomotion.body_mass", config.body_mass, positive, "> 0");
    check!(errors, "locomotion.linear_damping", config.linear_damping, non_negative, ">= 0");
    check!(errors, "locomotion.angular_damping", config.angular_damping, non_negative, ">= 0");
    check!(
        errors,
        "locomotion.ground_check_radius",
        config.ground_check_radius,
        positive,
        "> 0"
    );
    check!(
        errors,
        "locomotion.ground_check_offset",
        config.ground_check_offset,
        non_negative,
        ">= 0"
    );
    check!(errors, "locomotion.body_radius", config.body_radius, positive, "> 0");
    check!(
        errors,
        "locomotion.body_half_height",
        config.body_half_height,
        non_negative,
        ">= 0"
    );

    errors
}

pub fn validate_hazard(config: &HazardConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    check!(errors, "hazard.max_contact_time", config.max_contact_time, positive, "> 0");
    check!(errors, "hazard.fade_duration", config.fade_duration, positive, "> 0");

    errors
}

pub fn validate_camera(config: &CameraConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    for (field, component) in [
        ("camera.offset.x", config.offset[0]),
        ("camera.offset.y", config.offset[1]),
        ("camera.offset.z", config.offset[2]),
    ] {
        check!(errors, field, component, |_| true, "finite");
    }
    check!(errors, "camera.rotation_speed", config.rotation_speed, positive, "> 0");
    check!(errors, "camera.smooth_speed", config.smooth_speed, positive, "> 0");
    check!(
        errors,
        "camera.max_rotation_angle",
        config.max_rotation_angle,
        |v| (0.0..=180.0).contains(&v),
        "within [0, 180]"
    );
    check!(errors, "camera.move_threshold", config.move_threshold, non_negative, ">= 0");
    check!(errors, "camera.follow_speed", config.follow_speed, positive, "> 0");

    errors
}

/// Validate every section of the tuning file.
/// Returns a list of errors, empty if all values are usable.
pub fn validate_tuning(tuning: &GameTuning) -> Vec<ConfigError> {
    let mut errors = validate_locomotion(&tuning.locomotion);
    errors.extend(validate_hazard(&tuning.hazard));
    errors.extend(validate_camera(&tuning.camera));
    errors
}
