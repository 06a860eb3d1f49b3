//! Movement domain: system modules for locomotion updates.

pub(crate) mod ground;
pub(crate) mod input;
pub(crate) mod locomotion;

pub(crate) use ground::{detect_ground, verify_ground_sensors};
pub(crate) use input::read_input;
pub(crate) use locomotion::{apply_facing, apply_locomotion, reset_after_respawn};
