//! Camera domain: third-person orbit camera following the player.

mod orbit;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use orbit::OrbitCamera;
pub use resources::CameraInput;

use bevy::prelude::*;

use crate::camera::systems::{
    read_camera_input, reset_camera_after_respawn, spawn_orbit_camera, update_orbit_camera,
};
use crate::core::FrameSet;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraInput>()
            .add_systems(PostStartup, spawn_orbit_camera)
            .add_systems(Update, read_camera_input.in_set(FrameSet::Input))
            .add_systems(Update, reset_camera_after_respawn.in_set(FrameSet::Respawn))
            .add_systems(Update, update_orbit_camera.in_set(FrameSet::Camera));
    }
}
