//! Camera domain: pointer input for the orbit drag.

use bevy::prelude::*;

/// Drag gesture sampled this frame.
#[derive(Resource, Debug, Default, Clone)]
pub struct CameraInput {
    pub drag_started: bool,
    pub dragging: bool,
    pub drag_ended: bool,
    /// Horizontal pointer travel this frame (px)
    pub delta_x: f32,
}

impl CameraInput {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
