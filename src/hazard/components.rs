//! Hazard domain: markers for dangerous terrain, checkpoints and the respawn anchor.

use bevy::prelude::*;

/// Marker for dangerous terrain colliders
#[derive(Component, Debug)]
pub struct Hazard;

/// Sensor that moves the respawn anchor when touched.
#[derive(Component, Debug)]
pub struct Checkpoint {
    /// Added to the checkpoint's position to get the respawn point
    pub respawn_offset: Vec3,
}

/// Pose the body returns to on respawn.
///
/// Captured once at spawn and only moved by checkpoints; never while a
/// contact episode is in progress.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct RespawnAnchor {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl RespawnAnchor {
    pub fn capture(transform: &Transform) -> Self {
        Self {
            translation: transform.translation,
            rotation: transform.rotation,
        }
    }

    /// Moves the anchor, keeping the captured orientation.
    pub fn move_to(&mut self, translation: Vec3) {
        self.translation = translation;
    }
}
