//! Core domain: shared math, error types, and tick ordering.

mod error;
pub mod math;

#[cfg(test)]
mod tests;

pub use error::MissingCollaborator;

use bevy::prelude::*;

/// Ordering of the variable-rate frame tick (`Update`).
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Raw device polling into intent resources
    Input,
    /// Contact timer and respawn sequencing
    Hazard,
    /// Reactions to a completed teleport
    Respawn,
    /// Orbit camera framing
    Camera,
    /// HUD and overlays
    Presentation,
}

/// Ordering of the fixed-rate physics tick (`FixedUpdate`).
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicsSet {
    /// Geometric queries (ground probe)
    Sense,
    /// Velocity edits from intent and jump requests
    Locomotion,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                FrameSet::Input,
                FrameSet::Hazard,
                FrameSet::Respawn,
                FrameSet::Camera,
                FrameSet::Presentation,
            )
                .chain(),
        )
        .configure_sets(FixedUpdate, (PhysicsSet::Sense, PhysicsSet::Locomotion).chain());
    }
}
