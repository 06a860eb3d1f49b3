//! Movement domain: input resources.

use bevy::prelude::*;

/// Raw locomotion input sampled on the frame tick.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Desired direction: x is right, y is forward. Zero or unit length.
    pub axis: Vec2,
    /// One pending jump press, consumed by the next physics tick
    pub jump_queued: bool,
}

impl MovementInput {
    /// Latches a detected press. Repeated presses before the next physics
    /// tick collapse into one request.
    pub fn queue_jump(&mut self) {
        self.jump_queued = true;
    }

    /// Takes the pending press, if any.
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_queued)
    }

    pub fn clear(&mut self) {
        self.axis = Vec2::ZERO;
        self.jump_queued = false;
    }
}
