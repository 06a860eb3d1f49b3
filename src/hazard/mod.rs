//! Hazard domain: dangerous terrain contact timing and the fade/teleport respawn.

mod components;
mod events;
mod systems;
mod tracker;


pub use components::{Checkpoint, Hazard, RespawnAnchor};
pub use events::PlayerRespawned;
pub use tracker::{ContactTimer, HazardTracker, RespawnPhase, RespawnSequencer, RespawnStep};

use bevy::prelude::*;

use crate::core::FrameSet;
use crate::hazard::systems::{reach_checkpoints, tick_hazards, track_hazard_contacts};

pub struct HazardPlugin;

impl Plugin for HazardPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlayerRespawned>()
            .register_type::<RespawnPhase>()
            .add_systems(
                Update,
                (track_hazard_contacts, reach_checkpoints, tick_hazards)
                    .chain()
                    .in_set(FrameSet::Hazard),
            );
    }
}
