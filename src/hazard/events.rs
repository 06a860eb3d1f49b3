//! Hazard domain: messages for the respawn flow.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Fired once per respawn, at the instant the body is teleported.
#[derive(Debug)]
pub struct PlayerRespawned {
    pub entity: Entity,
}

impl Message for PlayerRespawned {}
