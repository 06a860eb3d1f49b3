//! Core domain: errors raised when an entity is missing a required partner.

use bevy::prelude::*;

/// An entity was set up without a collaborator it cannot run without.
///
/// Returned from fallible systems so Bevy's error handler stops the app
/// instead of letting later ticks run on inconsistent state.
#[derive(Debug)]
pub struct MissingCollaborator {
    pub entity: Option<Entity>,
    pub requirement: &'static str,
}

impl std::fmt::Display for MissingCollaborator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.entity {
            Some(entity) => write!(f, "{entity} is missing {}", self.requirement),
            None => write!(f, "no entity provides {}", self.requirement),
        }
    }
}

impl std::error::Error for MissingCollaborator {}
