//! Movement domain: markers and physics layers for locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces (floors, platforms)
    Ground,
    /// Dangerous terrain; walkable but starts the contact timer
    Hazard,
    /// Player character
    Player,
    /// Triggers such as checkpoints; never block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for walkable colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Visual model of the player. Turned toward the move direction while the
/// physics body keeps its rotation locked.
#[derive(Component, Debug)]
pub struct PlayerModel;
