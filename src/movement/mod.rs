//! Movement domain: player locomotion, ground sensing, and the demo course.

mod bootstrap;
mod components;
mod course;
mod locomotion;
mod resources;
mod sensor;
mod systems;


pub use components::{GameLayer, Ground, Player, PlayerModel};
pub use locomotion::{JumpKind, JumpState, Locomotion, intent_to_world, intent_yaw};
pub use resources::MovementInput;
pub use sensor::{GroundProbe, GroundSensor, SpatialGroundProbe};

use bevy::prelude::*;

use crate::core::{FrameSet, PhysicsSet};
use crate::movement::bootstrap::spawn_player;
use crate::movement::course::spawn_course;
use crate::movement::systems::{
    apply_facing, apply_locomotion, detect_ground, read_input, reset_after_respawn,
    verify_ground_sensors,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .register_type::<JumpState>()
            .add_systems(Startup, (spawn_course, spawn_player))
            .add_systems(PostStartup, verify_ground_sensors)
            .add_systems(FixedUpdate, detect_ground.in_set(PhysicsSet::Sense))
            .add_systems(FixedUpdate, apply_locomotion.in_set(PhysicsSet::Locomotion))
            .add_systems(Update, read_input.in_set(FrameSet::Input))
            .add_systems(Update, reset_after_respawn.in_set(FrameSet::Respawn))
            .add_systems(Update, apply_facing.in_set(FrameSet::Presentation));
    }
}
