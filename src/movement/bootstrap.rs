//! Movement domain: player bootstrap from tuning.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::content::{HazardConfig, LocomotionConfig};
use crate::hazard::{HazardTracker, RespawnAnchor};
use crate::movement::{GameLayer, GroundSensor, Locomotion, Player, PlayerModel};

/// Where the player starts; also the initial respawn anchor.
pub(crate) const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 1.5, 6.0);

pub(crate) fn spawn_player(
    mut commands: Commands,
    config: Res<LocomotionConfig>,
    hazard_config: Res<HazardConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let spawn = Transform::from_translation(PLAYER_SPAWN);
    let height = config.body_half_height * 2.0;

    info!(
        "Spawning player at {}: speed={}, jump={}, double_jump={}",
        spawn.translation, config.move_speed, config.jump_force, config.double_jump_force
    );

    commands
        .spawn((
            // Identity & gameplay state
            (
                Player,
                Locomotion::default(),
                GroundSensor::from_config(&config),
                HazardTracker::new(&hazard_config),
                RespawnAnchor::capture(&spawn),
            ),
            spawn,
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::capsule(config.body_radius, height),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Mass(config.body_mass),
                LinearDamping(config.linear_damping),
                AngularDamping(config.angular_damping),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Ground, GameLayer::Hazard, GameLayer::Sensor],
                ),
            ),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    PlayerModel,
                    Mesh3d(meshes.add(Capsule3d::new(config.body_radius, height))),
                    MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.9))),
                    Transform::default(),
                ))
                .with_child((
                    // Visor so the facing direction reads on screen
                    Mesh3d(meshes.add(Cuboid::new(config.body_radius, 0.15, 0.1))),
                    MeshMaterial3d(materials.add(Color::srgb(0.2, 0.3, 0.8))),
                    Transform::from_xyz(0.0, config.body_half_height * 0.6, -config.body_radius),
                ));
        });
}
