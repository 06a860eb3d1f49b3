//! Movement domain: the demo course of platforms, hazards and a checkpoint.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::hazard::{Checkpoint, Hazard};
use crate::movement::{GameLayer, Ground};

/// Solid static slab: centre and full size.
struct Slab {
    center: Vec3,
    size: Vec3,
}

const PLATFORMS: &[Slab] = &[
    Slab {
        center: Vec3::new(0.0, 1.0, -8.0),
        size: Vec3::new(3.0, 0.4, 3.0),
    },
    Slab {
        center: Vec3::new(4.0, 2.2, -12.0),
        size: Vec3::new(2.5, 0.4, 2.5),
    },
    Slab {
        center: Vec3::new(0.0, 3.4, -17.0),
        size: Vec3::new(2.0, 0.4, 2.0),
    },
];

const HAZARDS: &[Slab] = &[
    Slab {
        center: Vec3::new(-5.0, 0.05, 0.0),
        size: Vec3::new(4.0, 0.3, 4.0),
    },
    Slab {
        center: Vec3::new(0.0, 0.05, -12.0),
        size: Vec3::new(10.0, 0.3, 6.0),
    },
];

const CHECKPOINT: Vec3 = Vec3::new(0.0, 3.7, -17.0);

pub(crate) fn spawn_course(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let hazard_color = Color::srgb(0.8, 0.2, 0.15);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let hazard_layers = CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player]);

    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Floor
    let floor = Vec3::new(30.0, 0.2, 40.0);
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Cuboid::from_size(floor))),
        MeshMaterial3d(materials.add(ground_color)),
        Transform::from_xyz(0.0, -0.1, -5.0),
        RigidBody::Static,
        Collider::cuboid(floor.x, floor.y, floor.z),
        ground_layers,
    ));

    for slab in PLATFORMS {
        commands.spawn((
            Ground,
            Mesh3d(meshes.add(Cuboid::from_size(slab.size))),
            MeshMaterial3d(materials.add(platform_color)),
            Transform::from_translation(slab.center),
            RigidBody::Static,
            Collider::cuboid(slab.size.x, slab.size.y, slab.size.z),
            ground_layers,
        ));
    }

    for slab in HAZARDS {
        commands.spawn((
            Hazard,
            Mesh3d(meshes.add(Cuboid::from_size(slab.size))),
            MeshMaterial3d(materials.add(hazard_color)),
            Transform::from_translation(slab.center),
            RigidBody::Static,
            Collider::cuboid(slab.size.x, slab.size.y, slab.size.z),
            hazard_layers,
        ));
    }

    // Checkpoint pad on the highest platform
    commands.spawn((
        Checkpoint {
            respawn_offset: Vec3::Y * 1.0,
        },
        Mesh3d(meshes.add(Cylinder::new(0.6, 0.05))),
        MeshMaterial3d(materials.add(Color::srgba(0.3, 0.8, 1.0, 0.6))),
        Transform::from_translation(CHECKPOINT),
        Collider::cylinder(0.6, 0.6),
        Sensor,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    ));
}
