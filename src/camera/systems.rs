//! Camera domain: spawning, pointer sampling and per-frame framing.

use bevy::ecs::message::MessageReader;
use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::camera::{CameraInput, OrbitCamera};
use crate::content::CameraConfig;
use crate::core::MissingCollaborator;
use crate::hazard::{HazardTracker, PlayerRespawned};
use crate::movement::Player;

/// Spawns the orbit camera behind the player. The player must exist by now.
pub(crate) fn spawn_orbit_camera(
    mut commands: Commands,
    config: Res<CameraConfig>,
    players: Query<(Entity, &Transform), With<Player>>,
) -> Result {
    let Some((player, player_transform)) = players.iter().next() else {
        return Err(MissingCollaborator {
            entity: None,
            requirement: "a Player for the orbit camera to target",
        }
        .into());
    };

    let orbit = OrbitCamera::new(player);
    let target = player_transform.translation;
    let transform = Transform::from_translation(orbit.desired_position(target, &config))
        .looking_at(orbit.look_target(target, &config), Vec3::Y);

    commands.spawn((Name::new("Orbit Camera"), Camera3d::default(), transform, orbit));
    info!("Orbit camera targeting {}", player);
    Ok(())
}

pub(crate) fn read_camera_input(
    mouse: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    trackers: Query<&HazardTracker, With<Player>>,
    mut input: ResMut<CameraInput>,
) {
    // No drag during a respawn; release any drag in progress
    if trackers.iter().any(HazardTracker::game_over) {
        let was_dragging = input.dragging;
        input.clear();
        input.drag_ended = was_dragging;
        return;
    }

    input.drag_started = mouse.just_pressed(MouseButton::Left);
    input.dragging = mouse.pressed(MouseButton::Left);
    input.drag_ended = mouse.just_released(MouseButton::Left);
    input.delta_x = motion.delta.x;
}

pub(crate) fn update_orbit_camera(
    time: Res<Time>,
    config: Res<CameraConfig>,
    input: Res<CameraInput>,
    targets: Query<&Transform, Without<OrbitCamera>>,
    mut cameras: Query<(&mut OrbitCamera, &mut Transform)>,
) -> Result {
    let dt = time.delta_secs();

    for (mut orbit, mut transform) in &mut cameras {
        let target_entity = orbit.target();
        let target_transform = targets.get(target_entity).map_err(|_| MissingCollaborator {
            entity: Some(target_entity),
            requirement: "a Transform on the orbit camera target",
        })?;
        let target = target_transform.translation;

        if input.drag_started {
            orbit.begin_drag();
        }
        if input.dragging {
            orbit.drag(input.delta_x, &config, dt);
        }
        if input.drag_ended || !input.dragging {
            orbit.end_drag();
        }

        orbit.follow(target, &config, dt);

        transform.translation = orbit.smooth_position(transform.translation, target, &config, dt);
        transform.look_at(orbit.look_target(target, &config), Vec3::Y);
    }
    Ok(())
}

pub(crate) fn reset_camera_after_respawn(
    mut respawned: MessageReader<PlayerRespawned>,
    mut cameras: Query<&mut OrbitCamera>,
) {
    for event in respawned.read() {
        for mut orbit in &mut cameras {
            if orbit.target() == event.entity {
                orbit.forget_target_position();
            }
        }
    }
}
