//! Hazard domain: collision routing, contact timing and the respawn teleport.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::hazard::{Checkpoint, Hazard, HazardTracker, PlayerRespawned, RespawnAnchor, RespawnStep};

/// Routes begin/end contacts against `Hazard` colliders into the trackers.
pub(crate) fn track_hazard_contacts(
    mut started: MessageReader<CollisionStart>,
    mut ended: MessageReader<CollisionEnd>,
    hazards: Query<(), With<Hazard>>,
    mut trackers: Query<&mut HazardTracker>,
) {
    for event in started.read() {
        for (body, other) in [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ] {
            if !hazards.contains(other) {
                continue;
            }
            if let Ok(mut tracker) = trackers.get_mut(body) {
                tracker.on_hazard_enter();
                debug!("Hazard contact began: {} on {}", body, other);
            }
        }
    }

    for event in ended.read() {
        for (body, other) in [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ] {
            if !hazards.contains(other) {
                continue;
            }
            if let Ok(mut tracker) = trackers.get_mut(body) {
                tracker.on_hazard_exit();
                debug!("Hazard contact ended: {} on {}", body, other);
            }
        }
    }
}

/// Moves the respawn anchor when a body touches a checkpoint while no
/// respawn is running.
pub(crate) fn reach_checkpoints(
    mut started: MessageReader<CollisionStart>,
    checkpoints: Query<(&Checkpoint, &GlobalTransform)>,
    mut bodies: Query<(&HazardTracker, &mut RespawnAnchor)>,
) {
    for event in started.read() {
        for (body, other) in [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ] {
            let Ok((checkpoint, checkpoint_transform)) = checkpoints.get(other) else {
                continue;
            };
            let Ok((tracker, mut anchor)) = bodies.get_mut(body) else {
                continue;
            };
            if tracker.game_over() {
                continue;
            }

            let respawn_point = checkpoint_transform.translation() + checkpoint.respawn_offset;
            if anchor.translation != respawn_point {
                anchor.move_to(respawn_point);
                info!("Checkpoint reached: respawn point now {}", respawn_point);
            }
        }
    }
}

/// Advances contact timers and respawn sequences; performs the teleport.
pub(crate) fn tick_hazards(
    time: Res<Time>,
    mut respawned: MessageWriter<PlayerRespawned>,
    mut query: Query<(
        Entity,
        &mut HazardTracker,
        &RespawnAnchor,
        &mut Transform,
        &mut Position,
        &mut Rotation,
        &mut LinearVelocity,
        &mut AngularVelocity,
    )>,
) {
    let dt = time.delta_secs();

    for (
        entity,
        mut tracker,
        anchor,
        mut transform,
        mut position,
        mut rotation,
        mut linear_velocity,
        mut angular_velocity,
    ) in &mut query
    {
        match tracker.tick(dt) {
            Some(RespawnStep::Started) => {
                info!(
                    "Hazard contact held for {:.2}s: respawning {}",
                    tracker.contact_duration(),
                    entity
                );
            }
            Some(RespawnStep::Teleport) => {
                transform.translation = anchor.translation;
                transform.rotation = anchor.rotation;
                *position = Position(anchor.translation);
                *rotation = Rotation(anchor.rotation);
                *linear_velocity = LinearVelocity(Vec3::ZERO);
                *angular_velocity = AngularVelocity(Vec3::ZERO);

                respawned.write(PlayerRespawned { entity });
                info!("Teleported {} to {}", entity, anchor.translation);
            }
            Some(RespawnStep::Completed) => {
                info!("Respawn of {} complete", entity);
            }
            None => {}
        }
    }
}
