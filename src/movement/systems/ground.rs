//! Movement domain: ground detection on the physics tick.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::core::MissingCollaborator;
use crate::movement::{GroundSensor, Locomotion, SpatialGroundProbe};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(Entity, &Position, &LinearVelocity, &GroundSensor, &mut Locomotion)>,
) {
    for (entity, position, velocity, sensor, mut locomotion) in &mut query {
        let was_grounded = locomotion.is_grounded();
        let probe = SpatialGroundProbe::new(&spatial_query, sensor, entity);
        let grounded = sensor.is_grounded(position.0, &probe);

        if locomotion.sense_ground(grounded, velocity.y) {
            debug!("Landed: jump state reset to {:?}", locomotion.jump_state());
        } else if was_grounded && !grounded {
            debug!("Left ground: jump state {:?}", locomotion.jump_state());
        }
    }
}

/// Every locomotion body needs a ground sensor; without one it could
/// never return to the grounded state.
pub(crate) fn verify_ground_sensors(
    query: Query<Entity, (With<Locomotion>, Without<GroundSensor>)>,
) -> Result {
    if let Some(entity) = query.iter().next() {
        return Err(MissingCollaborator {
            entity: Some(entity),
            requirement: "a GroundSensor for its Locomotion",
        }
        .into());
    }
    Ok(())
}
