//! Movement domain: velocity edits and model facing.

use avian3d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::content::LocomotionConfig;
use crate::hazard::PlayerRespawned;
use crate::movement::{JumpKind, Locomotion, MovementInput, Player, PlayerModel};

pub(crate) fn apply_locomotion(
    time: Res<Time>,
    config: Res<LocomotionConfig>,
    mut input: ResMut<MovementInput>,
    mut query: Query<(&mut Locomotion, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();
    let jump_pressed = input.take_jump();

    for (mut locomotion, mut velocity) in &mut query {
        locomotion.set_move_intent(input.axis);

        if jump_pressed {
            match locomotion.request_jump(&mut velocity.0, &config) {
                Some(JumpKind::First) => debug!("Jump: vy={:.2}", velocity.y),
                Some(JumpKind::Double) => debug!("Double jump: vy={:.2}", velocity.y),
                None => debug!("Jump ignored in {:?}", locomotion.jump_state()),
            }
        }

        locomotion.step_physics(&mut velocity.0, &config, dt);
        locomotion.turn_toward_intent(&config, dt);
    }
}

pub(crate) fn apply_facing(
    players: Query<&Locomotion, With<Player>>,
    mut models: Query<&mut Transform, With<PlayerModel>>,
) {
    let Ok(locomotion) = players.single() else {
        return;
    };

    for mut transform in &mut models {
        transform.rotation = Quat::from_rotation_y(locomotion.facing_yaw().to_radians());
    }
}

pub(crate) fn reset_after_respawn(
    mut respawns: MessageReader<PlayerRespawned>,
    mut query: Query<&mut Locomotion>,
) {
    for event in respawns.read() {
        if let Ok(mut locomotion) = query.get_mut(event.entity) {
            locomotion.reset();
        }
    }
}
