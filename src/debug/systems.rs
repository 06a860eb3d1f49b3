//! Debug domain: hotkeys, probe gizmos and the readout.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, debug_readout};
use crate::movement::{GroundSensor, Locomotion, Player};

/// F1 toggles the probe gizmos, F3 the readout
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_probe = !debug_state.show_probe;
        info!("[DEBUG] Probe gizmos {}", on_off(debug_state.show_probe));
    }
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_info = !debug_state.show_info;
        info!("[DEBUG] Info overlay {}", on_off(debug_state.show_info));
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "ON" } else { "OFF" }
}

/// Probe sphere: green while grounded, red while airborne
pub(crate) fn draw_ground_probes(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &GroundSensor, &Locomotion)>,
) {
    for (transform, sensor, locomotion) in &query {
        let color = if locomotion.is_grounded() {
            Color::srgb(0.2, 0.9, 0.3)
        } else {
            Color::srgb(0.9, 0.2, 0.2)
        };
        let center = sensor.probe_center(transform.translation);
        gizmos.sphere(Isometry3d::from_translation(center), sensor.radius, color);
    }
}

pub(crate) fn update_debug_info_overlay(
    debug_state: Res<DebugState>,
    players: Query<(&Locomotion, &LinearVelocity), With<Player>>,
    mut overlay: Query<(&mut Text, &mut Visibility), With<DebugInfoOverlay>>,
) {
    let Ok((mut text, mut visibility)) = overlay.single_mut() else {
        return;
    };

    if !debug_state.show_info {
        *visibility = Visibility::Hidden;
        return;
    }
    *visibility = Visibility::Inherited;

    if let Some((locomotion, velocity)) = players.iter().next() {
        let speed = locomotion.grounded_velocity(velocity.0).length();
        **text = debug_readout(locomotion.jump_state(), locomotion.is_grounded(), speed);
    }
}
