//! Debug domain: developer overlays for ground sensing and locomotion.
//!
//! Only built with the `dev-tools` feature.
//! - F1: ground probe gizmos
//! - F3: jump state and ground speed readout

mod state;
mod systems;
mod ui;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::core::FrameSet;
use crate::debug::state::DebugState;
use crate::debug::systems::{draw_ground_probes, handle_debug_hotkeys, update_debug_info_overlay};
use crate::debug::ui::spawn_debug_info_overlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_debug_info_overlay)
            .add_systems(Update, handle_debug_hotkeys.in_set(FrameSet::Input))
            .add_systems(
                Update,
                (
                    draw_ground_probes.run_if(|state: Res<DebugState>| state.show_probe),
                    update_debug_info_overlay,
                )
                    .in_set(FrameSet::Presentation),
            );
    }
}
