//! Debug domain: toggles for the developer overlays.

use bevy::prelude::*;

/// Resource tracking which debug overlays are shown
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Ground probe sphere gizmos
    pub show_probe: bool,
    /// Jump state and speed readout
    pub show_info: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            show_probe: true,
            show_info: true,
        }
    }
}
