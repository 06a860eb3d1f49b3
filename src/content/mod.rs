//! Content domain: tuning data loaded from RON and validated before the first tick.

mod data;
mod loader;
mod validation;


pub use data::{CameraConfig, GameTuning, HazardConfig, LocomotionConfig};
pub use loader::{TuningLoadError, load_tuning, parse_tuning};
pub use validation::{ConfigError, validate_tuning};

use bevy::prelude::*;

/// Default location of the tuning file, relative to the working directory.
pub const TUNING_PATH: &str = "assets/data/tuning.ron";

/// Installs validated tuning as per-domain resources.
pub struct ContentPlugin {
    pub tuning: GameTuning,
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<LocomotionConfig>()
            .register_type::<HazardConfig>()
            .register_type::<CameraConfig>()
            .insert_resource(self.tuning.locomotion.clone())
            .insert_resource(self.tuning.hazard.clone())
            .insert_resource(self.tuning.camera.clone());
    }
}
