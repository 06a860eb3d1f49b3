mod camera;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod hazard;
mod movement;
mod ui;

use std::path::Path;

use avian3d::prelude::*;
use bevy::prelude::*;

fn main() -> AppExit {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Three Seconds".to_string(),
            resizable: true,
            ..default()
        }),
        ..default()
    }));

    // Logging is up from here; bad tuning stops the app before the first tick
    let tuning = match content::load_tuning(Path::new(content::TUNING_PATH)) {
        Ok(tuning) => tuning,
        Err(e) => {
            error!("{}", e);
            return AppExit::error();
        }
    };
    let errors = content::validate_tuning(&tuning);
    if !errors.is_empty() {
        for e in &errors {
            error!("{}", e);
        }
        error!("{} invalid tuning value(s), refusing to start", errors.len());
        return AppExit::error();
    }

    app.add_plugins(PhysicsPlugins::default()).add_plugins((
        core::CorePlugin,
        content::ContentPlugin { tuning },
        movement::MovementPlugin,
        hazard::HazardPlugin,
        camera::CameraPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run()
}
