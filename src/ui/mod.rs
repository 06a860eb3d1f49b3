//! UI domain: contact timer HUD and the respawn fade overlay.

mod fade;
mod hud_timer;


use bevy::prelude::*;

use crate::core::FrameSet;
use crate::ui::fade::{spawn_fade_overlay, update_fade_overlay};
use crate::ui::hud_timer::{spawn_contact_timer_ui, update_contact_timer};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_contact_timer_ui, spawn_fade_overlay))
            .add_systems(
                Update,
                (update_contact_timer, update_fade_overlay).in_set(FrameSet::Presentation),
            );
    }
}
