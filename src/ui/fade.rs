//! UI domain: full-screen fade overlay driven by the respawn sequence.

use bevy::prelude::*;

use crate::hazard::HazardTracker;
use crate::movement::Player;

/// Marker for the fade overlay
#[derive(Component)]
pub struct FadeOverlay;

pub(crate) fn spawn_fade_overlay(mut commands: Commands) {
    commands.spawn((
        FadeOverlay,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            top: Val::Px(0.0),
            bottom: Val::Px(0.0),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.0)),
        // Above the HUD
        ZIndex(100),
        Visibility::Hidden,
    ));
}

pub(crate) fn update_fade_overlay(
    trackers: Query<&HazardTracker, With<Player>>,
    mut query: Query<(&mut BackgroundColor, &mut Visibility), With<FadeOverlay>>,
) {
    let Some(tracker) = trackers.iter().next() else {
        return;
    };

    for (mut background, mut visibility) in &mut query {
        if tracker.game_over() {
            background.0 = Color::srgba(0.0, 0.0, 0.0, tracker.fade_alpha());
            *visibility = Visibility::Visible;
        } else {
            *visibility = Visibility::Hidden;
        }
    }
}
