//! UI domain: hazard contact timer readout.

use bevy::prelude::*;

use crate::hazard::HazardTracker;
use crate::movement::Player;

const CONTACT_TIMER_PADDING: f32 = 20.0;

/// Marker for the contact timer text
#[derive(Component)]
pub struct ContactTimerText;

pub(crate) fn contact_timer_label(duration: f32) -> String {
    format!("Contact Duration: {:.2}", duration)
}

pub(crate) fn spawn_contact_timer_ui(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(CONTACT_TIMER_PADDING),
                top: Val::Px(CONTACT_TIMER_PADDING),
                padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.3, 0.3, 0.3, 0.8)),
        ))
        .with_child((
            ContactTimerText,
            Text::new(contact_timer_label(0.0)),
            TextFont {
                font_size: 24.0,
                ..default()
            },
            TextColor(Color::WHITE),
        ));
}

pub(crate) fn update_contact_timer(
    trackers: Query<&HazardTracker, (With<Player>, Changed<HazardTracker>)>,
    mut query: Query<&mut Text, With<ContactTimerText>>,
) {
    let Some(tracker) = trackers.iter().next() else {
        return;
    };
    for mut text in &mut query {
        **text = contact_timer_label(tracker.contact_duration());
    }
}
