//! Debug domain: locomotion readout overlay.

use bevy::prelude::*;

use crate::movement::JumpState;

/// Marker for the debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub(crate) fn debug_readout(jump_state: JumpState, grounded: bool, grounded_speed: f32) -> String {
    format!(
        "Jump: {:?}\nGrounded: {}\nGround speed: {:.2}",
        jump_state, grounded, grounded_speed
    )
}

pub(crate) fn spawn_debug_info_overlay(mut commands: Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new(""),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
