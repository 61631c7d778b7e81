//! UI domain: click-to-play overlay shown while the pointer is free.

use bevy::prelude::*;

/// Marker for the pause overlay root
#[derive(Component)]
pub struct PauseOverlay;

pub(crate) fn spawn_pause_overlay(mut commands: Commands) {
    commands
        .spawn((
            PauseOverlay,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.02, 0.03, 0.08, 0.7)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Click to play"),
                TextFont {
                    font_size: 40.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                Text::new("WASD move · Shift sprint · Space jump · Hold left mouse to grapple · R respawn · Esc release"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.78, 0.9)),
            ));
        });
}

pub(crate) fn show_pause_overlay(mut overlays: Query<&mut Visibility, With<PauseOverlay>>) {
    for mut visibility in &mut overlays {
        *visibility = Visibility::Visible;
    }
}

pub(crate) fn hide_pause_overlay(mut overlays: Query<&mut Visibility, With<PauseOverlay>>) {
    for mut visibility in &mut overlays {
        *visibility = Visibility::Hidden;
    }
}
