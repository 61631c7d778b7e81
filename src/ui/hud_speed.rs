//! UI domain: horizontal speed readout.

use bevy::prelude::*;

use crate::movement::LastStep;

pub(crate) const HUD_PADDING: f32 = 16.0;
pub(crate) const HUD_FONT_SIZE: f32 = 22.0;

/// Marker for the speed text
#[derive(Component)]
pub struct SpeedText;

pub(crate) fn speed_label(horizontal_speed: f32) -> String {
    format!("Speed: {}", horizontal_speed.round() as i32)
}

pub(crate) fn spawn_speed_hud(mut commands: Commands) {
    commands.spawn((
        SpeedText,
        Text::new(speed_label(0.0)),
        TextFont {
            font_size: HUD_FONT_SIZE,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 1.0)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_PADDING),
            bottom: Val::Px(HUD_PADDING),
            ..default()
        },
    ));
}

pub(crate) fn update_speed_hud(
    last_step: Res<LastStep>,
    mut texts: Query<&mut Text, With<SpeedText>>,
) {
    if !last_step.is_changed() {
        return;
    }
    let label = speed_label(last_step.0.horizontal_speed);
    for mut text in &mut texts {
        if text.0 != label {
            text.0 = label.clone();
        }
    }
}
