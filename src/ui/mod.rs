//! UI domain: HUD text and pause overlay.

mod hud_speed;
mod overlay;

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::hud_speed::{spawn_speed_hud, update_speed_hud};
use crate::ui::overlay::{hide_pause_overlay, show_pause_overlay, spawn_pause_overlay};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_speed_hud, spawn_pause_overlay))
            .add_systems(OnEnter(GameState::Paused), show_pause_overlay)
            .add_systems(OnEnter(GameState::Playing), hide_pause_overlay)
            .add_systems(Update, update_speed_hud);
    }
}
