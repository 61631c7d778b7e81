//! Core domain: play state, pointer lock, camera and lighting setup.

mod state;
mod systems;

pub use state::GameState;
pub use systems::MainCamera;

use bevy::prelude::*;

use crate::core::systems::{
    enter_play_on_click, grab_cursor, pause_on_escape, release_cursor, setup_camera,
    setup_lighting,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .insert_resource(ClearColor(Color::srgb_u8(0x08, 0x0b, 0x16)))
            .add_systems(Startup, (setup_camera, setup_lighting))
            .add_systems(OnEnter(GameState::Playing), grab_cursor)
            .add_systems(OnExit(GameState::Playing), release_cursor)
            .add_systems(
                Update,
                (
                    enter_play_on_click.run_if(in_state(GameState::Paused)),
                    pause_on_escape.run_if(in_state(GameState::Playing)),
                ),
            );
    }
}
