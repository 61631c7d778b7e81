//! Movement domain: first-person locomotion and grappling.

mod bootstrap;
mod events;
mod grapple;
mod integrator;
mod resources;
mod state;
mod systems;
#[cfg(test)]
mod tests;

pub use events::GrappleCommand;
pub use resources::{GrappleTuning, LookAngles, LookTuning, MovementInput, MovementTuning};
pub use state::{LastStep, PlayerSession};

use bevy::input::common_conditions::input_just_pressed;
use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::bootstrap::{bootstrap_session, end_session};
use crate::movement::systems::{
    apply_movement, draw_grapple_rope, handle_grapple_commands, read_grapple_buttons,
    read_look, read_move_input, release_grapple_on_pause, sync_camera,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<GrappleTuning>()
            .init_resource::<LookTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<LookAngles>()
            .init_resource::<LastStep>()
            .add_message::<GrappleCommand>()
            .add_systems(Startup, bootstrap_session)
            .add_systems(OnExit(GameState::Playing), release_grapple_on_pause)
            .add_systems(
                PreUpdate,
                (end_session, bootstrap_session)
                    .chain()
                    .run_if(input_just_pressed(KeyCode::KeyR)),
            )
            .add_systems(
                Update,
                (
                    read_move_input,
                    (read_look, read_grapple_buttons).run_if(in_state(GameState::Playing)),
                    handle_grapple_commands,
                    apply_movement,
                    sync_camera,
                    draw_grapple_rope,
                )
                    .chain(),
            );
    }
}
