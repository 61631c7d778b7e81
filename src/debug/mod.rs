//! Debug domain: developer aids, built with the `dev-tools` feature.
//!
//! - F1: draw platform bounding boxes
//! - F2: log every movement step
//! - F3: print the world seed

mod state;
mod systems;

use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::systems::{draw_platform_bounds, handle_debug_hotkeys, trace_steps};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (handle_debug_hotkeys, draw_platform_bounds, trace_steps),
        );
    }
}
