//! Core domain: game state definitions for pointer-lock flow.

use bevy::prelude::*;

/// Top-level play state. Mouse look and grappling only run while `Playing`,
/// which mirrors the cursor being locked to the window.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum GameState {
    #[default]
    Paused,
    Playing,
}
