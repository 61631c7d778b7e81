//! Debug domain: toggles for developer overlays.

use bevy::prelude::*;

/// Resource tracking which debug aids are enabled
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Draw platform bounding boxes
    pub show_bounds: bool,
    /// Log every integration step
    pub trace_steps: bool,
}
