//! Movement domain: system modules for input, integration and presentation sync.

pub(crate) mod camera;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use camera::{draw_grapple_rope, sync_camera};
pub(crate) use input::{read_grapple_buttons, read_look, read_move_input};
pub(crate) use movement::{apply_movement, handle_grapple_commands, release_grapple_on_pause};
