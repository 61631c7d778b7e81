//! Movement domain: camera pose and rope rendering from session state.

use bevy::prelude::*;

use crate::core::MainCamera;
use crate::movement::resources::LookAngles;
use crate::movement::state::PlayerSession;

/// Rope starts a little below the eye so it is visible from first person
const ROPE_EYE_OFFSET: f32 = 0.4;
const ROPE_COLOR: Color = Color::srgb(0.55, 0.85, 1.0);

pub(crate) fn sync_camera(
    session: Res<PlayerSession>,
    look: Res<LookAngles>,
    mut cameras: Query<&mut Transform, With<MainCamera>>,
) {
    for mut transform in &mut cameras {
        transform.translation = session.player.position;
        transform.rotation = look.rotation();
    }
}

pub(crate) fn draw_grapple_rope(session: Res<PlayerSession>, mut gizmos: Gizmos) {
    if let Some((from, to)) = session.rope() {
        gizmos.line(from - Vec3::Y * ROPE_EYE_OFFSET, to, ROPE_COLOR);
    }
}
