//! Debug domain: hotkeys, bounds gizmos and movement tracing.

use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::movement::{LastStep, PlayerSession};
use crate::world::{Terrain, WorldSeed};

const BOUNDS_COLOR: Color = Color::srgb(1.0, 0.6, 0.2);

/// F1 toggles platform bounds, F2 toggles step tracing, F3 prints the world seed
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    seed: Option<Res<WorldSeed>>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_bounds = !debug_state.show_bounds;
        info!("Debug: platform bounds {}", on_off(debug_state.show_bounds));
    }
    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.trace_steps = !debug_state.trace_steps;
        info!("Debug: step trace {}", on_off(debug_state.trace_steps));
    }
    if keyboard.just_pressed(KeyCode::F3) {
        match seed {
            Some(seed) => info!("Debug: world seed {}", seed.0),
            None => warn!("Debug: world not built yet"),
        }
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

pub(crate) fn draw_platform_bounds(
    debug_state: Res<DebugState>,
    terrain: Res<Terrain>,
    mut gizmos: Gizmos,
) {
    if !debug_state.show_bounds {
        return;
    }
    for platform in &terrain.platforms {
        let transform = Transform::from_translation(platform.center()).with_scale(platform.size());
        gizmos.cube(transform, BOUNDS_COLOR);
    }
}

pub(crate) fn trace_steps(
    debug_state: Res<DebugState>,
    session: Res<PlayerSession>,
    last_step: Res<LastStep>,
) {
    if !debug_state.trace_steps {
        return;
    }
    let player = &session.player;
    info!(
        "pos={} vel={} ground={} speed={:.2} grapple={}",
        player.position,
        player.velocity,
        player.on_ground,
        last_step.0.horizontal_speed,
        session.grapple.active
    );
}
