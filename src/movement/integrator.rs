//! Movement domain: per-frame player and grapple integration.
//!
//! `step_player` is a pure transform over the session state. Velocity is
//! updated first and then applied to position (semi-implicit Euler), after
//! which the player is pushed back onto the ground or any platform it sank into.

use bevy::prelude::*;

use crate::movement::resources::{GrappleTuning, LookAngles, MovementInput, MovementTuning};
use crate::movement::state::{Grapple, PlayerBody, PlayerSession, StepReport};
use crate::world::Terrain;

/// Advance the session by one frame.
pub fn step_player(
    session: &mut PlayerSession,
    input: &MovementInput,
    look: &LookAngles,
    terrain: &Terrain,
    tuning: &MovementTuning,
    grapple_tuning: &GrappleTuning,
    delta: f32,
) -> StepReport {
    let dt = clamp_delta(delta, tuning.max_frame_delta);
    let PlayerSession { player, grapple } = session;

    apply_horizontal_movement(player, input, look.yaw, grapple.active, tuning, dt);
    apply_friction(player, tuning, dt);
    apply_gravity(player, tuning, dt);
    let jumped = apply_jump(player, input, tuning);
    apply_grapple_pull(player, grapple, grapple_tuning, dt);

    player.position += player.velocity * dt;

    let was_on_ground = player.on_ground;
    player.on_ground = false;
    resolve_ground(player);
    resolve_platforms(player, terrain);

    StepReport {
        jumped,
        landed: player.on_ground && !was_on_ground && !jumped,
        horizontal_speed: player.horizontal_speed(),
    }
}

/// Bound the step so a slow frame cannot tunnel or explode the integration.
pub fn clamp_delta(delta: f32, max_frame_delta: f32) -> f32 {
    if delta.is_nan() {
        return 0.0;
    }
    delta.clamp(0.0, max_frame_delta)
}

/// Unit movement intent in camera space (forward = -Z, right = +X).
/// Zero when no direction is held or opposing keys cancel out.
pub fn movement_intent(input: &MovementInput) -> Vec3 {
    let mut direction = Vec3::ZERO;
    if input.forward {
        direction.z -= 1.0;
    }
    if input.backward {
        direction.z += 1.0;
    }
    if input.left {
        direction.x -= 1.0;
    }
    if input.right {
        direction.x += 1.0;
    }
    direction.normalize_or_zero()
}

pub(crate) fn apply_horizontal_movement(
    player: &mut PlayerBody,
    input: &MovementInput,
    yaw: f32,
    grappling: bool,
    tuning: &MovementTuning,
    dt: f32,
) {
    let intent = movement_intent(input);
    if intent != Vec3::ZERO {
        let world_dir = Quat::from_rotation_y(yaw) * intent;
        player.velocity += world_dir * tuning.acceleration(input.sprint) * dt;
    }

    // Swinging on the rope may carry the player past the run cap
    if grappling {
        return;
    }

    let cap = tuning.speed_cap(input.sprint);
    let horizontal = player.velocity.xz();
    if horizontal.length() > cap {
        let clamped = horizontal.clamp_length_max(cap);
        player.velocity.x = clamped.x;
        player.velocity.z = clamped.y;
    }
}

pub(crate) fn apply_friction(player: &mut PlayerBody, tuning: &MovementTuning, dt: f32) {
    let decay = tuning.friction(player.on_ground) * dt;
    player.velocity.x -= player.velocity.x * decay;
    player.velocity.z -= player.velocity.z * decay;
}

pub(crate) fn apply_gravity(player: &mut PlayerBody, tuning: &MovementTuning, dt: f32) {
    player.velocity.y -= tuning.gravity * dt;
}

/// Returns true when the jump fired. No buffering and no air jumps.
pub(crate) fn apply_jump(
    player: &mut PlayerBody,
    input: &MovementInput,
    tuning: &MovementTuning,
) -> bool {
    if !(input.jump && player.on_ground) {
        return false;
    }
    player.velocity.y = tuning.jump_velocity;
    player.on_ground = false;
    true
}

/// Spring-like pull toward the anchor plus a sideways swing boost.
pub(crate) fn apply_grapple_pull(
    player: &mut PlayerBody,
    grapple: &Grapple,
    tuning: &GrappleTuning,
    dt: f32,
) {
    if !grapple.active {
        return;
    }

    let to_anchor = grapple.anchor - player.position;
    let distance = to_anchor.length();
    if distance <= tuning.dead_zone {
        return;
    }

    let stretch = distance - grapple.rest_length;
    let pull = to_anchor / distance * tuning.pull_for(stretch) * dt;
    player.velocity += pull;

    // Horizontal pull turned 90 degrees about +Y: (x, z) -> (-z, x)
    let swing = Vec3::new(-pull.z, 0.0, pull.x) * tuning.swing_boost;
    player.velocity += swing;
}

pub(crate) fn resolve_ground(player: &mut PlayerBody) {
    if player.position.y < player.height {
        player.position.y = player.height;
        player.velocity.y = player.velocity.y.max(0.0);
        player.on_ground = true;
    }
}

/// Snap onto every platform the player's feet have sunk into.
pub(crate) fn resolve_platforms(player: &mut PlayerBody, terrain: &Terrain) {
    let feet = player.feet();
    for platform in terrain.support_under(feet) {
        player.position.y = platform.top() + player.height;
        player.velocity.y = player.velocity.y.max(0.0);
        player.on_ground = true;
    }
}
