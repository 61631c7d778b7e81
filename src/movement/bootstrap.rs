//! Movement domain: tuning and session setup from loaded content.

use bevy::prelude::*;

use crate::content::GameContent;
use crate::movement::resources::{GrappleTuning, LookTuning, MovementTuning};
use crate::movement::state::PlayerSession;

/// Apply loaded tuning and start a fresh session at the configured spawn.
pub(crate) fn bootstrap_session(
    mut commands: Commands,
    content: Res<GameContent>,
    existing: Option<Res<PlayerSession>>,
) {
    if existing.is_some() {
        info!("Player session already exists, skipping bootstrap");
        return;
    }

    let tuning = MovementTuning::from(&content.movement.locomotion);
    let spawn = Vec3::from_array(content.world.player_spawn);

    info!(
        "Starting session at {}: walk={}, sprint={}, jump_height={:.2}",
        spawn,
        tuning.walk_speed,
        tuning.sprint_speed,
        tuning.jump_height()
    );

    commands.insert_resource(PlayerSession::new(spawn, tuning.standing_height));
    commands.insert_resource(GrappleTuning::from(&content.movement.grapple));
    commands.insert_resource(LookTuning::from(&content.movement.look));
    commands.insert_resource(tuning);
}

/// Drop the session when play ends so a new one starts clean.
pub(crate) fn end_session(mut commands: Commands) {
    commands.remove_resource::<PlayerSession>();
    info!("Player session ended");
}
