//! Movement domain: frame integration and grapple command handling.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::events::GrappleCommand;
use crate::movement::grapple::{fire_grapple, release_grapple};
use crate::movement::integrator::step_player;
use crate::movement::resources::{GrappleTuning, LookAngles, MovementInput, MovementTuning};
use crate::movement::state::{LastStep, PlayerSession};
use crate::world::Terrain;

pub(crate) fn handle_grapple_commands(
    mut grapple_commands: MessageReader<GrappleCommand>,
    mut session: ResMut<PlayerSession>,
    look: Res<LookAngles>,
    terrain: Res<Terrain>,
    tuning: Res<GrappleTuning>,
) {
    for command in grapple_commands.read() {
        match command {
            GrappleCommand::Fire => {
                let origin = session.player.position;
                match fire_grapple(
                    &mut session.grapple,
                    &terrain,
                    origin,
                    look.forward(),
                    &tuning,
                ) {
                    Some(hit) => debug!(
                        "Grapple attached at {} (distance {:.1}, rest {:.1})",
                        hit.point, hit.distance, session.grapple.rest_length
                    ),
                    None => debug!("Grapple missed"),
                }
            }
            GrappleCommand::Release => {
                if session.grapple.active {
                    debug!("Grapple released");
                }
                release_grapple(&mut session.grapple);
            }
        }
    }
}

/// Drop the rope when play ends. Button releases are not read while paused.
pub(crate) fn release_grapple_on_pause(mut session: ResMut<PlayerSession>) {
    if session.grapple.active {
        debug!("Grapple released on pause");
    }
    release_grapple(&mut session.grapple);
}

pub(crate) fn apply_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    look: Res<LookAngles>,
    terrain: Res<Terrain>,
    tuning: Res<MovementTuning>,
    grapple_tuning: Res<GrappleTuning>,
    mut session: ResMut<PlayerSession>,
    mut last_step: ResMut<LastStep>,
) {
    let report = step_player(
        &mut session,
        &input,
        &look,
        &terrain,
        &tuning,
        &grapple_tuning,
        time.delta_secs(),
    );

    if report.jumped {
        debug!("Jump from {}", session.player.position);
    }
    if report.landed {
        debug!(
            "Landed at {} with horizontal speed {:.1}",
            session.player.position, report.horizontal_speed
        );
    }

    last_step.0 = report;
}
