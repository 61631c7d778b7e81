//! Movement domain: tests for the integrator, grapple and look handling.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use std::f32::consts::FRAC_PI_2;

use super::grapple::{fire_grapple, release_grapple};
use super::integrator::{clamp_delta, movement_intent, step_player};
use super::resources::{GrappleTuning, LookAngles, LookTuning, MovementInput, MovementTuning};
use super::state::{Grapple, PlayerSession};
use super::systems::release_grapple_on_pause;
use crate::core::GameState;
use crate::world::{Platform, Terrain};

const DT: f32 = 0.016;
const EPS: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

fn empty_terrain() -> Terrain {
    Terrain::new(Vec::new(), 300.0)
}

fn grounded_session() -> PlayerSession {
    let mut session = PlayerSession::new(Vec3::new(0.0, 2.0, 0.0), 2.0);
    session.player.on_ground = true;
    session
}

struct Rig {
    tuning: MovementTuning,
    grapple: GrappleTuning,
    terrain: Terrain,
    look: LookAngles,
}

impl Rig {
    fn new() -> Self {
        Self {
            tuning: MovementTuning::default(),
            grapple: GrappleTuning::default(),
            terrain: empty_terrain(),
            look: LookAngles::default(),
        }
    }

    fn step(&self, session: &mut PlayerSession, input: &MovementInput, dt: f32) {
        step_player(
            session,
            input,
            &self.look,
            &self.terrain,
            &self.tuning,
            &self.grapple,
            dt,
        );
    }
}

// -----------------------------------------------------------------------------
// Intent and delta
// -----------------------------------------------------------------------------

#[test]
fn test_intent_is_zero_without_input() {
    assert_eq!(movement_intent(&MovementInput::default()), Vec3::ZERO);
}

#[test]
fn test_opposing_keys_cancel() {
    let input = MovementInput {
        forward: true,
        backward: true,
        ..default()
    };
    assert_eq!(movement_intent(&input), Vec3::ZERO);
}

#[test]
fn test_diagonal_intent_is_normalized() {
    let input = MovementInput {
        forward: true,
        right: true,
        ..default()
    };
    let intent = movement_intent(&input);
    assert!(approx(intent.length(), 1.0));
    assert!(intent.x > 0.0 && intent.z < 0.0);
}

#[test]
fn test_delta_is_clamped() {
    assert!(approx(clamp_delta(0.2, 0.05), 0.05));
    assert!(approx(clamp_delta(0.01, 0.05), 0.01));
    assert_eq!(clamp_delta(-1.0, 0.05), 0.0);
    assert_eq!(clamp_delta(f32::NAN, 0.05), 0.0);
}

// -----------------------------------------------------------------------------
// Horizontal movement
// -----------------------------------------------------------------------------

#[test]
fn test_forward_follows_yaw() {
    let mut rig = Rig::new();
    let input = MovementInput {
        forward: true,
        ..default()
    };

    let mut session = grounded_session();
    rig.step(&mut session, &input, DT);
    assert!(session.player.velocity.z < 0.0);
    assert!(approx(session.player.velocity.x, 0.0));

    // Quarter turn left: forward now points down -X
    rig.look.yaw = FRAC_PI_2;
    let mut session = grounded_session();
    rig.step(&mut session, &input, DT);
    assert!(session.player.velocity.x < 0.0);
    assert!(session.player.velocity.z.abs() < EPS);
}

#[test]
fn test_walk_speed_never_exceeds_cap() {
    let rig = Rig::new();
    let inputs = [
        MovementInput {
            forward: true,
            ..default()
        },
        MovementInput {
            forward: true,
            left: true,
            ..default()
        },
        MovementInput {
            right: true,
            backward: true,
            ..default()
        },
    ];

    let mut session = grounded_session();
    session.player.velocity = Vec3::new(30.0, 0.0, -30.0);
    for frame in 0..600 {
        let input = &inputs[frame % inputs.len()];
        let dt = 0.005 + (frame % 10) as f32 * 0.005;
        rig.step(&mut session, input, dt);
        assert!(session.player.horizontal_speed() <= 12.0 + EPS);
    }
}

#[test]
fn test_sprint_cap_holds_in_the_air() {
    let rig = Rig::new();
    let input = MovementInput {
        forward: true,
        sprint: true,
        ..default()
    };

    let mut session = PlayerSession::new(Vec3::new(0.0, 500.0, 0.0), 2.0);
    session.player.velocity = Vec3::new(0.0, 0.0, -40.0);
    for _ in 0..200 {
        rig.step(&mut session, &input, 0.05);
        assert!(session.player.horizontal_speed() <= 18.0 + EPS);
    }
}

#[test]
fn test_friction_decays_to_rest() {
    let rig = Rig::new();
    let mut session = grounded_session();
    session.player.velocity = Vec3::new(8.0, 0.0, -6.0);

    let mut previous = session.player.horizontal_speed();
    for _ in 0..300 {
        rig.step(&mut session, &MovementInput::default(), DT);
        let speed = session.player.horizontal_speed();
        assert!(speed <= previous);
        previous = speed;
    }

    assert!(session.player.horizontal_speed() < 1e-3);
    assert!(approx(session.player.position.y, 2.0));
    assert_eq!(session.player.velocity.y, 0.0);
    assert!(session.player.on_ground);
}

#[test]
fn test_air_friction_is_weaker() {
    let rig = Rig::new();

    let mut ground = grounded_session();
    ground.player.velocity = Vec3::new(10.0, 0.0, 0.0);
    rig.step(&mut ground, &MovementInput::default(), DT);

    let mut air = PlayerSession::new(Vec3::new(0.0, 50.0, 0.0), 2.0);
    air.player.velocity = Vec3::new(10.0, 0.0, 0.0);
    rig.step(&mut air, &MovementInput::default(), DT);

    assert!(approx(ground.player.velocity.x, 10.0 * (1.0 - 10.0 * DT)));
    assert!(approx(air.player.velocity.x, 10.0 * (1.0 - 2.5 * DT)));
}

// -----------------------------------------------------------------------------
// Gravity, ground and jumping
// -----------------------------------------------------------------------------

#[test]
fn test_grounded_player_stays_at_standing_height() {
    let rig = Rig::new();
    let mut session = grounded_session();

    for _ in 0..100 {
        rig.step(&mut session, &MovementInput::default(), DT);
        assert!(session.player.velocity.y >= 0.0);
        assert_eq!(session.player.position.y, 2.0);
        assert!(session.player.on_ground);
    }
}

#[test]
fn test_fall_from_height_lands_on_ground() {
    let rig = Rig::new();
    let mut session = PlayerSession::new(Vec3::new(0.0, 8.0, 0.0), 2.0);

    let mut frames = 0;
    while !session.player.on_ground {
        rig.step(&mut session, &MovementInput::default(), DT);
        frames += 1;
        assert!(frames < 1000, "player never landed");
    }

    assert_eq!(session.player.position.y, 2.0);
    assert_eq!(session.player.velocity.y, 0.0);
}

#[test]
fn test_jump_from_ground() {
    let rig = Rig::new();
    let mut session = grounded_session();
    let jump = MovementInput {
        jump: true,
        ..default()
    };

    let report = step_player(
        &mut session,
        &jump,
        &rig.look,
        &rig.terrain,
        &rig.tuning,
        &rig.grapple,
        DT,
    );

    assert!(report.jumped);
    assert!(!session.player.on_ground);
    assert!(approx(session.player.velocity.y, 12.0));
    assert!(approx(session.player.position.y, 2.0 + 12.0 * DT));
}

#[test]
fn test_jump_ignored_while_airborne() {
    let rig = Rig::new();
    let airborne = PlayerSession::new(Vec3::new(0.0, 20.0, 0.0), 2.0);
    let jump = MovementInput {
        jump: true,
        ..default()
    };

    let mut with_jump = airborne;
    let mut without_jump = airborne;
    rig.step(&mut with_jump, &jump, DT);
    rig.step(&mut without_jump, &MovementInput::default(), DT);

    assert_eq!(with_jump.player.velocity.y, without_jump.player.velocity.y);
    assert!(with_jump.player.velocity.y < 0.0);
}

#[test]
fn test_held_jump_does_not_double_jump() {
    let rig = Rig::new();
    let mut session = grounded_session();
    let jump = MovementInput {
        jump: true,
        ..default()
    };

    rig.step(&mut session, &jump, DT);
    let after_first = session.player.velocity.y;
    rig.step(&mut session, &jump, DT);

    assert!(session.player.velocity.y < after_first);
}

#[test]
fn test_jump_reaches_expected_apex() {
    let rig = Rig::new();
    let mut session = grounded_session();
    let jump = MovementInput {
        jump: true,
        ..default()
    };

    rig.step(&mut session, &jump, 0.001);
    let mut apex = session.player.position.y;
    while !session.player.on_ground {
        rig.step(&mut session, &MovementInput::default(), 0.001);
        apex = apex.max(session.player.position.y);
    }

    let expected = 2.0 + rig.tuning.jump_height();
    assert!((apex - expected).abs() < 0.05, "apex {} vs {}", apex, expected);
}

// -----------------------------------------------------------------------------
// Platforms
// -----------------------------------------------------------------------------

#[test]
fn test_landing_on_platform_snaps_to_top() {
    let mut rig = Rig::new();
    rig.terrain = Terrain::new(
        vec![Platform::from_center_size(
            Vec3::new(0.0, 3.0, 0.0),
            Vec3::new(18.0, 4.0, 18.0),
        )],
        300.0,
    );

    let mut session = PlayerSession::new(Vec3::new(0.0, 8.0, 8.0), 2.0);
    for _ in 0..200 {
        rig.step(&mut session, &MovementInput::default(), DT);
    }

    assert!(session.player.on_ground);
    assert!(approx(session.player.position.y, 7.0));
    assert_eq!(session.player.velocity.y, 0.0);
}

#[test]
fn test_walking_off_platform_becomes_airborne() {
    let mut rig = Rig::new();
    rig.terrain = Terrain::new(
        vec![Platform::from_center_size(
            Vec3::new(0.0, 9.0, 0.0),
            Vec3::new(4.0, 2.0, 4.0),
        )],
        300.0,
    );

    let mut session = PlayerSession::new(Vec3::new(1.9, 12.0, 0.0), 2.0);
    session.player.on_ground = true;
    session.player.velocity = Vec3::new(10.0, 0.0, 0.0);
    rig.step(&mut session, &MovementInput::default(), DT);

    assert!(!session.player.on_ground);
    assert!(session.player.position.y < 12.0);
}

// -----------------------------------------------------------------------------
// Grapple
// -----------------------------------------------------------------------------

#[test]
fn test_rest_length_scales_with_hit_distance() {
    let tuning = GrappleTuning::default();
    assert!(approx(tuning.rest_length_for(20.0), 13.0));
    assert!(approx(tuning.rest_length_for(5.0), 6.0));
}

#[test]
fn test_fire_attaches_to_nearest_hit() {
    let terrain = Terrain::new(
        vec![Platform::from_center_size(
            Vec3::new(0.0, 5.0, -22.0),
            Vec3::new(4.0, 4.0, 4.0),
        )],
        300.0,
    );
    let tuning = GrappleTuning::default();
    let mut grapple = Grapple::default();

    let hit = fire_grapple(
        &mut grapple,
        &terrain,
        Vec3::new(0.0, 5.0, 0.0),
        Dir3::NEG_Z,
        &tuning,
    )
    .expect("grapple should hit the box");

    assert!(approx(hit.distance, 20.0));
    assert!(grapple.active);
    assert!(grapple.anchor.abs_diff_eq(Vec3::new(0.0, 5.0, -20.0), EPS));
    assert!(approx(grapple.rest_length, 13.0));
}

#[test]
fn test_fire_out_of_range_is_noop() {
    let terrain = Terrain::new(
        vec![Platform::from_center_size(
            Vec3::new(0.0, 5.0, -100.0),
            Vec3::new(4.0, 4.0, 4.0),
        )],
        300.0,
    );
    let mut grapple = Grapple::default();

    let hit = fire_grapple(
        &mut grapple,
        &terrain,
        Vec3::new(0.0, 5.0, 0.0),
        Dir3::NEG_Z,
        &GrappleTuning::default(),
    );

    assert!(hit.is_none());
    assert_eq!(grapple, Grapple::default());
}

#[test]
fn test_release_deactivates() {
    let mut grapple = Grapple::default();
    grapple.attach(Vec3::new(1.0, 2.0, 3.0), 6.0);
    release_grapple(&mut grapple);
    assert!(!grapple.active);

    // Releasing an idle grapple is harmless
    release_grapple(&mut grapple);
    assert!(!grapple.active);
}

#[test]
fn test_grapple_pulls_toward_anchor_and_swings() {
    let rig = Rig::new();
    let start = Vec3::new(0.0, 50.0, 0.0);
    let anchor = start + Vec3::new(0.0, 10.0, -10.0);

    let mut free = PlayerSession::new(start, 2.0);
    let mut hooked = PlayerSession::new(start, 2.0);
    hooked.grapple.attach(anchor, 6.0);

    for _ in 0..10 {
        rig.step(&mut free, &MovementInput::default(), DT);
        rig.step(&mut hooked, &MovementInput::default(), DT);
    }

    let gained = hooked.player.velocity - free.player.velocity;
    let toward_anchor = (anchor - start).normalize();
    assert!(gained.dot(toward_anchor) > 0.0);
    // Swing boost pushes sideways, perpendicular to the pull plane
    assert!(gained.x.abs() > 1e-3);
}

#[test]
fn test_grapple_dead_zone_applies_no_pull() {
    let rig = Rig::new();
    let start = Vec3::new(0.0, 50.0, 0.0);

    let mut free = PlayerSession::new(start, 2.0);
    let mut hooked = PlayerSession::new(start, 2.0);
    hooked.grapple.attach(start + Vec3::new(0.5, 0.0, 0.0), 6.0);

    rig.step(&mut free, &MovementInput::default(), DT);
    rig.step(&mut hooked, &MovementInput::default(), DT);

    assert_eq!(free.player.velocity, hooked.player.velocity);
}

#[test]
fn test_grapple_swing_may_exceed_speed_cap() {
    let rig = Rig::new();
    let mut session = PlayerSession::new(Vec3::new(0.0, 50.0, 0.0), 2.0);
    session.player.velocity = Vec3::new(0.0, 0.0, -30.0);
    session.grapple.attach(Vec3::new(0.0, 60.0, -40.0), 6.0);

    rig.step(&mut session, &MovementInput::default(), DT);
    assert!(session.player.horizontal_speed() > 18.0);

    // The cap is back the first frame after release
    release_grapple(&mut session.grapple);
    rig.step(&mut session, &MovementInput::default(), DT);
    assert!(session.player.horizontal_speed() <= 12.0 + EPS);
}

#[test]
fn test_pausing_releases_attached_grapple() {
    let mut session = PlayerSession::new(Vec3::new(0.0, 50.0, 0.0), 2.0);
    session.grapple.attach(Vec3::new(0.0, 60.0, -20.0), 6.0);

    let mut app = App::new();
    app.add_plugins(StatesPlugin)
        .init_state::<GameState>()
        .insert_resource(session)
        .add_systems(OnExit(GameState::Playing), release_grapple_on_pause);

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Playing);
    app.update();
    assert!(app.world().resource::<PlayerSession>().grapple.active);

    // Esc while the button is still held: the rope must not outlive play
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Paused);
    app.update();
    assert!(!app.world().resource::<PlayerSession>().grapple.active);
}

#[test]
fn test_rope_segment_only_while_active() {
    let mut session = PlayerSession::new(Vec3::new(0.0, 2.0, 0.0), 2.0);
    assert!(session.rope().is_none());

    session.grapple.attach(Vec3::new(0.0, 10.0, -5.0), 6.0);
    let (from, to) = session.rope().unwrap();
    assert_eq!(from, Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(to, Vec3::new(0.0, 10.0, -5.0));
}

// -----------------------------------------------------------------------------
// Look
// -----------------------------------------------------------------------------

#[test]
fn test_pitch_is_clamped() {
    let tuning = LookTuning::default();
    let mut look = LookAngles::default();

    look.apply_mouse_delta(Vec2::new(0.0, -100_000.0), &tuning);
    assert!(approx(look.pitch, FRAC_PI_2 - 0.05));

    look.apply_mouse_delta(Vec2::new(0.0, 100_000.0), &tuning);
    assert!(approx(look.pitch, -(FRAC_PI_2 - 0.05)));
}

#[test]
fn test_mouse_right_turns_yaw_negative() {
    let tuning = LookTuning::default();
    let mut look = LookAngles::default();
    look.apply_mouse_delta(Vec2::new(100.0, 0.0), &tuning);
    assert!(approx(look.yaw, -0.22));
}

#[test]
fn test_forward_matches_pitch_and_yaw() {
    let look = LookAngles::default();
    assert!(look.forward().abs_diff_eq(Vec3::NEG_Z, EPS));

    let up = LookAngles {
        yaw: 0.0,
        pitch: 0.5,
    };
    assert!(up.forward().y > 0.0);
}
