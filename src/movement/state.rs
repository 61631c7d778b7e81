//! Movement domain: per-session player and grapple state.

use bevy::prelude::*;

/// Kinematic state of the first-person player. `position` is the eye point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerBody {
    pub position: Vec3,
    pub velocity: Vec3,
    pub height: f32,
    pub on_ground: bool,
}

impl PlayerBody {
    pub fn new(position: Vec3, height: f32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            height,
            on_ground: false,
        }
    }

    pub fn horizontal_speed(&self) -> f32 {
        self.velocity.xz().length()
    }

    pub fn feet(&self) -> Vec3 {
        self.position - Vec3::Y * self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Grapple {
    pub active: bool,
    pub anchor: Vec3,
    pub rest_length: f32,
}

impl Grapple {
    pub fn attach(&mut self, anchor: Vec3, rest_length: f32) {
        self.active = true;
        self.anchor = anchor;
        self.rest_length = rest_length;
    }

    pub fn release(&mut self) {
        self.active = false;
    }
}

/// Everything the integrator mutates for one play session.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PlayerSession {
    pub player: PlayerBody,
    pub grapple: Grapple,
}

impl PlayerSession {
    pub fn new(spawn: Vec3, height: f32) -> Self {
        Self {
            player: PlayerBody::new(spawn, height),
            grapple: Grapple::default(),
        }
    }

    /// Rope segment from the player to the anchor while attached
    pub fn rope(&self) -> Option<(Vec3, Vec3)> {
        self.grapple
            .active
            .then_some((self.player.position, self.grapple.anchor))
    }
}

/// What happened during one integration step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepReport {
    pub jumped: bool,
    pub landed: bool,
    pub horizontal_speed: f32,
}

/// The most recent step, for HUD and debug readers.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct LastStep(pub StepReport);
