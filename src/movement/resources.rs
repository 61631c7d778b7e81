//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::content::{GrappleDef, LocomotionDef, LookDef};

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub walk_accel: f32,
    pub sprint_accel: f32,
    /// Exponential decay rate of horizontal velocity (1/s) while grounded
    pub ground_friction: f32,
    pub air_friction: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    /// Eye height above whatever the player stands on
    pub standing_height: f32,
    /// Upper bound on a single integration step
    pub max_frame_delta: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self::from(&LocomotionDef::default())
    }
}

impl From<&LocomotionDef> for MovementTuning {
    fn from(def: &LocomotionDef) -> Self {
        Self {
            walk_speed: def.walk_speed,
            sprint_speed: def.sprint_speed,
            walk_accel: def.walk_accel,
            sprint_accel: def.sprint_accel,
            ground_friction: def.ground_friction,
            air_friction: def.air_friction,
            gravity: def.gravity,
            jump_velocity: def.jump_velocity,
            standing_height: def.standing_height,
            max_frame_delta: def.max_frame_delta,
        }
    }
}

impl MovementTuning {
    pub fn speed_cap(&self, sprinting: bool) -> f32 {
        if sprinting {
            self.sprint_speed
        } else {
            self.walk_speed
        }
    }

    pub fn acceleration(&self, sprinting: bool) -> f32 {
        if sprinting {
            self.sprint_accel
        } else {
            self.walk_accel
        }
    }

    pub fn friction(&self, on_ground: bool) -> f32 {
        if on_ground {
            self.ground_friction
        } else {
            self.air_friction
        }
    }

    /// Apex height of a jump from flat ground: h = v² / (2g)
    pub fn jump_height(&self) -> f32 {
        self.jump_velocity * self.jump_velocity / (2.0 * self.gravity)
    }
}

#[derive(Resource, Debug, Clone)]
pub struct GrappleTuning {
    /// Pull gained per unit of rope stretch, normalised by `max_distance`
    pub strength: f32,
    pub max_distance: f32,
    pub min_rest_length: f32,
    /// Fraction of the hit distance kept as rope length on attach
    pub rest_length_ratio: f32,
    /// No pull is applied closer than this to the anchor
    pub dead_zone: f32,
    /// Constant pull applied even with a slack rope
    pub baseline_pull: f32,
    /// Scale of the sideways boost relative to the horizontal pull
    pub swing_boost: f32,
}

impl Default for GrappleTuning {
    fn default() -> Self {
        Self::from(&GrappleDef::default())
    }
}

impl From<&GrappleDef> for GrappleTuning {
    fn from(def: &GrappleDef) -> Self {
        Self {
            strength: def.strength,
            max_distance: def.max_distance,
            min_rest_length: def.min_rest_length,
            rest_length_ratio: def.rest_length_ratio,
            dead_zone: def.dead_zone,
            baseline_pull: def.baseline_pull,
            swing_boost: def.swing_boost,
        }
    }
}

impl GrappleTuning {
    /// Rope length for an anchor hit at `hit_distance`. Shorter than the
    /// cast so the rope is already taut when it attaches.
    pub fn rest_length_for(&self, hit_distance: f32) -> f32 {
        (hit_distance * self.rest_length_ratio).max(self.min_rest_length)
    }

    /// Pull acceleration magnitude for a rope stretched `stretch` past rest.
    pub fn pull_for(&self, stretch: f32) -> f32 {
        self.strength * (stretch.max(0.0) / self.max_distance) + self.baseline_pull
    }
}

#[derive(Resource, Debug, Clone)]
pub struct LookTuning {
    pub sensitivity: f32,
    pub pitch_limit: f32,
}

impl Default for LookTuning {
    fn default() -> Self {
        Self::from(&LookDef::default())
    }
}

impl From<&LookDef> for LookTuning {
    fn from(def: &LookDef) -> Self {
        Self {
            sensitivity: def.sensitivity,
            pitch_limit: FRAC_PI_2 - def.pitch_margin,
        }
    }
}

/// Held-key flags sampled once per frame. Last write wins.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovementInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
    pub jump: bool,
}

/// Camera orientation in radians.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct LookAngles {
    pub yaw: f32,
    pub pitch: f32,
}

impl LookAngles {
    /// Apply a pointer delta in pixels, keeping pitch short of straight up/down.
    pub fn apply_mouse_delta(&mut self, delta: Vec2, tuning: &LookTuning) {
        self.yaw -= delta.x * tuning.sensitivity;
        self.pitch = (self.pitch - delta.y * tuning.sensitivity)
            .clamp(-tuning.pitch_limit, tuning.pitch_limit);
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Camera forward direction (-Z rotated by yaw then pitch)
    pub fn forward(&self) -> Dir3 {
        Dir3::new(self.rotation() * Vec3::NEG_Z).unwrap_or(Dir3::NEG_Z)
    }
}
