//! Data definitions for the RON tuning files.
//!
//! These structs mirror assets/data/*.ron. Every field has a default so a
//! missing or partial file still yields a playable setup.

use serde::{Deserialize, Serialize};

// ============================================================================
// Movement (movement.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementFile {
    pub schema_version: u32,
    pub locomotion: LocomotionDef,
    pub grapple: GrappleDef,
    pub look: LookDef,
}

impl Default for MovementFile {
    fn default() -> Self {
        Self {
            schema_version: 1,
            locomotion: LocomotionDef::default(),
            grapple: GrappleDef::default(),
            look: LookDef::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionDef {
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub walk_accel: f32,
    pub sprint_accel: f32,
    pub ground_friction: f32,
    pub air_friction: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub standing_height: f32,
    pub max_frame_delta: f32,
}

impl Default for LocomotionDef {
    fn default() -> Self {
        Self {
            walk_speed: 12.0,
            sprint_speed: 18.0,
            walk_accel: 26.0,
            sprint_accel: 38.0,
            ground_friction: 10.0,
            air_friction: 2.5,
            gravity: 28.0,
            jump_velocity: 12.0,
            standing_height: 2.0,
            max_frame_delta: 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GrappleDef {
    pub strength: f32,
    pub max_distance: f32,
    pub min_rest_length: f32,
    pub rest_length_ratio: f32,
    pub dead_zone: f32,
    pub baseline_pull: f32,
    pub swing_boost: f32,
}

impl Default for GrappleDef {
    fn default() -> Self {
        Self {
            strength: 45.0,
            max_distance: 80.0,
            min_rest_length: 6.0,
            rest_length_ratio: 0.65,
            dead_zone: 1.0,
            baseline_pull: 12.0,
            swing_boost: 0.25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LookDef {
    pub sensitivity: f32,
    /// Distance (radians) kept between the pitch limit and straight up/down
    pub pitch_margin: f32,
}

impl Default for LookDef {
    fn default() -> Self {
        Self {
            sensitivity: 0.0022,
            pitch_margin: 0.05,
        }
    }
}

// ============================================================================
// World (world.ron)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct RangeDef {
    pub min: f32,
    pub max: f32,
}

impl RangeDef {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WorldFile {
    pub schema_version: u32,
    /// Scatter seed; 0 picks a fresh random seed every launch
    pub seed: u64,
    pub platform_count: u32,
    pub ring_radius: RangeDef,
    pub platform_width: RangeDef,
    pub platform_depth: RangeDef,
    pub platform_height: RangeDef,
    pub platform_lift: RangeDef,
    pub position_jitter: f32,
    pub ground_size: f32,
    pub spawn_platform: SpawnPlatformDef,
    pub player_spawn: [f32; 3],
}

impl Default for WorldFile {
    fn default() -> Self {
        Self {
            schema_version: 1,
            seed: 0,
            platform_count: 45,
            ring_radius: RangeDef::new(25.0, 110.0),
            platform_width: RangeDef::new(6.0, 18.0),
            platform_depth: RangeDef::new(6.0, 18.0),
            platform_height: RangeDef::new(2.0, 10.0),
            platform_lift: RangeDef::new(2.0, 18.0),
            position_jitter: 8.0,
            ground_size: 300.0,
            spawn_platform: SpawnPlatformDef::default(),
            player_spawn: [0.0, 8.0, 8.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SpawnPlatformDef {
    pub center: [f32; 3],
    pub size: [f32; 3],
}

impl Default for SpawnPlatformDef {
    fn default() -> Self {
        Self {
            center: [0.0, 3.0, 0.0],
            size: [18.0, 4.0, 18.0],
        }
    }
}
