//! World domain: seeded platform scatter.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f32::consts::TAU;

use crate::content::{RangeDef, WorldFile};
use crate::world::platform::Platform;

fn roll(rng: &mut ChaCha8Rng, range: RangeDef) -> f32 {
    rng.random_range(range.min..range.max)
}

/// Scatter `platform_count` boxes on a jittered ring around the origin, then
/// append the spawn platform last.
pub fn scatter_platforms(config: &WorldFile, seed: u64) -> Vec<Platform> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let count = config.platform_count;
    let jitter = config.position_jitter;
    let mut platforms = Vec::with_capacity(count as usize + 1);

    for i in 0..count {
        let width = roll(&mut rng, config.platform_width);
        let depth = roll(&mut rng, config.platform_depth);
        let height = roll(&mut rng, config.platform_height);
        let angle = (i as f32 / count as f32) * TAU;
        let radius = roll(&mut rng, config.ring_radius);

        let jitter_x = if jitter > 0.0 {
            rng.random_range(-jitter..jitter)
        } else {
            0.0
        };
        let lift = roll(&mut rng, config.platform_lift);
        let jitter_z = if jitter > 0.0 {
            rng.random_range(-jitter..jitter)
        } else {
            0.0
        };

        let center = Vec3::new(
            angle.cos() * radius + jitter_x,
            height * 0.5 + lift,
            angle.sin() * radius + jitter_z,
        );
        platforms.push(Platform::from_center_size(
            center,
            Vec3::new(width, height, depth),
        ));
    }

    platforms.push(Platform::from_center_size(
        Vec3::from_array(config.spawn_platform.center),
        Vec3::from_array(config.spawn_platform.size),
    ));

    platforms
}

/// Resolve the configured seed, rolling a fresh one when it is zero.
pub fn resolve_seed(config: &WorldFile) -> u64 {
    if config.seed == 0 {
        rand::rng().random()
    } else {
        config.seed
    }
}
