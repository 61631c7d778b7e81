//! Movement domain: grapple targeting and release.

use bevy::prelude::*;

use crate::movement::resources::GrappleTuning;
use crate::movement::state::Grapple;
use crate::world::{Terrain, TerrainHit};

/// Cast from `origin` along `aim` and attach to the nearest terrain hit in
/// range. A miss leaves the grapple untouched.
pub fn fire_grapple(
    grapple: &mut Grapple,
    terrain: &Terrain,
    origin: Vec3,
    aim: Dir3,
    tuning: &GrappleTuning,
) -> Option<TerrainHit> {
    let hit = terrain.raycast(origin, aim, tuning.max_distance)?;
    grapple.attach(hit.point, tuning.rest_length_for(hit.distance));
    Some(hit)
}

pub fn release_grapple(grapple: &mut Grapple) {
    grapple.release();
}
