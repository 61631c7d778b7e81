//! World domain: static terrain built from the world config.

mod generation;
mod platform;
mod spawn;

pub use platform::{Platform, Terrain, TerrainHit};

use bevy::prelude::*;

use crate::content::GameContent;
use crate::world::generation::{resolve_seed, scatter_platforms};
use crate::world::spawn::spawn_world_scene;

/// Seed the current layout was generated from, kept for reproducing layouts.
#[derive(Resource, Debug, Clone, Copy)]
pub struct WorldSeed(pub u64);

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (build_terrain, spawn_world_scene).chain());
    }
}

fn build_terrain(mut commands: Commands, content: Res<GameContent>) {
    let config = &content.world;
    let seed = resolve_seed(config);
    let platforms = scatter_platforms(config, seed);

    info!("World seed {} with {} platforms", seed, platforms.len());

    commands.insert_resource(Terrain::new(platforms, config.ground_size));
    commands.insert_resource(WorldSeed(seed));
}
