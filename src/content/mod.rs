//! Content domain: RON tuning files loaded before the world is built.

mod data;
mod loader;
mod validation;

pub use data::{GrappleDef, LocomotionDef, LookDef, MovementFile, RangeDef, WorldFile};

use bevy::prelude::*;
use std::path::Path;

use crate::content::loader::load_all_content;
use crate::content::validation::{validate_movement, validate_world};

pub const CONTENT_DIR: &str = "assets/data";

/// Tuning data for the session. Always present after `PreStartup`; falls back
/// to built-in defaults for any file that is missing or invalid.
#[derive(Resource, Debug, Clone, Default)]
pub struct GameContent {
    pub movement: MovementFile,
    pub world: WorldFile,
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_content);
    }
}

fn load_content(mut commands: Commands) {
    commands.insert_resource(load_game_content(Path::new(CONTENT_DIR)));
}

pub(crate) fn load_game_content(base_path: &Path) -> GameContent {
    let (mut movement, mut world, load_errors) = load_all_content(base_path);

    for error in &load_errors {
        warn!("{}; using defaults", error);
    }

    let movement_errors = validate_movement(&movement);
    if !movement_errors.is_empty() {
        for error in &movement_errors {
            error!("Invalid movement tuning: {}", error);
        }
        warn!("Falling back to default movement tuning");
        movement = MovementFile::default();
    }

    let world_errors = validate_world(&world);
    if !world_errors.is_empty() {
        for error in &world_errors {
            error!("Invalid world config: {}", error);
        }
        warn!("Falling back to default world config");
        world = WorldFile::default();
    }

    info!(
        "Content loaded: walk={}, sprint={}, grapple_range={}, platforms={}",
        movement.locomotion.walk_speed,
        movement.locomotion.sprint_speed,
        movement.grapple.max_distance,
        world.platform_count
    );

    GameContent { movement, world }
}
