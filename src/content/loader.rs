//! Loader for RON tuning files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;

pub const MOVEMENT_FILE: &str = "movement.ron";
pub const WORLD_FILE: &str = "world.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct from text. `file` only labels errors.
pub fn parse_single<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct from disk.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_single(&file_name, &contents)
}

/// Load every tuning file under `base_path`.
/// Files that fail to load are replaced by defaults and reported in the error list.
pub fn load_all_content(base_path: &Path) -> (MovementFile, WorldFile, Vec<ContentLoadError>) {
    let mut errors = Vec::new();

    let movement = load_single_file::<MovementFile>(&base_path.join(MOVEMENT_FILE))
        .unwrap_or_else(|e| {
            errors.push(e);
            MovementFile::default()
        });

    let world = load_single_file::<WorldFile>(&base_path.join(WORLD_FILE)).unwrap_or_else(|e| {
        errors.push(e);
        WorldFile::default()
    });

    (movement, world, errors)
}
