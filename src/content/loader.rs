//! Loader for RON and JSON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::LevelConfig;

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

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse a level config from RON text.
pub fn parse_level_config(file: &str, contents: &str) -> Result<LevelConfig, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load assets/data/level.ron (or any other path) into a LevelConfig.
pub fn load_level_config(path: &Path) -> Result<LevelConfig, ContentLoadError> {
    let contents = read_file(path)?;
    parse_level_config(&path.display().to_string(), &contents)
}

/// Parse JSON text into any deserializable type.
pub fn parse_json<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    serde_json::from_str(contents).map_err(|e| ContentLoadError {
        file: file.to_string(),
        message: format!("Parse error: {}", e),
    })
}

/// Load a JSON file (tile map, atlas metadata) from disk.
pub fn load_json_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read_file(path)?;
    parse_json(&path.display().to_string(), &contents)
}
