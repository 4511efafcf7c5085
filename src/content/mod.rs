//! Content domain: level configuration loaded from RON at startup.

mod data;
mod loader;


pub use data::{LevelConfig, PlayerDef, WalkAnimationDef, parse_color};
pub use loader::{ContentLoadError, load_json_file, load_level_config, parse_json};

use bevy::prelude::*;
use std::path::Path;

pub const LEVEL_CONFIG_PATH: &str = "assets/data/level.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        // Loaded during build so every Startup system can rely on the resource
        let config = match load_level_config(Path::new(LEVEL_CONFIG_PATH)) {
            Ok(config) => {
                info!("Loaded level config from {}", LEVEL_CONFIG_PATH);
                config
            }
            Err(e) => {
                warn!("{}. Using default level config", e);
                LevelConfig::default()
            }
        };

        app.insert_resource(config);
    }
}
