//! Data definitions for the level configuration file.
//!
//! These structs mirror assets/data/level.ron. Every section falls back to
//! the built-in defaults, so a partial file only overrides what it names.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Top-level config (level.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LevelConfig {
    pub assets: AssetPathsDef,
    pub world: WorldDef,
    pub player: PlayerDef,
    pub walk_animation: WalkAnimationDef,
    pub score_text: ScoreTextDef,
    /// Draw physics colliders on startup (dev-tools builds only)
    pub show_colliders: bool,
}

/// Serializable Vec2 for RON.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Vec2Def {
    pub x: f32,
    pub y: f32,
}

impl From<Vec2Def> for Vec2 {
    fn from(v: Vec2Def) -> Self {
        Vec2::new(v.x, v.y)
    }
}

// ============================================================================
// Assets
// ============================================================================

/// File locations. `map` and `player_atlas` are read from disk relative to
/// the working directory; image paths go through the AssetServer and are
/// relative to assets/.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetPathsDef {
    pub map: String,
    pub tiles: String,
    pub tile_size: u32,
    pub coin: String,
    pub player_image: String,
    pub player_atlas: String,
}

impl Default for AssetPathsDef {
    fn default() -> Self {
        Self {
            map: "assets/map.json".to_string(),
            tiles: "tiles.png".to_string(),
            tile_size: 70,
            coin: "coinGold.png".to_string(),
            player_image: "player.png".to_string(),
            player_atlas: "assets/player.json".to_string(),
        }
    }
}

// ============================================================================
// World
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WorldDef {
    /// Downward acceleration in px/s^2
    pub gravity: f32,
    pub background: String,
    pub ground_layer: String,
    pub coin_layer: String,
    /// Tile index (gid) that marks a collectible coin
    pub coin_tile_index: u32,
}

impl Default for WorldDef {
    fn default() -> Self {
        Self {
            gravity: 500.0,
            background: "#ccccff".to_string(),
            ground_layer: "World".to_string(),
            coin_layer: "Coins".to_string(),
            coin_tile_index: 17,
        }
    }
}

// ============================================================================
// Player
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerDef {
    /// Spawn point in map pixels, origin top-left, y down
    pub spawn: Vec2Def,
    /// Collider size in pixels
    pub size: Vec2Def,
    pub bounce: f32,
    pub walk_speed: f32,
    pub jump_velocity: f32,
}

impl Default for PlayerDef {
    fn default() -> Self {
        Self {
            spawn: Vec2Def { x: 200.0, y: 200.0 },
            size: Vec2Def { x: 66.0, y: 92.0 },
            bounce: 0.2,
            walk_speed: 200.0,
            jump_velocity: 500.0,
        }
    }
}

// ============================================================================
// Animation
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WalkAnimationDef {
    pub prefix: String,
    pub start: u32,
    pub end: u32,
    pub zero_pad: usize,
    pub frame_rate: f32,
    /// -1 loops forever, otherwise the number of extra plays
    pub repeat: i32,
    /// Atlas frame used for the idle pose
    pub idle_frame: String,
}

impl Default for WalkAnimationDef {
    fn default() -> Self {
        Self {
            prefix: "p1_walk".to_string(),
            start: 1,
            end: 11,
            zero_pad: 2,
            frame_rate: 10.0,
            repeat: -1,
            idle_frame: "p1_stand".to_string(),
        }
    }
}

// ============================================================================
// Score text
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoreTextDef {
    /// Screen position in pixels from the top-left corner
    pub position: Vec2Def,
    pub font_size: f32,
    pub color: String,
    pub label: String,
}

impl Default for ScoreTextDef {
    fn default() -> Self {
        Self {
            position: Vec2Def { x: 20.0, y: 570.0 },
            font_size: 20.0,
            color: "#ffffff".to_string(),
            label: "Coins".to_string(),
        }
    }
}

/// Parse a `#rrggbb` string, falling back when the config holds garbage.
pub fn parse_color(hex: &str, fallback: Color) -> Color {
    match Srgba::hex(hex) {
        Ok(color) => Color::Srgba(color),
        Err(e) => {
            warn!("Invalid color '{}': {:?}, using fallback", hex, e);
            fallback
        }
    }
}
