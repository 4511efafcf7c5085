//! Level domain: components and resources for the loaded tile layers.

use bevy::prelude::*;

use crate::level::map::{TileCoord, TileGrid};

/// A collectible coin cell on the coin layer
#[derive(Component, Debug, Clone, Copy)]
pub struct CoinTile {
    pub coord: TileCoord,
}

/// Live tile layers of the current level. The coin grid loses cells as
/// coins are collected.
#[derive(Resource, Debug, Default)]
pub struct LevelTiles {
    pub ground: TileGrid,
    pub coins: TileGrid,
    /// First gid of the ground tileset, used to index the sprite sheet
    pub ground_first_gid: u32,
    /// Sprite sheet grid (columns, rows)
    pub ground_sheet: UVec2,
}
