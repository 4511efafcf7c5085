//! Level domain: tile map loading, ground colliders, coins and world bounds.

mod components;
mod map;
mod spawn;

#[cfg(test)]
mod tests;

pub use components::{CoinTile, LevelTiles};
pub use map::{MapGeometry, TileCoord, TileGrid};

use bevy::prelude::*;

use crate::level::spawn::{load_level_map, spawn_level};

/// Startup ordering: everything that reads MapGeometry runs after `Load`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum LevelSet {
    Load,
    Spawn,
}

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Startup, (LevelSet::Load, LevelSet::Spawn).chain())
            .add_systems(Startup, load_level_map.in_set(LevelSet::Load))
            .add_systems(Startup, spawn_level.in_set(LevelSet::Spawn));
    }
}
