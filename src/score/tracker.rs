//! Score domain: coin count and per-tile collection bookkeeping.

use bevy::prelude::*;
use std::collections::HashSet;

use crate::level::TileCoord;

/// Points added per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreDelta(pub u32);

/// Outcome of deciding to collect a tile: the caller removes `remove` from
/// the world and hands the command back to `ScoreTracker::apply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectCommand {
    pub remove: TileCoord,
    pub delta: ScoreDelta,
}

/// Coins collected this scene. The count only ever grows.
#[derive(Resource, Debug, Default)]
pub struct ScoreTracker {
    count: u32,
    collected: HashSet<TileCoord>,
}

impl ScoreTracker {
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_collected(&self, coord: TileCoord) -> bool {
        self.collected.contains(&coord)
    }

    /// Decide whether touching `coord` collects it. A coordinate collects
    /// at most once.
    pub fn on_collect(&self, coord: TileCoord) -> Option<CollectCommand> {
        if self.is_collected(coord) {
            return None;
        }
        Some(CollectCommand {
            remove: coord,
            delta: ScoreDelta(1),
        })
    }

    /// Record a collection. Returns the new count.
    pub fn apply(&mut self, command: &CollectCommand) -> u32 {
        if self.collected.insert(command.remove) {
            self.count = self.count.saturating_add(command.delta.0);
        }
        self.count
    }
}
