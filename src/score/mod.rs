//! Score domain: coin collection and the scene's coin count.

mod events;
mod systems;
mod tracker;


pub use events::CoinTouchedEvent;
pub use tracker::{CollectCommand, ScoreDelta, ScoreTracker};

use bevy::prelude::*;

use crate::score::systems::{collect_coins, detect_coin_overlaps};

/// Frame ordering for coin collection. Readers of the count (the score
/// text) run after this set so they see this frame's collections.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoreSet;

pub struct ScorePlugin;

impl Plugin for ScorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScoreTracker>()
            .add_message::<CoinTouchedEvent>()
            .add_systems(
                Update,
                (detect_coin_overlaps, collect_coins)
                    .chain()
                    .in_set(ScoreSet),
            );
    }
}
