//! Score domain: overlap detection and coin collection systems.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::level::{CoinTile, LevelTiles};
use crate::movement::Player;
use crate::score::events::CoinTouchedEvent;
use crate::score::tracker::ScoreTracker;

/// Turn player/coin collision starts into coin touch events
pub(crate) fn detect_coin_overlaps(
    mut collision_events: MessageReader<CollisionStart>,
    mut touched_events: MessageWriter<CoinTouchedEvent>,
    player_query: Query<(), With<Player>>,
    coin_query: Query<&CoinTile>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, coin_entity) in pairs {
            if !player_query.contains(player_entity) {
                continue;
            }
            let Ok(coin) = coin_query.get(coin_entity) else {
                continue;
            };

            touched_events.write(CoinTouchedEvent {
                coin: coin_entity,
                coord: coin.coord,
            });
        }
    }
}

/// Remove touched coins from the level and count them
pub(crate) fn collect_coins(
    mut commands: Commands,
    mut touched_events: MessageReader<CoinTouchedEvent>,
    mut tracker: ResMut<ScoreTracker>,
    mut tiles: ResMut<LevelTiles>,
) {
    for event in touched_events.read() {
        let Some(command) = tracker.on_collect(event.coord) else {
            debug!("Coin at {} already collected, ignoring", event.coord);
            continue;
        };

        tiles.coins.remove_tile_at(command.remove);
        commands.entity(event.coin).despawn();
        let total = tracker.apply(&command);

        info!("Collected coin at {}. Total: {}", command.remove, total);
    }
}
