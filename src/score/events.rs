//! Score domain: coin contact events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::level::TileCoord;

/// Event fired when the player's collider starts overlapping a coin sensor
#[derive(Debug)]
pub struct CoinTouchedEvent {
    pub coin: Entity,
    pub coord: TileCoord,
}

impl Message for CoinTouchedEvent {}
