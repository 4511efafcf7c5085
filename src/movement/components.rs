//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (tiles, world floor)
    Ground,
    /// World bound walls and ceiling
    Wall,
    /// Player character
    Player,
    /// Sensors (coins) - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub on_ground: bool,
    pub facing: Facing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// The player sheet is drawn facing right.
    pub fn flip_x(self) -> bool {
        self == Facing::Left
    }
}
