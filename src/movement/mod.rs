//! Movement domain: player spawning, input sampling and the player controller.

mod bootstrap;
mod components;
mod controller;
mod resources;
mod systems;


pub use components::{Facing, GameLayer, MovementState, Player};
pub use controller::{PlayerCommand, PlayerState, on_tick};
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::level::LevelSet;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{apply_player_controller, detect_ground, read_input};

/// Frame ordering for player motion. Systems that react to the player's
/// new state (camera follow, animation frames) run after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerControlSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, spawn_player.in_set(LevelSet::Spawn))
            .add_systems(
                Update,
                (read_input, detect_ground, apply_player_controller)
                    .chain()
                    .in_set(PlayerControlSet),
            );
    }
}
