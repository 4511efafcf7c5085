//! Core domain: window size and camera.

mod camera;


pub use camera::{CameraBounds, clamp_camera};

use bevy::prelude::*;

use crate::core::camera::{follow_player, setup_camera};
use crate::level::LevelSet;
use crate::movement::PlayerControlSet;

/// Window and camera view size in pixels.
pub const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera.in_set(LevelSet::Spawn))
            .add_systems(Update, follow_player.after(PlayerControlSet));
    }
}
