//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::content::PlayerDef;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MovementTuning {
    pub walk_speed: f32,
    /// Upward take-off speed, in px/s
    pub jump_velocity: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walk_speed: 200.0,
            jump_velocity: 500.0,
        }
    }
}

impl From<&PlayerDef> for MovementTuning {
    fn from(def: &PlayerDef) -> Self {
        Self {
            walk_speed: def.walk_speed,
            jump_velocity: def.jump_velocity,
        }
    }
}

/// Key state sampled once per frame. Jump is set by either Up or Space.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovementInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}
