//! Movement domain: per-frame mapping from key state to player commands.
//!
//! Velocities here use screen orientation (y grows downward, so a jump is
//! negative). Systems convert to world space when writing `LinearVelocity`.

use crate::movement::{Facing, MovementInput, MovementTuning};
use crate::sprites::AnimationState;

/// What the player body should do this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerCommand {
    pub horizontal_velocity: f32,
    /// Set only on the frame a jump starts; `None` leaves vertical motion to physics
    pub vertical_velocity: Option<f32>,
    pub animation: AnimationState,
    /// `None` keeps the current facing
    pub facing: Option<Facing>,
}

/// Left beats right; jump needs ground contact.
pub fn on_tick(input: MovementInput, grounded: bool, tuning: &MovementTuning) -> PlayerCommand {
    let (horizontal_velocity, animation, facing) = if input.left {
        (-tuning.walk_speed, AnimationState::Walk, Some(Facing::Left))
    } else if input.right {
        (tuning.walk_speed, AnimationState::Walk, Some(Facing::Right))
    } else {
        (0.0, AnimationState::Idle, None)
    };

    let vertical_velocity = (input.jump && grounded).then_some(-tuning.jump_velocity);

    PlayerCommand {
        horizontal_velocity,
        vertical_velocity,
        animation,
        facing,
    }
}

/// Snapshot of the controlled body, as the controller sees it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerState {
    pub horizontal_velocity: f32,
    pub vertical_velocity: f32,
    pub facing: Facing,
    pub animation: AnimationState,
    pub grounded: bool,
}

impl PlayerState {
    pub fn apply(&mut self, command: &PlayerCommand) {
        self.horizontal_velocity = command.horizontal_velocity;
        if let Some(vy) = command.vertical_velocity {
            self.vertical_velocity = vy;
        }
        if let Some(facing) = command.facing {
            self.facing = facing;
        }
        self.animation = command.animation;
    }

    /// Run one controller tick against this state. `grounded` is owned by
    /// physics and is left untouched.
    pub fn step(&self, input: MovementInput, tuning: &MovementTuning) -> PlayerState {
        let mut next = *self;
        next.apply(&on_tick(input, self.grounded, tuning));
        next
    }
}
