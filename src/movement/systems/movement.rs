//! Movement domain: applies controller commands to the player body.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::controller::on_tick;
use crate::movement::{MovementInput, MovementState, MovementTuning, Player};
use crate::sprites::AnimationController;

pub(crate) fn apply_player_controller(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &mut MovementState,
            &mut LinearVelocity,
            &mut Sprite,
            Option<&mut AnimationController>,
        ),
        With<Player>,
    >,
) {
    for (mut state, mut velocity, mut sprite, animation) in &mut query {
        let command = on_tick(*input, state.on_ground, &tuning);

        velocity.x = command.horizontal_velocity;

        if let Some(vy) = command.vertical_velocity {
            // Screen space to world space
            velocity.y = -vy;
            debug!("Jump: vy={}", velocity.y);
        }

        if let Some(facing) = command.facing {
            state.facing = facing;
        }
        if sprite.flip_x != state.facing.flip_x() {
            sprite.flip_x = state.facing.flip_x();
        }

        if let Some(mut animation) = animation {
            animation.play(command.animation, true);
        }
    }
}
