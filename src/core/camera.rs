//! Core domain: camera setup, world bounds and player follow.

use bevy::prelude::*;

use crate::content::{LevelConfig, parse_color};
use crate::core::VIEWPORT;
use crate::level::MapGeometry;
use crate::movement::Player;

/// World-space rectangle the camera view must stay inside.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraBounds(pub Rect);

/// Centre the view on `target` without showing anything outside `bounds`.
/// On an axis where the bounds are smaller than the view, centre on the bounds.
pub fn clamp_camera(target: Vec2, bounds: Rect, view: Vec2) -> Vec2 {
    let half = view / 2.0;
    let clamp_axis = |value: f32, min: f32, max: f32, half: f32| {
        if max - min <= half * 2.0 {
            (min + max) / 2.0
        } else {
            value.clamp(min + half, max - half)
        }
    };

    Vec2::new(
        clamp_axis(target.x, bounds.min.x, bounds.max.x, half.x),
        clamp_axis(target.y, bounds.min.y, bounds.max.y, half.y),
    )
}

pub(crate) fn setup_camera(
    mut commands: Commands,
    config: Res<LevelConfig>,
    geometry: Res<MapGeometry>,
) {
    // Sky color so the background is not black
    commands.insert_resource(ClearColor(parse_color(
        &config.world.background,
        Color::srgb(0.8, 0.8, 1.0),
    )));

    let bounds = geometry.bounds();
    commands.insert_resource(CameraBounds(bounds));

    let start = clamp_camera(
        geometry.map_to_world(config.player.spawn.into()),
        bounds,
        VIEWPORT,
    );
    commands.spawn((Camera2d, Transform::from_xyz(start.x, start.y, 0.0)));
}

pub(crate) fn follow_player(
    bounds: Option<Res<CameraBounds>>,
    player_query: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    let Some(bounds) = bounds else {
        return;
    };
    let Ok(player) = player_query.single() else {
        return;
    };

    let target = clamp_camera(player.translation.truncate(), bounds.0, VIEWPORT);
    for mut camera in &mut camera_query {
        camera.translation.x = target.x;
        camera.translation.y = target.y;
    }
}
