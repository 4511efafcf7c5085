//! Movement domain: player bootstrap from the level config.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::LevelConfig;
use crate::level::MapGeometry;
use crate::movement::{GameLayer, MovementState, MovementTuning, Player};
use crate::sprites::{AnimationController, AnimationState, PlayerAtlas};

/// Spawn the player body at the configured map position.
/// Runs after the map and atlas are loaded.
pub(crate) fn spawn_player(
    mut commands: Commands,
    config: Res<LevelConfig>,
    geometry: Res<MapGeometry>,
    atlas: Option<Res<PlayerAtlas>>,
    existing_player: Query<Entity, With<Player>>,
    mut tuning: ResMut<MovementTuning>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let def = &config.player;
    *tuning = MovementTuning::from(def);

    let size = Vec2::from(def.size);
    let spawn = geometry.map_to_world(def.spawn.into());

    info!(
        "Spawning player at {:?} (map {:?}): walk_speed={}, jump_velocity={}, bounce={}",
        spawn,
        Vec2::from(def.spawn),
        tuning.walk_speed,
        tuning.jump_velocity,
        def.bounce
    );

    let mut player = commands.spawn((
        Player,
        MovementState::default(),
        Transform::from_xyz(spawn.x, spawn.y, 1.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(size.x, size.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Restitution::new(def.bounce),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Wall, GameLayer::Sensor],
            ),
        ),
    ));

    match atlas {
        Some(atlas) => {
            let index = atlas
                .frame_index(&config.walk_animation.idle_frame)
                .unwrap_or(0);
            player.insert((
                Sprite {
                    custom_size: Some(size),
                    ..Sprite::from_atlas_image(atlas.image.clone(), atlas.texture_atlas(index))
                },
                AnimationController::new(AnimationState::Idle),
            ));
        }
        None => {
            warn!("Player atlas not available, drawing player as a rectangle");
            player.insert(Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(size),
                ..default()
            });
        }
    }
}
