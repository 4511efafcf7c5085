//! Level domain: map loading and level entity spawning.

use avian2d::prelude::*;
use bevy::prelude::*;
use std::path::Path;

use crate::content::{ContentLoadError, LevelConfig, load_json_file};
use crate::level::components::{CoinTile, LevelTiles};
use crate::level::map::{MapGeometry, TiledMapDef};
use crate::movement::GameLayer;

const BOUND_THICKNESS: f32 = 70.0;

/// Read the Tiled map and publish its layers and geometry as resources.
pub(crate) fn load_level_map(mut commands: Commands, config: Res<LevelConfig>) {
    commands.insert_resource(Gravity(Vec2::NEG_Y * config.world.gravity));

    match read_level(&config) {
        Ok((geometry, tiles)) => {
            info!(
                "Loaded map {}: {}x{} tiles, {} ground, {} coins",
                config.assets.map,
                geometry.width,
                geometry.height,
                tiles.ground.iter_tiles().count(),
                tiles.coins.count_of(config.world.coin_tile_index)
            );
            commands.insert_resource(geometry);
            commands.insert_resource(tiles);
        }
        Err(e) => {
            error!("{}. Starting with an empty level", e);
            commands.insert_resource(MapGeometry::default());
            commands.insert_resource(LevelTiles::default());
        }
    }
}

pub(crate) fn read_level(
    config: &LevelConfig,
) -> Result<(MapGeometry, LevelTiles), ContentLoadError> {
    let map: TiledMapDef = load_json_file(Path::new(&config.assets.map))?;
    level_from_map(&map, config)
}

pub(crate) fn level_from_map(
    map: &TiledMapDef,
    config: &LevelConfig,
) -> Result<(MapGeometry, LevelTiles), ContentLoadError> {
    let ground = map.tile_grid(&config.world.ground_layer)?;
    let coins = map.tile_grid(&config.world.coin_layer)?;

    let (ground_first_gid, ground_sheet) = match map.tileset("tiles") {
        Some(ts) if ts.columns > 0 => (
            ts.firstgid,
            UVec2::new(ts.columns, ts.tilecount.div_ceil(ts.columns)),
        ),
        Some(ts) => (ts.firstgid, UVec2::ONE),
        None => (1, UVec2::ONE),
    };

    Ok((
        map.geometry(),
        LevelTiles {
            ground,
            coins,
            ground_first_gid,
            ground_sheet,
        },
    ))
}

pub(crate) fn spawn_level(
    mut commands: Commands,
    config: Res<LevelConfig>,
    geometry: Res<MapGeometry>,
    tiles: Res<LevelTiles>,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    let tile_size = geometry.tile_size;

    // Ground layer: every non-empty cell collides
    let sheet = asset_server.load(config.assets.tiles.clone());
    let layout = layouts.add(TextureAtlasLayout::from_grid(
        UVec2::splat(config.assets.tile_size),
        tiles.ground_sheet.x,
        tiles.ground_sheet.y,
        None,
        None,
    ));
    let sheet_len = (tiles.ground_sheet.x * tiles.ground_sheet.y) as usize;

    for (coord, gid) in tiles.ground.iter_tiles() {
        let pos = geometry.tile_center(coord);
        let index = gid.saturating_sub(tiles.ground_first_gid) as usize;

        commands.spawn((
            Sprite {
                custom_size: Some(tile_size),
                ..Sprite::from_atlas_image(
                    sheet.clone(),
                    TextureAtlas {
                        layout: layout.clone(),
                        index: index.min(sheet_len.saturating_sub(1)),
                    },
                )
            },
            Transform::from_xyz(pos.x, pos.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(tile_size.x, tile_size.y),
            CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
        ));
    }

    // Coin layer: sensors only, collected on overlap
    let coin_image = asset_server.load(config.assets.coin.clone());
    let mut coin_count = 0;
    for (coord, gid) in tiles.coins.iter_tiles() {
        if gid != config.world.coin_tile_index {
            continue;
        }
        let pos = geometry.tile_center(coord);

        commands.spawn((
            CoinTile { coord },
            Sprite {
                image: coin_image.clone(),
                custom_size: Some(tile_size),
                ..default()
            },
            Transform::from_xyz(pos.x, pos.y, 0.5),
            Collider::rectangle(tile_size.x, tile_size.y),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        ));
        coin_count += 1;
    }

    spawn_world_bounds(&mut commands, geometry.bounds());

    info!(
        "Spawned level: {} coins, bounds {:?}",
        coin_count,
        geometry.bounds()
    );
}

/// One world-bound wall: centre, size and collision layer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BoundWall {
    pub center: Vec2,
    pub size: Vec2,
    pub layer: GameLayer,
}

/// Four walls hugging the map rectangle from outside. The floor is ground,
/// so standing on the map's bottom edge counts as grounded.
pub(crate) fn world_bound_walls(bounds: Rect) -> [BoundWall; 4] {
    let size = bounds.size();
    let center = bounds.center();
    let half = BOUND_THICKNESS / 2.0;
    let span = size.x + 2.0 * BOUND_THICKNESS;

    [
        // Floor
        BoundWall {
            center: Vec2::new(center.x, bounds.min.y - half),
            size: Vec2::new(span, BOUND_THICKNESS),
            layer: GameLayer::Ground,
        },
        // Ceiling
        BoundWall {
            center: Vec2::new(center.x, bounds.max.y + half),
            size: Vec2::new(span, BOUND_THICKNESS),
            layer: GameLayer::Wall,
        },
        // Left
        BoundWall {
            center: Vec2::new(bounds.min.x - half, center.y),
            size: Vec2::new(BOUND_THICKNESS, size.y),
            layer: GameLayer::Wall,
        },
        // Right
        BoundWall {
            center: Vec2::new(bounds.max.x + half, center.y),
            size: Vec2::new(BOUND_THICKNESS, size.y),
            layer: GameLayer::Wall,
        },
    ]
}

fn spawn_world_bounds(commands: &mut Commands, bounds: Rect) {
    for wall in world_bound_walls(bounds) {
        commands.spawn((
            Transform::from_xyz(wall.center.x, wall.center.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(wall.size.x, wall.size.y),
            CollisionLayers::new(wall.layer, [GameLayer::Player]),
        ));
    }
}
