//! Level domain: tests for map parsing, tile grids and geometry.

use bevy::prelude::*;

use super::map::{MapGeometry, TileCoord, TileGrid, TiledMapDef};
use super::spawn::{level_from_map, world_bound_walls};
use crate::content::{LevelConfig, parse_json};
use crate::movement::GameLayer;

/// 4x3 map: ground along the bottom row, two coins on the middle row.
const MAP_JSON: &str = r#"{
    "width": 4,
    "height": 3,
    "tilewidth": 70,
    "tileheight": 70,
    "layers": [
        { "name": "World", "type": "tilelayer", "width": 4, "height": 3,
          "data": [0, 0, 0, 0,
                   0, 0, 0, 0,
                   1, 2, 2, 3] },
        { "name": "Coins", "type": "tilelayer", "width": 4, "height": 3,
          "data": [0, 0, 0, 0,
                   0, 17, 0, 17,
                   0, 0, 0, 0] },
        { "name": "Spawns", "type": "objectgroup" }
    ],
    "tilesets": [
        { "firstgid": 1, "name": "tiles", "columns": 4, "tilecount": 16 },
        { "firstgid": 17, "name": "coin", "columns": 1, "tilecount": 1 }
    ]
}"#;

fn test_map() -> TiledMapDef {
    parse_json("map.json", MAP_JSON).expect("fixture map should parse")
}

// -----------------------------------------------------------------------------
// Map parsing
// -----------------------------------------------------------------------------

#[test]
fn test_parse_tiled_map() {
    let map = test_map();
    assert_eq!(map.width, 4);
    assert_eq!(map.layers.len(), 3);
    assert!(map.layer("World").is_some());
    assert!(map.layer("Spawns").is_none(), "object groups are not tile layers");
    assert_eq!(map.tileset("coin").map(|t| t.firstgid), Some(17));
}

#[test]
fn test_level_from_map_uses_configured_layers() {
    let config = LevelConfig::default();
    let (geometry, tiles) = level_from_map(&test_map(), &config).expect("level should build");

    assert_eq!(geometry.size_px(), Vec2::new(280.0, 210.0));
    assert_eq!(tiles.ground.iter_tiles().count(), 4);
    assert_eq!(tiles.coins.count_of(17), 2);
    assert_eq!(tiles.ground_first_gid, 1);
    assert_eq!(tiles.ground_sheet, UVec2::new(4, 4));
}

#[test]
fn test_missing_layer_is_an_error() {
    let mut config = LevelConfig::default();
    config.world.coin_layer = "Gems".to_string();

    let err = level_from_map(&test_map(), &config).expect_err("missing layer should fail");
    assert!(err.message.contains("Gems"));
}

// -----------------------------------------------------------------------------
// TileGrid
// -----------------------------------------------------------------------------

#[test]
fn test_tile_grid_rejects_wrong_length() {
    assert!(TileGrid::from_gids(2, 2, &[1, 2, 3]).is_err());
}

#[test]
fn test_tile_grid_lookup() {
    let grid = TileGrid::from_gids(3, 2, &[0, 5, 0, 7, 0, 0]).unwrap();
    assert_eq!(grid.tile_at(TileCoord::new(1, 0)), Some(5));
    assert_eq!(grid.tile_at(TileCoord::new(0, 1)), Some(7));
    assert_eq!(grid.tile_at(TileCoord::new(0, 0)), None);
    // Out of bounds reads as empty
    assert_eq!(grid.tile_at(TileCoord::new(3, 0)), None);
}

#[test]
fn test_remove_tile_at_is_permanent() {
    let mut grid = TileGrid::from_gids(2, 1, &[17, 17]).unwrap();

    assert_eq!(grid.remove_tile_at(TileCoord::new(0, 0)), Some(17));
    assert_eq!(grid.remove_tile_at(TileCoord::new(0, 0)), None);
    assert_eq!(grid.tile_at(TileCoord::new(0, 0)), None);
    assert_eq!(grid.count_of(17), 1);
}

#[test]
fn test_iter_tiles_row_major() {
    let grid = TileGrid::from_gids(2, 2, &[0, 4, 9, 0]).unwrap();
    let tiles: Vec<_> = grid.iter_tiles().collect();
    assert_eq!(
        tiles,
        vec![(TileCoord::new(1, 0), 4), (TileCoord::new(0, 1), 9)]
    );
}

#[test]
fn test_flipped_gids_keep_their_tile() {
    // Horizontal flip on a coin, all three flags on a ground tile
    let grid = TileGrid::from_gids(3, 1, &[0x8000_0011, 0xE000_0002, 0]).unwrap();

    assert_eq!(grid.tile_at(TileCoord::new(0, 0)), Some(17));
    assert_eq!(grid.tile_at(TileCoord::new(1, 0)), Some(2));
    assert_eq!(grid.count_of(17), 1);
}

#[test]
fn test_flag_only_gid_is_empty() {
    let grid = TileGrid::from_gids(1, 1, &[0x4000_0000]).unwrap();
    assert_eq!(grid.tile_at(TileCoord::new(0, 0)), None);
    assert_eq!(grid.iter_tiles().count(), 0);
}

// -----------------------------------------------------------------------------
// Geometry
// -----------------------------------------------------------------------------

#[test]
fn test_tile_center_flips_rows() {
    let geometry = MapGeometry {
        width: 4,
        height: 3,
        tile_size: Vec2::splat(70.0),
    };

    // Top-left tile sits at the top of world space
    assert_eq!(geometry.tile_center(TileCoord::new(0, 0)), Vec2::new(35.0, 175.0));
    // Bottom-right tile sits at the bottom
    assert_eq!(geometry.tile_center(TileCoord::new(3, 2)), Vec2::new(245.0, 35.0));
}

#[test]
fn test_map_to_world() {
    let geometry = MapGeometry {
        width: 10,
        height: 10,
        tile_size: Vec2::splat(70.0),
    };
    assert_eq!(
        geometry.map_to_world(Vec2::new(200.0, 200.0)),
        Vec2::new(200.0, 500.0)
    );
    assert_eq!(geometry.bounds(), Rect::new(0.0, 0.0, 700.0, 700.0));
}

#[test]
fn test_shipped_map_builds() {
    let map: TiledMapDef =
        parse_json("map.json", include_str!("../../assets/map.json")).expect("map should parse");
    let (geometry, tiles) =
        level_from_map(&map, &LevelConfig::default()).expect("level should build");

    assert_eq!(geometry.size_px(), Vec2::new(2800.0, 840.0));
    assert_eq!(tiles.coins.count_of(17), 26);
    // Every coin sits on an empty ground cell
    for (coord, _) in tiles.coins.iter_tiles() {
        assert_eq!(tiles.ground.tile_at(coord), None, "coin at {} overlaps ground", coord);
    }
}

#[test]
fn test_world_bound_walls_enclose_map() {
    let bounds = Rect::new(0.0, 0.0, 700.0, 350.0);
    let [floor, ceiling, left, right] = world_bound_walls(bounds);

    // Only the floor counts as ground for jumping
    assert!(matches!(floor.layer, GameLayer::Ground));
    for wall in [ceiling, left, right] {
        assert!(matches!(wall.layer, GameLayer::Wall));
    }

    // Each wall's inner face is flush with the map edge
    assert_eq!(floor.center.y + floor.size.y / 2.0, bounds.min.y);
    assert_eq!(ceiling.center.y - ceiling.size.y / 2.0, bounds.max.y);
    assert_eq!(left.center.x + left.size.x / 2.0, bounds.min.x);
    assert_eq!(right.center.x - right.size.x / 2.0, bounds.max.x);

    // Floor and ceiling reach past the side walls so corners are closed
    assert!(floor.size.x >= bounds.width() + left.size.x + right.size.x);
    assert_eq!(left.size.y, bounds.height());
}
