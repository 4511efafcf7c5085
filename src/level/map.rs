//! Level domain: Tiled JSON map model, tile grids and map geometry.

use bevy::prelude::*;
use serde::Deserialize;

use crate::content::ContentLoadError;

/// Raw Tiled map (JSON export).
#[derive(Debug, Clone, Deserialize)]
pub struct TiledMapDef {
    pub width: u32,
    pub height: u32,
    pub tilewidth: u32,
    pub tileheight: u32,
    pub layers: Vec<TiledLayerDef>,
    #[serde(default)]
    pub tilesets: Vec<TiledTilesetDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TiledLayerDef {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub data: Vec<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TiledTilesetDef {
    pub firstgid: u32,
    pub name: String,
    #[serde(default)]
    pub columns: u32,
    #[serde(default)]
    pub tilecount: u32,
}

impl TiledMapDef {
    pub fn layer(&self, name: &str) -> Option<&TiledLayerDef> {
        self.layers
            .iter()
            .find(|l| l.name == name && l.kind == "tilelayer")
    }

    pub fn tileset(&self, name: &str) -> Option<&TiledTilesetDef> {
        self.tilesets.iter().find(|t| t.name == name)
    }

    pub fn geometry(&self) -> MapGeometry {
        MapGeometry {
            width: self.width,
            height: self.height,
            tile_size: Vec2::new(self.tilewidth as f32, self.tileheight as f32),
        }
    }

    /// Build the grid for a named tile layer.
    pub fn tile_grid(&self, name: &str) -> Result<TileGrid, ContentLoadError> {
        let layer = self.layer(name).ok_or_else(|| ContentLoadError {
            file: "map".to_string(),
            message: format!("missing tile layer '{}'", name),
        })?;

        // Tiled omits per-layer sizes for infinite maps; fall back to the map size
        let width = if layer.width > 0 { layer.width } else { self.width };
        let height = if layer.height > 0 { layer.height } else { self.height };

        TileGrid::from_gids(width, height, &layer.data).map_err(|message| ContentLoadError {
            file: "map".to_string(),
            message: format!("layer '{}': {}", name, message),
        })
    }
}

/// Grid coordinate of a tile: column `x`, row `y`, row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
}

impl TileCoord {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for TileCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Clears Tiled's horizontal, vertical and diagonal flip flags from a gid.
pub const TILED_GID_MASK: u32 = 0x1FFF_FFFF;

/// One tile layer. Cells hold the tile gid, `None` where the layer is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    cells: Vec<Option<u32>>,
}

impl TileGrid {
    /// Gid 0 is Tiled's "no tile". Flip flags are dropped; sprites are
    /// drawn unflipped.
    pub fn from_gids(width: u32, height: u32, gids: &[u32]) -> Result<Self, String> {
        let expected = width as usize * height as usize;
        if gids.len() != expected {
            return Err(format!(
                "expected {} cells ({}x{}), found {}",
                expected,
                width,
                height,
                gids.len()
            ));
        }

        let cells = gids
            .iter()
            .map(|&gid| Some(gid & TILED_GID_MASK).filter(|&gid| gid != 0))
            .collect();

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, coord: TileCoord) -> Option<usize> {
        if coord.x < self.width && coord.y < self.height {
            Some(coord.y as usize * self.width as usize + coord.x as usize)
        } else {
            None
        }
    }

    pub fn tile_at(&self, coord: TileCoord) -> Option<u32> {
        self.index(coord).and_then(|i| self.cells[i])
    }

    /// Clear a cell, returning the gid that was there.
    pub fn remove_tile_at(&mut self, coord: TileCoord) -> Option<u32> {
        let i = self.index(coord)?;
        self.cells[i].take()
    }

    /// All non-empty cells in row-major order.
    pub fn iter_tiles(&self) -> impl Iterator<Item = (TileCoord, u32)> + '_ {
        let width = self.width.max(1);
        self.cells.iter().enumerate().filter_map(move |(i, &cell)| {
            cell.map(|gid| {
                let i = i as u32;
                (TileCoord::new(i % width, i / width), gid)
            })
        })
    }

    pub fn count_of(&self, gid: u32) -> usize {
        self.cells.iter().filter(|c| **c == Some(gid)).count()
    }
}

/// Converts between grid, map-pixel (top-left origin, y down) and world
/// (bottom-left origin, y up) coordinates.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct MapGeometry {
    pub width: u32,
    pub height: u32,
    pub tile_size: Vec2,
}

impl Default for MapGeometry {
    /// An empty single-screen level, used when the map fails to load.
    fn default() -> Self {
        Self {
            width: 12,
            height: 9,
            tile_size: Vec2::splat(70.0),
        }
    }
}

impl MapGeometry {
    pub fn size_px(&self) -> Vec2 {
        Vec2::new(
            self.width as f32 * self.tile_size.x,
            self.height as f32 * self.tile_size.y,
        )
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_corners(Vec2::ZERO, self.size_px())
    }

    /// World-space centre of a tile.
    pub fn tile_center(&self, coord: TileCoord) -> Vec2 {
        let col = coord.x as f32;
        let row_from_bottom = self.height as f32 - 1.0 - coord.y as f32;
        Vec2::new(
            (col + 0.5) * self.tile_size.x,
            (row_from_bottom + 0.5) * self.tile_size.y,
        )
    }

    /// Map-pixel position (as authored in Tiled) to world space.
    pub fn map_to_world(&self, position: Vec2) -> Vec2 {
        Vec2::new(position.x, self.size_px().y - position.y)
    }
}
