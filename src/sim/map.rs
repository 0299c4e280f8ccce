//! Tile map for the platformer
//!
//! Tiles are laid out row-major with row 0 at the top. Tile (col, row) is
//! centered at `(col * tile_size, -row * tile_size)`, so the map grows right
//! and down from the origin. Index 0 is empty space; any other index is solid
//! and is also the cell it samples from the tileset atlas.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::MapError;

pub const LEVEL_1_WIDTH: usize = 14;
pub const LEVEL_1_HEIGHT: usize = 5;

#[rustfmt::skip]
pub const LEVEL_1_DATA: [u32; LEVEL_1_WIDTH * LEVEL_1_HEIGHT] = [
    0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1,
    2, 2, 1, 1, 0, 0, 1, 1, 1, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 0, 0, 2, 2, 2, 2, 2, 2, 2, 2,
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileMap {
    width: usize,
    height: usize,
    tiles: Vec<u32>,
    tile_size: f32,
    /// Tileset atlas columns
    pub atlas_cols: u32,
    /// Tileset atlas rows
    pub atlas_rows: u32,
}

impl TileMap {
    pub fn new(
        width: usize,
        height: usize,
        tiles: Vec<u32>,
        tile_size: f32,
        atlas_cols: u32,
        atlas_rows: u32,
    ) -> Result<Self, MapError> {
        let expected = width * height;
        if tiles.len() != expected {
            return Err(MapError::SizeMismatch {
                width,
                height,
                expected,
                actual: tiles.len(),
            });
        }
        if atlas_cols == 0 || atlas_rows == 0 {
            return Err(MapError::EmptyAtlas);
        }
        if !tile_size.is_finite() || tile_size <= 0.0 {
            return Err(MapError::InvalidTileSize);
        }

        Ok(Self {
            width,
            height,
            tiles,
            tile_size,
            atlas_cols,
            atlas_rows,
        })
    }

    /// The built-in 14x5 level with a 4x1 tileset
    pub fn level_1() -> Self {
        Self {
            width: LEVEL_1_WIDTH,
            height: LEVEL_1_HEIGHT,
            tiles: LEVEL_1_DATA.to_vec(),
            tile_size: 1.0,
            atlas_cols: 4,
            atlas_rows: 1,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn left_bound(&self) -> f32 {
        -self.tile_size / 2.0
    }

    pub fn right_bound(&self) -> f32 {
        self.width as f32 * self.tile_size - self.tile_size / 2.0
    }

    pub fn top_bound(&self) -> f32 {
        self.tile_size / 2.0
    }

    pub fn bottom_bound(&self) -> f32 {
        -(self.height as f32 * self.tile_size) + self.tile_size / 2.0
    }

    /// Tile index at (col, row), `None` outside the grid
    pub fn tile_at(&self, col: usize, row: usize) -> Option<u32> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.tiles[row * self.width + col])
    }

    /// World-space center of tile (col, row)
    pub fn tile_center(&self, col: usize, row: usize) -> Vec2 {
        Vec2::new(
            col as f32 * self.tile_size,
            -(row as f32) * self.tile_size,
        )
    }

    /// Grid cell containing `point`, if inside the map bounds
    pub fn cell_at(&self, point: Vec2) -> Option<(usize, usize)> {
        if point.x < self.left_bound()
            || point.x > self.right_bound()
            || point.y > self.top_bound()
            || point.y < self.bottom_bound()
        {
            return None;
        }

        let half = self.tile_size / 2.0;
        let col = ((point.x + half) / self.tile_size).floor();
        let row = ((half - point.y) / self.tile_size).floor();
        if col < 0.0 || row < 0.0 {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.width || row >= self.height {
            return None;
        }
        Some((col, row))
    }

    /// If `point` is inside a solid tile, how far it has sunk in on each axis
    ///
    /// Penetration is measured from the tile edge nearest to the point, so it
    /// is always within `[0, tile_size / 2]`.
    pub fn is_solid(&self, point: Vec2) -> Option<Vec2> {
        let (col, row) = self.cell_at(point)?;
        if self.tile_at(col, row)? == 0 {
            return None;
        }

        let center = self.tile_center(col, row);
        let half = self.tile_size / 2.0;
        let penetration = Vec2::splat(half) - (point - center).abs();
        Some(penetration.max(Vec2::ZERO))
    }

    /// All non-empty tiles as (center, tile index), row by row
    pub fn solid_tiles(&self) -> impl Iterator<Item = (Vec2, u32)> + '_ {
        self.tiles.iter().enumerate().filter_map(|(i, &tile)| {
            if tile == 0 {
                return None;
            }
            let col = i % self.width;
            let row = i / self.width;
            Some((self.tile_center(col, row), tile))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_size_mismatch_rejected() {
        let err = TileMap::new(3, 2, vec![0; 5], 1.0, 1, 1).unwrap_err();
        assert_eq!(
            err,
            MapError::SizeMismatch {
                width: 3,
                height: 2,
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn test_empty_atlas_rejected() {
        assert_eq!(
            TileMap::new(1, 1, vec![1], 1.0, 0, 1).unwrap_err(),
            MapError::EmptyAtlas
        );
    }

    #[test]
    fn test_bad_tile_size_rejected() {
        for tile_size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert_eq!(
                TileMap::new(1, 1, vec![1], tile_size, 1, 1).unwrap_err(),
                MapError::InvalidTileSize
            );
        }
    }

    #[test]
    fn test_level_1_bounds() {
        let map = TileMap::level_1();
        assert_eq!(map.left_bound(), -0.5);
        assert_eq!(map.right_bound(), 13.5);
        assert_eq!(map.top_bound(), 0.5);
        assert_eq!(map.bottom_bound(), -4.5);
    }

    #[test]
    fn test_cell_lookup() {
        let map = TileMap::level_1();
        assert_eq!(map.cell_at(Vec2::new(0.0, 0.0)), Some((0, 0)));
        assert_eq!(map.cell_at(Vec2::new(0.6, -0.6)), Some((1, 1)));
        assert_eq!(map.cell_at(Vec2::new(-0.6, 0.0)), None);
        assert_eq!(map.cell_at(Vec2::new(0.0, -4.6)), None);
    }

    #[test]
    fn test_empty_tile_not_solid() {
        let map = TileMap::level_1();
        assert!(map.is_solid(Vec2::new(0.0, 0.0)).is_none());
        assert!(map.is_solid(Vec2::new(4.0, -3.0)).is_none());
    }

    #[test]
    fn test_out_of_bounds_not_solid() {
        let map = TileMap::level_1();
        assert!(map.is_solid(Vec2::new(-3.0, -2.0)).is_none());
        assert!(map.is_solid(Vec2::new(20.0, -2.0)).is_none());
    }

    #[test]
    fn test_penetration_into_floor() {
        let map = TileMap::level_1();
        // Tile (0, 2) spans y in [-2.5, -1.5]; sample 0.1 below its top
        let pen = map.is_solid(Vec2::new(0.0, -1.6)).unwrap();
        assert!((pen.y - 0.1).abs() < 1e-5);
        assert!((pen.x - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_solid_tiles_iterates_non_empty() {
        let map = TileMap::level_1();
        let expected = LEVEL_1_DATA.iter().filter(|&&t| t != 0).count();
        assert_eq!(map.solid_tiles().count(), expected);
        let (first_center, first_tile) = map.solid_tiles().next().unwrap();
        assert_eq!(first_center, Vec2::new(7.0, 0.0));
        assert_eq!(first_tile, 1);
    }

    proptest! {
        #[test]
        fn penetration_within_half_tile(x in -1.0f32..15.0, y in -5.0f32..1.0) {
            let map = TileMap::level_1();
            if let Some(pen) = map.is_solid(Vec2::new(x, y)) {
                prop_assert!(pen.x >= 0.0 && pen.x <= 0.5 + 1e-5);
                prop_assert!(pen.y >= 0.0 && pen.y <= 0.5 + 1e-5);
            }
        }
    }
}
