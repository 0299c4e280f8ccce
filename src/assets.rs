//! Image loading and placeholder art
//!
//! Asset files are optional. When a path is configured the image is decoded
//! with the `image` crate; otherwise a small procedural stand-in is drawn so
//! every demo runs from a bare checkout.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::error::AssetError;

/// Pixels per atlas cell in generated images
pub const PLACEHOLDER_CELL: u32 = 16;

/// Decode an image file into RGBA8
pub fn load_rgba(path: &Path) -> Result<RgbaImage, AssetError> {
    let image = image::open(path).map_err(|source| AssetError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = image.to_rgba8();
    log::info!(
        "Loaded {} ({}x{})",
        path.display(),
        rgba.width(),
        rgba.height()
    );
    Ok(rgba)
}

/// Load `path` if given, else fall back to `placeholder`
pub fn load_or(
    path: Option<&Path>,
    placeholder: impl FnOnce() -> RgbaImage,
) -> Result<RgbaImage, AssetError> {
    match path {
        Some(path) => load_rgba(path),
        None => Ok(placeholder()),
    }
}

/// Filled disc on a transparent square
pub fn disc(size: u32, color: [u8; 4]) -> RgbaImage {
    let r = size as f32 / 2.0;
    RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f32 + 0.5 - r;
        let dy = y as f32 + 0.5 - r;
        if dx * dx + dy * dy <= r * r {
            Rgba(color)
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

/// Walk-cycle sheet: one row per direction, one column per frame
///
/// Each cell is a body block whose feet shift with the column, so the
/// animation is visible even without real art.
pub fn sprite_sheet(cols: u32, rows: u32, body: [u8; 4]) -> RgbaImage {
    let cell = PLACEHOLDER_CELL;
    RgbaImage::from_fn(cols * cell, rows * cell, |x, y| {
        let (col, cx, cy) = (x / cell, x % cell, y % cell);
        let inside_body = (3..cell - 3).contains(&cx) && (2..cell - 5).contains(&cy);
        let foot_x = if col % 2 == 0 { 4 } else { cell - 7 };
        let inside_foot = (foot_x..foot_x + 3).contains(&cx) && (cell - 5..cell - 1).contains(&cy);
        if inside_body {
            Rgba(body)
        } else if inside_foot {
            Rgba([40, 40, 40, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

/// Tileset with `cols` cells in one row; cell 0 is left transparent
pub fn tileset(cols: u32) -> RgbaImage {
    const PALETTE: [[u8; 4]; 4] = [
        [0, 0, 0, 0],
        [70, 160, 60, 255],
        [120, 80, 45, 255],
        [110, 110, 120, 255],
    ];
    let cell = PLACEHOLDER_CELL;
    RgbaImage::from_fn(cols * cell, cell, |x, y| {
        let index = (x / cell) as usize;
        let mut color = PALETTE[index % PALETTE.len()];
        // Darker rim so adjacent tiles stay readable
        let (cx, cy) = (x % cell, y % cell);
        if color[3] != 0 && (cx == 0 || cy == 0 || cx == cell - 1 || cy == cell - 1) {
            color = [color[0] / 2, color[1] / 2, color[2] / 2, 255];
        }
        Rgba(color)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_sheet_dimensions() {
        let sheet = sprite_sheet(4, 4, [200, 50, 50, 255]);
        assert_eq!(sheet.width(), 4 * PLACEHOLDER_CELL);
        assert_eq!(sheet.height(), 4 * PLACEHOLDER_CELL);
        // Corner of every cell is transparent
        assert_eq!(sheet.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn test_tileset_first_cell_empty() {
        let tiles = tileset(4);
        assert_eq!(tiles.width(), 4 * PLACEHOLDER_CELL);
        assert_eq!(tiles.height(), PLACEHOLDER_CELL);
        assert_eq!(tiles.get_pixel(PLACEHOLDER_CELL / 2, PLACEHOLDER_CELL / 2)[3], 0);
        assert_eq!(
            tiles.get_pixel(PLACEHOLDER_CELL + PLACEHOLDER_CELL / 2, PLACEHOLDER_CELL / 2)[3],
            255
        );
    }

    #[test]
    fn test_disc_is_round() {
        let d = disc(16, [255, 255, 255, 255]);
        assert_eq!(d.get_pixel(8, 8)[3], 255);
        assert_eq!(d.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn test_load_or_uses_placeholder() {
        let img = load_or(None, || disc(6, [1, 2, 3, 4])).unwrap();
        assert_eq!(img.dimensions(), (6, 6));
        assert_eq!(img.get_pixel(3, 3).0, [1, 2, 3, 4]);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_rgba(Path::new("does/not/exist.png")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.png"));
    }
}
