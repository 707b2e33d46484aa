//! PNG output for cut tiles.
//!
//! Tiles are written as `{prefix}_{n}.png`. Numbering starts at `start`, so
//! a second sheet for the same subject can continue where the first ended.

use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::error::{Result, SealError};
use crate::types::{Raster, Tile};

/// File name for a tile: the tile's 1-based index shifted by `start - 1`.
pub fn tile_file_name(prefix: &str, tile_index: usize, start: usize) -> String {
    format!("{}_{}.png", prefix, tile_number(tile_index, start))
}

/// Public number of a tile given the first number of its batch.
///
/// Both `tile_index` and `start` are 1-based.
pub fn tile_number(tile_index: usize, start: usize) -> usize {
    debug_assert!(tile_index >= 1 && start >= 1);
    start + tile_index - 1
}

/// Encode a raster as PNG.
pub fn write_png(raster: &Raster, path: &Path) -> Result<()> {
    let img = raster.to_dynamic()?;
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| SealError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })
}

/// Write every tile into `dir`, creating it if needed.
///
/// Returns the written paths in tile order.
pub fn write_tiles(
    tiles: &[Tile],
    dir: &Path,
    prefix: &str,
    start: usize,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| SealError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let mut written = Vec::with_capacity(tiles.len());
    for tile in tiles {
        let path = dir.join(tile_file_name(prefix, tile.index, start));
        write_png(&tile.image, &path)?;
        written.push(path);
    }
    Ok(written)
}
