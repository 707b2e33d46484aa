//! JSON index written next to the tiles.
//!
//! Records where each tile came from so later tooling can join names,
//! rarity and the like without re-running detection.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, SealError};
use crate::types::{CropRect, Region, Tile};

use super::png::{tile_file_name, tile_number};

/// Top-level index document.
#[derive(Debug, Serialize)]
pub struct TileIndex {
    pub app: String,
    pub version: String,
    pub source: String,
    pub size: Size,
    pub tiles: Vec<TileEntry>,
}

#[derive(Debug, Serialize)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

/// One tile in the index.
#[derive(Debug, Serialize)]
pub struct TileEntry {
    pub number: usize,
    pub file: String,
    pub bbox: Region,
    pub crop: CropRect,
}

impl TileIndex {
    /// Describe `tiles` cut from a `width` × `height` image named `source`.
    pub fn new(
        tiles: &[Tile],
        source: &str,
        width: u32,
        height: u32,
        prefix: &str,
        start: usize,
    ) -> Self {
        let tiles = tiles
            .iter()
            .map(|t| TileEntry {
                number: tile_number(t.index, start),
                file: tile_file_name(prefix, t.index, start),
                bbox: t.bbox,
                crop: t.crop,
            })
            .collect();

        Self {
            app: "seal".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            source: source.to_string(),
            size: Size { w: width, h: height },
            tiles,
        }
    }
}

/// Serialize an index as pretty JSON.
pub fn write_index_json(index: &TileIndex, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(index).map_err(|e| SealError::Build {
        message: format!("Failed to serialize tile index: {}", e),
        help: None,
    })?;
    fs::write(path, json).map_err(|e| SealError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write tile index: {}", e),
    })
}
