//! Sticker segmentation engine.
//!
//! Turns one composite raster into a list of cropped tiles:
//!
//! 1. build an opacity grid ([`mask`])
//! 2. flood-fill every foreground component ([`components`])
//! 3. drop undersized regions and rank the rest ([`select`])
//! 4. cut each selected region out with padding ([`crop`])
//!
//! Each call is a pure function of its inputs; nothing is kept between calls.
//!
//! # Example
//!
//! ```ignore
//! use seal::{segment, Raster, SegmentConfig};
//!
//! let sheet = Raster::open("sheet.png".as_ref())?;
//! let tiles = segment(&sheet, &SegmentConfig::largest_first())?;
//! println!("Found {} stickers", tiles.len());
//! ```

pub mod components;
pub mod crop;
pub mod mask;
pub mod select;

pub use components::find_regions;
pub use crop::{crop_rect, crop_tiles};
pub use mask::opacity_grid;

use crate::error::Result;
use crate::types::{OpacityGrid, Raster, Region, SegmentConfig, Tile};

/// Locate, filter and rank regions on a prepared opacity grid.
///
/// `area` on the returned regions is the crop area for the configured
/// padding, which is what largest-first ranking compares.
pub fn select_regions(grid: &OpacityGrid, config: &SegmentConfig) -> Result<Vec<Region>> {
    config.validate()?;
    Ok(rank_regions(grid, config))
}

/// Run the full pipeline on a raster.
///
/// An image with no qualifying regions yields an empty list, not an error.
pub fn segment(raster: &Raster, config: &SegmentConfig) -> Result<Vec<Tile>> {
    config.validate()?;

    let grid = opacity_grid(raster);
    let regions = rank_regions(&grid, config);
    Ok(crop_tiles(raster, &regions, config.padding))
}

fn rank_regions(grid: &OpacityGrid, config: &SegmentConfig) -> Vec<Region> {
    let raw = find_regions(grid, config.threshold_u8());
    let mut kept = select::filter_small(raw, config.min_size);
    crop::measure(&mut kept, config.padding, grid.width(), grid.height());
    select::select(kept, config)
}
