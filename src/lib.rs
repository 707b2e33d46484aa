//! seal - Sticker sheet splitter
//!
//! A library for finding the individual stickers on a composite sheet
//! (transparent or white background) and cutting each one out as its own
//! image.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod render;
pub mod segment;
pub mod types;

pub use discovery::{load_manifest, scan_paths, Manifest, MANIFEST_FILENAME};
pub use error::{Result, SealError};
pub use render::{tile_file_name, write_index_json, write_png, write_tiles, TileIndex};
pub use segment::{find_regions, opacity_grid, segment, select_regions};
pub use types::{
    Channels, CropRect, OpacityGrid, Raster, Region, SegmentConfig, SelectionMode, Tile,
};
