//! Core types for seal.

mod config;
mod grid;
mod raster;
mod region;

pub use config::{SegmentConfig, SelectionMode, MAX_THRESHOLD};
pub use grid::OpacityGrid;
pub use raster::{Channels, Raster};
pub use region::{CropRect, Region, Tile};
