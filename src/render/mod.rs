//! Output of cut tiles: PNG files and an optional JSON index.

mod index;
mod png;

pub use index::{write_index_json, TileEntry, TileIndex};
pub use png::{tile_file_name, tile_number, write_png, write_tiles};
