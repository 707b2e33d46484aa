//! Split command implementation.
//!
//! Cuts one sticker sheet into numbered PNG files.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::load_manifest;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::{tile_file_name, write_index_json, write_tiles, TileIndex};
use crate::segment::segment;
use crate::types::{Raster, SegmentConfig, Tile};

use super::SegmentArgs;

/// File name of the optional JSON index.
pub const INDEX_FILENAME: &str = "index.json";

/// Split one sheet into numbered sticker PNGs
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Sheet image to split
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output directory (default: <prefix> folder next to the input)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// File name prefix (default: sticker)
    #[arg(long, short)]
    pub prefix: Option<String>,

    /// Number given to the first sticker (1 or higher)
    #[arg(
        long,
        default_value = "1",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub start: usize,

    /// Also write index.json with bounding boxes
    #[arg(long)]
    pub index: bool,

    #[command(flatten)]
    pub segment: SegmentArgs,
}

/// A decoded sheet and the tiles cut from it.
pub struct SplitSheet {
    pub source: PathBuf,
    pub raster: Raster,
    pub tiles: Vec<Tile>,
}

/// Decode `path` and segment it, reporting progress.
pub fn detect(path: &Path, config: &SegmentConfig, printer: &Printer) -> Result<SplitSheet> {
    let display = display_path(path);

    printer.status("Loading", &display);
    let raster = Raster::open(path)?;

    let alpha = if raster.channels().has_alpha() {
        "alpha"
    } else {
        "no alpha, white is background"
    };
    printer.info(
        "Analyzed",
        &format!("{}x{} image ({})", raster.width(), raster.height(), alpha),
    );
    printer.verbose(
        "Config",
        &format!(
            "threshold {}, min-size {}px, padding {}px, {}",
            config.threshold, config.min_size, config.padding, config.mode
        ),
    );

    let tiles = segment(&raster, config)?;

    if tiles.is_empty() {
        printer.warning(
            "Warning",
            &format!(
                "no stickers found in {} {}",
                display,
                printer.dim("(try a lower --threshold or --min-size)")
            ),
        );
    } else {
        printer.info("Detected", &plural(tiles.len(), "sticker", "stickers"));
    }

    Ok(SplitSheet {
        source: path.to_path_buf(),
        raster,
        tiles,
    })
}

/// Write a sheet's tiles (and index, if asked) into `dir`.
pub fn write_sheet(
    sheet: &SplitSheet,
    dir: &Path,
    prefix: &str,
    start: usize,
    index: bool,
    printer: &Printer,
) -> Result<Vec<PathBuf>> {
    if sheet.tiles.is_empty() {
        return Ok(vec![]);
    }

    let written = write_tiles(&sheet.tiles, dir, prefix, start)?;

    for tile in &sheet.tiles {
        printer.verbose(
            "Wrote",
            &format!(
                "{} ({}x{})",
                tile_file_name(prefix, tile.index, start),
                tile.image.width(),
                tile.image.height()
            ),
        );
    }

    if index {
        let source = sheet
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let doc = TileIndex::new(
            &sheet.tiles,
            &source,
            sheet.raster.width(),
            sheet.raster.height(),
            prefix,
            start,
        );
        write_index_json(&doc, &dir.join(INDEX_FILENAME))?;
    }

    Ok(written)
}

pub fn run(args: SplitArgs, printer: &Printer) -> Result<Vec<PathBuf>> {
    let (manifest, has_manifest) = load_manifest(Path::new("."))?;

    let config = args.segment.apply(manifest.segment.clone());
    let prefix = args.prefix.clone().unwrap_or_else(|| manifest.prefix.clone());

    let output = match (&args.output, has_manifest) {
        (Some(dir), _) => dir.clone(),
        (None, true) => manifest.output.clone(),
        (None, false) => args
            .input
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(&prefix),
    };

    let sheet = detect(&args.input, &config, printer)?;
    let written = write_sheet(
        &sheet,
        &output,
        &prefix,
        args.start,
        args.index || manifest.index,
        printer,
    )?;

    if !written.is_empty() {
        printer.success(
            "Finished",
            &format!(
                "{} to {}",
                plural(written.len(), "sticker", "stickers"),
                display_path(&output)
            ),
        );
    }

    Ok(written)
}
