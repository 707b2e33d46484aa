//! Pair command implementation.
//!
//! A character ships two sheets that share one numbering sequence: the
//! second sheet's stickers continue where the first sheet's end. Both are
//! cut with the largest-first preset.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::load_manifest;
use crate::error::{Result, SealError};
use crate::output::{display_path, plural, Printer};
use crate::types::SegmentConfig;

use super::split::{detect, write_sheet};
use super::SegmentArgs;

/// Split two sheets for one character with continuous numbering
#[derive(Args, Debug)]
pub struct PairArgs {
    /// Character name, used for the folder and file prefix
    #[arg(required = true)]
    pub name: String,

    /// First sheet (numbered from 1)
    #[arg(required = true)]
    pub first: PathBuf,

    /// Second sheet (numbering continues after the first)
    #[arg(required = true)]
    pub second: PathBuf,

    /// Base output directory (default: seal.yaml output, else "stickers")
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Sub-folder for the first sheet
    #[arg(long, default_value = "bondro")]
    pub first_dir: String,

    /// Sub-folder for the second sheet
    #[arg(long, default_value = "marshmallow")]
    pub second_dir: String,

    /// Also write index.json into each sub-folder
    #[arg(long)]
    pub index: bool,

    #[command(flatten)]
    pub segment: SegmentArgs,
}

/// Sticker counts for the two sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairSummary {
    pub first: usize,
    pub second: usize,
}

impl PairSummary {
    pub fn total(&self) -> usize {
        self.first + self.second
    }
}

/// Remove `dir` if it exists and create it empty.
fn reset_dir(dir: &Path, printer: &Printer) -> Result<()> {
    if dir.exists() {
        printer.warning(
            "Replacing",
            &format!("{} already exists, removing it", display_path(dir)),
        );
        fs::remove_dir_all(dir).map_err(|e| SealError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to remove existing directory: {}", e),
        })?;
    }
    create_dir(dir)
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| SealError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })
}

pub fn run(args: PairArgs, printer: &Printer) -> Result<PairSummary> {
    if args.name.is_empty() || args.name.contains(['/', '\\']) {
        return Err(SealError::Parse {
            message: format!("Invalid character name '{}'", args.name),
            help: Some(
                "The name becomes a folder, so it cannot be empty or contain slashes".to_string(),
            ),
        });
    }

    let (manifest, _) = load_manifest(Path::new("."))?;
    let base = args.output.clone().unwrap_or(manifest.output);
    let config = args.segment.apply(SegmentConfig::largest_first());
    let index = args.index || manifest.index;

    let char_dir = base.join(&args.name);
    let first_dir = char_dir.join(&args.first_dir);
    let second_dir = char_dir.join(&args.second_dir);

    printer.status("Character", &args.name);

    // Both sheets must decode before the previous output is touched.
    let first = detect(&args.first, &config, printer)?;
    let second = detect(&args.second, &config, printer)?;

    reset_dir(&char_dir, printer)?;
    create_dir(&first_dir)?;
    create_dir(&second_dir)?;

    write_sheet(&first, &first_dir, &args.name, 1, index, printer)?;
    let start = first.tiles.len() + 1;
    write_sheet(&second, &second_dir, &args.name, start, index, printer)?;

    let summary = PairSummary {
        first: first.tiles.len(),
        second: second.tiles.len(),
    };

    printer.info(
        &args.first_dir,
        &format!(
            "{} -> {}",
            plural(summary.first, "sticker", "stickers"),
            display_path(&first_dir)
        ),
    );
    printer.info(
        &args.second_dir,
        &format!(
            "{} -> {}",
            plural(summary.second, "sticker", "stickers"),
            display_path(&second_dir)
        ),
    );
    printer.success(
        "Finished",
        &format!("{} total", plural(summary.total(), "sticker", "stickers")),
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    /// Sheet with `count` separate 110px squares in a row.
    fn sheet(path: &Path, count: u32) {
        let mut img = RgbaImage::from_pixel(130 * count, 130, Rgba([0, 0, 0, 0]));
        for i in 0..count {
            for y in 10..120 {
                for x in i * 130 + 10..i * 130 + 120 {
                    img.put_pixel(x, y, Rgba([30, 120, 200, 255]));
                }
            }
        }
        img.save(path).unwrap();
    }

    fn args(dir: &Path, first: PathBuf, second: PathBuf) -> PairArgs {
        PairArgs {
            name: "pururun".to_string(),
            first,
            second,
            output: Some(dir.join("out")),
            first_dir: "bondro".to_string(),
            second_dir: "marshmallow".to_string(),
            index: false,
            segment: SegmentArgs::default(),
        }
    }

    #[test]
    fn test_pair_continues_numbering() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");
        sheet(&a, 2);
        sheet(&b, 3);

        let summary = run(args(dir.path(), a, b), &Printer::new()).unwrap();
        assert_eq!(summary, PairSummary { first: 2, second: 3 });

        let char_dir = dir.path().join("out/pururun");
        assert!(char_dir.join("bondro/pururun_1.png").exists());
        assert!(char_dir.join("bondro/pururun_2.png").exists());
        assert!(char_dir.join("marshmallow/pururun_3.png").exists());
        assert!(char_dir.join("marshmallow/pururun_5.png").exists());
        assert!(!char_dir.join("marshmallow/pururun_1.png").exists());
    }

    #[test]
    fn test_pair_replaces_existing_folder() {
        let dir = tempdir().unwrap();
        let stale = dir.path().join("out/pururun/bondro/pururun_9.png");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, b"old").unwrap();

        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");
        sheet(&a, 1);
        sheet(&b, 1);

        run(args(dir.path(), a, b), &Printer::new()).unwrap();
        assert!(!stale.exists());
    }

    #[test]
    fn test_pair_padding_applied() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");
        sheet(&a, 1);
        sheet(&b, 1);

        run(args(dir.path(), a, b), &Printer::new()).unwrap();
        let tile = image::open(dir.path().join("out/pururun/bondro/pururun_1.png")).unwrap();
        // 110px square plus 5px padding on each side.
        assert_eq!((tile.width(), tile.height()), (120, 120));
    }

    #[test]
    fn test_pair_keeps_previous_output_when_sheet_missing() {
        let dir = tempdir().unwrap();
        let previous = dir.path().join("out/pururun/bondro/pururun_1.png");
        fs::create_dir_all(previous.parent().unwrap()).unwrap();
        fs::write(&previous, b"good").unwrap();

        let a = dir.path().join("a.png");
        sheet(&a, 1);
        let missing = dir.path().join("missing.png");

        let result = run(args(dir.path(), a, missing.clone()), &Printer::new());
        assert!(matches!(result, Err(SealError::Decode { .. })));
        assert!(previous.exists());

        let result = run(args(dir.path(), missing.clone(), missing), &Printer::new());
        assert!(result.is_err());
        assert_eq!(fs::read(&previous).unwrap(), b"good");
    }

    #[test]
    fn test_pair_creates_both_folders_for_empty_sheet() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("blank.png");
        sheet(&a, 1);
        RgbaImage::new(50, 50).save(&b).unwrap();

        let summary = run(args(dir.path(), a, b), &Printer::new()).unwrap();
        assert_eq!(summary, PairSummary { first: 1, second: 0 });
        assert!(dir.path().join("out/pururun/marshmallow").is_dir());
    }

    #[test]
    fn test_pair_rejects_slash_in_name() {
        let dir = tempdir().unwrap();
        let mut a = args(dir.path(), "a.png".into(), "b.png".into());
        a.name = "../evil".to_string();
        assert!(matches!(run(a, &Printer::new()), Err(SealError::Parse { .. })));
    }
}
