//! Batch command implementation.
//!
//! Splits every sheet found under the given paths. Each sheet gets its own
//! folder named after the file stem.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{load_manifest, scan_paths};
use crate::error::{Result, SealError};
use crate::output::{display_path, plural, Printer};

use super::split::{detect, write_sheet};
use super::SegmentArgs;

/// Split every sheet found in files or directories
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Files or directories to scan (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Output directory (default: seal.yaml output, else "stickers")
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// File name prefix (default: sticker)
    #[arg(long, short)]
    pub prefix: Option<String>,

    /// Also write index.json into each sheet folder
    #[arg(long)]
    pub index: bool,

    #[command(flatten)]
    pub segment: SegmentArgs,
}

/// Per-run totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub sheets: usize,
    pub stickers: usize,
    pub failed: usize,
}

pub fn run(args: BatchArgs, printer: &Printer) -> Result<BatchSummary> {
    let (manifest, _) = load_manifest(Path::new("."))?;

    let config = args.segment.apply(manifest.segment.clone());
    config.validate()?;
    let prefix = args.prefix.clone().unwrap_or_else(|| manifest.prefix.clone());
    let output = args.output.clone().unwrap_or_else(|| manifest.output.clone());
    let index = args.index || manifest.index;

    let roots = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };

    // Never re-split tiles written by an earlier run.
    let sheets: Vec<PathBuf> = scan_paths(&roots, &manifest)
        .into_iter()
        .filter(|p| !is_inside(p, &output))
        .collect();

    printer.status("Scanning", &plural(sheets.len(), "sheet", "sheets"));

    let folders = sheet_folders(&sheets);

    let mut summary = BatchSummary::default();
    for (path, folder) in sheets.iter().zip(&folders) {
        let dir = output.join(folder);

        let result = detect(path, &config, printer)
            .and_then(|sheet| write_sheet(&sheet, &dir, &prefix, 1, index, printer));

        match result {
            Ok(written) => {
                summary.sheets += 1;
                summary.stickers += written.len();
            }
            Err(e) => {
                printer.error("Failed", &format!("{}: {}", display_path(path), e));
                summary.failed += 1;
            }
        }
    }

    if summary.failed > 0 {
        return Err(SealError::Build {
            message: format!(
                "{} could not be split",
                plural(summary.failed, "sheet", "sheets")
            ),
            help: Some("See the messages above for each failed file".to_string()),
        });
    }

    printer.success(
        "Finished",
        &format!(
            "{} from {} to {}",
            plural(summary.stickers, "sticker", "stickers"),
            plural(summary.sheets, "sheet", "sheets"),
            display_path(&output)
        ),
    );

    Ok(summary)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sheet".to_string())
}

/// Output folder name for each sheet, unique within one run.
///
/// A sheet gets its file stem. Sheets sharing a stem are prefixed with
/// their parent folder name (`a/one.png` -> `a-one`), and any name still
/// taken gets a numeric suffix.
fn sheet_folders(sheets: &[PathBuf]) -> Vec<String> {
    let mut stem_counts: HashMap<String, usize> = HashMap::new();
    for path in sheets {
        *stem_counts.entry(file_stem(path)).or_default() += 1;
    }

    let mut used: HashSet<String> = HashSet::new();
    sheets
        .iter()
        .map(|path| {
            let stem = file_stem(path);
            let base = match path.parent().and_then(|p| p.file_name()) {
                Some(parent) if stem_counts[&stem] > 1 => {
                    format!("{}-{}", parent.to_string_lossy(), stem)
                }
                _ => stem,
            };

            let mut name = base.clone();
            let mut n = 2;
            while !used.insert(name.clone()) {
                name = format!("{}-{}", base, n);
                n += 1;
            }
            name
        })
        .collect()
}

/// Whether `path` lies under `dir`, comparing canonical forms when possible.
fn is_inside(path: &Path, dir: &Path) -> bool {
    match (path.canonicalize(), dir.canonicalize()) {
        (Ok(p), Ok(d)) => p.starts_with(d),
        _ => path.starts_with(dir),
    }
}
