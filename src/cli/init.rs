//! Init command implementation.
//!
//! Writes a `seal.yaml` holding the default settings so they can be edited.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{Manifest, MANIFEST_FILENAME};
use crate::error::{Result, SealError};
use crate::output::{display_path, Printer};

/// Write a seal.yaml with the default settings
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing seal.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(SealError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let yaml = Manifest::default().to_yaml()?;

    fs::write(&manifest_path, &yaml).map_err(|e| SealError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.success("Created", &display_path(&manifest_path));

    Ok(())
}
