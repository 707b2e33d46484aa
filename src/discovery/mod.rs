//! Project settings and sheet discovery.
//!
//! Looks for a `seal.yaml` manifest and finds sticker sheets on disk.

mod manifest;
mod scanner;

use std::path::Path;

use crate::error::Result;

pub use manifest::Manifest;
pub use scanner::{is_image, scan_directory, scan_paths, IMAGE_EXTENSIONS};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "seal.yaml";

/// Load `seal.yaml` from `root`, or defaults when there is none.
///
/// Returns the manifest and whether a file was found.
pub fn load_manifest(root: &Path) -> Result<(Manifest, bool)> {
    let path = root.join(MANIFEST_FILENAME);
    if path.is_file() {
        Ok((Manifest::load(&path)?, true))
    } else {
        Ok((Manifest::default(), false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_manifest_missing() {
        let dir = tempdir().unwrap();
        let (manifest, found) = load_manifest(dir.path()).unwrap();
        assert!(!found);
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_load_manifest_present() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "prefix: seal\n").unwrap();
        let (manifest, found) = load_manifest(dir.path()).unwrap();
        assert!(found);
        assert_eq!(manifest.prefix, "seal");
    }
}
