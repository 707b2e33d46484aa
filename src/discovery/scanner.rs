//! File system scanner for sticker sheets.
//!
//! Recursively walks directories and collects image files the `image`
//! crate can decode.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// Extensions treated as sticker sheets.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Check whether a path looks like a decodable image.
pub fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Scan a directory for images, sorted by path.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    if !root.exists() {
        return Vec::new();
    }

    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_image(p) && !manifest.is_excluded(p))
        .collect();

    found.sort();
    found
}

/// Expand a mix of files and directories into a list of images.
///
/// Files given explicitly are kept even when excluded; directories are
/// scanned. Duplicates are dropped, first occurrence wins.
pub fn scan_paths(paths: &[PathBuf], manifest: &Manifest) -> Vec<PathBuf> {
    let mut result: Vec<PathBuf> = Vec::new();

    for path in paths {
        let batch = if path.is_dir() {
            scan_directory(path, manifest)
        } else if is_image(path) {
            vec![path.clone()]
        } else {
            vec![]
        };

        for p in batch {
            if !result.contains(&p) {
                result.push(p);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_is_image() {
        assert!(is_image(Path::new("a.png")));
        assert!(is_image(Path::new("a.PNG")));
        assert!(is_image(Path::new("dir/a.jpeg")));
        assert!(!is_image(Path::new("a.txt")));
        assert!(!is_image(Path::new("png")));
    }

    #[test]
    fn test_scan_directory_recurses_and_sorts() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("b.png"));
        touch(&dir.path().join("nested/a.webp"));
        touch(&dir.path().join("notes.md"));

        let found = scan_directory(dir.path(), &Manifest::default());
        assert_eq!(
            found,
            vec![dir.path().join("b.png"), dir.path().join("nested/a.webp")]
        );
    }

    #[test]
    fn test_scan_directory_respects_excludes() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("keep.png"));
        touch(&dir.path().join("sheet-raw.png"));

        let manifest = Manifest {
            excludes: vec!["*-raw.png".to_string()],
            ..Default::default()
        };
        let found = scan_directory(dir.path(), &manifest);
        assert_eq!(found, vec![dir.path().join("keep.png")]);
    }

    #[test]
    fn test_scan_missing_directory() {
        let found = scan_directory(Path::new("/nonexistent/sheets"), &Manifest::default());
        assert!(found.is_empty());
    }

    #[test]
    fn test_scan_paths_dedupes() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.png");
        touch(&file);

        let found = scan_paths(
            &[file.clone(), dir.path().to_path_buf()],
            &Manifest::default(),
        );
        assert_eq!(found, vec![file]);
    }
}
