//! Project file (seal.yaml) parsing.
//!
//! The manifest holds per-project defaults: where tiles go, how they are
//! named and how sheets are segmented. Command-line flags override it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SealError};
use crate::types::SegmentConfig;

/// Project manifest loaded from seal.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Output directory for cut tiles.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// File name prefix for tiles.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Write an index.json next to the tiles.
    #[serde(default)]
    pub index: bool,

    /// Segmentation settings. Missing keys fall back to the splitter preset.
    #[serde(default)]
    pub segment: SegmentConfig,

    /// Patterns skipped when scanning directories.
    #[serde(default)]
    pub excludes: Vec<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("stickers")
}

fn default_prefix() -> String {
    "sticker".to_string()
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: default_output(),
            prefix: default_prefix(),
            index: false,
            segment: SegmentConfig::default(),
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a seal.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SealError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let manifest: Self = serde_yaml::from_str(content).map_err(|e| SealError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check seal.yaml syntax".to_string()),
        })?;
        manifest.segment.validate()?;
        Ok(manifest)
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| SealError::Build {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.starts_with(&format!("{}/", dir))
                    || path.contains(&format!("/{}/", dir));
            }
            return path.contains(suffix);
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !pattern.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }
}
