//! Segmentation settings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SealError};

/// Largest accepted detection threshold.
pub const MAX_THRESHOLD: u32 = 254;

/// How surviving regions are ordered and limited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionMode {
    /// Top-to-bottom in coarse row bands, then left-to-right. Keeps everything.
    #[default]
    ReadingOrder,
    /// Largest crop area first, truncated to `cap` entries.
    LargestFirst,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::ReadingOrder => write!(f, "reading-order"),
            SelectionMode::LargestFirst => write!(f, "largest-first"),
        }
    }
}

/// Parameters for one segmentation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SegmentConfig {
    /// Minimum opacity for a pixel to count as foreground.
    pub threshold: u32,
    /// Regions narrower or shorter than this are dropped.
    pub min_size: u32,
    /// Margin added around each region before cropping.
    pub padding: u32,
    pub mode: SelectionMode,
    /// Maximum number of tiles in largest-first mode.
    pub cap: usize,
    /// Row band height used by reading-order sorting.
    pub row_bucket: u32,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            threshold: 10,
            min_size: 20,
            padding: 0,
            mode: SelectionMode::ReadingOrder,
            cap: 15,
            row_bucket: 100,
        }
    }
}

impl SegmentConfig {
    /// Preset for character sheets: the fifteen biggest stickers, padded.
    pub fn largest_first() -> Self {
        Self {
            threshold: 10,
            min_size: 100,
            padding: 5,
            mode: SelectionMode::LargestFirst,
            cap: 15,
            row_bucket: 100,
        }
    }

    /// Check ranges once, before any pixel is touched.
    pub fn validate(&self) -> Result<()> {
        if self.threshold > MAX_THRESHOLD {
            return Err(SealError::InvalidConfiguration {
                message: format!(
                    "threshold {} is out of range (0-{})",
                    self.threshold, MAX_THRESHOLD
                ),
                help: Some("Lower values detect fainter pixels; 10 is a good start".to_string()),
            });
        }
        if self.min_size < 1 {
            return Err(SealError::InvalidConfiguration {
                message: "min-size must be at least 1".to_string(),
                help: Some("Use 1 to keep every region".to_string()),
            });
        }
        match self.mode {
            SelectionMode::LargestFirst if self.cap < 1 => Err(SealError::InvalidConfiguration {
                message: "cap must be at least 1 in largest-first mode".to_string(),
                help: None,
            }),
            SelectionMode::ReadingOrder if self.row_bucket < 1 => {
                Err(SealError::InvalidConfiguration {
                    message: "row-bucket must be at least 1 in reading-order mode".to_string(),
                    help: Some("Use 1 for strict top-to-bottom ordering".to_string()),
                })
            }
            _ => Ok(()),
        }
    }

    /// Threshold as a byte. Only meaningful after `validate`.
    pub(crate) fn threshold_u8(&self) -> u8 {
        self.threshold.min(MAX_THRESHOLD) as u8
    }
}
