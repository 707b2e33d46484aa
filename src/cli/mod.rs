pub mod batch;
pub mod completions;
pub mod init;
pub mod pair;
pub mod split;

use clap::{Args, Parser, Subcommand};

use crate::types::{SegmentConfig, SelectionMode};

/// seal - Cut individual stickers out of sticker sheets
#[derive(Parser, Debug)]
#[command(name = "seal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print configuration and per-sticker details
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split one sheet into numbered sticker PNGs
    Split(split::SplitArgs),

    /// Split two sheets for one character with continuous numbering
    Pair(pair::PairArgs),

    /// Split every sheet found in files or directories
    Batch(batch::BatchArgs),

    /// Write a seal.yaml with the default settings
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Detection flags shared by every splitting command.
///
/// Unset flags leave the underlying preset or seal.yaml value alone.
#[derive(Args, Debug, Clone, Default)]
pub struct SegmentArgs {
    /// Alpha threshold 0-254 (lower is more sensitive)
    #[arg(long)]
    pub threshold: Option<u32>,

    /// Minimum sticker width and height in pixels
    #[arg(long)]
    pub min_size: Option<u32>,

    /// Margin kept around each sticker in pixels
    #[arg(long)]
    pub padding: Option<u32>,

    /// How stickers are ordered and limited
    #[arg(long, value_enum)]
    pub mode: Option<SelectionMode>,

    /// Maximum stickers kept in largest-first mode
    #[arg(long)]
    pub cap: Option<usize>,

    /// Row band height for reading-order sorting
    #[arg(long)]
    pub row_bucket: Option<u32>,
}

impl SegmentArgs {
    /// Overlay the flags that were given onto `base`.
    pub fn apply(&self, base: SegmentConfig) -> SegmentConfig {
        SegmentConfig {
            threshold: self.threshold.unwrap_or(base.threshold),
            min_size: self.min_size.unwrap_or(base.min_size),
            padding: self.padding.unwrap_or(base.padding),
            mode: self.mode.unwrap_or(base.mode),
            cap: self.cap.unwrap_or(base.cap),
            row_bucket: self.row_bucket.unwrap_or(base.row_bucket),
        }
    }
}
