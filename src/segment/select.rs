//! Noise filtering and result ordering.

use crate::types::{Region, SegmentConfig, SelectionMode};

/// Drop regions whose width or height is below `min_size`.
pub fn filter_small(regions: Vec<Region>, min_size: u32) -> Vec<Region> {
    regions
        .into_iter()
        .filter(|r| r.w >= min_size && r.h >= min_size)
        .collect()
}

/// Sort into reading order: coarse row band (`y / row_bucket`), then `x`.
///
/// Stable, so regions sharing a band and column keep discovery order.
pub fn reading_order(regions: &mut [Region], row_bucket: u32) {
    let bucket = row_bucket.max(1);
    regions.sort_by_key(|r| (r.y / bucket, r.x));
}

/// Keep the `cap` largest regions by `area`, largest first.
///
/// Equal areas keep discovery order.
pub fn largest_first(regions: &mut Vec<Region>, cap: usize) {
    regions.sort_by(|a, b| b.area.cmp(&a.area));
    regions.truncate(cap);
}

/// Apply the configured selection policy.
pub fn select(mut regions: Vec<Region>, config: &SegmentConfig) -> Vec<Region> {
    match config.mode {
        SelectionMode::ReadingOrder => reading_order(&mut regions, config.row_bucket),
        SelectionMode::LargestFirst => largest_first(&mut regions, config.cap),
    }
    regions
}
