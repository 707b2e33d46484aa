//! Connected-component scan.
//!
//! Pixels are visited in row-major order. Each unvisited foreground pixel
//! seeds a breadth-first flood fill over its 4-connected neighbours. Pixels
//! are marked when enqueued, so every pixel enters the queue at most once
//! and the whole scan is linear in the image area.

use std::collections::VecDeque;

use crate::types::{OpacityGrid, Region};

/// Find every 4-connected region of cells with opacity >= `threshold`.
///
/// Regions come back in discovery order: the order in which the row-major
/// scan first touches each component.
pub fn find_regions(grid: &OpacityGrid, threshold: u8) -> Vec<Region> {
    let width = grid.width() as usize;
    let height = grid.height() as usize;
    let values = grid.values();

    let mut visited = vec![false; width * height];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut regions = Vec::new();

    for seed in 0..width * height {
        if visited[seed] || values[seed] < threshold {
            continue;
        }

        visited[seed] = true;
        queue.push_back(seed);

        let (mut min_x, mut min_y) = (seed % width, seed / width);
        let (mut max_x, mut max_y) = (min_x, min_y);
        let mut pixels = 0u64;

        while let Some(idx) = queue.pop_front() {
            let (x, y) = (idx % width, idx / width);
            pixels += 1;
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);

            // up, down, left, right
            let neighbours = [
                (y > 0).then(|| idx - width),
                (y + 1 < height).then(|| idx + width),
                (x > 0).then(|| idx - 1),
                (x + 1 < width).then(|| idx + 1),
            ];
            for n in neighbours.into_iter().flatten() {
                if !visited[n] && values[n] >= threshold {
                    visited[n] = true;
                    queue.push_back(n);
                }
            }
        }

        let mut region = Region::new(
            min_x as u32,
            min_y as u32,
            (max_x - min_x + 1) as u32,
            (max_y - min_y + 1) as u32,
        );
        region.pixels = pixels;
        regions.push(region);
    }

    regions
}
