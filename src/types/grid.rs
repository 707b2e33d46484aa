//! Per-pixel opacity grid.

/// Width × height opacity values in [0, 255], row-major.
///
/// Built once per segmentation call and dropped when the call returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpacityGrid {
    width: u32,
    height: u32,
    values: Vec<u8>,
}

impl OpacityGrid {
    /// Grid with every cell set to zero.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            values: vec![0; width as usize * height as usize],
        }
    }

    /// Wrap precomputed values. Returns `None` when the length is wrong.
    pub fn from_values(width: u32, height: u32, values: Vec<u8>) -> Option<Self> {
        if values.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            values,
        })
    }

    /// Wrap values whose length the caller already guarantees.
    pub(crate) fn from_raw(width: u32, height: u32, values: Vec<u8>) -> Self {
        debug_assert_eq!(values.len(), width as usize * height as usize);
        Self {
            width,
            height,
            values,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.values[y as usize * self.width as usize + x as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        let idx = y as usize * self.width as usize + x as usize;
        self.values[idx] = value;
    }

    /// Set every cell in [x, x+w) × [y, y+h), clipped to the grid.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, value: u8) {
        let x2 = x.saturating_add(w).min(self.width);
        let y2 = y.saturating_add(h).min(self.height);
        for py in y..y2 {
            for px in x..x2 {
                self.set(px, py, value);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn count_at_least(&self, threshold: u8) -> usize {
        self.values.iter().filter(|&&v| v >= threshold).count()
    }
}
