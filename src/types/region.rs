//! Detected regions, crop rectangles and output tiles.

use serde::Serialize;

use super::Raster;

/// Bounding box of one connected foreground component.
///
/// `[x, x + w) × [y, y + h)` is the smallest rectangle containing every
/// pixel of the component. `area` is the ranking key: it starts as `w * h`
/// and is replaced by the padded, clipped crop area before selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub area: u64,
    /// Foreground pixels claimed by the flood fill.
    #[serde(skip)]
    pub pixels: u64,
}

impl Region {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            x,
            y,
            w,
            h,
            area: w as u64 * h as u64,
            pixels: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}

/// Half-open crop rectangle `[x1, x2) × [y1, y2)` inside the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CropRect {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl CropRect {
    pub fn width(&self) -> u32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> u32 {
        self.y2 - self.y1
    }

    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }
}

/// One cut-out sticker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// 1-based position in the output sequence.
    pub index: usize,
    pub image: Raster,
    /// Unpadded bounding box in source coordinates.
    pub bbox: Region,
    /// Rectangle actually copied out of the source.
    pub crop: CropRect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_area_defaults_to_box() {
        let r = Region::new(1, 2, 3, 4);
        assert_eq!(r.area, 12);
        assert!(r.contains(1, 2));
        assert!(r.contains(3, 5));
        assert!(!r.contains(4, 5));
    }

    #[test]
    fn test_crop_rect_dimensions() {
        let c = CropRect {
            x1: 2,
            y1: 0,
            x2: 10,
            y2: 5,
        };
        assert_eq!((c.width(), c.height(), c.area()), (8, 5, 40));
    }
}
