//! Foreground mask construction.

use crate::types::{Channels, OpacityGrid, Raster};

/// Gray level at or above which an RGB pixel counts as paper-white background.
pub const WHITE_CUTOFF: u8 = 250;

/// BT.601 luma weights in 14-bit fixed point (sum = 1 << 14).
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;

/// Rounded BT.601 luma of an RGB triple.
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * LUMA_R + g as u32 * LUMA_G + b as u32 * LUMA_B + (1 << 13)) >> 14) as u8
}

/// Build the opacity grid for a raster.
///
/// RGBA rasters use their alpha channel verbatim. RGB rasters have no
/// transparency, so near-white pixels become 0 and everything else 255.
pub fn opacity_grid(raster: &Raster) -> OpacityGrid {
    let values: Vec<u8> = match raster.channels() {
        Channels::Rgba => raster.data().chunks_exact(4).map(|p| p[3]).collect(),
        Channels::Rgb => raster
            .data()
            .chunks_exact(3)
            .map(|p| {
                if luma(p[0], p[1], p[2]) < WHITE_CUTOFF {
                    255
                } else {
                    0
                }
            })
            .collect(),
    };

    // Raster construction enforces width * height pixels.
    OpacityGrid::from_raw(raster.width(), raster.height(), values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_extremes() {
        assert_eq!(luma(0, 0, 0), 0);
        assert_eq!(luma(255, 255, 255), 255);
        assert_eq!(luma(255, 0, 0), 76);
    }

    #[test]
    fn test_alpha_used_verbatim() {
        let mut r = Raster::filled(3, 1, Channels::Rgba, 0);
        r.put_pixel(0, 0, &[255, 255, 255, 7]);
        r.put_pixel(2, 0, &[0, 0, 0, 200]);
        let grid = opacity_grid(&r);
        assert_eq!(grid.values(), &[7, 0, 200]);
    }

    #[test]
    fn test_rgb_white_is_background() {
        let mut r = Raster::filled(4, 1, Channels::Rgb, 255);
        r.put_pixel(1, 0, &[0, 0, 0]);
        r.put_pixel(2, 0, &[249, 249, 249]);
        r.put_pixel(3, 0, &[250, 250, 250]);
        let grid = opacity_grid(&r);
        assert_eq!(grid.values(), &[0, 255, 255, 0]);
    }

    #[test]
    fn test_grid_matches_raster_dimensions() {
        let r = Raster::filled(7, 3, Channels::Rgb, 0);
        let grid = opacity_grid(&r);
        assert_eq!((grid.width(), grid.height()), (7, 3));
        assert_eq!(grid.values().len(), 21);
        assert!(grid.values().iter().all(|&v| v == 255));
    }

    #[test]
    fn test_empty_raster() {
        let r = Raster::filled(0, 0, Channels::Rgb, 0);
        let grid = opacity_grid(&r);
        assert!(grid.values().is_empty());
    }
}
