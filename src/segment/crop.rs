//! Padded cropping.

use crate::types::{CropRect, Raster, Region, Tile};

/// Expand `region` by `padding` on every side and clip to the image.
pub fn crop_rect(region: &Region, padding: u32, width: u32, height: u32) -> CropRect {
    CropRect {
        x1: region.x.saturating_sub(padding),
        y1: region.y.saturating_sub(padding),
        x2: region
            .x
            .saturating_add(region.w)
            .saturating_add(padding)
            .min(width),
        y2: region
            .y
            .saturating_add(region.h)
            .saturating_add(padding)
            .min(height),
    }
}

/// Replace each region's `area` with the area of its padded, clipped crop.
pub fn measure(regions: &mut [Region], padding: u32, width: u32, height: u32) {
    for region in regions {
        region.area = crop_rect(region, padding, width, height).area();
    }
}

/// Cut every region out of `raster`, numbering tiles from 1 in input order.
pub fn crop_tiles(raster: &Raster, regions: &[Region], padding: u32) -> Vec<Tile> {
    regions
        .iter()
        .enumerate()
        .map(|(i, region)| {
            let crop = crop_rect(region, padding, raster.width(), raster.height());
            Tile {
                index: i + 1,
                image: raster.sub_raster(crop.x1, crop.y1, crop.width(), crop.height()),
                bbox: *region,
                crop,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Channels;

    #[test]
    fn test_crop_rect_without_padding() {
        let rect = crop_rect(&Region::new(1, 1, 3, 3), 0, 8, 8);
        assert_eq!((rect.x1, rect.y1, rect.x2, rect.y2), (1, 1, 4, 4));
    }

    #[test]
    fn test_crop_rect_clips_to_bounds() {
        let rect = crop_rect(&Region::new(1, 2, 6, 5), 5, 8, 8);
        assert_eq!((rect.x1, rect.y1, rect.x2, rect.y2), (0, 0, 8, 8));
    }

    #[test]
    fn test_measure_uses_clipped_area() {
        let mut regions = vec![Region::new(0, 0, 10, 10), Region::new(50, 50, 10, 10)];
        measure(&mut regions, 5, 100, 100);
        // Corner region loses its top/left padding.
        assert_eq!(regions[0].area, 15 * 15);
        assert_eq!(regions[1].area, 20 * 20);
    }

    #[test]
    fn test_crop_tiles_copies_pixels() {
        let mut raster = Raster::filled(6, 6, Channels::Rgba, 0);
        raster.fill_rect(2, 2, 2, 2, &[10, 20, 30, 255]);

        let tiles = crop_tiles(&raster, &[Region::new(2, 2, 2, 2)], 1);
        assert_eq!(tiles.len(), 1);

        let tile = &tiles[0];
        assert_eq!(tile.index, 1);
        assert_eq!((tile.image.width(), tile.image.height()), (4, 4));
        assert_eq!(tile.image.pixel(0, 0), Some(&[0u8, 0, 0, 0][..]));
        assert_eq!(tile.image.pixel(1, 1), Some(&[10u8, 20, 30, 255][..]));
        assert_eq!(tile.bbox, Region::new(2, 2, 2, 2));
    }

    #[test]
    fn test_crop_tiles_keeps_channel_count() {
        let raster = Raster::filled(4, 4, Channels::Rgb, 0);
        let tiles = crop_tiles(&raster, &[Region::new(0, 0, 4, 4)], 0);
        assert_eq!(tiles[0].image.channels(), Channels::Rgb);
    }
}
