//! End-to-end: encode a sheet, decode it, split it and read the tiles back.

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use seal::{segment, write_tiles, Raster, SegmentConfig, SelectionMode};

fn fill(img: &mut RgbaImage, x0: u32, y0: u32, w: u32, h: u32, colour: [u8; 4]) {
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            img.put_pixel(x, y, Rgba(colour));
        }
    }
}

#[test]
fn transparent_sheet_reading_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sheet.png");

    let mut img = RgbaImage::from_pixel(400, 260, Rgba([0, 0, 0, 0]));
    fill(&mut img, 300, 20, 60, 50, [255, 0, 0, 255]);
    fill(&mut img, 20, 40, 80, 40, [0, 255, 0, 255]);
    fill(&mut img, 150, 150, 40, 90, [0, 0, 255, 255]);
    // Speckle below min-size is dropped.
    fill(&mut img, 5, 200, 3, 3, [9, 9, 9, 255]);
    img.save(&path).unwrap();

    let raster = Raster::open(&path).unwrap();
    let tiles = segment(&raster, &SegmentConfig::default()).unwrap();

    let boxes: Vec<(u32, u32, u32, u32)> = tiles
        .iter()
        .map(|t| (t.bbox.x, t.bbox.y, t.bbox.w, t.bbox.h))
        .collect();
    assert_eq!(
        boxes,
        vec![(20, 40, 80, 40), (300, 20, 60, 50), (150, 150, 40, 90)]
    );

    let out = dir.path().join("out");
    let written = write_tiles(&tiles, &out, "sticker", 1).unwrap();
    assert_eq!(written.len(), 3);

    let first = image::open(&written[0]).unwrap().to_rgba8();
    assert_eq!((first.width(), first.height()), (80, 40));
    assert_eq!(first.get_pixel(0, 0).0, [0, 255, 0, 255]);
}

#[test]
fn white_sheet_largest_first_with_padding() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sheet.png");

    let mut img = RgbImage::from_pixel(300, 300, Rgb([255, 255, 255]));
    for (x0, y0, side) in [(10u32, 10u32, 100u32), (150, 10, 120), (10, 150, 110)] {
        for y in y0..y0 + side {
            for x in x0..x0 + side {
                img.put_pixel(x, y, Rgb([20, 20, 20]));
            }
        }
    }
    img.save(&path).unwrap();

    let raster = Raster::open(&path).unwrap();
    assert!(!raster.channels().has_alpha());

    let config = SegmentConfig {
        cap: 2,
        ..SegmentConfig::largest_first()
    };
    assert_eq!(config.mode, SelectionMode::LargestFirst);

    let tiles = segment(&raster, &config).unwrap();
    let sizes: Vec<(u32, u32)> = tiles
        .iter()
        .map(|t| (t.image.width(), t.image.height()))
        .collect();
    assert_eq!(sizes, vec![(130, 130), (120, 120)]);
    assert_eq!(tiles[0].bbox.x, 150);
}
