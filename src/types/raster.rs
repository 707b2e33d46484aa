//! Decoded raster images.
//!
//! A `Raster` is the engine's input: an 8-bit, row-major, interleaved pixel
//! buffer with either three (RGB) or four (RGBA) channels. Decoding and
//! encoding go through the `image` crate.

use std::path::Path;

use image::{DynamicImage, RgbImage, RgbaImage};

use crate::error::{Result, SealError};

/// Channel layout of a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channels {
    Rgb,
    Rgba,
}

impl Channels {
    /// Number of interleaved bytes per pixel.
    pub const fn count(self) -> usize {
        match self {
            Channels::Rgb => 3,
            Channels::Rgba => 4,
        }
    }

    pub const fn has_alpha(self) -> bool {
        matches!(self, Channels::Rgba)
    }
}

/// An owned 8-bit image buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    channels: Channels,
    data: Vec<u8>,
}

impl Raster {
    /// Wrap a pixel buffer, checking that its length matches the dimensions.
    pub fn new(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * channels.count();
        if data.len() != expected {
            return Err(SealError::InvalidRaster {
                message: format!(
                    "buffer holds {} bytes, {}x{} {:?} needs {}",
                    data.len(),
                    width,
                    height,
                    channels,
                    expected
                ),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// A raster with every byte set to `fill`.
    pub fn filled(width: u32, height: u32, channels: Channels, fill: u8) -> Self {
        let len = width as usize * height as usize * channels.count();
        Self {
            width,
            height,
            channels,
            data: vec![fill; len],
        }
    }

    /// Decode an image file.
    pub fn open(path: &Path) -> Result<Self> {
        let img = image::open(path).map_err(|e| SealError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self::from(img))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> Channels {
        self.channels
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Bytes of the pixel at (x, y), or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let c = self.channels.count();
        let start = (y as usize * self.width as usize + x as usize) * c;
        Some(&self.data[start..start + c])
    }

    /// Overwrite the pixel at (x, y). Out-of-bounds writes are ignored.
    pub fn put_pixel(&mut self, x: u32, y: u32, value: &[u8]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let c = self.channels.count();
        let start = (y as usize * self.width as usize + x as usize) * c;
        let n = c.min(value.len());
        self.data[start..start + n].copy_from_slice(&value[..n]);
    }

    /// Fill the rectangle [x, x+w) × [y, y+h) with one pixel value.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, value: &[u8]) {
        for py in y..y.saturating_add(h) {
            for px in x..x.saturating_add(w) {
                self.put_pixel(px, py, value);
            }
        }
    }

    /// Copy the rectangle [x, x+w) × [y, y+h) into a new raster.
    ///
    /// The caller guarantees the rectangle lies inside the image.
    pub fn sub_raster(&self, x: u32, y: u32, w: u32, h: u32) -> Raster {
        debug_assert!(x + w <= self.width && y + h <= self.height);
        let c = self.channels.count();
        let row_bytes = w as usize * c;
        let mut data = Vec::with_capacity(row_bytes * h as usize);
        for row in y..y + h {
            let start = (row as usize * self.width as usize + x as usize) * c;
            data.extend_from_slice(&self.data[start..start + row_bytes]);
        }
        Raster {
            width: w,
            height: h,
            channels: self.channels,
            data,
        }
    }

    /// Convert into an `image` buffer for encoding.
    pub fn to_dynamic(&self) -> Result<DynamicImage> {
        let invalid = || SealError::InvalidRaster {
            message: format!("{}x{} buffer could not be wrapped", self.width, self.height),
        };
        let img = match self.channels {
            Channels::Rgb => DynamicImage::ImageRgb8(
                RgbImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(invalid)?,
            ),
            Channels::Rgba => DynamicImage::ImageRgba8(
                RgbaImage::from_raw(self.width, self.height, self.data.clone())
                    .ok_or_else(invalid)?,
            ),
        };
        Ok(img)
    }
}

impl From<DynamicImage> for Raster {
    /// Alpha-carrying images become RGBA, everything else RGB.
    fn from(img: DynamicImage) -> Self {
        let (width, height) = (img.width(), img.height());
        if img.color().has_alpha() {
            Self {
                width,
                height,
                channels: Channels::Rgba,
                data: img.into_rgba8().into_raw(),
            }
        } else {
            Self {
                width,
                height,
                channels: Channels::Rgb,
                data: img.into_rgb8().into_raw(),
            }
        }
    }
}
