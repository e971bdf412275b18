//! Decoded avatar images and PNG input/output.

use std::io::Cursor;
use std::path::Path;

use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};
use tiny_skia::Pixmap;

use crate::error::{MonogramError, Result, Unavailable};
use crate::types::Colour;

/// A decoded avatar: straight-alpha RGBA pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pixels: RgbaImage,
}

impl RasterImage {
    /// Wrap an existing pixel buffer.
    pub fn new(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    /// Copy a premultiplied tiny-skia canvas into straight alpha.
    pub fn from_pixmap(pixmap: &Pixmap) -> Self {
        let mut pixels: RgbaImage = ImageBuffer::new(pixmap.width(), pixmap.height());
        for (target, source) in pixels.pixels_mut().zip(pixmap.pixels()) {
            let c = source.demultiply();
            *target = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        Self { pixels }
    }

    /// Decode PNG (or any other enabled format) bytes.
    pub fn decode(bytes: &[u8]) -> std::result::Result<Self, Unavailable> {
        let decoded = image::load_from_memory(bytes).map_err(|e| Unavailable::Decode(e.to_string()))?;
        Ok(Self {
            pixels: decoded.to_rgba8(),
        })
    }

    /// Encode as PNG bytes.
    pub fn to_png(&self) -> std::result::Result<Vec<u8>, Unavailable> {
        let mut bytes = Cursor::new(Vec::new());
        self.pixels
            .write_to(&mut bytes, ImageFormat::Png)
            .map_err(|e| Unavailable::Encode(e.to_string()))?;
        Ok(bytes.into_inner())
    }

    /// Write the image to a PNG file.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.pixels
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| MonogramError::Io {
                path: path.to_path_buf(),
                message: format!("Failed to write PNG: {}", e),
            })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// RGBA value at a position, if inside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixels.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Check if every pixel of the image is one opaque colour.
    pub fn is_solid(&self, colour: Colour) -> bool {
        let rgba = colour.to_rgba();
        self.pixels.pixels().all(|p| p.0 == rgba)
    }

    /// Borrow the underlying pixel buffer.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}
