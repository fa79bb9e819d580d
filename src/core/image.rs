use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::error::{MonitorError, Result};

/// RGBA color, straight (non-premultiplied) alpha
pub type Rgba = [u8; 4];

/// Fully transparent black, returned for samples outside the image
pub const TRANSPARENT: Rgba = [0, 0, 0, 0];

/// Opaque black
pub const BLACK: Rgba = [0, 0, 0, 255];

/// Opaque white
pub const WHITE: Rgba = [255, 255, 255, 255];

/// Source bitmap - RGBA pixel grid with its origin at (0, 0)
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    /// RGBA pixel buffer, row-major
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl Image {
    /// Create transparent image with dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, TRANSPARENT)
    }

    /// Create image with every pixel set to one color
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        let mut pixels = Vec::with_capacity(pixel_count * 4);
        for _ in 0..pixel_count {
            pixels.extend_from_slice(&color);
        }

        Self { pixels, width, height }
    }

    /// Wrap an existing RGBA buffer
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if pixels.len() != expected {
            return Err(MonitorError::Image(format!(
                "buffer holds {} bytes, {}x{} RGBA needs {}",
                pixels.len(),
                width,
                height,
                expected
            )));
        }

        Ok(Self { pixels, width, height })
    }

    /// Build image by evaluating `f(x, y)` for every pixel
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgba) -> Self {
        let mut pixels = Vec::with_capacity((width as usize) * (height as usize) * 4);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&f(x, y));
            }
        }

        Self { pixels, width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Bounding rectangle, always anchored at the origin
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), self.size())
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Color at (x, y); transparent black outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        match self.index(x, y) {
            Some(idx) => [
                self.pixels[idx],
                self.pixels[idx + 1],
                self.pixels[idx + 2],
                self.pixels[idx + 3],
            ],
            None => TRANSPARENT,
        }
    }

    /// Color at a signed point; transparent black outside the image
    pub fn pixel_at(&self, point: Point) -> Rgba {
        if point.x < 0 || point.y < 0 {
            return TRANSPARENT;
        }
        self.pixel(point.x as u32, point.y as u32)
    }

    /// Set single pixel, ignored outside the image
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx..idx + 4].copy_from_slice(&color);
        }
    }

    /// Raw RGBA buffer
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
