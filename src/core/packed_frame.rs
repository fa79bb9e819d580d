use std::convert::Infallible;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Point, Size};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::Pixel;

use super::bounds::{DisplayBounds, PAGE_HEIGHT};

/// 1-bit frame in the panel's native memory layout.
///
/// Eight vertically adjacent pixels share one byte, bit 0 being the topmost
/// row. Bytes run left to right across a page of eight rows, pages run top
/// to bottom, so pixel (x, y) lives at byte `(y / 8) * width + x`.
#[derive(Clone, PartialEq, Eq)]
pub struct PackedFrame {
    bounds: DisplayBounds,
    buffer: Vec<u8>,
}

impl PackedFrame {
    /// Create frame with every pixel off
    pub fn new(bounds: DisplayBounds) -> Self {
        Self {
            bounds,
            buffer: vec![0; bounds.buffer_size()],
        }
    }

    pub fn bounds(&self) -> DisplayBounds {
        self.bounds
    }

    pub fn width(&self) -> u32 {
        self.bounds.width
    }

    pub fn height(&self) -> u32 {
        self.bounds.height
    }

    /// Byte holding pixel (x, y)
    #[inline]
    pub fn byte_offset(&self, x: u32, y: u32) -> usize {
        ((y / PAGE_HEIGHT) * self.bounds.width + x) as usize
    }

    /// Bit selecting row `y` within its byte
    #[inline]
    pub fn bit_mask(y: u32) -> u8 {
        1 << (y % PAGE_HEIGHT)
    }

    /// Pixel state; off outside the frame
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        self.buffer[self.byte_offset(x, y)] & Self::bit_mask(y) != 0
    }

    /// Set or clear a pixel, ignored outside the frame
    pub fn set_pixel(&mut self, x: u32, y: u32, on: bool) {
        if !self.contains(x, y) {
            return;
        }
        let offset = self.byte_offset(x, y);
        let mask = Self::bit_mask(y);
        if on {
            self.buffer[offset] |= mask;
        } else {
            self.buffer[offset] &= !mask;
        }
    }

    /// Raw packed bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Bytes of one 8-row page, one per column; `None` past the last page
    pub fn page(&self, index: u32) -> Option<&[u8]> {
        let width = self.bounds.width as usize;
        let start = (index as usize).checked_mul(width)?;
        self.buffer.get(start..start.checked_add(width)?)
    }

    /// Number of pixels switched on
    pub fn count_on(&self) -> usize {
        let mut count = 0;
        for y in 0..self.bounds.height {
            for x in 0..self.bounds.width {
                if self.pixel(x, y) {
                    count += 1;
                }
            }
        }
        count
    }

    fn contains(&self, x: u32, y: u32) -> bool {
        x < self.bounds.width && y < self.bounds.height
    }
}

impl std::fmt::Debug for PackedFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackedFrame")
            .field("width", &self.bounds.width)
            .field("height", &self.bounds.height)
            .field("on", &self.count_on())
            .finish()
    }
}

impl OriginDimensions for PackedFrame {
    fn size(&self) -> Size {
        self.bounds.size()
    }
}

impl DrawTarget for PackedFrame {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }
            self.set_pixel(x as u32, y as u32, color.is_on());
        }
        Ok(())
    }
}
