use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// Rows of pixels packed into one byte
pub const PAGE_HEIGHT: u32 = 8;

/// Display bounds - physical panel dimensions, queried once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayBounds {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl DisplayBounds {
    /// Create new display bounds
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Bounds of a rectangle reported by a panel
    pub fn from_rectangle(rect: &Rectangle) -> Self {
        Self::new(rect.size.width, rect.size.height)
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    /// Number of 8-row pages, rounding a partial page up
    pub fn pages(&self) -> u32 {
        self.height.div_ceil(PAGE_HEIGHT)
    }

    /// Total size in bytes for a 1-bit vertically packed buffer
    pub fn buffer_size(&self) -> usize {
        (self.width * self.pages()) as usize
    }

    /// True when either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Rectangle anchored at the origin
    pub fn rectangle(&self) -> Rectangle {
        Rectangle::new(Point::zero(), self.size())
    }
}

impl From<Size> for DisplayBounds {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}
