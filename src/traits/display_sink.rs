use embedded_graphics::geometry::Point;
use embedded_graphics::primitives::Rectangle;

use crate::core::PackedFrame;
use crate::error::Result;

/// Monochrome panel of known size that accepts packed frames
pub trait DisplaySink {
    /// Panel rectangle in pixels, anchored at the origin
    fn bounds(&self) -> Rectangle;

    /// Push the part of `frame` starting at `origin` into `target` on the panel.
    /// Transport failures are reported as `MonitorError::Io`.
    fn draw(&mut self, target: Rectangle, frame: &PackedFrame, origin: Point) -> Result<()>;
}

impl<T: DisplaySink + ?Sized> DisplaySink for Box<T> {
    fn bounds(&self) -> Rectangle {
        (**self).bounds()
    }

    fn draw(&mut self, target: Rectangle, frame: &PackedFrame, origin: Point) -> Result<()> {
        (**self).draw(target, frame, origin)
    }
}
