use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::PointsIter;
use embedded_graphics::transform::Transform;
use serde::{Deserialize, Serialize};

use super::bounds::DisplayBounds;
use super::image::{Image, Rgba};
use super::packed_frame::PackedFrame;

/// Rule deciding whether a source color lights a panel pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThresholdRule {
    /// On when any alpha-premultiplied channel reaches half intensity
    #[default]
    AnyChannel,
    /// On when premultiplied Rec.601 luma is at least the given level
    Luminance(u8),
}

impl ThresholdRule {
    pub fn is_on(&self, color: Rgba) -> bool {
        let [r, g, b, a] = color;
        match self {
            ThresholdRule::AnyChannel => {
                // 16-bit premultiplied channels, high bit set means on
                let a16 = u32::from(a) * 0x101;
                [r, g, b]
                    .iter()
                    .any(|&c| u32::from(c) * 0x101 * a16 / 0xffff >= 0x8000)
            }
            ThresholdRule::Luminance(level) => {
                let premul = |c: u8| u32::from(c) * u32::from(a) / 255;
                let luma = (299 * premul(r) + 587 * premul(g) + 114 * premul(b)) / 1000;
                luma >= u32::from(*level)
            }
        }
    }
}

/// Offset placing `src` centered on `bounds`; negative when the source is larger
pub fn centering_offset(bounds: DisplayBounds, src: Size) -> Point {
    Point::new(
        (bounds.width as i32 - src.width as i32) / 2,
        (bounds.height as i32 - src.height as i32) / 2,
    )
}

/// Threshold `src` into a fresh frame of `bounds` size, centered.
///
/// A smaller source leaves an off border, a larger one is cropped evenly.
/// Every pixel outside the placed source stays off.
pub fn pack(bounds: DisplayBounds, src: &Image, rule: ThresholdRule) -> PackedFrame {
    let mut frame = PackedFrame::new(bounds);
    if bounds.is_empty() || src.is_empty() {
        return frame;
    }

    let offset = centering_offset(bounds, src.size());
    let placed = src.bounds().translate(offset).intersection(&bounds.rectangle());

    for point in placed.points() {
        let color = src.pixel_at(point - offset);
        frame.set_pixel(point.x as u32, point.y as u32, rule.is_on(color));
    }

    frame
}
