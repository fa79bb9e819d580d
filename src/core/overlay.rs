use embedded_graphics::geometry::Point;
use embedded_graphics::mono_font::iso_8859_1::FONT_7X13;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::Drawable;

use super::bounds::DisplayBounds;
use super::packed_frame::PackedFrame;

/// Monospace font used for status text
pub static FONT: &MonoFont<'static> = &FONT_7X13;

/// Horizontal advance of one character in pixels
pub const GLYPH_WIDTH: u32 = 7;

/// Height of one character cell in pixels
pub const GLYPH_HEIGHT: u32 = 13;

/// Top-left corner of `text` anchored bottom-right on `bounds`.
/// Width counts characters, not bytes.
pub fn anchor_bottom_right(bounds: DisplayBounds, text: &str) -> Point {
    let advance = text.chars().count() as u64 * u64::from(GLYPH_WIDTH);
    let x = if advance > u64::from(bounds.width) {
        0
    } else {
        bounds.width as i32 - advance as i32
    };
    let y = bounds.height as i32 - 1 - GLYPH_HEIGHT as i32;

    Point::new(x, y)
}

/// Rasterizes status text bottom-right onto a packed frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TextOverlay;

impl TextOverlay {
    /// Position the text's top-left corner lands on
    pub fn position(&self, bounds: DisplayBounds, text: &str) -> Point {
        anchor_bottom_right(bounds, text)
    }

    /// OR the glyphs onto `frame`; existing on pixels are never cleared
    pub fn draw(&self, frame: &mut PackedFrame, text: &str) {
        if text.is_empty() {
            return;
        }
        let position = self.position(frame.bounds(), text);
        draw_text(frame, text, position);
    }
}

/// Draw `text` with its top-left corner at `position`, foreground only
pub fn draw_text(frame: &mut PackedFrame, text: &str, position: Point) {
    let style = MonoTextStyle::new(FONT, BinaryColor::On);
    // Drawing into a PackedFrame cannot fail
    let _ = Text::with_baseline(text, position, style, Baseline::Top).draw(frame);
}
