//! Image preparation pipeline: resample, pack, overlay, compose.

pub mod bounds;
pub mod clock;
pub mod composer;
pub mod image;
pub mod overlay;
pub mod pack;
pub mod packed_frame;
pub mod resample;

pub use bounds::{DisplayBounds, PAGE_HEIGHT};
pub use clock::Clock;
pub use composer::FrameComposer;
pub use image::{Image, Rgba, BLACK, TRANSPARENT, WHITE};
pub use overlay::{anchor_bottom_right, draw_text, TextOverlay, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use pack::{centering_offset, pack, ThresholdRule};
pub use packed_frame::PackedFrame;
pub use resample::{resize, source_coord};
