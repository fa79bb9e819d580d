use crate::error::{MonitorError, Result};

use super::bounds::DisplayBounds;
use super::image::Image;
use super::overlay::TextOverlay;
use super::pack::{pack, ThresholdRule};
use super::packed_frame::PackedFrame;
use super::resample::resize;

/// Composer runs resize -> pack -> text overlay into one panel frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameComposer {
    threshold: ThresholdRule,
    overlay: TextOverlay,
}

impl FrameComposer {
    /// Create composer with the default threshold and bottom-right text
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: ThresholdRule) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> ThresholdRule {
        self.threshold
    }

    /// Full composition: scale source to the panel, threshold, overlay status
    ///
    /// Deterministic for identical inputs. Zero-sized bounds are rejected
    /// instead of producing a frame the panel cannot accept.
    pub fn compose(&self, bounds: DisplayBounds, source: &Image, status: &str) -> Result<PackedFrame> {
        if bounds.is_empty() {
            return Err(MonitorError::InvalidBounds {
                width: bounds.width,
                height: bounds.height,
            });
        }

        let resized = resize(source, bounds.size());
        let mut frame = pack(bounds, &resized, self.threshold);
        self.overlay.draw(&mut frame, status);

        Ok(frame)
    }
}
