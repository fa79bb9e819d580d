pub mod cli;
pub mod config;
pub mod core;
pub mod device;
pub mod error;
pub mod loaders;
pub mod refresh;
pub mod status;
pub mod tick;
pub mod traits;

pub use embedded_graphics::geometry::{Point, Size};
pub use embedded_graphics::primitives::Rectangle;

pub use crate::core::{DisplayBounds, FrameComposer, Image, PackedFrame, ThresholdRule};
pub use error::{MonitorError, Result};
pub use refresh::{LoopState, RefreshLoop, StopHandle};
pub use status::{format_status, SystemStatus};
pub use traits::{DisplaySink, StatusProvider};
