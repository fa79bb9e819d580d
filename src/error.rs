//! Error taxonomy for the monitor.

use thiserror::Error;

/// Result type alias for monitor operations.
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Error type for monitor operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonitorError {
    /// Bad panel open/configure or invalid settings. Fatal at startup.
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport failure while presenting a frame. Fatal to the refresh loop.
    #[error("display I/O error: {0}")]
    Io(String),

    /// Hostname or interface address lookup failed. Recovered by the caller.
    #[error("lookup failed: {0}")]
    Lookup(String),

    /// Geometry that cannot be rendered (zero-sized, or larger than the panel).
    #[error("invalid bounds {width}x{height}")]
    InvalidBounds { width: u32, height: u32 },

    /// Source bitmap could not be decoded.
    #[error("image error: {0}")]
    Image(String),
}

impl MonitorError {
    /// Whether the error must stop the process (or the refresh loop).
    pub fn is_fatal(&self) -> bool {
        !matches!(self, MonitorError::Lookup(_))
    }
}
