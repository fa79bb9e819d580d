pub mod display_sink;
pub mod status_provider;

pub use display_sink::*;
pub use status_provider::*;
