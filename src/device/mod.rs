//! Panel hardware: SSD1306 driver and Linux bus setup.

pub mod bus;
pub mod ssd1306;

pub use bus::{bus_path, open_panel};
pub use ssd1306::{PanelOptions, Ssd1306, DEFAULT_ADDRESS};
