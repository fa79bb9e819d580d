use std::path::PathBuf;

use linux_embedded_hal::I2cdev;
use log::{info, warn};

use super::ssd1306::{PanelOptions, Ssd1306};
use crate::error::{MonitorError, Result};

/// Device node for a bus given as a number (`1`) or a full path
pub fn bus_path(bus: &str) -> PathBuf {
    if bus.starts_with('/') {
        PathBuf::from(bus)
    } else {
        PathBuf::from(format!("/dev/i2c-{}", bus))
    }
}

/// Open the I2C character device and bring the panel up.
/// Any failure here is a configuration error.
pub fn open_panel(bus: &str, address: u8, speed_hz: u32, options: PanelOptions) -> Result<Ssd1306<I2cdev>> {
    let path = bus_path(bus);
    let i2c = I2cdev::new(&path)
        .map_err(|e| MonitorError::Config(format!("cannot open {}: {}", path.display(), e)))?;

    if speed_hz != 0 {
        warn!(
            "bus speed {} Hz requested, but {} is clocked by the kernel driver; ignoring",
            speed_hz,
            path.display()
        );
    }

    info!("using {} address {:#04x}", path.display(), address);

    Ssd1306::new(i2c, address, options).map_err(|err| match err {
        MonitorError::Io(msg) => MonitorError::Config(format!("panel configuration failed: {}", msg)),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bus_number_maps_to_dev_node() {
        assert_eq!(bus_path("1"), PathBuf::from("/dev/i2c-1"));
    }

    #[test]
    fn absolute_bus_path_is_kept() {
        assert_eq!(bus_path("/dev/i2c-3"), PathBuf::from("/dev/i2c-3"));
    }

    #[test]
    fn missing_bus_is_config_error() {
        let err = open_panel("/nonexistent/i2c-99", 0x3C, 0, PanelOptions::new(128, 32))
            .err()
            .unwrap();
        assert!(matches!(err, MonitorError::Config(_)));
    }
}
