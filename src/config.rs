//! Runtime configuration: defaults, then an optional JSON file, then CLI flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::core::{DisplayBounds, ThresholdRule};
use crate::device::{PanelOptions, DEFAULT_ADDRESS};
use crate::error::{MonitorError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MonitorConfig {
    /// I2C bus number or device path
    pub bus: String,
    /// Interface whose IPv4 address is shown
    pub interface: String,
    /// Requested bus clock, 0 for the kernel default
    pub bus_speed_hz: u32,
    pub address: u8,
    pub width: u32,
    pub height: u32,
    pub rotated: bool,
    pub sequential: bool,
    pub swap_top_bottom: bool,
    pub interval_ms: u64,
    pub image: Option<PathBuf>,
    pub threshold: ThresholdRule,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            bus: "1".to_string(),
            interface: "eth0".to_string(),
            bus_speed_hz: 0,
            address: DEFAULT_ADDRESS,
            width: 128,
            height: 32,
            rotated: false,
            sequential: false,
            swap_top_bottom: false,
            interval_ms: 1000,
            image: None,
            threshold: ThresholdRule::default(),
        }
    }
}

impl MonitorConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| MonitorError::Config(format!("invalid config: {}", e)))
    }

    /// Read and parse a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| MonitorError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_json(&text)
    }

    /// Build the effective configuration for a command line
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Overlay flags that were given explicitly
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(bus) = &cli.i2c {
            self.bus = bus.clone();
        }
        if let Some(interface) = &cli.inet {
            self.interface = interface.clone();
        }
        if let Some(hz) = cli.hz {
            self.bus_speed_hz = hz;
        }
        if let Some(address) = cli.address {
            self.address = address;
        }
        if let Some(width) = cli.width {
            self.width = width;
        }
        if let Some(height) = cli.height {
            self.height = height;
        }
        if let Some(interval_ms) = cli.interval_ms {
            self.interval_ms = interval_ms;
        }
        if let Some(image) = &cli.image {
            self.image = Some(image.clone());
        }
        self.rotated |= cli.rotated;
        self.sequential |= cli.sequential;
        self.swap_top_bottom |= cli.swap_top_bottom;
    }

    pub fn validate(&self) -> Result<()> {
        self.panel_options()
            .validate()
            .map_err(|e| MonitorError::Config(format!("unsupported panel size: {}", e)))?;
        if self.interval_ms == 0 {
            return Err(MonitorError::Config("interval must be positive".into()));
        }
        if self.interface.is_empty() {
            return Err(MonitorError::Config("network interface name is empty".into()));
        }
        Ok(())
    }

    pub fn panel_options(&self) -> PanelOptions {
        PanelOptions {
            width: self.width,
            height: self.height,
            rotated: self.rotated,
            sequential: self.sequential,
            swap_top_bottom: self.swap_top_bottom,
        }
    }

    pub fn bounds(&self) -> DisplayBounds {
        DisplayBounds::new(self.width, self.height)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
