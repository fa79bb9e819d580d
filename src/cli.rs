// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "rpi-monitor")]
#[command(about = "Shows hostname and IPv4 address on an SSD1306 OLED", long_about = None)]
pub struct Cli {
    /// I²C bus to use (number or device path)
    #[arg(long = "i2c")]
    pub i2c: Option<String>,

    /// Network interface to query for IPv4
    #[arg(long = "inet")]
    pub inet: Option<String>,

    /// I²C bus speed, e.g. 400000, 400kHz or 1MHz
    #[arg(long = "hz", value_parser = parse_frequency)]
    pub hz: Option<u32>,

    /// Display width
    #[arg(short = 'w', long = "width")]
    pub width: Option<u32>,

    /// Display height
    #[arg(short = 'H', long = "height")]
    pub height: Option<u32>,

    /// Rotate the display by 180°
    #[arg(short = 'r', long = "rotated")]
    pub rotated: bool,

    /// Sequential/interleaved hardware pin layout
    #[arg(short = 'n', long = "sequential")]
    pub sequential: bool,

    /// Swap top/bottom hardware pin layout
    #[arg(short = 's', long = "swap-top-bottom")]
    pub swap_top_bottom: bool,

    /// I²C address of the panel, e.g. 0x3C
    #[arg(long = "address", value_parser = parse_address)]
    pub address: Option<u8>,

    /// Bitmap shown behind the status text
    #[arg(long = "image")]
    pub image: Option<PathBuf>,

    /// Delay between refreshes in milliseconds
    #[arg(long = "interval-ms")]
    pub interval_ms: Option<u64>,

    /// JSON configuration file; flags given here override it
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

/// Parse a frequency with an optional Hz, kHz or MHz suffix
pub fn parse_frequency(value: &str) -> Result<u32, String> {
    let trimmed = value.trim();
    let lower = trimmed.to_ascii_lowercase();
    let (number, scale) = if let Some(n) = lower.strip_suffix("mhz") {
        (n, 1_000_000.0)
    } else if let Some(n) = lower.strip_suffix("khz") {
        (n, 1_000.0)
    } else if let Some(n) = lower.strip_suffix("hz") {
        (n, 1.0)
    } else {
        (lower.as_str(), 1.0)
    };

    let parsed: f64 = number
        .trim()
        .parse()
        .map_err(|_| format!("invalid frequency '{}'", trimmed))?;
    let hz = (parsed * scale).round();
    if !hz.is_finite() || hz < 0.0 || hz > f64::from(u32::MAX) {
        return Err(format!("frequency '{}' out of range", trimmed));
    }
    Ok(hz as u32)
}

/// Parse a 7-bit bus address in hex (`0x3C`) or decimal
pub fn parse_address(value: &str) -> Result<u8, String> {
    let trimmed = value.trim();
    let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => trimmed.parse(),
    }
    .map_err(|_| format!("invalid address '{}'", trimmed))?;

    if parsed > 0x7F {
        return Err(format!("address '{}' is not a 7-bit address", trimmed));
    }
    Ok(parsed)
}
