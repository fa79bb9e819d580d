//! SSD1306 OLED controller over I2C
//!
//! The controller runs in horizontal addressing mode, so its RAM has the
//! same page layout as [`PackedFrame`] and frames stream out unchanged.

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::{PointsIter, Rectangle};
use embedded_hal::i2c::I2c;
use log::debug;

use crate::core::{DisplayBounds, PackedFrame, PAGE_HEIGHT};
use crate::error::{MonitorError, Result};
use crate::traits::DisplaySink;

/// Usual SSD1306 I2C address (0x3D when SA0 is pulled high)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Widest panel the controller can address
pub const MAX_WIDTH: u32 = 128;

/// Tallest panel the controller can address
pub const MAX_HEIGHT: u32 = 64;

/// Control byte prefixes
const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

/// Bytes of RAM data per bus write
const DATA_CHUNK: usize = 128;

/// SSD1306 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SEG_REMAP_NORMAL: u8 = 0xA0;
    pub const SEG_REMAP_FLIPPED: u8 = 0xA1;
    pub const COM_SCAN_INC: u8 = 0xC0;
    pub const COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const RESUME_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_ADDR_MODE: u8 = 0x20;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
}

/// Panel geometry and COM wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelOptions {
    pub width: u32,
    pub height: u32,
    /// Rotate the picture by 180 degrees
    pub rotated: bool,
    /// Sequential rather than alternative COM pin layout
    pub sequential: bool,
    /// Swap the top and bottom halves of the COM pins
    pub swap_top_bottom: bool,
}

impl PanelOptions {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rotated: false,
            sequential: false,
            swap_top_bottom: false,
        }
    }

    /// Check the geometry is something the controller can drive
    pub fn validate(&self) -> Result<()> {
        let width_ok = (1..=MAX_WIDTH).contains(&self.width);
        let height_ok = (PAGE_HEIGHT..=MAX_HEIGHT).contains(&self.height) && self.height % PAGE_HEIGHT == 0;
        if width_ok && height_ok {
            Ok(())
        } else {
            Err(MonitorError::InvalidBounds {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Argument of the COM pins hardware configuration command
    pub fn com_pins(&self) -> u8 {
        let mut pins = 0x02;
        if !self.sequential {
            pins |= 0x10;
        }
        if self.swap_top_bottom {
            pins |= 0x20;
        }
        pins
    }

    /// Power-on command sequence
    pub fn init_sequence(&self) -> Vec<u8> {
        let (seg_remap, com_scan) = if self.rotated {
            (cmd::SEG_REMAP_NORMAL, cmd::COM_SCAN_INC)
        } else {
            (cmd::SEG_REMAP_FLIPPED, cmd::COM_SCAN_DEC)
        };

        vec![
            cmd::DISPLAY_OFF,
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE,
            seg_remap,
            com_scan,
            cmd::SET_COM_PINS,
            self.com_pins(),
            cmd::SET_CONTRAST,
            0xFF,
            cmd::RESUME_RAM,
            cmd::SET_NORMAL,
            cmd::SET_CLOCK_DIV,
            0x80,
            cmd::SET_CHARGE_PUMP,
            0x14,
            cmd::SET_ADDR_MODE,
            0x00, // horizontal
            cmd::SET_MUX_RATIO,
            (self.height - 1) as u8,
            cmd::DISPLAY_ON,
        ]
    }

    pub fn bounds(&self) -> DisplayBounds {
        DisplayBounds::new(self.width, self.height)
    }
}

/// SSD1306 panel driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    options: PanelOptions,
    /// Copy of what the panel RAM holds
    shadow: PackedFrame,
}

impl<I2C: I2c> Ssd1306<I2C> {
    /// Validate options and run the power-on sequence
    pub fn new(i2c: I2C, address: u8, options: PanelOptions) -> Result<Self> {
        options.validate()?;

        let mut panel = Self {
            i2c,
            address,
            options,
            shadow: PackedFrame::new(options.bounds()),
        };
        panel.command(&options.init_sequence())?;
        debug!(
            "ssd1306 at {:#04x} initialised as {}x{}",
            address, options.width, options.height
        );

        Ok(panel)
    }

    pub fn options(&self) -> PanelOptions {
        self.options
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn command(&mut self, bytes: &[u8]) -> Result<()> {
        let mut buf = Vec::with_capacity(bytes.len() + 1);
        buf.push(CONTROL_COMMAND);
        buf.extend_from_slice(bytes);
        self.write(&buf)
    }

    fn data(&mut self, bytes: &[u8]) -> Result<()> {
        for chunk in bytes.chunks(DATA_CHUNK) {
            let mut buf = Vec::with_capacity(chunk.len() + 1);
            buf.push(CONTROL_DATA);
            buf.extend_from_slice(chunk);
            self.write(&buf)?;
        }
        Ok(())
    }

    fn write(&mut self, buf: &[u8]) -> Result<()> {
        self.i2c
            .write(self.address, buf)
            .map_err(|e| MonitorError::Io(format!("i2c write to {:#04x} failed: {:?}", self.address, e)))
    }
}

impl<I2C: I2c> DisplaySink for Ssd1306<I2C> {
    fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(self.options.width, self.options.height))
    }

    fn draw(&mut self, requested: Rectangle, frame: &PackedFrame, origin: Point) -> Result<()> {
        // Clipping trims the window but frame pixels stay mapped to the requested corner
        let target = requested.intersection(&self.bounds());
        if target.size.width == 0 || target.size.height == 0 {
            return Ok(());
        }

        for point in target.points() {
            let src = point - requested.top_left + origin;
            let on = src.x >= 0 && src.y >= 0 && frame.pixel(src.x as u32, src.y as u32);
            self.shadow.set_pixel(point.x as u32, point.y as u32, on);
        }

        // Whole pages covering the target rows
        let first_col = target.top_left.x as u32;
        let last_col = first_col + target.size.width - 1;
        let first_page = target.top_left.y as u32 / PAGE_HEIGHT;
        let last_page = (target.top_left.y as u32 + target.size.height - 1) / PAGE_HEIGHT;

        let mut payload = Vec::new();
        for page in first_page..=last_page {
            if let Some(row) = self.shadow.page(page) {
                payload.extend_from_slice(&row[first_col as usize..=last_col as usize]);
            }
        }

        self.command(&[
            cmd::SET_COLUMN_ADDR,
            first_col as u8,
            last_col as u8,
            cmd::SET_PAGE_ADDR,
            first_page as u8,
            last_page as u8,
        ])?;
        self.data(&payload)
    }
}
