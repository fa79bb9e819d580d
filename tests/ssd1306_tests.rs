use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};

use rpi_monitor::core::PackedFrame;
use rpi_monitor::device::{PanelOptions, Ssd1306, DEFAULT_ADDRESS};
use rpi_monitor::{DisplayBounds, DisplaySink, MonitorError, Point, Rectangle, Size};

/// Bus that records writes and can be told to fail after N of them
#[derive(Default)]
struct RecordingBus {
    writes: Vec<(u8, Vec<u8>)>,
    fail_after: Option<usize>,
}

impl ErrorType for RecordingBus {
    type Error = ErrorKind;
}

impl I2c for RecordingBus {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => {
                    if self.fail_after == Some(self.writes.len()) {
                        return Err(ErrorKind::Other);
                    }
                    self.writes.push((address, bytes.to_vec()));
                }
                Operation::Read(buf) => buf.fill(0),
            }
        }
        Ok(())
    }
}

fn data_bytes(writes: &[(u8, Vec<u8>)]) -> Vec<u8> {
    writes
        .iter()
        .filter(|(_, w)| w[0] == 0x40)
        .flat_map(|(_, w)| w[1..].to_vec())
        .collect()
}

#[test]
fn test_init_sequence_on_open() {
    let panel = Ssd1306::new(RecordingBus::default(), DEFAULT_ADDRESS, PanelOptions::new(128, 32)).unwrap();
    let bus = panel.release();

    assert_eq!(bus.writes.len(), 1);
    let (address, bytes) = &bus.writes[0];
    assert_eq!(*address, 0x3C);
    assert_eq!(
        bytes.as_slice(),
        &[
            0x00, 0xAE, 0xD3, 0x00, 0x40, 0xA1, 0xC8, 0xDA, 0x12, 0x81, 0xFF, 0xA4, 0xA6, 0xD5, 0x80,
            0x8D, 0x14, 0x20, 0x00, 0xA8, 31, 0xAF,
        ]
    );
}

#[test]
fn test_bounds_reported_from_options() {
    let panel = Ssd1306::new(RecordingBus::default(), 0x3D, PanelOptions::new(128, 64)).unwrap();
    assert_eq!(panel.bounds(), Rectangle::new(Point::zero(), Size::new(128, 64)));
    assert_eq!(panel.address(), 0x3D);
}

#[test]
fn test_invalid_geometry_rejected_before_bus_use() {
    let result = Ssd1306::new(RecordingBus::default(), DEFAULT_ADDRESS, PanelOptions::new(128, 20));
    assert!(matches!(result.err(), Some(MonitorError::InvalidBounds { .. })));
}

#[test]
fn test_full_frame_streams_packed_bytes() {
    let bounds = DisplayBounds::new(128, 32);
    let mut panel = Ssd1306::new(RecordingBus::default(), DEFAULT_ADDRESS, PanelOptions::new(128, 32)).unwrap();

    let mut frame = PackedFrame::new(bounds);
    frame.set_pixel(0, 0, true);
    frame.set_pixel(127, 31, true);
    frame.set_pixel(5, 9, true);

    panel.draw(bounds.rectangle(), &frame, Point::zero()).unwrap();
    let bus = panel.release();

    // Address window: columns 0..=127, pages 0..=3
    assert_eq!(bus.writes[1].1, vec![0x00, 0x21, 0, 127, 0x22, 0, 3]);
    assert_eq!(data_bytes(&bus.writes), frame.as_bytes().to_vec());
}

#[test]
fn test_partial_draw_sends_covering_pages() {
    let bounds = DisplayBounds::new(128, 32);
    let mut panel = Ssd1306::new(RecordingBus::default(), DEFAULT_ADDRESS, PanelOptions::new(128, 32)).unwrap();

    let mut frame = PackedFrame::new(bounds);
    frame.set_pixel(0, 0, true);

    // 4x4 block at (10, 10) filled from frame origin (0, 0)
    let target = Rectangle::new(Point::new(10, 10), Size::new(4, 4));
    panel.draw(target, &frame, Point::zero()).unwrap();
    let bus = panel.release();

    assert_eq!(bus.writes[1].1, vec![0x00, 0x21, 10, 13, 0x22, 1, 1]);
    let data = data_bytes(&bus.writes);
    assert_eq!(data.len(), 4);
    // Frame (0, 0) lands on panel (10, 10): page 1, bit 2
    assert_eq!(data, vec![0b0000_0100, 0, 0, 0]);
}

#[test]
fn test_target_clipped_to_panel() {
    let bounds = DisplayBounds::new(128, 32);
    let mut panel = Ssd1306::new(RecordingBus::default(), DEFAULT_ADDRESS, PanelOptions::new(128, 32)).unwrap();
    let frame = PackedFrame::new(bounds);

    let outside = Rectangle::new(Point::new(200, 0), Size::new(8, 8));
    panel.draw(outside, &frame, Point::zero()).unwrap();
    assert_eq!(panel.release().writes.len(), 1);
}

#[test]
fn test_offscreen_corner_keeps_frame_mapping() {
    let bounds = DisplayBounds::new(128, 32);
    let mut panel = Ssd1306::new(RecordingBus::default(), DEFAULT_ADDRESS, PanelOptions::new(128, 32)).unwrap();

    let mut frame = PackedFrame::new(bounds);
    frame.set_pixel(4, 0, true);

    // Left four columns fall off the panel, so frame (4, 0) lands on panel (0, 0)
    let target = Rectangle::new(Point::new(-4, 0), Size::new(8, 8));
    panel.draw(target, &frame, Point::zero()).unwrap();
    let bus = panel.release();

    assert_eq!(bus.writes[1].1, vec![0x00, 0x21, 0, 3, 0x22, 0, 0]);
    assert_eq!(data_bytes(&bus.writes), vec![0b0000_0001, 0, 0, 0]);
}

#[test]
fn test_right_edge_clip_keeps_leading_columns() {
    let bounds = DisplayBounds::new(128, 32);
    let mut panel = Ssd1306::new(RecordingBus::default(), DEFAULT_ADDRESS, PanelOptions::new(128, 32)).unwrap();

    let mut frame = PackedFrame::new(bounds);
    frame.set_pixel(1, 0, true);

    let target = Rectangle::new(Point::new(126, 0), Size::new(4, 8));
    panel.draw(target, &frame, Point::zero()).unwrap();
    let bus = panel.release();

    assert_eq!(bus.writes[1].1, vec![0x00, 0x21, 126, 127, 0x22, 0, 0]);
    assert_eq!(data_bytes(&bus.writes), vec![0, 0b0000_0001]);
}

#[test]
fn test_bus_failure_is_io_error() {
    let bus = RecordingBus {
        fail_after: Some(1),
        ..RecordingBus::default()
    };
    let bounds = DisplayBounds::new(128, 32);
    let mut panel = Ssd1306::new(bus, DEFAULT_ADDRESS, PanelOptions::new(128, 32)).unwrap();

    let err = panel
        .draw(bounds.rectangle(), &PackedFrame::new(bounds), Point::zero())
        .unwrap_err();
    assert!(matches!(err, MonitorError::Io(_)));
}

#[test]
fn test_init_failure_is_io_error() {
    let bus = RecordingBus {
        fail_after: Some(0),
        ..RecordingBus::default()
    };
    let result = Ssd1306::new(bus, DEFAULT_ADDRESS, PanelOptions::new(128, 32));
    assert!(matches!(result.err(), Some(MonitorError::Io(_))));
}
