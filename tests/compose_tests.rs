use rpi_monitor::core::{anchor_bottom_right, GLYPH_HEIGHT, GLYPH_WIDTH, BLACK, WHITE};
use rpi_monitor::{format_status, DisplayBounds, FrameComposer, Image, MonitorError, Point};

#[test]
fn test_compose_is_deterministic() {
    let bounds = DisplayBounds::new(128, 64);
    let source = Image::from_fn(50, 40, |x, y| if (x + y) % 3 == 0 { WHITE } else { BLACK });
    let composer = FrameComposer::new();

    let first = composer.compose(bounds, &source, "pi (192.168.1.20)").unwrap();
    let second = composer.compose(bounds, &source, "pi (192.168.1.20)").unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_end_to_end_status_frame() {
    let bounds = DisplayBounds::new(128, 32);
    let source = Image::filled(64, 64, BLACK);
    let text = format_status("host", "1.2.3.4");
    assert_eq!(text, "host (1.2.3.4)");

    let frame = FrameComposer::new().compose(bounds, &source, &text).unwrap();
    assert_eq!(frame.bounds(), bounds);
    assert_eq!(frame.as_bytes().len(), 512);

    let anchor = anchor_bottom_right(bounds, &text);
    assert_eq!(anchor, Point::new(128 - 14 * 7, 18));

    let mut lit = 0;
    for y in 0..bounds.height {
        for x in 0..bounds.width {
            if frame.pixel(x, y) {
                lit += 1;
                assert!(x as i32 >= anchor.x);
                assert!(y as i32 >= anchor.y && y < anchor.y as u32 + GLYPH_HEIGHT);
            }
        }
    }
    assert!(lit > 0);

    // First glyph cell ('h') has ink
    let first_cell = (anchor.x as u32..anchor.x as u32 + GLYPH_WIDTH)
        .any(|x| (18..31).any(|y| frame.pixel(x, y)));
    assert!(first_cell);
}

#[test]
fn test_text_over_lit_background() {
    let bounds = DisplayBounds::new(128, 32);
    let logo = Image::filled(128, 32, WHITE);

    let plain = FrameComposer::new().compose(bounds, &logo, "").unwrap();
    assert_eq!(plain.count_on(), bounds.pixel_count());

    // Text ORs over a lit background, nothing is cleared
    let with_text = FrameComposer::new().compose(bounds, &logo, "abc").unwrap();
    assert_eq!(with_text, plain);
}

#[test]
fn test_upscaled_source_leaves_far_edge_dark() {
    // 16 -> 128 columns: x >= 124 samples past the source edge
    let bounds = DisplayBounds::new(128, 32);
    let frame = FrameComposer::new()
        .compose(bounds, &Image::filled(16, 16, WHITE), "")
        .unwrap();

    assert!(frame.pixel(123, 0));
    assert!(!frame.pixel(124, 0));
    assert!(!frame.pixel(0, 31));
}

#[test]
fn test_empty_status_still_composes() {
    let bounds = DisplayBounds::new(128, 32);
    let frame = FrameComposer::new()
        .compose(bounds, &Image::new(128, 32), &format_status("", ""))
        .unwrap();
    assert_eq!(frame.count_on(), 0);
}

#[test]
fn test_zero_bounds_guarded() {
    let err = FrameComposer::new()
        .compose(DisplayBounds::new(128, 0), &Image::new(4, 4), "x")
        .unwrap_err();
    assert!(matches!(err, MonitorError::InvalidBounds { .. }));
}
