use embedded_graphics::geometry::Size;

use super::image::Image;

/// Map a destination coordinate onto the source axis.
/// Adds half the target extent before dividing; with upscaling the last
/// destination cells may land one past the source edge and sample background.
#[inline]
pub fn source_coord(dst: u32, src_extent: u32, dst_extent: u32) -> u32 {
    let scaled = u64::from(dst) * u64::from(src_extent) + u64::from(dst_extent / 2);
    (scaled / u64::from(dst_extent)) as u32
}

/// Nearest-neighbor resize into a new image of exactly `target` dimensions
pub fn resize(src: &Image, target: Size) -> Image {
    if target.width == 0 || target.height == 0 {
        return Image::new(target.width, target.height);
    }

    let (src_w, src_h) = (src.width(), src.height());
    let mut dst = Image::new(target.width, target.height);

    for y in 0..target.height {
        let sy = source_coord(y, src_h, target.height);
        for x in 0..target.width {
            let sx = source_coord(x, src_w, target.width);
            dst.set_pixel(x, y, src.pixel(sx, sy));
        }
    }

    dst
}
