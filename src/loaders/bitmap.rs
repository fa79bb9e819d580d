use std::path::Path;

use log::info;

use crate::core::Image;
use crate::error::{MonitorError, Result};

/// Decode a PNG or BMP file into an RGBA image
pub fn load_image(path: impl AsRef<Path>) -> Result<Image> {
    let path = path.as_ref();
    let decoded = ::image::open(path)
        .map_err(|e| MonitorError::Image(format!("failed to load {}: {}", path.display(), e)))?;

    let image = into_image(decoded)?;
    info!(
        "loaded {}x{} image from {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(image)
}

/// Decode an in-memory PNG or BMP
pub fn decode_image(bytes: &[u8]) -> Result<Image> {
    let decoded = ::image::load_from_memory(bytes)
        .map_err(|e| MonitorError::Image(format!("failed to decode image: {}", e)))?;
    into_image(decoded)
}

fn into_image(decoded: ::image::DynamicImage) -> Result<Image> {
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Image::from_rgba(width, height, rgba.into_raw())
}
