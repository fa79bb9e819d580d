pub mod bitmap;

pub use bitmap::{decode_image, load_image};
