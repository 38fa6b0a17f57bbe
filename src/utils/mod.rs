pub mod image_export;

pub use image_export::{save_image, to_image};
