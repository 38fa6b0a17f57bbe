use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::dataloader::error::DataLoaderError;
use crate::dataloader::sample::{Sample, IMAGE_SIZE};

/// Copies a sample into an opaque 32x32 RGBA image.
pub fn to_image(sample: &Sample) -> RgbaImage {
    RgbaImage::from_fn(IMAGE_SIZE as u32, IMAGE_SIZE as u32, |x, y| {
        let [r, g, b] = sample.pixel(x as usize, y as usize);
        Rgba([r, g, b, 0xff])
    })
}

/// Writes a sample to disk; the format follows the file extension.
pub fn save_image(sample: &Sample, path: impl AsRef<Path>) -> Result<(), DataLoaderError> {
    let path = path.as_ref();
    to_image(sample)
        .save(path)
        .map_err(|source| DataLoaderError::Image {
            path: path.to_owned(),
            source,
        })
}
