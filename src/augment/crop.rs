use rand::Rng;

use crate::dataloader::sample::{Channel, IMAGE_SIZE, PIXELS};

const SIZE: f64 = IMAGE_SIZE as f64;
const MAX_COORD: f64 = (IMAGE_SIZE - 1) as f64;

/// A square source region, in fractional pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropWindow {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl CropWindow {
    /// The whole image. Rescaling through it reproduces the channel exactly.
    pub fn full() -> CropWindow {
        CropWindow {
            x: 0.0,
            y: 0.0,
            size: SIZE,
        }
    }

    /// Side in `[32 - border, 32)`, placed uniformly inside the image.
    pub fn random<R: Rng>(rng: &mut R, border: f64) -> CropWindow {
        let size = (SIZE - border) + rng.gen::<f64>() * border;
        let x = rng.gen::<f64>() * (SIZE - size);
        let y = rng.gen::<f64>() * (SIZE - size);
        CropWindow { x, y, size }
    }
}

/// Bilinear sample of `channel` at fractional `(x, y)`.
///
/// Coordinates are clamped to the image first. On the last row or column
/// the upper neighbour is clamped too, which collapses that axis to a direct
/// lookup.
pub fn get_interp(channel: &Channel, x: f64, y: f64) -> u8 {
    let x = x.clamp(0.0, MAX_COORD);
    let y = y.clamp(0.0, MAX_COORD);

    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = (x0 + 1).min(IMAGE_SIZE - 1);
    let y1 = (y0 + 1).min(IMAGE_SIZE - 1);

    let wx = x1 as f64 - x;
    let wy = y1 as f64 - y;

    let p = |px: usize, py: usize| channel[py * IMAGE_SIZE + px] as f64;
    let out = p(x0, y0) * wx * wy
        + p(x1, y0) * (1.0 - wx) * wy
        + p(x0, y1) * wx * (1.0 - wy)
        + p(x1, y1) * (1.0 - wx) * (1.0 - wy);

    (out as i64).clamp(0, 255) as u8
}

/// Resamples the region under `window` back to a full 32x32 channel.
pub fn rescale_channel(channel: &Channel, window: &CropWindow) -> Channel {
    let scale = window.size / SIZE;
    let mut out = [0u8; PIXELS];
    for (idx, p) in out.iter_mut().enumerate() {
        let ox = (idx % IMAGE_SIZE) as f64;
        let oy = (idx / IMAGE_SIZE) as f64;
        *p = get_interp(channel, window.x + ox * scale, window.y + oy * scale);
    }
    out
}
