use super::labels::LabelKind;

pub const IMAGE_SIZE: usize = 32;
pub const PIXELS: usize = IMAGE_SIZE * IMAGE_SIZE;

/// One colour plane of a sample, row-major (index = y * 32 + x).
pub type Channel = [u8; PIXELS];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Class {
    name: &'static str,
    index: usize,
}

impl Class {
    /// Looks up `index` in the table for `kind`. `None` when out of range.
    pub fn from_index(kind: LabelKind, index: usize) -> Option<Class> {
        kind.table()
            .get(index)
            .map(|&name| Class { name, index })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// A labeled 32x32 image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    class: Class,
    // Some only for CIFAR-100
    superclass: Option<Class>,
    red: Channel,
    green: Channel,
    blue: Channel,
}

impl Sample {
    pub(crate) fn new(class: Class, superclass: Option<Class>, pixels: &[u8]) -> Sample {
        debug_assert_eq!(pixels.len(), PIXELS * 3);
        let mut sample = Sample {
            class,
            superclass,
            red: [0; PIXELS],
            green: [0; PIXELS],
            blue: [0; PIXELS],
        };
        sample.red.copy_from_slice(&pixels[..PIXELS]);
        sample.green.copy_from_slice(&pixels[PIXELS..PIXELS * 2]);
        sample.blue.copy_from_slice(&pixels[PIXELS * 2..]);
        sample
    }

    pub fn class(&self) -> Class {
        self.class
    }

    pub fn superclass(&self) -> Option<Class> {
        self.superclass
    }

    pub fn red(&self) -> &Channel {
        &self.red
    }

    pub fn green(&self) -> &Channel {
        &self.green
    }

    pub fn blue(&self) -> &Channel {
        &self.blue
    }

    /// Red, green and blue planes in that order.
    pub fn channels(&self) -> [&Channel; 3] {
        [&self.red, &self.green, &self.blue]
    }

    pub(crate) fn channels_mut(&mut self) -> [&mut Channel; 3] {
        [&mut self.red, &mut self.green, &mut self.blue]
    }

    /// Pixel at `(x, y)` as `[r, g, b]`.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let idx = y * IMAGE_SIZE + x;
        [self.red[idx], self.green[idx], self.blue[idx]]
    }
}

#[cfg(test)]
pub(crate) fn test_sample(fill: impl Fn(usize, usize, usize) -> u8) -> Sample {
    let mut pixels = vec![0u8; PIXELS * 3];
    for c in 0..3 {
        for idx in 0..PIXELS {
            pixels[c * PIXELS + idx] = fill(c, idx % IMAGE_SIZE, idx / IMAGE_SIZE);
        }
    }
    let class = Class::from_index(LabelKind::Class, 3).unwrap();
    Sample::new(class, None, &pixels)
}
