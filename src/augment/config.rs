use std::borrow::Cow;

use crate::dataloader::sample::IMAGE_SIZE;

use super::error::AugmentError;

/// Colour jitter weights for red, green and blue.
// Vector from https://groups.google.com/forum/#!topic/lasagne-users/meCDNeA9Ud4.
pub const COLOUR_WEIGHTS: [f64; 3] = [0.0148366, 0.01253134, 0.01040762];

pub const CROP_BORDER: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AugmentMethod {
    Mirror,
    Crop,
    ColourJitter,
}

const ALL_METHODS: [AugmentMethod; 3] = [
    AugmentMethod::Mirror,
    AugmentMethod::Crop,
    AugmentMethod::ColourJitter,
];

/// Augmentation settings. Methods always run in the order mirror, crop,
/// colour jitter regardless of their order in `methods`.
#[derive(Clone, Debug)]
pub struct AugmentConfig {
    pub methods: Cow<'static, [AugmentMethod]>,
    pub mirror_probability: f64,
    pub crop_border: f64,
    pub colour_weights: [f64; 3],
}

impl AugmentConfig {
    /// Every method with the canonical constants.
    pub const CANONICAL: AugmentConfig = AugmentConfig {
        methods: Cow::Borrowed(&ALL_METHODS),
        mirror_probability: 0.5,
        crop_border: CROP_BORDER,
        colour_weights: COLOUR_WEIGHTS,
    };

    pub fn build(self) -> Result<Self, AugmentError> {
        check_probability(self.mirror_probability)?;
        check_crop_border(self.crop_border)?;

        if self.colour_weights.iter().any(|w| !w.is_finite()) {
            return Err(AugmentError::InvalidConfig(format!(
                "colour weights must be finite, got {:?}",
                self.colour_weights
            )));
        }

        Ok(self)
    }

    pub fn with_methods(methods: &[AugmentMethod]) -> Self {
        Self {
            methods: Cow::Owned(methods.to_vec()),
            ..Self::CANONICAL
        }
    }

    pub fn is_enabled(&self, method: AugmentMethod) -> bool {
        self.methods.contains(&method)
    }
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self::CANONICAL
    }
}

fn check_probability(p: f64) -> Result<(), AugmentError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(AugmentError::InvalidConfig(format!(
            "mirror probability must be in [0, 1], got {}",
            p
        )));
    }
    Ok(())
}

fn check_crop_border(border: f64) -> Result<(), AugmentError> {
    if !(0.0..=IMAGE_SIZE as f64).contains(&border) {
        return Err(AugmentError::InvalidConfig(format!(
            "crop border must be in [0, {}], got {}",
            IMAGE_SIZE, border
        )));
    }
    Ok(())
}
