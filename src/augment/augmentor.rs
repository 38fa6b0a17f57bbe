use rand::Rng;
use rand_distr::StandardNormal;
use tracing::trace;

use crate::dataloader::sample::Sample;

use super::colour::jitter_channel;
use super::config::{AugmentConfig, AugmentMethod};
use super::crop::{rescale_channel, CropWindow};
use super::error::AugmentError;
use super::mirror::mirror_channel;

/// Produces randomly perturbed copies of samples.
///
/// Holds no state between calls; all randomness comes from the generator
/// passed to [`Augmentor::augment`].
#[derive(Clone, Debug)]
pub struct Augmentor {
    config: AugmentConfig,
}

impl Augmentor {
    pub fn new(config: AugmentConfig) -> Result<Self, AugmentError> {
        Ok(Augmentor {
            config: config.build()?,
        })
    }

    pub fn config(&self) -> &AugmentConfig {
        &self.config
    }

    /// Returns a transformed copy of `sample`. Labels are carried over as-is.
    pub fn augment<R: Rng>(&self, sample: &Sample, rng: &mut R) -> Sample {
        let mut res = sample.clone();

        if self.config.is_enabled(AugmentMethod::Mirror) && rng.gen_bool(self.config.mirror_probability) {
            for channel in res.channels_mut() {
                mirror_channel(channel);
            }
        }

        if self.config.is_enabled(AugmentMethod::Crop) {
            // One window for all three planes keeps them aligned.
            let window = CropWindow::random(rng, self.config.crop_border);
            trace!(x = window.x, y = window.y, size = window.size, "crop window");
            for channel in res.channels_mut() {
                *channel = rescale_channel(channel, &window);
            }
        }

        if self.config.is_enabled(AugmentMethod::ColourJitter) {
            let power: f64 = rng.sample(StandardNormal);
            for (channel, weight) in res.channels_mut().into_iter().zip(self.config.colour_weights) {
                jitter_channel(channel, power * weight);
            }
        }

        res
    }
}

impl Default for Augmentor {
    fn default() -> Self {
        CANONICAL.clone()
    }
}

static CANONICAL: Augmentor = Augmentor {
    config: AugmentConfig::CANONICAL,
};

/// Augments with the canonical settings.
pub fn augment<R: Rng>(sample: &Sample, rng: &mut R) -> Sample {
    CANONICAL.augment(sample, rng)
}
