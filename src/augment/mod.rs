//! Random perturbations applied to samples before training.

pub mod augmentor;
pub mod colour;
pub mod config;
pub mod crop;
pub mod error;
pub mod mirror;
pub mod par_augment;

pub use augmentor::{augment, Augmentor};
pub use config::{AugmentConfig, AugmentMethod};
pub use crop::{get_interp, rescale_channel, CropWindow};
pub use error::AugmentError;
pub use par_augment::ParallelAugmentor;
