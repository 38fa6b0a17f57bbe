//! Reader for the CIFAR-10 and CIFAR-100 binary datasets, plus the random
//! augmentation (mirroring, crop-and-rescale, colour jitter) applied to
//! samples before training.

pub mod augment;
pub mod dataloader;
pub mod utils;

pub use augment::{augment, AugmentConfig, AugmentError, Augmentor, ParallelAugmentor};
pub use dataloader::{load, load_cifar10, load_cifar100, DataLoaderError, Dataset, Sample, Taxonomy};
