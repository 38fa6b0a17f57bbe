//! Decoding of the CIFAR-10 and CIFAR-100 binary distributions.

pub mod dataset;
pub mod decoder;
pub mod error;
pub mod info;
pub mod labels;
pub mod sample;

pub use dataset::Dataset;
pub use decoder::{decode_records, load, load_cifar10, load_cifar100, load_file, RecordFormat};
pub use error::{DataLoaderError, RecordError};
pub use info::{print_dataset_info, DatasetInfo};
pub use labels::{LabelKind, Taxonomy, CIFAR10_LABELS, COARSE_LABELS, FINE_LABELS};
pub use sample::{Channel, Class, Sample, IMAGE_SIZE, PIXELS};
