use super::dataset::Dataset;
use super::labels::{Taxonomy, CIFAR10_LABELS, COARSE_LABELS, FINE_LABELS};

/// Per-batch and per-class sample counts.
pub struct DatasetInfo {
    pub taxonomy: Taxonomy,
    pub batch_sizes: Vec<usize>,
    pub class_counts: Vec<usize>,
    // Empty for CIFAR-10
    pub superclass_counts: Vec<usize>,
    /// Samples whose labels do not belong to `taxonomy`.
    pub mismatched: usize,
}

impl DatasetInfo {
    pub fn new(dataset: &Dataset) -> DatasetInfo {
        let taxonomy = dataset.taxonomy();
        let mut class_counts = vec![0; taxonomy.class_count()];
        let mut superclass_counts = match taxonomy {
            Taxonomy::Cifar10 => Vec::new(),
            Taxonomy::Cifar100 => vec![0; COARSE_LABELS.len()],
        };

        let mut mismatched = 0;
        for sample in dataset.samples() {
            let class_slot = class_counts.get_mut(sample.class().index());
            let superclass_slot = match sample.superclass() {
                Some(superclass) => superclass_counts.get_mut(superclass.index()).map(Some),
                None if superclass_counts.is_empty() => Some(None),
                None => None,
            };
            match (class_slot, superclass_slot) {
                (Some(count), Some(superclass_count)) => {
                    *count += 1;
                    if let Some(superclass_count) = superclass_count {
                        *superclass_count += 1;
                    }
                }
                _ => mismatched += 1,
            }
        }

        DatasetInfo {
            taxonomy,
            batch_sizes: dataset.batches().iter().map(Vec::len).collect(),
            class_counts,
            superclass_counts,
            mismatched,
        }
    }

    pub fn total(&self) -> usize {
        self.batch_sizes.iter().sum()
    }
}

pub fn print_dataset_info(dataset: &Dataset) {
    let info = DatasetInfo::new(dataset);
    let file_names = info.taxonomy.file_names();
    let class_names = match info.taxonomy {
        Taxonomy::Cifar10 => &CIFAR10_LABELS[..],
        Taxonomy::Cifar100 => &FINE_LABELS[..],
    };

    println!("Dataset Information:");
    println!("-------------------");
    println!("Taxonomy: {}", info.taxonomy);
    println!("Total size: {}", info.total());
    if info.mismatched > 0 {
        println!("Samples with labels outside {}: {}", info.taxonomy, info.mismatched);
    }
    println!();
    println!("Batches:");
    for (name, size) in file_names.iter().zip(&info.batch_sizes) {
        println!("  {}: {}", name, size);
    }
    println!();
    println!("Classes:");
    for (name, count) in class_names.iter().zip(&info.class_counts) {
        println!("  {}: {}", name, count);
    }
    if !info.superclass_counts.is_empty() {
        println!();
        println!("Superclasses:");
        for (name, count) in COARSE_LABELS.iter().zip(&info.superclass_counts) {
            println!("  {}: {}", name, count);
        }
    }
}
