use super::labels::Taxonomy;
use super::sample::Sample;

/// Decoded batches in file order.
#[derive(Clone, Debug)]
pub struct Dataset {
    taxonomy: Taxonomy,
    batches: Vec<Vec<Sample>>,
}

impl Dataset {
    pub(crate) fn new(taxonomy: Taxonomy, batches: Vec<Vec<Sample>>) -> Dataset {
        Dataset { taxonomy, batches }
    }

    pub fn taxonomy(&self) -> Taxonomy {
        self.taxonomy
    }

    pub fn batches(&self) -> &[Vec<Sample>] {
        &self.batches
    }

    pub fn into_batches(self) -> Vec<Vec<Sample>> {
        self.batches
    }

    /// Every batch except the last, which is the test partition.
    pub fn train_batches(&self) -> &[Vec<Sample>] {
        match self.batches.split_last() {
            Some((_, train)) => train,
            None => &[],
        }
    }

    pub fn test_batch(&self) -> Option<&[Sample]> {
        self.batches.last().map(Vec::as_slice)
    }

    pub fn train_samples(&self) -> impl Iterator<Item = &Sample> {
        self.train_batches().iter().flatten()
    }

    /// All samples across batches, in order.
    pub fn samples(&self) -> impl Iterator<Item = &Sample> {
        self.batches.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
