use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::debug;

use crate::dataloader::sample::Sample;

use super::augmentor::Augmentor;
use super::config::AugmentConfig;
use super::error::AugmentError;

/// Augments whole batches on a dedicated rayon pool.
///
/// Sample `i` draws from its own generator seeded with `seed + i`, so the
/// output does not depend on the thread count or scheduling.
pub struct ParallelAugmentor {
    augmentor: Augmentor,
    pool: rayon::ThreadPool,
}

impl ParallelAugmentor {
    pub fn new(config: AugmentConfig, threads: usize) -> Result<Self, AugmentError> {
        if threads == 0 {
            return Err(AugmentError::ZeroThreads);
        }
        let augmentor = Augmentor::new(config)?;
        let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
        Ok(ParallelAugmentor { augmentor, pool })
    }

    /// One worker per logical CPU.
    pub fn with_default_threads(config: AugmentConfig) -> Result<Self, AugmentError> {
        Self::new(config, num_cpus::get())
    }

    pub fn augmentor(&self) -> &Augmentor {
        &self.augmentor
    }

    pub fn augment_batch(&self, samples: &[Sample], seed: u64) -> Vec<Sample> {
        debug!(samples = samples.len(), threads = self.pool.current_num_threads(), seed, "augmenting batch");
        self.pool.install(|| {
            samples
                .par_iter()
                .enumerate()
                .map(|(i, sample)| {
                    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
                    self.augmentor.augment(sample, &mut rng)
                })
                .collect()
        })
    }
}
