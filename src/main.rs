use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use rand::Rng;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use cifar_aug::augment::{AugmentConfig, ParallelAugmentor};
use cifar_aug::dataloader::{self, print_dataset_info, Taxonomy};
use cifar_aug::utils::save_image;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TaxonomyArg {
    Cifar10,
    Cifar100,
}

impl From<TaxonomyArg> for Taxonomy {
    fn from(arg: TaxonomyArg) -> Self {
        match arg {
            TaxonomyArg::Cifar10 => Taxonomy::Cifar10,
            TaxonomyArg::Cifar100 => Taxonomy::Cifar100,
        }
    }
}

/// Inspect a CIFAR binary dataset and preview augmented samples.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory holding the extracted `*.bin` files
    dir: PathBuf,

    #[arg(short, long, value_enum, default_value = "cifar10")]
    taxonomy: TaxonomyArg,

    /// Augment every sample once and report timing
    #[arg(short, long)]
    augment: bool,

    /// Seed for augmentation; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write one sample (augmented if --augment is set) as an image
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Index into the flattened dataset of the sample to export
    #[arg(short, long, default_value_t = 0)]
    index: usize,

    /// Worker threads for augmentation
    #[arg(long)]
    threads: Option<usize>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("failed to set tracing subscriber")?;

    let dataset = dataloader::load(&args.dir, args.taxonomy.into())
        .with_context(|| format!("failed to load dataset from {}", args.dir.display()))?;
    print_dataset_info(&dataset);

    if args.export.is_some() && args.index >= dataset.len() {
        bail!("index {} out of range for {} samples", args.index, dataset.len());
    }

    let mut sample = dataset.samples().nth(args.index).cloned();

    if args.augment {
        let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let augmentor = match args.threads {
            Some(threads) => ParallelAugmentor::new(AugmentConfig::default(), threads)?,
            None => ParallelAugmentor::with_default_threads(AugmentConfig::default())?,
        };

        let samples: Vec<_> = dataset.into_batches().into_iter().flatten().collect();
        let start = std::time::Instant::now();
        let augmented = augmentor.augment_batch(&samples, seed);
        info!(samples = augmented.len(), seed, elapsed = ?start.elapsed(), "augmented dataset");

        sample = augmented.into_iter().nth(args.index);
    }

    if let (Some(path), Some(sample)) = (&args.export, &sample) {
        save_image(sample, path)?;
        info!(
            path = %path.display(),
            class = sample.class().name(),
            superclass = sample.superclass().map(|c| c.name()),
            "exported sample"
        );
    }

    Ok(())
}
