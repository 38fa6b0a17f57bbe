use thiserror::Error;

#[derive(Error, Debug)]
pub enum AugmentError {
    #[error("Invalid augmentation config: {0}")]
    InvalidConfig(String),

    #[error("Thread count must be at least 1")]
    ZeroThreads,

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
