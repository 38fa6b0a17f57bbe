use std::path::PathBuf;

use thiserror::Error;

use super::labels::LabelKind;

/// Errors raised while decoding a stream of CIFAR records.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("record {record} is truncated: {remaining} of {expected} bytes present")]
    Truncated {
        record: usize,
        remaining: usize,
        expected: usize,
    },

    #[error("record {record}: {kind} label {label} out of range (table has {table_len} entries)")]
    LabelOutOfRange {
        record: usize,
        kind: LabelKind,
        label: u8,
        table_len: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum DataLoaderError {
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: RecordError,
    },

    #[error("Image error writing {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl DataLoaderError {
    /// Path of the file or directory that caused the failure.
    pub fn path(&self) -> &std::path::Path {
        match self {
            DataLoaderError::DirectoryNotFound(path)
            | DataLoaderError::Io { path, .. }
            | DataLoaderError::Decode { path, .. }
            | DataLoaderError::Image { path, .. } => path,
        }
    }
}
