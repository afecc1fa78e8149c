use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    /// A dataset file could not be opened. Fatal for the whole run: no
    /// partial dataset is usable.
    #[error("could not open dataset file {path}: {source}")]
    DatasetIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A dataset file ended before the expected record count was read.
    #[error("dataset file {path} is truncated: {source}")]
    TruncatedDataset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A record asked for more slots than one packed plaintext holds.
    /// Surfaced immediately; records are never silently truncated.
    #[error("record needs {needed} slots but the scheme provides {capacity}")]
    SlotCapacityExceeded { needed: usize, capacity: usize },
    /// Any failure reported by the underlying encryption library,
    /// including encrypting under a key from a different context.
    #[error("scheme error: {0}")]
    Scheme(#[from] fhe::Error),
    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),
}
