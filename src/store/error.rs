use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to persist the result log
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot write results to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot encode results: {0}")]
    Encode(#[from] serde_json::Error),
}
