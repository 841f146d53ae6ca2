use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Unable to open [{path}]: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV output error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV ingestion task failed: {0}")]
    Join(#[from] JoinError)
}
