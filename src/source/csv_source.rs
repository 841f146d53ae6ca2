use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use tokio::task::spawn_blocking;
use tracing::debug;

use crate::models::TransactionRecord;
use crate::source::{RecordSource, SourceError};

/// Loads a header-first CSV file with at least the columns
/// `user_id,account_number,transaction_type,transaction_amount,transaction_date`.
/// A `transaction_id` column is picked up when present; any other column is ignored.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for CsvFileSource {
    fn load(&self) -> impl Future<Output = Result<Vec<TransactionRecord>, SourceError>> + Send {
        let path = self.path.clone();

        async move {
            spawn_blocking(move || -> Result<Vec<TransactionRecord>, SourceError> {
                let file = File::open(&path).map_err(|source| SourceError::Open { path: path.clone(), source })?;
                let records = read_records(BufReader::new(file))?;

                debug!("Loaded [{}] records from {}", records.len(), path.display());

                Ok(records)
            })
            .await?
        }
    }
}

/// Deserializes every row of a CSV stream. A missing column or ragged row fails the whole read.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<TransactionRecord>, SourceError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(reader);

    let records = reader.deserialize::<TransactionRecord>()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(records)
}
