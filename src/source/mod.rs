mod csv_sink;
mod csv_source;
mod errors;
#[cfg(test)]
mod tests;

use crate::models::TransactionRecord;

pub use csv_sink::write_groups;
pub use csv_source::{CsvFileSource, read_records};
pub use errors::SourceError;

/// Supplies a finite batch of records to the detector.
///
/// Retrieval (files, object storage, request bodies) lives behind this trait; the
/// detector itself only ever sees the materialized batch.
pub trait RecordSource: Send + Sync {
    fn load(&self) -> impl Future<Output = Result<Vec<TransactionRecord>, SourceError>> + Send;
}
