mod errors;
mod group;
mod transaction;

pub use errors::{MalformedField, MalformedRecordError, RowReference};
pub use group::{AggregatedGroup, GroupKey};
pub use transaction::{DebitTransaction, TransactionRecord};
