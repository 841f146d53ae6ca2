//! Flags potentially fraudulent debit activity: debits are grouped per day, user and
//! account, summarised, and flagged when a group transacts often with consistent amounts.

pub mod engine;
pub mod models;
pub mod source;
pub mod types;

pub use engine::{AnomalyDetector, DetectorConfig, MalformedRecordPolicy, detect_anomalies};
pub use models::{AggregatedGroup, GroupKey, MalformedRecordError, TransactionRecord};
