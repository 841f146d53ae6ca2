mod aggregator;
mod config;
mod detector;
mod normalizer;

pub use aggregator::Aggregator;
pub use config::{DEFAULT_DEBIT_LABEL, DEFAULT_MAX_STD_DEVIATION, DEFAULT_MIN_TRANSACTIONS, DetectorConfig, MalformedRecordPolicy};
pub use detector::{AnomalyDetector, Detection, detect_anomalies};
pub use normalizer::{Normalized, Normalizer};
