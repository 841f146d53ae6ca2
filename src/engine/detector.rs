use std::time::Instant;

use tracing::info;

use crate::engine::{Aggregator, DetectorConfig, Normalizer};
use crate::models::{AggregatedGroup, MalformedRecordError, TransactionRecord};

/// Result of a detection run.
#[derive(Debug, Default)]
pub struct Detection {
    pub groups: Vec<AggregatedGroup>,
    /// Records dropped under the `Skip` policy, each with its full diagnostic.
    pub skipped: Vec<MalformedRecordError>
}

impl Detection {
    pub fn alerts(&self) -> impl Iterator<Item = &AggregatedGroup> {
        self.groups.iter().filter(|group| group.alert)
    }
}

/// Stateless batch transform: records in, flagged groups out.
///
/// Holds only its configuration, so the same detector can be reused across
/// batches and the same batch always yields the same groups.
#[derive(Debug, Clone, Default)]
pub struct AnomalyDetector {
    config: DetectorConfig
}

impl AnomalyDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Runs the full pipeline and returns the groups together with any skipped records.
    ///
    /// # Errors
    /// Returns `MalformedRecordError` under the `Reject` policy when a record's amount
    /// or date cannot be coerced.
    pub fn run(&self, records: &[TransactionRecord]) -> Result<Detection, MalformedRecordError> {
        let timer = Instant::now();

        let normalized = Normalizer::new(&self.config).normalize(records)?;
        let groups = Aggregator::from(&self.config).aggregate(&normalized.transactions);

        let detection = Detection {
            groups,
            skipped: normalized.skipped
        };

        info!(
            "Evaluated [{}] records: [{}] debits, [{}] skipped, [{}] groups, [{}] alerts in {:?}",
            records.len(),
            normalized.transactions.len(),
            detection.skipped.len(),
            detection.groups.len(),
            detection.alerts().count(),
            timer.elapsed()
        );

        Ok(detection)
    }

    /// Runs the full pipeline and returns only the groups.
    pub fn detect(&self, records: &[TransactionRecord]) -> Result<Vec<AggregatedGroup>, MalformedRecordError> {
        self.run(records).map(|detection| detection.groups)
    }
}

/// Flags anomalous debit activity using the default thresholds and the `Reject` policy.
pub fn detect_anomalies(records: &[TransactionRecord]) -> Result<Vec<AggregatedGroup>, MalformedRecordError> {
    AnomalyDetector::default().detect(records)
}
