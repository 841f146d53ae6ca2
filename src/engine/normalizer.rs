use tracing::{debug, warn};

use crate::engine::{DetectorConfig, MalformedRecordPolicy};
use crate::models::{DebitTransaction, MalformedRecordError, TransactionRecord};
use crate::types::{parse_amount, parse_day};

/// Output of the filter and normalization step.
#[derive(Debug, Default)]
pub struct Normalized {
    /// Debit records with their amount and day coerced, in input order.
    pub transactions: Vec<DebitTransaction>,
    /// Records dropped under [`MalformedRecordPolicy::Skip`]. Always empty under `Reject`.
    pub skipped: Vec<MalformedRecordError>
}

/// Coerces amounts, keeps only debits and derives the calendar day of each record.
pub struct Normalizer<'a> {
    debit_label: &'a str,
    policy: MalformedRecordPolicy
}

impl<'a> Normalizer<'a> {
    pub fn new(config: &'a DetectorConfig) -> Self {
        Self {
            debit_label: &config.debit_label,
            policy: config.malformed_policy
        }
    }

    /// Produces the debit-only record set ready for grouping.
    ///
    /// The amount is coerced on every record, debit or not, so a non-numeric amount
    /// anywhere in the batch is reported. The date is only parsed for debits.
    ///
    /// # Errors
    /// Returns the first `MalformedRecordError` in row order when the policy is `Reject`.
    pub fn normalize(&self, records: &[TransactionRecord]) -> Result<Normalized, MalformedRecordError> {
        let mut normalized = Normalized::default();

        for (row, record) in records.iter().enumerate() {
            let amount = match parse_amount(&record.transaction_amount) {
                Ok(amount) => amount,
                Err(error) => {
                    self.reject_or_skip(MalformedRecordError::invalid_amount(row, record, error), &mut normalized)?;
                    continue;
                }
            };

            if record.transaction_type != self.debit_label {
                continue;
            }

            let transaction_day = match parse_day(&record.transaction_date) {
                Ok(transaction_day) => transaction_day,
                Err(error) => {
                    self.reject_or_skip(MalformedRecordError::invalid_date(row, record, error), &mut normalized)?;
                    continue;
                }
            };

            normalized.transactions.push(DebitTransaction {
                row,
                transaction_id: record.transaction_id.clone(),
                transaction_day,
                user_id: record.user_id.clone(),
                account_number: record.account_number.clone(),
                amount
            });
        }

        debug!(
            "Normalized [{}] records into [{}] debits, [{}] skipped",
            records.len(),
            normalized.transactions.len(),
            normalized.skipped.len()
        );

        Ok(normalized)
    }

    fn reject_or_skip(&self, error: MalformedRecordError, normalized: &mut Normalized) -> Result<(), MalformedRecordError> {
        match self.policy {
            MalformedRecordPolicy::Reject => Err(error),
            MalformedRecordPolicy::Skip => {
                warn!("Skipping record: {error}");
                normalized.skipped.push(error);
                Ok(())
            }
        }
    }
}
