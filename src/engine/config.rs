pub const DEFAULT_MIN_TRANSACTIONS: usize = 5;
pub const DEFAULT_MAX_STD_DEVIATION: f64 = 8.4;
pub const DEFAULT_DEBIT_LABEL: &str = "DEBIT";

/// What the normalizer does with a record whose amount or date cannot be coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedRecordPolicy {
    /// Fail the whole batch on the first malformed record.
    #[default]
    Reject,
    /// Drop the record, log it at `warn` and keep going. Dropped records silently
    /// reduce the `num_transactions` of the group they would have joined.
    Skip
}

/// Tunables for a detection run.
///
/// The thresholds default to the rule's calibrated values (5 and 8.4);
/// they carry no derivation and should be revisited per dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorConfig {
    /// A group needs at least this many debits to be flagged.
    pub min_transactions: usize,
    /// A group is flagged only if its sample standard deviation is at or below this value.
    pub max_std_deviation: f64,
    /// Exact, case-sensitive `transaction_type` value that marks a debit.
    pub debit_label: String,
    pub malformed_policy: MalformedRecordPolicy
}

impl DetectorConfig {
    pub fn with_min_transactions(mut self, min_transactions: usize) -> Self {
        self.min_transactions = min_transactions;
        self
    }

    pub fn with_max_std_deviation(mut self, max_std_deviation: f64) -> Self {
        self.max_std_deviation = max_std_deviation;
        self
    }

    pub fn with_debit_label(mut self, debit_label: impl Into<String>) -> Self {
        self.debit_label = debit_label.into();
        self
    }

    pub fn with_malformed_policy(mut self, malformed_policy: MalformedRecordPolicy) -> Self {
        self.malformed_policy = malformed_policy;
        self
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_transactions: DEFAULT_MIN_TRANSACTIONS,
            max_std_deviation: DEFAULT_MAX_STD_DEVIATION,
            debit_label: DEFAULT_DEBIT_LABEL.to_string(),
            malformed_policy: MalformedRecordPolicy::default()
        }
    }
}
