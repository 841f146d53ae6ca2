use std::collections::BTreeMap;

use crate::engine::DetectorConfig;
use crate::models::{AggregatedGroup, DebitTransaction, GroupKey};

/// Groups debits by day, user and account, summarises each group and applies the alert rule.
///
/// The rule flags groups that transact often with unusually consistent amounts:
/// `num_transactions >= min_transactions && std_transaction_amount <= max_std_deviation`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregator {
    min_transactions: usize,
    max_std_deviation: f64
}

impl Aggregator {
    pub fn new(min_transactions: usize, max_std_deviation: f64) -> Self {
        Self {
            min_transactions,
            max_std_deviation
        }
    }

    /// Returns one group per observed key, ordered by key.
    pub fn aggregate(&self, transactions: &[DebitTransaction]) -> Vec<AggregatedGroup> {
        let mut groups = BTreeMap::<GroupKey, Vec<f64>>::new();

        for transaction in transactions {
            groups.entry(GroupKey::of(transaction))
                .or_default()
                .push(transaction.amount);
        }

        groups.into_iter()
            .map(|(key, amounts)| self.evaluate(key, &amounts))
            .collect()
    }

    /// Applies the alert rule to already computed statistics.
    ///
    /// A non-finite deviation never raises an alert.
    pub fn is_anomalous(&self, num_transactions: usize, std_transaction_amount: f64) -> bool {
        num_transactions >= self.min_transactions
            && std_transaction_amount.is_finite()
            && std_transaction_amount <= self.max_std_deviation
    }

    fn evaluate(&self, key: GroupKey, amounts: &[f64]) -> AggregatedGroup {
        let num_transactions = amounts.len();
        let total_transaction_amount: f64 = amounts.iter().sum();
        let mean_transaction_amount = total_transaction_amount / num_transactions as f64;
        let std_transaction_amount = sample_std_deviation(amounts, mean_transaction_amount);

        AggregatedGroup {
            key,
            num_transactions,
            mean_transaction_amount,
            std_transaction_amount,
            total_transaction_amount,
            alert: self.is_anomalous(num_transactions, std_transaction_amount)
        }
    }
}

impl From<&DetectorConfig> for Aggregator {
    fn from(config: &DetectorConfig) -> Self {
        Self::new(config.min_transactions, config.max_std_deviation)
    }
}

/// Sample standard deviation with Bessel's correction.
///
/// Undefined for fewer than two values; reported as 0 so the rule always sees a number.
fn sample_std_deviation(amounts: &[f64], mean: f64) -> f64 {
    if amounts.len() < 2 {
        return 0.0;
    }

    let squared_deviations: f64 = amounts.iter()
        .map(|amount| (amount - mean).powi(2))
        .sum();
    (squared_deviations / (amounts.len() - 1) as f64).sqrt()
}
