use chrono::NaiveDate;

use crate::models::DebitTransaction;
use crate::types::{AccountNumber, UserId};

/// Grouping key: one calendar day of activity for one user and account.
///
/// Field order defines the output ordering (day, then user, then account).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    pub transaction_day: NaiveDate,
    pub user_id: UserId,
    pub account_number: AccountNumber
}

impl GroupKey {
    pub fn of(transaction: &DebitTransaction) -> Self {
        Self {
            transaction_day: transaction.transaction_day,
            user_id: transaction.user_id.clone(),
            account_number: transaction.account_number.clone()
        }
    }
}

/// Summary statistics and anomaly flag for a single [`GroupKey`].
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedGroup {
    pub key: GroupKey,
    /// Number of debit records in the group, always at least 1.
    pub num_transactions: usize,
    pub mean_transaction_amount: f64,
    /// Sample standard deviation (n - 1 denominator), 0 for single-record groups.
    pub std_transaction_amount: f64,
    pub total_transaction_amount: f64,
    pub alert: bool
}

impl AggregatedGroup {
    /// The alert flag in its 0/1 wire form.
    pub fn alert_flag(&self) -> u8 {
        u8::from(self.alert)
    }
}
