use chrono::NaiveDate;
use serde::Deserialize;

use crate::types::{AccountNumber, RowIndex, UserId};

/// Represents a single row of the input batch as received from the upstream source.
///
/// `transaction_amount` and `transaction_date` are kept as text; they are only trusted
/// once the normalizer has coerced them into a [`DebitTransaction`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransactionRecord {
    /// Upstream row identifier, used only to reference the row in errors.
    #[serde(default)]
    pub transaction_id: Option<String>,
    pub user_id: UserId,
    pub account_number: AccountNumber,
    /// Category of the movement (e.g. `DEBIT`, `CREDIT`).
    pub transaction_type: String,
    /// Monetary amount as text.
    pub transaction_amount: String,
    /// Timestamp as text, at least day resolution.
    pub transaction_date: String
}

impl TransactionRecord {
    pub fn new(
        user_id: impl Into<UserId>,
        account_number: impl Into<AccountNumber>,
        transaction_type: impl Into<String>,
        transaction_amount: impl Into<String>,
        transaction_date: impl Into<String>
    ) -> Self {
        Self {
            transaction_id: None,
            user_id: user_id.into(),
            account_number: account_number.into(),
            transaction_type: transaction_type.into(),
            transaction_amount: transaction_amount.into(),
            transaction_date: transaction_date.into()
        }
    }

    pub fn with_transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self
    }
}

/// A debit record that survived filtering, with its amount and day coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct DebitTransaction {
    /// Position of the source record within the batch.
    pub row: RowIndex,
    pub transaction_id: Option<String>,
    pub transaction_day: NaiveDate,
    pub user_id: UserId,
    pub account_number: AccountNumber,
    pub amount: f64
}
