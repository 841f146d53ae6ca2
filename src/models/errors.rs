use std::fmt;
use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::models::TransactionRecord;
use crate::types::{AmountError, DateError, RowIndex};

/// Field of a [`TransactionRecord`] that failed coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedField {
    TransactionAmount,
    TransactionDate
}

impl Display for MalformedField {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MalformedField::TransactionAmount => formatter.write_str("transaction_amount"),
            MalformedField::TransactionDate => formatter.write_str("transaction_date")
        }
    }
}

/// Locates the offending row: its batch index plus the upstream id when one was supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowReference {
    pub row: RowIndex,
    pub transaction_id: Option<String>
}

impl Display for RowReference {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match &self.transaction_id {
            Some(transaction_id) => write!(formatter, "row [{}] (transaction [{}])", self.row, transaction_id),
            None => write!(formatter, "row [{}]", self.row)
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MalformedRecordError {
    #[error("Malformed record at {reference}: transaction_amount [{value}] is not numeric")]
    InvalidAmount {
        reference: RowReference,
        value: String,
        #[source]
        source: AmountError
    },
    #[error("Malformed record at {reference}: transaction_date [{value}] is not a valid date")]
    InvalidDate {
        reference: RowReference,
        value: String,
        #[source]
        source: DateError
    }
}

impl MalformedRecordError {
    pub fn invalid_amount(row: RowIndex, record: &TransactionRecord, source: AmountError) -> Self {
        Self::InvalidAmount {
            reference: RowReference { row, transaction_id: record.transaction_id.clone() },
            value: record.transaction_amount.clone(),
            source
        }
    }

    pub fn invalid_date(row: RowIndex, record: &TransactionRecord, source: DateError) -> Self {
        Self::InvalidDate {
            reference: RowReference { row, transaction_id: record.transaction_id.clone() },
            value: record.transaction_date.clone(),
            source
        }
    }

    pub fn field(&self) -> MalformedField {
        match self {
            Self::InvalidAmount { .. } => MalformedField::TransactionAmount,
            Self::InvalidDate { .. } => MalformedField::TransactionDate
        }
    }

    pub fn row(&self) -> RowIndex {
        self.reference().row
    }

    pub fn reference(&self) -> &RowReference {
        match self {
            Self::InvalidAmount { reference, .. } | Self::InvalidDate { reference, .. } => reference
        }
    }
}
