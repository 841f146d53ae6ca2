use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AmountError {
    #[error("Amount error: Value is an empty string")]
    Empty,
    #[error("Amount error: {0}")]
    InvalidFormat(String),
    #[error("Amount error: Value does not fit in a 64-bit float")]
    OutOfRange
}

#[derive(Debug, Error, PartialEq)]
pub enum DateError {
    #[error("Date error: Value is an empty string")]
    Empty,
    #[error("Date error: Unrecognized timestamp '{0}'")]
    Unrecognized(String)
}
