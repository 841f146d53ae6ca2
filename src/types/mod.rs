mod amount;
mod day;
mod errors;

pub use amount::parse_amount;
pub use day::parse_day;
pub use errors::{AmountError, DateError};

pub type UserId = String;
pub type AccountNumber = String;
pub type RowIndex = usize;
