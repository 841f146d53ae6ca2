use std::io::Write;

use csv::WriterBuilder;

use crate::models::AggregatedGroup;
use crate::source::SourceError;

const HEADER: [&str; 8] = [
    "transaction_day",
    "user_id",
    "account_number",
    "num_transactions",
    "mean_transaction_amount",
    "std_transaction_amount",
    "total_transaction_amount",
    "alert"
];

/// Writes groups as CSV with amounts at full precision and the alert as `1`/`0`.
pub fn write_groups<W: Write>(output: W, groups: &[AggregatedGroup]) -> Result<(), SourceError> {
    let mut writer = WriterBuilder::new().from_writer(output);

    writer.write_record(HEADER)?;

    for group in groups {
        writer.write_record([
            group.key.transaction_day.to_string(),
            group.key.user_id.clone(),
            group.key.account_number.clone(),
            group.num_transactions.to_string(),
            group.mean_transaction_amount.to_string(),
            group.std_transaction_amount.to_string(),
            group.total_transaction_amount.to_string(),
            group.alert_flag().to_string()
        ])?;
    }

    writer.flush()?;

    Ok(())
}
