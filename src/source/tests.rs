use super::{CsvFileSource, RecordSource, SourceError, read_records, write_groups};

use std::io::Write;

use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use tempfile::NamedTempFile;

use crate::engine::AnomalyDetector;
use crate::models::{AggregatedGroup, GroupKey, TransactionRecord};

fn create_temporary_csv(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    write!(file, "{content}")?;
    Ok(file)
}

#[test]
fn test_read_records_maps_columns_by_header_and_ignores_extras() -> Result<()> {
    let csv_content = "channel,transaction_date,user_id,account_number,transaction_type,transaction_amount,transaction_id\n\
                       atm, 2024-01-15 10:00:00 ,u1,acc-1,DEBIT, 100.50 ,tx-1\n";

    let records = read_records(csv_content.as_bytes())?;

    assert_eq!(records, vec![
        TransactionRecord::new("u1", "acc-1", "DEBIT", "100.50", "2024-01-15 10:00:00").with_transaction_id("tx-1")
    ]);

    Ok(())
}

#[test]
fn test_read_records_treats_transaction_id_as_optional() -> Result<()> {
    let csv_content = "user_id,account_number,transaction_type,transaction_amount,transaction_date\n\
                       u1,acc-1,CREDIT,abc,2024-01-15\n";

    let records = read_records(csv_content.as_bytes())?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].transaction_id, None);
    assert_eq!(records[0].transaction_amount, "abc");

    Ok(())
}

#[test]
fn test_read_records_fails_on_missing_required_column() {
    let csv_content = "user_id,account_number,transaction_type,transaction_date\nu1,acc-1,DEBIT,2024-01-15\n";

    assert!(matches!(read_records(csv_content.as_bytes()), Err(SourceError::Csv(_))));
}

#[test]
fn test_read_records_accepts_header_only_input() -> Result<()> {
    let csv_content = "user_id,account_number,transaction_type,transaction_amount,transaction_date\n";

    assert!(read_records(csv_content.as_bytes())?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_csv_file_source_loads_records_from_disk() -> Result<()> {
    let file = create_temporary_csv(
        "user_id,account_number,transaction_type,transaction_amount,transaction_date\n\
         u1,acc-1,DEBIT,10,2024-01-15\n\
         u2,acc-2,CREDIT,20,2024-01-16\n"
    )?;

    let source = CsvFileSource::new(file.path());
    let records = source.load().await?;

    assert_eq!(source.path(), file.path());
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].user_id, "u2");

    Ok(())
}

#[tokio::test]
async fn test_csv_file_source_reports_missing_file() {
    let source = CsvFileSource::new("definitely-missing.csv");

    assert!(matches!(source.load().await, Err(SourceError::Open { .. })));
}

#[test]
fn test_write_groups_emits_header_amounts_and_flag() -> Result<()> {
    let groups = vec![
        AggregatedGroup {
            key: GroupKey {
                transaction_day: NaiveDate::from_ymd_opt(2024, 1, 15).ok_or_else(|| anyhow!("invalid fixture date"))?,
                user_id: "u1".to_string(),
                account_number: "acc-1".to_string()
            },
            num_transactions: 5,
            mean_transaction_amount: 100.0,
            std_transaction_amount: 0.0,
            total_transaction_amount: 500.0,
            alert: true
        }
    ];

    let mut output = Vec::new();
    write_groups(&mut output, &groups)?;

    assert_eq!(
        String::from_utf8(output)?,
        "transaction_day,user_id,account_number,num_transactions,mean_transaction_amount,std_transaction_amount,total_transaction_amount,alert\n\
         2024-01-15,u1,acc-1,5,100,0,500,1\n"
    );

    Ok(())
}

#[test]
fn test_write_groups_keeps_near_threshold_deviation_consistent_with_alert() -> Result<()> {
    for (target_deviation, expected_alert) in [(8.40004, "0"), (8.39996, "1")] {
        let spread = target_deviation * 2f64.sqrt();
        let records: Vec<TransactionRecord> = [100.0 - spread, 100.0, 100.0, 100.0, 100.0 + spread].iter()
            .map(|amount| TransactionRecord::new("u1", "acc-1", "DEBIT", amount.to_string(), "2024-01-15"))
            .collect();

        let groups = AnomalyDetector::default().detect(&records)?;
        let mut output = Vec::new();
        write_groups(&mut output, &groups)?;

        let output = String::from_utf8(output)?;
        let row = output.lines().nth(1).ok_or_else(|| anyhow!("group row missing from output"))?;
        let fields: Vec<&str> = row.split(',').collect();
        let printed_deviation: f64 = fields[5].parse()?;

        assert_eq!(printed_deviation, groups[0].std_transaction_amount);
        assert_eq!(printed_deviation <= 8.4, expected_alert == "1");
        assert_eq!(fields[7], expected_alert);
    }

    Ok(())
}
