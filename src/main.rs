use std::io::{BufWriter, stderr, stdout};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

use debit_anomaly_detector::engine::{
    AnomalyDetector, DEFAULT_DEBIT_LABEL, DEFAULT_MAX_STD_DEVIATION, DEFAULT_MIN_TRANSACTIONS, DetectorConfig,
    MalformedRecordPolicy
};
use debit_anomaly_detector::source::{CsvFileSource, RecordSource, write_groups};

/// Flags user/account/day debit groups with many transactions of consistent amounts.
///
/// Reads a transactions CSV and writes one row per group to stdout.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Transactions CSV with user_id, account_number, transaction_type, transaction_amount and transaction_date columns
    input: PathBuf,
    /// Log verbosity on stderr: error, warn, info, debug or trace
    #[arg(long, default_value = "error")]
    log_level: String,
    /// Minimum number of debits in a group before it can be flagged
    #[arg(long, default_value_t = DEFAULT_MIN_TRANSACTIONS)]
    min_transactions: usize,
    /// Maximum sample standard deviation of a flagged group
    #[arg(long, default_value_t = DEFAULT_MAX_STD_DEVIATION)]
    max_std_deviation: f64,
    /// transaction_type value that marks a debit (case-sensitive)
    #[arg(long, default_value = DEFAULT_DEBIT_LABEL)]
    debit_label: String,
    /// Drop malformed records instead of failing the whole batch
    #[arg(long)]
    skip_malformed: bool
}

impl Args {
    fn detector_config(&self) -> DetectorConfig {
        let policy = if self.skip_malformed {
            MalformedRecordPolicy::Skip
        } else {
            MalformedRecordPolicy::Reject
        };

        DetectorConfig::default()
            .with_min_transactions(self.min_transactions)
            .with_max_std_deviation(self.max_std_deviation)
            .with_debit_label(self.debit_label.as_str())
            .with_malformed_policy(policy)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(parse_log_level(&args.log_level));

    let detector = AnomalyDetector::new(args.detector_config());
    debug!("Detector configuration: {:?}", detector.config());

    let source = CsvFileSource::new(&args.input);

    let timer = Instant::now();
    let records = source.load().await?;
    let detection = detector.run(&records)?;

    info!("Processed {} in: {:?}", args.input.display(), timer.elapsed());

    write_groups(BufWriter::new(stdout().lock()), &detection.groups)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the CSV result, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
