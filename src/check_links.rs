//! check-links: probe every record concurrently and write the report
//!
//! One task per record, no concurrency cap, no cancellation. Results funnel
//! through a single channel into one aggregating consumer.

use crate::collect::collect;
use crate::error::CheckError;
use crate::probe::{build_client, probe, DEFAULT_USER_AGENT};
use crate::report::write_report;
use crate::schema::{CheckOutcome, LinkRecord, ResultSet};
use anyhow::{Context, Result};
use clap::Args;
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tokio::sync::mpsc;

#[derive(Args, Debug)]
pub struct CheckLinksArgs {
    /// Input file with `id,url,page_num` lines (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Report destination
    #[arg(short, long, value_name = "PATH", default_value = "report.csv")]
    pub output: PathBuf,

    /// User-Agent header sent with every probe
    #[arg(long, env = "DOCLINKS_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

/// Configuration for check-links
pub struct CheckLinksConfig {
    pub user_agent: String,
}

impl Default for CheckLinksConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Run the whole pipeline: collect, dispatch, aggregate, report
pub async fn run_check_links(args: CheckLinksArgs) -> Result<()> {
    let records = match &args.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            collect(BufReader::new(file))?
        }
        None => collect(io::stdin().lock())?,
    };

    info!("Checking {} links...", records.len());

    let config = CheckLinksConfig {
        user_agent: args.user_agent,
    };
    let results = check_links(records, &config).await?;

    let summary = write_report(&args.output, &results)
        .await
        .with_context(|| format!("Failed to write report: {}", args.output.display()))?;

    // Output compact JSON to stdout
    println!("{}", serde_json::to_string(&summary)?);

    info!(
        "Done: {}/{} responded, report at {}",
        summary.ok,
        summary.total,
        args.output.display()
    );

    Ok(())
}

/// Probe every record concurrently and gather the outcomes by id
pub async fn check_links(
    records: Vec<LinkRecord>,
    config: &CheckLinksConfig,
) -> Result<ResultSet> {
    let client = build_client(&config.user_agent)?;
    let expected = records.len();
    let (tx, rx) = mpsc::unbounded_channel();

    for record in records {
        let client = client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let outcome = probe(&client, record).await;
            // Receiver only goes away once every expected outcome arrived
            let _ = tx.send(outcome);
        });
    }
    // Only the probes hold senders now, so the channel closes if one dies
    drop(tx);

    Ok(aggregate(rx, expected).await?)
}

/// Receive exactly `expected` outcomes, keyed by record id.
///
/// Duplicate ids keep whichever outcome arrived last.
pub async fn aggregate(
    mut rx: mpsc::UnboundedReceiver<CheckOutcome>,
    expected: usize,
) -> Result<ResultSet, CheckError> {
    let mut results = ResultSet::with_capacity(expected);

    for received in 0..expected {
        let Some(outcome) = rx.recv().await else {
            return Err(CheckError::ProbeLost { expected, received });
        };
        if let Some(previous) = results.insert(outcome.record.id, outcome) {
            debug!("duplicate id {}, replacing earlier outcome", previous.record.id);
        }
    }

    Ok(results)
}
