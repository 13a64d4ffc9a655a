//! CSV report of link check outcomes, sorted by id

use crate::schema::{CheckOutcome, ResultSet};
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// What was written, printed as JSON once the report is on disk
#[derive(Debug, Serialize)]
pub struct ReportSummary {
    pub report: String,
    pub total: usize,
    pub ok: usize,
    pub failed: usize,
}

/// `id,url,page_num,status[,'error']`; status is 0 when the probe failed
pub fn format_line(outcome: &CheckOutcome) -> String {
    let record = &outcome.record;
    let mut line = format!(
        "{},{},{},{}",
        record.id,
        record.url,
        record.page_number,
        outcome.http_status().unwrap_or(0)
    );
    if let Some(error) = outcome.error() {
        line.push_str(&format!(",'{}'", error));
    }
    line
}

/// Render the whole report in ascending id order
pub fn render(results: &ResultSet) -> String {
    let mut ids: Vec<&i64> = results.keys().collect();
    ids.sort_unstable();

    ids.into_iter()
        .map(|id| format_line(&results[id]) + "\n")
        .collect()
}

/// Create (or truncate) `path` and write the report to it
pub async fn write_report(path: &Path, results: &ResultSet) -> Result<ReportSummary> {
    tokio::fs::write(path, render(results)).await?;

    let failed = results.values().filter(|o| o.is_failure()).count();
    Ok(ReportSummary {
        report: path.display().to_string(),
        total: results.len(),
        ok: results.len() - failed,
        failed,
    })
}
