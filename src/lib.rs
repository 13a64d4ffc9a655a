//! doclinks: Concurrent link checking for document reference lists
//!
//! Reads `id,url,page_num` lines, probes every URL at once, and writes a
//! CSV report sorted by id.

pub mod check_links;
pub mod collect;
pub mod error;
pub mod logging;
pub mod probe;
pub mod report;
pub mod schema;

pub use check_links::{aggregate, check_links, run_check_links, CheckLinksArgs, CheckLinksConfig};
pub use collect::{collect, parse_line};
pub use error::{CheckError, CollectError};
pub use report::{format_line, render, write_report, ReportSummary};
pub use schema::{CheckOutcome, LinkRecord, Outcome, ResultSet};
