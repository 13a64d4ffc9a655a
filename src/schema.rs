//! Link check data model
//!
//! Records parsed from the input list and the outcome of probing each one.

use serde::Serialize;
use std::collections::HashMap;

/// A single input line: document id, URL, and the page it appears on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRecord {
    /// Caller-supplied identifier (not checked for uniqueness)
    pub id: i64,
    /// URL taken verbatim from the input
    pub url: String,
    /// Page of the source document the link was found on
    pub page_number: i64,
}

/// What a probe produced: a response status or a transport error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Any HTTP response, including 4xx/5xx
    Status(u16),
    /// DNS failure, refused connection, malformed URL, ...
    Failed(String),
}

/// Result of probing one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub record: LinkRecord,
    pub outcome: Outcome,
}

impl CheckOutcome {
    pub fn status(record: LinkRecord, status: u16) -> Self {
        Self {
            record,
            outcome: Outcome::Status(status),
        }
    }

    pub fn failed(record: LinkRecord, description: impl Into<String>) -> Self {
        Self {
            record,
            outcome: Outcome::Failed(description.into()),
        }
    }

    /// HTTP status, if the probe got a response
    pub fn http_status(&self) -> Option<u16> {
        match self.outcome {
            Outcome::Status(code) => Some(code),
            Outcome::Failed(_) => None,
        }
    }

    /// Error description, if the probe failed at the transport level
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Status(_) => None,
            Outcome::Failed(desc) => Some(desc),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, Outcome::Failed(_))
    }
}

/// Outcomes keyed by record id; the last outcome aggregated for an id wins
pub type ResultSet = HashMap<i64, CheckOutcome>;
