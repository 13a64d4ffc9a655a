//! Single-link HTTP probe

use crate::schema::{CheckOutcome, LinkRecord};
use anyhow::Result;
use log::debug;
use std::error::Error;

pub const DEFAULT_USER_AGENT: &str = concat!("doclinks/", env!("CARGO_PKG_VERSION"));

/// Build the client shared by all probes.
///
/// No timeout is set; a hanging server stalls its probe until the
/// transport gives up.
pub fn build_client(user_agent: &str) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder().user_agent(user_agent).build()?;
    Ok(client)
}

/// GET the record's URL once. Any response counts, whatever its status;
/// only transport failures become errors.
pub async fn probe(client: &reqwest::Client, record: LinkRecord) -> CheckOutcome {
    match client.get(&record.url).send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            debug!("{} {} -> {}", record.id, record.url, status);
            CheckOutcome::status(record, status)
        }
        Err(e) => {
            let description = describe(&e);
            debug!("{} {} -> {}", record.id, record.url, description);
            CheckOutcome::failed(record, description)
        }
    }
}

/// Error text with its source chain, e.g.
/// `error sending request for url (...): client error (Connect): ...`
fn describe(err: &dyn Error) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !description.ends_with(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = cause.source();
    }
    description
}
