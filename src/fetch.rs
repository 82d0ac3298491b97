//! Fetching dictionary result pages.
//!
//! A single blocking GET per lookup; no retries.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use log::debug;
use url::Url;

use crate::config::Config;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the search URL: `base_url` with `param=<term>` appended.
///
/// The term is form-encoded, so spaces become `+`.
pub fn search_url(base_url: &str, param: &str, term: &str) -> Result<Url> {
    let mut url =
        Url::parse(base_url).with_context(|| format!("Invalid base URL: \"{}\"", base_url))?;
    url.query_pairs_mut().append_pair(param, term);
    Ok(url)
}

/// Download the result page for `term` and return its body as text.
pub fn fetch_document(config: &Config, term: &str) -> Result<String> {
    let url = search_url(&config.base_url, &config.query_param, term)?;
    debug!("GET {}", url);

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(url.clone())
        .send()
        .with_context(|| format!("Request to {} failed", url))?;

    let status = response.status();
    if !status.is_success() {
        bail!("{} responded with {}", url, status);
    }

    let body = response
        .text()
        .with_context(|| format!("Failed to read response body from {}", url))?;
    debug!("Received {} bytes", body.len());
    Ok(body)
}
