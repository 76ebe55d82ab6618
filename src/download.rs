use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

/// Desktop Chrome user agent; the image host rejects default library agents.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Performs one blocking GET and returns the full response body.
///
/// The body is read into memory here, before the caller touches the
/// filesystem, so a failed fetch never leaves a partial file behind.
pub fn fetch_bytes(url: &str, user_agent: &str) -> Result<Vec<u8>> {
    log::info!("Fetching {}", url);

    let client = Client::builder()
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(url)
        .header(USER_AGENT, user_agent)
        .send()
        .context("Failed to fetch image")?;

    if !response.status().is_success() {
        anyhow::bail!("Fetch failed with status: {}", response.status());
    }

    let bytes = response.bytes()
        .context("Failed to read response bytes")?;

    log::info!("Fetched {} bytes", bytes.len());
    Ok(bytes.to_vec())
}
