// src/utils/http.rs

//! HTTP client utilities.

use crate::error::Result;

/// User-Agent header for outbound requests.
const USER_AGENT: &str = "Mozilla/5.0 (compatible; stackwatch/0.1)";

/// Create the asynchronous HTTP client.
///
/// No request timeout is applied beyond the transport defaults.
pub fn create_async_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    Ok(client)
}

/// Fetch a page body, treating any non-success status as an error.
pub async fn fetch_text(client: &reqwest::Client, url: &str) -> Result<String> {
    let text = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(text)
}
