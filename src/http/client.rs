//! HTTP client for JSON fetches.

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Thin JSON client over reqwest.
///
/// One request per invocation, no retries: a failed fetch degrades the
/// downloads feature instead of failing the page build, so there is nothing
/// to recover here.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request and deserializes the JSON response.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET JSON from {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        let response = response
            .error_for_status()
            .context("Request returned an error status")?;

        response
            .json::<T>()
            .await
            .context("Failed to parse JSON response")
    }
}
