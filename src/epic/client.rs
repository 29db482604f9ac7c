//! Blocking HTTP client for the EPIC API
//!
//! One shared client with consistent error handling for both endpoints.
//! Timeouts, connection failures and 404s map to typed errors.

use crate::epic::{AvailableDate, EpicImage, PhotoArchive, EPIC_BASE_URL, MAX_DATES};
use crate::error::{Error, Result};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client timeout for all archive operations
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the EPIC archive
pub struct EpicClient {
    client: Client,
    base_url: String,
}

impl Default for EpicClient {
    fn default() -> Self {
        Self::new()
    }
}

impl EpicClient {
    /// Create a client with bearthday's default settings
    pub fn new() -> Self {
        Self::with_base_url(EPIC_BASE_URL)
    }

    /// Create a client against a different base URL (used by tests)
    pub fn with_base_url(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("bearthday/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET a URL and decode its JSON body
    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().map_err(|e| {
            if e.is_timeout() {
                Error::Network(format!("Request timed out: {}", url))
            } else if e.is_connect() {
                Error::Network(format!("Connection failed: {}", url))
            } else {
                Error::Network(format!("HTTP error: {}", e))
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            if status.as_u16() == 404 {
                return Err(Error::Config(format!("Not found: {}", url)));
            }
            return Err(Error::Network(format!(
                "HTTP {} for {}",
                status.as_u16(),
                url
            )));
        }

        response
            .json()
            .map_err(|e| Error::Network(format!("Failed to parse response: {}", e)))
    }
}

impl PhotoArchive for EpicClient {
    fn available_dates(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/natural/all", self.base_url);
        let entries: Vec<AvailableDate> = self.get_json(&url)?;
        Ok(entries
            .into_iter()
            .take(MAX_DATES)
            .map(|entry| entry.date)
            .collect())
    }

    fn images_for_date(&self, date: &str) -> Result<Vec<EpicImage>> {
        let url = format!("{}/api/natural/date/{}", self.base_url, date);
        self.get_json(&url)
    }
}
