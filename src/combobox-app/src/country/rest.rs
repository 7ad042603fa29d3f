//! Country names from a REST endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::CountryProvider;
use crate::error::{AppError, Result};

#[derive(Debug, Deserialize)]
struct CountryRecord {
    name: CountryName,
}

#[derive(Debug, Deserialize)]
struct CountryName {
    common: String,
}

/// Fetches `[{"name": {"common": "..."}}]` records and returns the common
/// names sorted alphabetically.
#[derive(Debug, Clone)]
pub struct RestCountries {
    client: reqwest::Client,
    url: String,
}

impl RestCountries {
    /// Create a provider for `url` with a whole-request `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5).min(timeout))
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CountryProvider for RestCountries {
    fn name(&self) -> &'static str {
        "rest"
    }

    async fn fetch_country_names(&self) -> Result<Vec<String>> {
        tracing::debug!(url = %self.url, "fetching country names");
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status { status });
        }

        let body = response.text().await?;
        let records: Vec<CountryRecord> = serde_json::from_str(&body)?;
        let mut names: Vec<String> = records.into_iter().map(|r| r.name.common).collect();
        names.sort();
        tracing::debug!(count = names.len(), "fetched country names");
        Ok(names)
    }
}
