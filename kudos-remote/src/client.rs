//! Seed client using reqwest

use std::time::Duration;

use kudos_core::{RemoteConfig, Review};
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use tracing::{debug, info};

use crate::{Error, Result, SeedSource};

/// Fetches a seed list from one source
pub struct SeedClient {
    http: reqwest::Client,
    source: SeedSource,
    timeout: Duration,
}

impl SeedClient {
    /// Create a client for `source` with the default timeout
    pub fn new(source: SeedSource) -> Self {
        Self {
            http: reqwest::Client::new(),
            source,
            timeout: kudos_core::config::DEFAULT_REMOTE_TIMEOUT,
        }
    }

    /// Build a client from configuration
    ///
    /// Returns `None` when no seed location is configured.
    pub fn from_config(config: &RemoteConfig) -> Result<Option<Self>> {
        let Some(location) = config.url.as_deref() else {
            return Ok(None);
        };
        let source = SeedSource::parse(location)?;
        info!(source = %source, timeout = ?config.timeout, "Created seed client");
        Ok(Some(Self::new(source).with_timeout(config.timeout)))
    }

    /// Bound every fetch by `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a preconfigured HTTP client
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn source(&self) -> &SeedSource {
        &self.source
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch and parse the seed list
    ///
    /// Non-success statuses, malformed bodies, and timeouts are errors.
    pub async fn fetch(&self) -> Result<Vec<Review>> {
        debug!(source = %self.source, "Fetching review seed");

        let body = tokio::time::timeout(self.timeout, self.fetch_body())
            .await
            .map_err(|_| Error::Timeout(self.timeout))??;

        let reviews = parse_seed(&body)?;
        debug!(source = %self.source, count = reviews.len(), "Fetched review seed");
        Ok(reviews)
    }

    async fn fetch_body(&self) -> Result<String> {
        match &self.source {
            SeedSource::Http(url) => {
                let response = self
                    .http
                    .get(url.clone())
                    .header(CACHE_CONTROL, "no-cache")
                    .header(PRAGMA, "no-cache")
                    .send()
                    .await?;

                let status = response.status();
                if !status.is_success() {
                    return Err(Error::Status(status.as_u16()));
                }

                Ok(response.text().await?)
            }
            SeedSource::File(path) => Ok(tokio::fs::read_to_string(path).await?),
        }
    }
}

/// Parse a seed body into reviews
///
/// The body must be a JSON array of review objects.
pub fn parse_seed(body: &str) -> Result<Vec<Review>> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| Error::Parse(e.to_string()))?;
    if !value.is_array() {
        return Err(Error::NotArray);
    }
    serde_json::from_value(value).map_err(|e| Error::Parse(e.to_string()))
}
