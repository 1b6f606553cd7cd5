//! Shared HTTP plumbing: a JSON GET client with linear-backoff retries.
//!
//! A 404 is treated as an authoritative "does not exist" and surfaces
//! immediately; everything else (connect errors, timeouts, non-2xx statuses,
//! bodies that are not JSON) is considered transient and retried.

use std::{future::Future, time::Duration};

use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

pub mod settings;

pub use settings::HttpClientSettings;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("404 Not Found: {0}")]
    NotFound(String),

    #[error("Failed after {retries} retries. Last error: {last_error}")]
    RetriesExhausted { retries: u32, last_error: String },
}

/// Outcome of a single attempt, deciding whether the caller may retry.
#[derive(Debug, Error)]
pub enum AttemptError {
    #[error(transparent)]
    Permanent(FetchError),

    #[error("{0}")]
    Transient(String),
}

impl From<reqwest::Error> for AttemptError {
    fn from(err: reqwest::Error) -> Self {
        AttemptError::Transient(err.to_string())
    }
}

/// Drives `op` for up to `retries` attempts, sleeping `backoff_base * attempt`
/// after each transient failure. A permanent failure short-circuits.
pub async fn retry_with_backoff<T, Fut>(
    retries: u32,
    backoff_base: Duration,
    mut op: impl FnMut() -> Fut,
) -> Result<T, FetchError>
where
    Fut: Future<Output = Result<T, AttemptError>>,
{
    let mut last_error = None;

    for attempt in 1..=retries {
        match op().await {
            Ok(value) => return Ok(value),
            Err(AttemptError::Permanent(err)) => return Err(err),
            Err(AttemptError::Transient(err)) => {
                tracing::warn!(%err, attempt, "transient error, backing off");
                last_error = Some(err);
                tokio::time::sleep(backoff_base * attempt).await;
            },
        }
    }

    Err(FetchError::RetriesExhausted {
        retries,
        last_error: last_error.unwrap_or_default(),
    })
}

pub struct FetchClient {
    client: reqwest::Client,
    retries: u32,
    backoff_base: Duration,
}

impl FetchClient {
    pub fn new(settings: &HttpClientSettings) -> Self {
        Self {
            client: settings.into(),
            retries: settings.retries,
            backoff_base: settings.backoff_base,
        }
    }

    /// GET `url` and parse the body as JSON, retrying transient failures.
    #[tracing::instrument(skip(self), err)]
    pub async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        retry_with_backoff(self.retries, self.backoff_base, || self.try_fetch(url)).await
    }

    async fn try_fetch(&self, url: &str) -> Result<Value, AttemptError> {
        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AttemptError::Permanent(FetchError::NotFound(url.to_owned())));
        }

        let response = response.error_for_status()?;

        Ok(response.json().await?)
    }
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new(&HttpClientSettings::default())
    }
}
