//! Catalog HTTP client
//!
//! Issues the single `GET /api/courses?` request for a search bar mount. The
//! request runs on its own thread with a current-thread tokio runtime so the
//! UI loop never waits on the network.

use std::sync::mpsc::Sender;
use std::thread::JoinHandle;
use std::time::Duration;

use reqwest::Url;
use reqwest::header::CONTENT_TYPE;
use tokio_util::sync::CancellationToken;

use super::{CatalogError, CatalogResponse, Course, parse_catalog};
use crate::config::CatalogConfig;

/// Path appended to the configured base URL. The trailing `?` is sent as-is
/// with no query parameters.
pub const COURSES_PATH: &str = "/api/courses?";

/// Client for the course catalog endpoint
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    url: Url,
}

impl CatalogClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let url = endpoint_url(base_url)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self { client, url })
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    /// Full endpoint URL including the trailing `?`
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch and decode the whole catalog
    pub async fn fetch(&self) -> Result<Vec<Course>, CatalogError> {
        let response = self
            .client
            .get(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        parse_catalog(&body)
    }

    /// Fetch with cancellation support
    ///
    /// A token that is already cancelled returns `Cancelled` without touching
    /// the network. Cancellation during the request drops the in-flight
    /// future.
    pub async fn fetch_with_cancel(
        &self,
        cancel_token: &CancellationToken,
    ) -> Result<Vec<Course>, CatalogError> {
        if cancel_token.is_cancelled() {
            return Err(CatalogError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = cancel_token.cancelled() => Err(CatalogError::Cancelled),
            result = self.fetch() => result,
        }
    }
}

/// Build the catalog endpoint from a base URL such as `http://localhost:3000`
pub fn endpoint_url(base_url: &str) -> Result<Url, CatalogError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let url = Url::parse(&format!("{}{}", trimmed, COURSES_PATH))
        .map_err(|e| CatalogError::InvalidUrl(format!("{}: {}", base_url, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CatalogError::InvalidUrl(format!(
            "{}: unsupported scheme '{}'",
            base_url, other
        ))),
    }
}

/// Spawn the fetch worker thread
///
/// The result is sent on `response_tx` unless `cancel_token` has been
/// cancelled by the time the request finishes, in which case it is dropped.
pub fn spawn_fetch(
    client: CatalogClient,
    cancel_token: CancellationToken,
    response_tx: Sender<CatalogResponse>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let result = run_fetch(&client, &cancel_token);

        if cancel_token.is_cancelled() {
            log::debug!("Discarding catalog response for disposed search bar");
            return;
        }

        if response_tx.send(result).is_err() {
            log::debug!("Catalog receiver dropped before response arrived");
        }
    })
}

fn run_fetch(client: &CatalogClient, cancel_token: &CancellationToken) -> CatalogResponse {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CatalogError::Runtime(e.to_string()))?;

    log::debug!("Fetching catalog from {}", client.url());
    runtime.block_on(client.fetch_with_cancel(cancel_token))
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
