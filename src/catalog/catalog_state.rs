use std::sync::mpsc::{self, Receiver, TryRecvError};

use tokio_util::sync::CancellationToken;

use super::{CatalogClient, CatalogResponse, Course, spawn_fetch};

/// Where the mount-time fetch stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    Loading,
    Ready,
    /// Fetch failed; the catalog stays empty
    Failed(String),
}

/// In-memory course catalog owned by one search bar
///
/// Written at most once, when the fetch result is polled. After `dispose`
/// (or drop) the pending fetch is cancelled and late results are ignored.
pub struct CatalogState {
    courses: Vec<Course>,
    status: CatalogStatus,
    response_rx: Option<Receiver<CatalogResponse>>,
    cancel_token: CancellationToken,
}

impl CatalogState {
    /// Start the one fetch for this mount
    pub fn start(client: CatalogClient) -> Self {
        let (response_tx, response_rx) = mpsc::channel();
        let cancel_token = CancellationToken::new();

        spawn_fetch(client, cancel_token.clone(), response_tx);

        Self::with_receiver(response_rx, cancel_token)
    }

    /// Wait for a result on an existing channel
    pub fn with_receiver(
        response_rx: Receiver<CatalogResponse>,
        cancel_token: CancellationToken,
    ) -> Self {
        Self {
            courses: Vec::new(),
            status: CatalogStatus::Loading,
            response_rx: Some(response_rx),
            cancel_token,
        }
    }

    /// Catalog that is already loaded, with no fetch outstanding
    pub fn preloaded(courses: Vec<Course>) -> Self {
        Self {
            courses,
            status: CatalogStatus::Ready,
            response_rx: None,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Apply the fetch result if it has arrived
    ///
    /// Returns true when the status changed.
    pub fn poll(&mut self) -> bool {
        if self.is_disposed() {
            self.response_rx = None;
            return false;
        }

        let received = match &self.response_rx {
            Some(rx) => rx.try_recv(),
            None => return false,
        };

        match received {
            Ok(Ok(courses)) => {
                log::info!("Loaded {} courses", courses.len());
                self.courses = courses;
                self.status = CatalogStatus::Ready;
            }
            Ok(Err(e)) => {
                log::warn!("Catalog unavailable, continuing with empty catalog: {}", e);
                self.status = CatalogStatus::Failed(e.to_string());
            }
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                log::warn!("Catalog worker exited without a response");
                self.status = CatalogStatus::Failed("fetch worker exited".to_string());
            }
        }

        self.response_rx = None;
        true
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == CatalogStatus::Loading
    }

    /// Cancel any outstanding fetch; later results are discarded
    pub fn dispose(&mut self) {
        if !self.cancel_token.is_cancelled() {
            log::debug!("Disposing catalog state");
        }
        self.cancel_token.cancel();
        self.response_rx = None;
    }

    pub fn is_disposed(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

impl Drop for CatalogState {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}

#[cfg(test)]
#[path = "catalog_state_tests.rs"]
mod catalog_state_tests;
