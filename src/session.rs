mod data;

pub mod source;

pub use data::SessionData;
pub use source::{HttpSessionSource, SessionInfoSource};

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use tokio::sync::watch;

use crate::error::TransportError;

/// Client-side session state.
///
/// Holds the latest [`SessionData`] received from the server. Readers either
/// take a snapshot with [`data`][d] or [`subscribe`][s] to be woken on every
/// commit. Writes only happen through [`load_from_server`][l] and
/// [`set_session_data`][m].
///
/// Concurrent loads are not coordinated: each successful response is
/// committed when it arrives, so the response that resolves last wins even if
/// its request was issued first.
///
/// [d]: Self::data
/// [s]: Self::subscribe
/// [l]: Self::load_from_server
/// [m]: Self::set_session_data
#[derive(Debug)]
pub struct SessionStore<S: SessionInfoSource> {
    source: Arc<S>,
    state: Arc<watch::Sender<SessionData>>,
    requests: Arc<AtomicU64>,
}

impl<S: SessionInfoSource> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            state: Arc::clone(&self.state),
            requests: Arc::clone(&self.requests),
        }
    }
}

impl<S: SessionInfoSource> SessionStore<S> {
    /// Creates a store with empty session data.
    pub fn new(source: S) -> Self {
        let (state, _) = watch::channel(SessionData::new());
        Self {
            source: Arc::new(source),
            state: Arc::new(state),
            requests: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Snapshot of the current session data.
    pub fn data(&self) -> SessionData {
        self.state.borrow().clone()
    }

    /// Receiver notified on every commit.
    pub fn subscribe(&self) -> watch::Receiver<SessionData> {
        self.state.subscribe()
    }

    /// Fetches session info from the source and commits it.
    ///
    /// On failure nothing is committed and the error is returned untouched;
    /// there is no retry.
    #[tracing::instrument(skip(self), fields(request))]
    pub async fn load_from_server(&self) -> Result<(), TransportError> {
        let request = self.requests.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::Span::current().record("request", request);

        match self.source.fetch_session_info().await {
            Ok(data) => {
                tracing::debug!("Session info received");
                self.set_session_data(data);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(status = ?err.status(), "Failed to load session info: {err}");
                Err(err)
            }
        }
    }

    /// Replaces the session data wholesale.
    pub fn set_session_data(&self, data: SessionData) {
        tracing::debug!(keys = data.len(), "setSessionData");
        self.state.send_replace(data);
    }
}
