//! Data loader module
//!
//! Fetches the user collection exactly once and publishes the outcome as a
//! [`LoadStatus`].
//!
//! # Lifecycle
//!
//! ```text
//! spawn ──▶ Loading ──┬──▶ Ready(records)
//!                     └──▶ Error(message)
//! ```
//!
//! `Ready` and `Error` are terminal. The fetch runs on its own task and the
//! status is published through a `watch` channel with the task as the only
//! writer. Dropping the [`DataLoader`] aborts a fetch that is still in
//! flight, so nothing is published after the owner is gone.

mod source;
mod types;

pub use source::{HttpUserSource, UserSource};
pub use types::LoadStatus;

use crate::error::{Error, Result};
use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, info, warn};

/// Owns the single fetch of a mounted component
#[derive(Debug)]
pub struct DataLoader {
    status: watch::Receiver<LoadStatus>,
    fetch: AbortHandle,
    task: JoinHandle<()>,
}

impl DataLoader {
    /// Start the fetch on a new task.
    ///
    /// The fetch itself runs on an inner task so a panicking source still
    /// settles the status as an unknown error. Must be called from within a
    /// Tokio runtime.
    pub fn spawn<S>(source: S) -> Self
    where
        S: UserSource + 'static,
    {
        let (tx, rx) = watch::channel(LoadStatus::Loading);

        let fetch = tokio::spawn(async move {
            debug!("Fetching users");
            source.fetch_users().await
        });
        let fetch_abort = fetch.abort_handle();

        let task = tokio::spawn(async move {
            let status = match fetch.await {
                Ok(Ok(users)) => {
                    info!("Loaded {} users", users.len());
                    LoadStatus::Ready(users.into())
                }
                Ok(Err(e)) => {
                    warn!("Failed to load users: {}", e);
                    LoadStatus::Error(e.user_message())
                }
                Err(e) if e.is_panic() => {
                    warn!("User source panicked");
                    LoadStatus::Error(Error::Unknown.user_message())
                }
                // Cancelled: leave the status untouched
                Err(_) => return,
            };
            tx.send_replace(status);
        });

        Self {
            status: rx,
            fetch: fetch_abort,
            task,
        }
    }

    /// Snapshot of the current status
    pub fn status(&self) -> LoadStatus {
        self.status.borrow().clone()
    }

    /// Wait until the status reaches `Ready` or `Error`
    pub async fn settled(&mut self) -> Result<LoadStatus> {
        loop {
            let status = self.status.borrow_and_update().clone();
            if status.is_settled() {
                return Ok(status);
            }
            self.status.changed().await.map_err(|_| Error::Cancelled)?;
        }
    }

    /// Abort the fetch if it has not completed yet
    pub fn cancel(&self) {
        if !self.task.is_finished() {
            debug!("Cancelling pending fetch");
            self.task.abort();
            self.fetch.abort();
        }
    }

    /// Whether the fetch task has stopped, by completing or being cancelled
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for DataLoader {
    fn drop(&mut self) {
        self.cancel();
    }
}
