//! Background write queue.
//!
//! Saves are fire-and-forget for the caller: the encoded snapshot is queued
//! and a single worker thread writes it. One worker per queue means saves are
//! applied strictly in the order they were enqueued and never interleave.
//! Failures are logged and recorded in [`PersistStatus`]; they never reach
//! back into in-memory state.

use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

use super::{PersistenceAdapter, ScopeKey};
use crate::error::{FavoritesError, Result};

/// Outcome counters for queued saves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistStatus {
    /// Saves written successfully.
    pub saved: u64,
    /// Saves that failed.
    pub failed: u64,
    /// Message of the most recent failure, cleared by the next success.
    pub last_error: Option<String>,
}

enum Job {
    Save { scope: ScopeKey, bytes: Vec<u8> },
    Flush(Sender<()>),
}

/// Ordered, single-writer save queue.
pub struct SaveQueue {
    sender: Option<Sender<Job>>,
    handle: Option<JoinHandle<()>>,
    status: Arc<Mutex<PersistStatus>>,
}

impl std::fmt::Debug for SaveQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaveQueue")
            .field("status", &self.status())
            .finish_non_exhaustive()
    }
}

impl SaveQueue {
    /// Spawn the writer thread.
    pub fn start(adapter: PersistenceAdapter) -> Result<Self> {
        let (tx, rx) = mpsc::channel::<Job>();
        let status = Arc::new(Mutex::new(PersistStatus::default()));
        let worker_status = Arc::clone(&status);

        let handle = thread::Builder::new()
            .name("favorites-writer".to_string())
            .spawn(move || {
                for job in rx {
                    match job {
                        Job::Save { scope, bytes } => {
                            let outcome = adapter.save_encoded(&scope, &bytes);
                            record(&worker_status, outcome);
                        }
                        Job::Flush(ack) => {
                            let _ = ack.send(());
                        }
                    }
                }
            })?;

        Ok(Self {
            sender: Some(tx),
            handle: Some(handle),
            status,
        })
    }

    /// Queue a snapshot write for a scope.
    pub fn enqueue(&self, scope: ScopeKey, bytes: Vec<u8>) {
        let sent = self
            .sender
            .as_ref()
            .map(|tx| tx.send(Job::Save { scope: scope.clone(), bytes }).is_ok())
            .unwrap_or(false);

        if !sent {
            record(
                &self.status,
                Err(FavoritesError::PersistenceWrite {
                    scope: scope.to_string(),
                    message: "writer thread is not running".to_string(),
                }),
            );
        }
    }

    /// Block until every save queued so far has been attempted.
    pub fn flush(&self) -> PersistStatus {
        if let Some(tx) = &self.sender {
            let (ack_tx, ack_rx) = mpsc::channel();
            if tx.send(Job::Flush(ack_tx)).is_ok() {
                let _ = ack_rx.recv();
            }
        }
        self.status()
    }

    /// Current outcome counters.
    pub fn status(&self) -> PersistStatus {
        self.status
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Drop for SaveQueue {
    /// Let the worker drain outstanding saves before the queue goes away.
    fn drop(&mut self) {
        self.sender.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("Favorites writer thread panicked");
            }
        }
    }
}

fn record(status: &Mutex<PersistStatus>, outcome: Result<()>) {
    let mut status = status.lock().unwrap_or_else(PoisonError::into_inner);
    match outcome {
        Ok(()) => {
            status.saved += 1;
            status.last_error = None;
        }
        Err(e) => {
            tracing::warn!("Favorites not persisted: {}", e);
            status.failed += 1;
            status.last_error = Some(e.to_string());
        }
    }
}
