//! Change notification for favorites consumers.
//!
//! Every consumer (a list view, a favorite button) holds a [`Subscription`]
//! and receives a full [`FavoritesState`] snapshot after each mutation.
//! Snapshots are delivered in mutation order. A consumer that only cares
//! about the current value can drain its queue with [`Subscription::latest`].
//!
//! Each queue holds at most [`SUBSCRIPTION_CAPACITY`] snapshots. When a
//! consumer falls behind, the oldest queued snapshot is dropped, so the
//! newest state is always the last one received.

use std::collections::VecDeque;
use std::sync::mpsc::{RecvError, RecvTimeoutError, TryRecvError};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError, Weak};
use std::time::{Duration, Instant};

use super::FavoritesState;

/// Snapshots a subscription keeps before dropping the oldest.
pub const SUBSCRIPTION_CAPACITY: usize = 64;

#[derive(Debug, Default)]
struct Queue {
    items: VecDeque<FavoritesState>,
    dropped: u64,
    closed: bool,
}

#[derive(Debug, Default)]
struct Slot {
    queue: Mutex<Queue>,
    ready: Condvar,
}

impl Slot {
    fn lock(&self) -> MutexGuard<'_, Queue> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, state: &FavoritesState) {
        let mut queue = self.lock();
        if queue.items.len() == SUBSCRIPTION_CAPACITY {
            queue.items.pop_front();
            queue.dropped += 1;
        }
        queue.items.push_back(state.clone());
        self.ready.notify_all();
    }

    fn close(&self) {
        self.lock().closed = true;
        self.ready.notify_all();
    }
}

/// A consumer's handle on the stream of state snapshots.
///
/// Dropping the subscription unsubscribes it; the store prunes
/// disconnected subscribers on the next publish.
#[derive(Debug)]
pub struct Subscription {
    slot: Arc<Slot>,
}

impl Subscription {
    /// Block until the next snapshot is available.
    pub fn recv(&self) -> Result<FavoritesState, RecvError> {
        let mut queue = self.slot.lock();
        loop {
            if let Some(state) = queue.items.pop_front() {
                return Ok(state);
            }
            if queue.closed {
                return Err(RecvError);
            }
            queue = self
                .slot
                .ready
                .wait(queue)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Take the next snapshot without blocking.
    pub fn try_recv(&self) -> Result<FavoritesState, TryRecvError> {
        let mut queue = self.slot.lock();
        match queue.items.pop_front() {
            Some(state) => Ok(state),
            None if queue.closed => Err(TryRecvError::Disconnected),
            None => Err(TryRecvError::Empty),
        }
    }

    /// Block for up to `timeout` waiting for a snapshot.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<FavoritesState, RecvTimeoutError> {
        let deadline = Instant::now() + timeout;
        let mut queue = self.slot.lock();
        loop {
            if let Some(state) = queue.items.pop_front() {
                return Ok(state);
            }
            if queue.closed {
                return Err(RecvTimeoutError::Disconnected);
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(RecvTimeoutError::Timeout);
            }
            queue = self
                .slot
                .ready
                .wait_timeout(queue, remaining)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
    }

    /// Drain everything queued and return the newest snapshot, if any.
    pub fn latest(&self) -> Option<FavoritesState> {
        self.drain().pop()
    }

    /// Drain everything queued, oldest first.
    pub fn drain(&self) -> Vec<FavoritesState> {
        self.slot.lock().items.drain(..).collect()
    }

    /// Snapshots dropped so far because this subscription fell behind.
    pub fn dropped(&self) -> u64 {
        self.slot.lock().dropped
    }
}

/// Registry of live subscribers.
#[derive(Debug, Default)]
pub(crate) struct Subscribers {
    slots: Mutex<Vec<Weak<Slot>>>,
}

impl Subscribers {
    fn lock(&self) -> MutexGuard<'_, Vec<Weak<Slot>>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn subscribe(&self) -> Subscription {
        let slot = Arc::new(Slot::default());
        self.lock().push(Arc::downgrade(&slot));
        Subscription { slot }
    }

    /// Send a snapshot to every subscriber, dropping the ones that hung up.
    pub(crate) fn publish(&self, state: &FavoritesState) {
        self.lock().retain(|weak| match weak.upgrade() {
            Some(slot) => {
                slot.push(state);
                true
            }
            None => false,
        });
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.lock().len()
    }
}

impl Drop for Subscribers {
    fn drop(&mut self) {
        for slot in self.lock().iter().filter_map(Weak::upgrade) {
            slot.close();
        }
    }
}
