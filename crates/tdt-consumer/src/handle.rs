//! Cooperative stop handle shared between the consumer and its callers.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

use tdt_core::errors::ConsumerError;
use tokio::sync::Notify;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumerState {
    /// Not started yet.
    Inactive,
    /// Inside the loop.
    Active,
    /// Left the loop; every batch it took has been processed.
    Stopped,
}

impl ConsumerState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Inactive,
            1 => Self::Active,
            _ => Self::Stopped,
        }
    }
}

/// Clonable view of a consumer's lifecycle.
///
/// `stop` only requests termination. The consumer finishes the batch in hand,
/// and `is_stopped` turns true once it has left its loop.
#[derive(Debug, Clone, Default)]
pub struct ConsumerHandle {
    state: Arc<AtomicU8>,
    stop_requested: Arc<AtomicBool>,
    stop: Arc<Notify>,
}

impl ConsumerHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConsumerState {
        ConsumerState::from_u8(self.state.load(Ordering::SeqCst))
    }

    /// Running and not asked to stop.
    pub fn is_active(&self) -> bool {
        self.state() == ConsumerState::Active && !self.stop_requested.load(Ordering::SeqCst)
    }

    pub fn is_stopped(&self) -> bool {
        self.state() == ConsumerState::Stopped
    }

    /// Ask the consumer to stop. Wakes it if it is waiting for input.
    pub fn stop(&self) {
        self.stop_requested.store(true, Ordering::SeqCst);
        self.stop.notify_one();
    }

    pub(crate) fn start(&self) -> Result<(), ConsumerError> {
        self.state
            .compare_exchange(
                ConsumerState::Inactive as u8,
                ConsumerState::Active as u8,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .map(|_| ())
            .map_err(|_| ConsumerError::AlreadyRunning)
    }

    pub(crate) fn finish(&self) {
        self.state
            .store(ConsumerState::Stopped as u8, Ordering::SeqCst);
    }

    /// Resolves once a stop has been requested.
    pub(crate) async fn wait_for_stop(&self) {
        while !self.stop_requested.load(Ordering::SeqCst) {
            self.stop.notified().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle() {
        let handle = ConsumerHandle::new();
        assert_eq!(handle.state(), ConsumerState::Inactive);
        assert!(!handle.is_active());

        handle.start().unwrap();
        assert!(handle.is_active());
        assert!(matches!(handle.start(), Err(ConsumerError::AlreadyRunning)));

        handle.stop();
        assert!(!handle.is_active());
        assert!(!handle.is_stopped());

        handle.finish();
        assert!(handle.is_stopped());
    }
}
