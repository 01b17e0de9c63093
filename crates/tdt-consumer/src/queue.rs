//! The queue shared between producers and the consumer.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::Notify;
use tokio::time::Instant;

/// FIFO queue with an async wait for input.
///
/// Producers may enqueue from any thread; wrap it in an `Arc` to share it.
#[derive(Debug)]
pub struct Queue<T> {
    items: Mutex<VecDeque<T>>,
    notify: Notify,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            notify: Notify::new(),
        }
    }

    // A panicking producer cannot leave the deque half-updated, so a poisoned lock is still usable.
    fn items(&self) -> MutexGuard<'_, VecDeque<T>> {
        self.items.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn enqueue(&self, item: T) {
        self.items().push_back(item);
        self.notify.notify_one();
    }

    pub fn enqueue_all(&self, items: impl IntoIterator<Item = T>) {
        let added = {
            let mut queue = self.items();
            let before = queue.len();
            queue.extend(items);
            queue.len() > before
        };
        if added {
            self.notify.notify_one();
        }
    }

    pub fn dequeue(&self) -> Option<T> {
        self.items().pop_front()
    }

    pub fn dequeue_all(&self) -> Vec<T> {
        self.items().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Wait until the queue holds at least one item.
    ///
    /// Returns `false` if `max_inactivity` passes first. `None` waits forever.
    pub async fn wait_for_input(&self, max_inactivity: Option<Duration>) -> bool {
        let deadline = max_inactivity.map(|limit| Instant::now() + limit);
        loop {
            let notified = self.notify.notified();
            if !self.is_empty() {
                return true;
            }
            match deadline {
                None => notified.await,
                Some(deadline) => {
                    if tokio::time::timeout_at(deadline, notified).await.is_err() {
                        return !self.is_empty();
                    }
                }
            }
        }
    }
}

impl<T: Clone> Queue<T> {
    /// The oldest item, without removing it.
    pub fn head(&self) -> Option<T> {
        self.items().front().cloned()
    }

    /// The newest item, without removing it.
    pub fn tail(&self) -> Option<T> {
        self.items().back().cloned()
    }
}
