//! Fan-out of one queue into several, each with its own acceptance rule.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tdt_core::config::PostFilter;
use tdt_core::errors::ConsumerError;
use tracing::debug;

use crate::handle::ConsumerHandle;
use crate::post;
use crate::queue::Queue;

type Accepts<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// What a finished split did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitReport {
    pub items: usize,
    /// Copies enqueued, summed over the routes.
    pub deliveries: usize,
    /// Items no route accepted.
    pub dropped: usize,
}

/// Copies every item from `input` to each route that accepts it.
///
/// An item can go to one route, several, or none.
pub struct Split<T> {
    input: Arc<Queue<T>>,
    routes: Vec<(Arc<Queue<T>>, Accepts<T>)>,
    handle: ConsumerHandle,
    max_inactivity: Option<Duration>,
    report: SplitReport,
}

impl<T: Clone> Split<T> {
    pub fn new(input: Arc<Queue<T>>) -> Self {
        Self {
            input,
            routes: Vec::new(),
            handle: ConsumerHandle::new(),
            max_inactivity: None,
            report: SplitReport::default(),
        }
    }

    pub fn with_route(
        mut self,
        queue: Arc<Queue<T>>,
        accepts: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.routes.push((queue, Box::new(accepts)));
        self
    }

    /// Idle time after which `run` returns. `None` waits for `stop`.
    pub fn with_max_inactivity(mut self, max_inactivity: Option<Duration>) -> Self {
        self.max_inactivity = max_inactivity;
        self
    }

    pub fn handle(&self) -> ConsumerHandle {
        self.handle.clone()
    }

    pub fn report(&self) -> &SplitReport {
        &self.report
    }

    /// Deliver one item. Returns the number of routes that took it.
    pub fn route(&mut self, item: T) -> usize {
        let mut delivered = 0;
        for (queue, accepts) in &self.routes {
            if accepts(&item) {
                queue.enqueue(item.clone());
                delivered += 1;
            }
        }
        self.report.items += 1;
        self.report.deliveries += delivered;
        if delivered == 0 {
            self.report.dropped += 1;
        }
        delivered
    }

    /// Route items until the input stays idle for `max_inactivity` or `stop` is called.
    pub async fn run(&mut self) -> Result<SplitReport, ConsumerError> {
        self.handle.start()?;
        while self.handle.is_active() {
            let input = tokio::select! {
                input = self.input.wait_for_input(self.max_inactivity) => input,
                _ = self.handle.wait_for_stop() => false,
            };
            if !input {
                break;
            }
            for item in self.input.dequeue_all() {
                self.route(item);
            }
        }
        self.handle.finish();

        debug!(
            items = self.report.items,
            deliveries = self.report.deliveries,
            dropped = self.report.dropped,
            routes = self.routes.len(),
            "split finished"
        );
        Ok(self.report.clone())
    }
}

impl Split<Value> {
    /// Route the posts that pass every one of `filters`.
    pub fn with_filtered_route(self, queue: Arc<Queue<Value>>, filters: Vec<PostFilter>) -> Self {
        self.with_route(queue, move |item| post::rejected_by(item, &filters).is_none())
    }
}
