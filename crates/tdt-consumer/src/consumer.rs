//! The consumer loop: queue items in, timeline topics out.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tdt_burst::BurstDetector;
use tdt_clustering::{Cluster, ClusterId, Clusterer};
use tdt_core::config::ConsumerConfig;
use tdt_core::nlp::{TermWeighting, Tokenizer};
use tdt_core::{Document, NutritionSet, RankedTerm, SimilarityMeasure, TdtConfig, TdtError};
use tdt_observability::tracing_setup::events;
use tdt_timeline::Timeline;
use tracing::Instrument;

use crate::checkpoint::{rescale, Admission, Checkpoints, ClosedWindow};
use crate::handle::ConsumerHandle;
use crate::post::{self, Post};
use crate::queue::Queue;

/// What a finished run did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerReport {
    /// Posts turned into documents, late ones included.
    pub documents: usize,
    /// Queue items that were not usable posts.
    pub skipped: usize,
    /// Posts dropped by the configured filters.
    pub filtered: usize,
    /// Documents older than the open window.
    pub late: usize,
    pub windows: usize,
    /// Topics forwarded to the timeline.
    pub topics: usize,
}

pub struct Consumer {
    queue: Arc<Queue<Value>>,
    tokenizer: Tokenizer,
    weighting: TermWeighting,
    detector: BurstDetector,
    clusterer: Clusterer,
    timeline: Timeline,
    checkpoints: Checkpoints,
    handle: ConsumerHandle,
    report: ConsumerReport,
    max_inactivity: Option<Duration>,
    config: ConsumerConfig,
    min_terms: usize,
    min_mean_burst: f64,
}

impl Consumer {
    pub fn new(queue: Arc<Queue<Value>>, config: &TdtConfig) -> Result<Self, TdtError> {
        TdtConfig::validate(config)?;
        let volume_horizon = config
            .burst
            .windows
            .iter()
            .copied()
            .max()
            .unwrap_or(config.nutrition.window_secs);

        Ok(Self {
            queue,
            tokenizer: Tokenizer::new(config.tokenizer.clone()),
            weighting: TermWeighting::default(),
            detector: BurstDetector::from_config(&config.burst),
            clusterer: Clusterer::from_config(&config.clustering),
            timeline: Timeline::from_config(&config.timeline)?,
            checkpoints: Checkpoints::new(&config.nutrition, volume_horizon),
            handle: ConsumerHandle::new(),
            report: ConsumerReport::default(),
            max_inactivity: config.consumer.max_inactivity_secs.map(Duration::from_secs),
            config: config.consumer.clone(),
            min_terms: config.burst.min_terms,
            min_mean_burst: config.burst.min_mean_burst,
        })
    }

    pub fn with_weighting(mut self, weighting: TermWeighting) -> Self {
        self.weighting = weighting;
        self
    }

    /// Override the idle time after which the consumer stops. `None` waits forever.
    pub fn with_max_inactivity(mut self, max_inactivity: Option<Duration>) -> Self {
        self.max_inactivity = max_inactivity;
        self
    }

    pub fn handle(&self) -> ConsumerHandle {
        self.handle.clone()
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn clusterer(&self) -> &Clusterer {
        &self.clusterer
    }

    pub fn checkpoints(&self) -> &Checkpoints {
        &self.checkpoints
    }

    /// Consume until the queue stays idle for `max_inactivity` or `stop` is called.
    ///
    /// The open window is closed on the way out. A consumer runs once.
    pub async fn run(&mut self) -> Result<ConsumerReport, TdtError> {
        self.handle.start()?;
        let span = tdt_observability::consumer_span!(self.detector.algorithm().as_str());
        let result = self.consume().instrument(span).await;
        self.handle.finish();

        let report = self.report.clone();
        events::consumer_stopped(report.documents, report.windows, report.topics);
        result.map(|_| report)
    }

    async fn consume(&mut self) -> Result<(), TdtError> {
        events::consumer_started(
            self.detector.algorithm().as_str(),
            self.checkpoints.window_secs(),
        );

        while self.handle.is_active() {
            let input = tokio::select! {
                input = self.queue.wait_for_input(self.max_inactivity) => input,
                _ = self.handle.wait_for_stop() => false,
            };
            if !input {
                break;
            }
            let items = self.queue.dequeue_all();
            self.process(items)?;
        }

        if let Some(start) = self.checkpoints.flush() {
            self.close_window(start)?;
        }
        Ok(())
    }

    fn process(&mut self, items: Vec<Value>) -> Result<(), TdtError> {
        for item in items {
            let post = match Post::from_value(&item) {
                Ok(post) => post,
                Err(e) => {
                    events::item_skipped(&e.to_string());
                    self.report.skipped += 1;
                    continue;
                }
            };
            if let Some(rule) = post::rejected_by(&item, &self.config.filters) {
                events::item_filtered(rule.name());
                self.report.filtered += 1;
                continue;
            }

            let timestamp = post.timestamp();
            for start in self.checkpoints.advance(timestamp) {
                self.close_window(start)?;
            }

            let document = post.to_document(&self.tokenizer, &self.weighting);
            if self.checkpoints.record(timestamp, document) == Admission::Late {
                self.report.late += 1;
            }
            self.report.documents += 1;
        }
        Ok(())
    }

    fn close_window(&mut self, start: i64) -> Result<(), TdtError> {
        let window = self.checkpoints.close(start);
        let end = window.end;
        let span = tdt_observability::window_span!(window.start, window.end);
        let _entered = span.enter();
        events::window_closed(window.start, window.end, window.documents.len());

        self.clusterer.advance(window.end);
        let before: HashSet<ClusterId> = self.clusterer.active().iter().map(Cluster::id).collect();

        let candidates = self.detect(window)?;

        let after: HashSet<ClusterId> = self.clusterer.active().iter().map(Cluster::id).collect();
        let frozen = before.difference(&after).count();
        if frozen > 0 {
            events::clusters_frozen(frozen, after.len());
        }

        for (id, terms) in candidates {
            self.forward(id, end, terms);
        }
        Ok(())
    }

    /// Cluster the window's documents and pick the clusters that may be topics,
    /// with the terms they are reported with.
    fn detect(&mut self, window: ClosedWindow) -> Result<Vec<(ClusterId, Vec<RankedTerm>)>, TdtError> {
        let ClosedWindow {
            start,
            end,
            documents,
        } = window;
        let measure = self.clusterer.measure();
        let config = &self.config;

        let candidates = match &self.detector {
            BurstDetector::Zhao(zhao) => {
                let batch: Vec<Document> = match zhao.detect(self.checkpoints.volume(), end)? {
                    Some(burst) => {
                        events::volume_burst_detected(burst.start, burst.end);
                        documents
                            .into_iter()
                            .filter(|d| {
                                d.timestamp()
                                    .is_some_and(|t| (burst.start..=burst.end).contains(&t))
                            })
                            .collect()
                    }
                    None => Vec::new(),
                };
                let _span = tdt_observability::clustering_span!(batch.len()).entered();
                self.clusterer
                    .cluster(batch)?
                    .into_iter()
                    .filter(|c| forwardable(c, config, measure))
                    .map(|c| (c.id(), top_terms(c, config.topic_terms)))
                    .collect()
            }
            BurstDetector::Eld(eld) => {
                let historic = self.checkpoints.historic(start);
                let _span = tdt_observability::clustering_span!(documents.len()).entered();
                let mut candidates = Vec::new();
                for cluster in self.clusterer.cluster(documents)? {
                    if !forwardable(cluster, config, measure) {
                        continue;
                    }
                    let terms = eld.detect(&cluster_nutrition(cluster), &historic);
                    let mean = match terms.len() {
                        0 => 0.0,
                        n => terms.iter().map(|t| t.score).sum::<f64>() / n as f64,
                    };
                    if terms.len() >= self.min_terms || mean > self.min_mean_burst {
                        candidates.push((cluster.id(), terms));
                    }
                }
                candidates
            }
            detector => {
                let empty = NutritionSet::new();
                let nutrition = self.checkpoints.nutrition_at(start).unwrap_or(&empty);
                let historic = self.checkpoints.historic(start);
                let breaking = detector
                    .breaking_terms(nutrition, &historic)
                    .unwrap_or_default();
                if !breaking.is_empty() {
                    let names: Vec<String> = breaking.iter().map(|t| t.term.clone()).collect();
                    events::breaking_terms_detected(start, &names);
                }

                let batch: Vec<Document> = documents
                    .into_iter()
                    .filter(|d| breaking.iter().any(|t| d.vector().contains(&t.term)))
                    .collect();
                let _span = tdt_observability::clustering_span!(batch.len()).entered();
                self.clusterer
                    .cluster(batch)?
                    .into_iter()
                    .filter(|c| forwardable(c, config, measure))
                    .map(|c| {
                        let terms: Vec<RankedTerm> = breaking
                            .iter()
                            .filter(|t| c.centroid().contains(&t.term))
                            .cloned()
                            .collect();
                        let terms = if terms.is_empty() {
                            top_terms(c, config.topic_terms)
                        } else {
                            terms
                        };
                        (c.id(), terms)
                    })
                    .collect()
            }
        };

        self.checkpoints.prune(start, end);
        self.report.windows += 1;
        Ok(candidates)
    }

    fn forward(&mut self, id: ClusterId, timestamp: i64, terms: Vec<RankedTerm>) {
        let Some(cluster) = self.clusterer.cluster_mut(id) else {
            return;
        };
        cluster.set_bursty(true);
        let cluster: &Cluster = cluster;

        let nodes = self.timeline.len();
        let node = self.timeline.add(timestamp, cluster, terms);
        if self.timeline.len() > nodes {
            events::node_created(node, timestamp);
        }
        events::topic_forwarded(&id.to_string(), cluster.size(), node, timestamp);
        self.report.topics += 1;
    }
}

/// Large enough, not more cohesive than `max_intra_similarity`, and not reported before.
fn forwardable(cluster: &Cluster, config: &ConsumerConfig, measure: SimilarityMeasure) -> bool {
    cluster.size() >= config.min_cluster_size
        && cluster.intra_similarity(measure) <= config.max_intra_similarity
        && !cluster.is_bursty()
}

/// The heaviest centroid dimensions.
fn top_terms(cluster: &Cluster, count: usize) -> Vec<RankedTerm> {
    cluster
        .centroid()
        .ranked_terms()
        .into_iter()
        .take(count)
        .map(|(term, weight)| RankedTerm::new(term, weight))
        .collect()
}

/// The cluster's members summed into one window's worth of nutrition, heaviest term at 1.
fn cluster_nutrition(cluster: &Cluster) -> NutritionSet {
    let mut nutrition = NutritionSet::new();
    for document in cluster.documents() {
        for (term, weight) in document.vector().iter() {
            *nutrition.entry(term.clone()).or_insert(0.0) += weight;
        }
    }
    rescale(&mut nutrition);
    nutrition
}
