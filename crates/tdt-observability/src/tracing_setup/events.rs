//! Structured log events for the stream pipeline.
//!
//! Each function emits a `tracing` event with structured fields.

use chrono::DateTime;

fn rfc3339(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|t| t.to_rfc3339())
        .unwrap_or_default()
}

/// Log the consumer entering its loop.
pub fn consumer_started(algorithm: &str, window_secs: i64) {
    tracing::info!(
        event = "consumer_started",
        algorithm = %algorithm,
        window_secs = window_secs,
        "consumer started"
    );
}

/// Log the consumer leaving its loop.
pub fn consumer_stopped(documents: usize, windows: usize, topics: usize) {
    tracing::info!(
        event = "consumer_stopped",
        documents = documents,
        windows = windows,
        topics = topics,
        "consumer stopped"
    );
}

/// Log a window closing.
pub fn window_closed(start: i64, end: i64, documents: usize) {
    tracing::info!(
        event = "window_closed",
        start = start,
        end = end,
        start_time = %rfc3339(start),
        documents = documents,
        "window closed"
    );
}

/// Log the breaking terms of a window.
pub fn breaking_terms_detected(window: i64, terms: &[String]) {
    tracing::info!(
        event = "breaking_terms_detected",
        window = window,
        count = terms.len(),
        terms = ?terms,
        "breaking terms detected"
    );
}

/// Log a volume burst.
pub fn volume_burst_detected(start: i64, end: i64) {
    tracing::info!(
        event = "volume_burst_detected",
        start = start,
        end = end,
        "volume burst detected"
    );
}

/// Log clusters leaving the active set.
pub fn clusters_frozen(count: usize, active: usize) {
    tracing::debug!(
        event = "clusters_frozen",
        count = count,
        active = active,
        "clusters frozen"
    );
}

/// Log a topic reaching the timeline.
pub fn topic_forwarded(cluster_id: &str, size: usize, node: usize, timestamp: i64) {
    tracing::info!(
        event = "topic_forwarded",
        cluster_id = %cluster_id,
        size = size,
        node = node,
        timestamp = timestamp,
        "topic forwarded"
    );
}

/// Log a new timeline node.
pub fn node_created(index: usize, created_at: i64) {
    tracing::info!(
        event = "node_created",
        index = index,
        created_at = created_at,
        created_time = %rfc3339(created_at),
        "timeline node created"
    );
}

/// Log an input item that could not be used.
pub fn item_skipped(reason: &str) {
    tracing::warn!(event = "item_skipped", reason = %reason, "item skipped");
}

/// Log a post dropped by a quality rule.
pub fn item_filtered(rule: &str) {
    tracing::debug!(event = "item_filtered", rule = %rule, "item filtered");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_render_as_rfc3339() {
        assert_eq!(rfc3339(0), "1970-01-01T00:00:00+00:00");
    }

    #[test]
    fn out_of_range_timestamps_render_empty() {
        assert_eq!(rfc3339(i64::MAX), "");
    }
}
