//! Consumer errors.

/// Errors raised by the consumer while turning queue items into documents.
#[derive(Debug, thiserror::Error)]
pub enum ConsumerError {
    #[error("malformed queue item: {reason}")]
    MalformedItem { reason: String },

    #[error("consumer is already running")]
    AlreadyRunning,
}
