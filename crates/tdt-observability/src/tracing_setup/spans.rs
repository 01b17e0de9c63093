//! Span definitions per stage: consumer loop, window processing, clustering.

/// Create a consumer span.
#[macro_export]
macro_rules! consumer_span {
    ($algorithm:expr) => {
        tracing::info_span!("tdt.consumer", algorithm = %$algorithm)
    };
}

/// Create a span for processing one closed window.
#[macro_export]
macro_rules! window_span {
    ($start:expr, $end:expr) => {
        tracing::info_span!("tdt.window", start = $start, end = $end)
    };
}

/// Create a clustering span.
#[macro_export]
macro_rules! clustering_span {
    ($batch_size:expr) => {
        tracing::debug_span!("tdt.clustering", batch_size = $batch_size)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const CONSUMER: &str = "tdt.consumer";
    pub const WINDOW: &str = "tdt.window";
    pub const CLUSTERING: &str = "tdt.clustering";
}
