//! # tdt-observability
//!
//! Subscriber setup, structured events for the stream pipeline, and span macros.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
