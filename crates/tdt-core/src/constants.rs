/// TDT engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Attribute key under which the consumer keeps a post's original identifier.
pub const ID_ATTRIBUTE: &str = "id";

/// Milliseconds per second, for stream timestamps.
pub const MILLIS_PER_SECOND: i64 = 1_000;
