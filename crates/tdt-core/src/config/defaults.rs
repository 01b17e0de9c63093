// Single source of truth for all default values.

// --- Nutrition ---
pub const DEFAULT_WINDOW_SECS: i64 = 60;
pub const DEFAULT_SETS: usize = 10;
pub const DEFAULT_RESCALE_NUTRITION: bool = true;

// --- Burst detection ---
pub const DEFAULT_MIN_NUTRITION: f64 = 0.0;
pub const DEFAULT_MIN_BREAKING: usize = 0;
pub const DEFAULT_MAX_BREAKING: usize = 10;
pub const DEFAULT_SIGNIFICANCE: f64 = 1e-4;
pub const DEFAULT_DECAY_RATE: f64 = 0.5;
pub const DEFAULT_MIN_BURST: f64 = 0.5;
pub const DEFAULT_POST_RATE: f64 = 1.7;
pub const DEFAULT_ZHAO_WINDOWS: [i64; 4] = [10, 20, 30, 60];
pub const DEFAULT_ELD_MIN_TERMS: usize = 3;
pub const DEFAULT_ELD_MIN_MEAN_BURST: f64 = 0.9;

// --- Clustering ---
pub const DEFAULT_CLUSTER_THRESHOLD: f64 = 0.5;
pub const DEFAULT_FREEZE_PERIOD: i64 = 20;
pub const DEFAULT_STORE_FROZEN: bool = false;

// --- Timeline ---
pub const DEFAULT_EXPIRY_SECS: i64 = 90;
pub const DEFAULT_MIN_SIMILARITY: f64 = 0.6;
pub const DEFAULT_MAX_TIME_SECS: i64 = 600;

// --- Consumer ---
pub const DEFAULT_MAX_INACTIVITY_SECS: u64 = 60;
pub const DEFAULT_MIN_CLUSTER_SIZE: usize = 3;
pub const DEFAULT_MAX_INTRA_SIMILARITY: f64 = 0.8;
pub const DEFAULT_TOPIC_TERMS: usize = 10;
pub const DEFAULT_POST_LANGUAGE: &str = "en";
pub const DEFAULT_MAX_HASHTAGS: usize = 2;
pub const DEFAULT_MAX_URLS: usize = 1;
pub const DEFAULT_MIN_FAVOURITES: u64 = 1;
pub const DEFAULT_MIN_FOLLOWER_RATIO: f64 = 1e-3;

// --- Tokenizer ---
pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
