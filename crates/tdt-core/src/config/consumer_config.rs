use serde::{Deserialize, Serialize};

use super::defaults;

/// Consumer loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumerConfig {
    /// Idle seconds before the consumer stops. `None` waits forever.
    pub max_inactivity_secs: Option<u64>,
    /// Clusters smaller than this are not forwarded to the timeline.
    pub min_cluster_size: usize,
    /// Clusters more cohesive than this are treated as spam and not forwarded.
    pub max_intra_similarity: f64,
    /// Number of ranked terms attached to a topic when the detector ranks none.
    pub topic_terms: usize,
    /// Rules every post must pass before it is tokenized. Empty keeps everything.
    pub filters: Vec<PostFilter>,
}

impl Default for ConsumerConfig {
    fn default() -> Self {
        Self {
            max_inactivity_secs: Some(defaults::DEFAULT_MAX_INACTIVITY_SECS),
            min_cluster_size: defaults::DEFAULT_MIN_CLUSTER_SIZE,
            max_intra_similarity: defaults::DEFAULT_MAX_INTRA_SIMILARITY,
            topic_terms: defaults::DEFAULT_TOPIC_TERMS,
            filters: Vec::new(),
        }
    }
}

/// A quality rule on raw posts, read from the post's JSON fields.
///
/// In TOML: `[[consumer.filters]]` tables with a `rule` key, e.g.
/// `rule = "max_hashtags"` and `max = 2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum PostFilter {
    /// `lang` equals the given code.
    Language { lang: String },
    /// At most `max` entries in `entities.hashtags`.
    MaxHashtags { max: usize },
    /// At most `max` entries in `entities.urls`.
    MaxUrls { max: usize },
    /// `user.favourites_count` is at least `min`.
    MinFavourites { min: u64 },
    /// `user.followers_count / user.statuses_count` is at least `ratio`.
    MinFollowerRatio { ratio: f64 },
    /// `user.description` is not blank.
    HasBio,
}

impl PostFilter {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Language { .. } => "language",
            Self::MaxHashtags { .. } => "max_hashtags",
            Self::MaxUrls { .. } => "max_urls",
            Self::MinFavourites { .. } => "min_favourites",
            Self::MinFollowerRatio { .. } => "min_follower_ratio",
            Self::HasBio => "has_bio",
        }
    }

    /// English posts with few hashtags and links from accounts that look human.
    pub fn quality_rules() -> Vec<PostFilter> {
        vec![
            Self::Language {
                lang: defaults::DEFAULT_POST_LANGUAGE.to_string(),
            },
            Self::MaxHashtags {
                max: defaults::DEFAULT_MAX_HASHTAGS,
            },
            Self::MaxUrls {
                max: defaults::DEFAULT_MAX_URLS,
            },
            Self::MinFavourites {
                min: defaults::DEFAULT_MIN_FAVOURITES,
            },
            Self::MinFollowerRatio {
                ratio: defaults::DEFAULT_MIN_FOLLOWER_RATIO,
            },
            Self::HasBio,
        ]
    }
}
