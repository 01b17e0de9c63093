//! Posts as they arrive on the queue.

use serde_json::Value;
use tdt_core::config::PostFilter;
use tdt_core::constants::{ID_ATTRIBUTE, MILLIS_PER_SECOND};
use tdt_core::errors::ConsumerError;
use tdt_core::nlp::{TermWeighting, Tokenizer};
use tdt_core::Document;

/// The fields of a post the engine reads.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: Option<String>,
    pub text: String,
    pub timestamp_ms: i64,
}

impl Post {
    /// Read a post from a JSON map.
    ///
    /// Retweets take the text of the original post, and long posts their
    /// `extended_tweet.full_text`. `timestamp_ms` may be a number or a string.
    pub fn from_value(value: &Value) -> Result<Self, ConsumerError> {
        if !value.is_object() {
            return Err(malformed("item is not a JSON object"));
        }
        let text = post_text(value).ok_or_else(|| malformed("missing text"))?;
        let timestamp_ms = match value.get("timestamp_ms") {
            Some(Value::Number(n)) => n.as_i64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
        .ok_or_else(|| malformed("missing or invalid timestamp_ms"))?;

        let id = match value.get("id_str").or_else(|| value.get(ID_ATTRIBUTE)) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };

        Ok(Self {
            id,
            text: text.to_string(),
            timestamp_ms,
        })
    }

    /// Timestamp in whole seconds.
    pub fn timestamp(&self) -> i64 {
        self.timestamp_ms.div_euclid(MILLIS_PER_SECOND)
    }

    /// Tokenize, weigh, and normalize the post into a document.
    pub fn to_document(&self, tokenizer: &Tokenizer, weighting: &TermWeighting) -> Document {
        let tokens = tokenizer.tokenize(&self.text);
        let vector = weighting.weigh(&tokens).normalized();
        let document = Document::new(vector)
            .with_text(self.text.clone())
            .with_tokens(tokens)
            .with_timestamp(self.timestamp());
        match &self.id {
            Some(id) => document.with_attribute(ID_ATTRIBUTE, Value::String(id.clone())),
            None => document,
        }
    }
}

fn post_text(value: &Value) -> Option<&str> {
    let source = match value.get("retweeted_status") {
        Some(original) if original.is_object() && value.get("quoted_status").is_none() => original,
        _ => value,
    };
    source
        .pointer("/extended_tweet/full_text")
        .or_else(|| source.get("full_text"))
        .or_else(|| source.get("text"))
        .or_else(|| value.get("text"))
        .and_then(Value::as_str)
}

/// The first rule `item` breaks, if any.
pub fn rejected_by<'a>(item: &Value, filters: &'a [PostFilter]) -> Option<&'a PostFilter> {
    filters.iter().find(|filter| !passes(item, filter))
}

/// Missing entity lists count as empty; missing user fields fail the rule.
pub fn passes(item: &Value, filter: &PostFilter) -> bool {
    match filter {
        PostFilter::Language { lang } => item.get("lang").and_then(Value::as_str) == Some(lang.as_str()),
        PostFilter::MaxHashtags { max } => entity_count(item, "hashtags") <= *max,
        PostFilter::MaxUrls { max } => entity_count(item, "urls") <= *max,
        PostFilter::MinFavourites { min } => {
            user_count(item, "favourites_count").is_some_and(|n| n >= *min)
        }
        PostFilter::MinFollowerRatio { ratio } => {
            match (user_count(item, "followers_count"), user_count(item, "statuses_count")) {
                (Some(_), Some(0)) => true,
                (Some(followers), Some(statuses)) => followers as f64 / statuses as f64 >= *ratio,
                _ => false,
            }
        }
        PostFilter::HasBio => item
            .pointer("/user/description")
            .and_then(Value::as_str)
            .is_some_and(|bio| !bio.trim().is_empty()),
    }
}

fn entity_count(item: &Value, entity: &str) -> usize {
    item.get("entities")
        .and_then(|e| e.get(entity))
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

fn user_count(item: &Value, field: &str) -> Option<u64> {
    item.get("user")?.get(field)?.as_u64()
}

fn malformed(reason: &str) -> ConsumerError {
    ConsumerError::MalformedItem {
        reason: reason.to_string(),
    }
}
