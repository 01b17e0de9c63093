//! Regex-driven tokenizer for short social-media posts.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::stopwords;
use crate::config::TokenizerConfig;

static URL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?:https?://|www\.)\S+").ok());
static ALT_CODE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"&\S+?;").ok());
static MENTION_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"@[A-Za-z0-9_]+").ok());
static HASHTAG_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"#([A-Za-z0-9_]+)").ok());
// Four-digit numbers survive: they are usually years.
static NUMBER_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b(?:[0-9]{1,3}|[0-9]{5,})\b").ok());

/// Splits text into normalized tokens according to a [`TokenizerConfig`].
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Tokenize `text`, applying every enabled cleaning step in order.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let c = &self.config;
        let mut text = text.to_string();

        if c.split_hashtags {
            text = split_hashtags(&text);
        }
        if c.case_fold {
            text = text.to_lowercase();
        }
        if c.remove_urls {
            text = replace(&URL_RE, &text, " ");
        }
        if c.remove_alt_codes {
            text = replace(&ALT_CODE_RE, &text, " ");
        }
        if c.remove_unicode_entities {
            text.retain(|ch| ch.is_ascii());
        }
        if c.normalize_words {
            text = collapse_repeats(&text, 3);
        }
        if c.remove_mentions {
            text = replace(&MENTION_RE, &text, " ");
        }
        text = if c.remove_hashtags {
            replace(&HASHTAG_RE, &text, " ")
        } else {
            replace(&HASHTAG_RE, &text, "$1")
        };
        if c.remove_numbers {
            text = replace(&NUMBER_RE, &text, " ");
        }

        text.split(|ch: char| ch.is_whitespace() || ch.is_ascii_punctuation())
            .filter(|token| !token.is_empty())
            .filter(|token| !(c.remove_stopwords && stopwords::is_stopword(token)))
            .filter(|token| token.chars().count() >= c.min_length)
            .map(str::to_string)
            .collect()
    }
}

fn replace(re: &LazyLock<Option<Regex>>, text: &str, with: &str) -> String {
    match re.as_ref() {
        Some(re) => re.replace_all(text, with).into_owned(),
        None => text.to_string(),
    }
}

/// Replace `#CamelCase` hashtags by their components: `#BreakingNews` → `Breaking News`.
/// Hashtags with a single component are left for the hashtag step.
fn split_hashtags(text: &str) -> String {
    let Some(re) = HASHTAG_RE.as_ref() else {
        return text.to_string();
    };
    re.replace_all(text, |caps: &Captures| {
        let components = split_camel_case(&caps[1]);
        if components.split_whitespace().count() > 1 {
            components
        } else {
            caps[0].to_string()
        }
    })
    .into_owned()
}

fn split_camel_case(tag: &str) -> String {
    let mut out = String::with_capacity(tag.len() + 4);
    let mut prev: Option<char> = None;
    for ch in tag.chars() {
        let boundary = match prev {
            Some(p) => {
                (ch.is_uppercase() && !p.is_uppercase()) || (ch.is_ascii_digit() && !p.is_ascii_digit())
            }
            None => false,
        };
        if boundary {
            out.push(' ');
        }
        out.push(ch);
        prev = Some(ch);
    }
    out.replace('_', " ")
}

/// Reduce runs of `count` or more identical characters to one character.
fn collapse_repeats(text: &str, count: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let mut j = i;
        while j < chars.len() && chars[j] == chars[i] {
            j += 1;
        }
        let run = j - i;
        let keep = if run >= count { 1 } else { run };
        out.extend(std::iter::repeat(chars[i]).take(keep));
        i = j;
    }
    out
}
