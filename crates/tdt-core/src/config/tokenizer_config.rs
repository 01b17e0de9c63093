use serde::{Deserialize, Serialize};

use super::defaults;

/// Tokenizer switches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    pub remove_mentions: bool,
    pub remove_hashtags: bool,
    pub split_hashtags: bool,
    pub remove_numbers: bool,
    pub remove_urls: bool,
    pub remove_alt_codes: bool,
    pub remove_unicode_entities: bool,
    pub normalize_words: bool,
    pub case_fold: bool,
    pub remove_stopwords: bool,
    pub min_length: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            remove_mentions: true,
            remove_hashtags: false,
            split_hashtags: true,
            remove_numbers: true,
            remove_urls: true,
            remove_alt_codes: true,
            remove_unicode_entities: true,
            normalize_words: false,
            case_fold: true,
            remove_stopwords: true,
            min_length: defaults::DEFAULT_MIN_TOKEN_LENGTH,
        }
    }
}
