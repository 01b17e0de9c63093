//! Built-in English stopword list.

use std::collections::HashSet;
use std::sync::LazyLock;

const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
    "any", "are", "aren", "because", "been", "before", "being", "below", "between", "both",
    "but", "can", "could", "did", "didn", "does", "doesn", "doing", "don", "down", "during",
    "each", "even", "few", "for", "from", "further", "get", "got", "had", "has", "have",
    "having", "her", "here", "hers", "herself", "him", "himself", "his", "how", "into", "its",
    "itself", "just", "let", "like", "more", "most", "much", "must", "myself", "nor", "not",
    "now", "off", "once", "only", "other", "ought", "our", "ours", "ourselves", "out", "over",
    "own", "same", "she", "should", "some", "such", "than", "that", "the", "their", "theirs",
    "them", "themselves", "then", "there", "these", "they", "this", "those", "through", "too",
    "under", "until", "very", "was", "wasn", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "won", "would", "you", "your", "yours",
    "yourself", "yourselves", "amp", "http", "https", "rt", "via",
];

static ENGLISH_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH.iter().copied().collect());

/// Whether `token` is an English stopword. Expects case-folded input.
pub fn is_stopword(token: &str) -> bool {
    ENGLISH_SET.contains(token)
}
