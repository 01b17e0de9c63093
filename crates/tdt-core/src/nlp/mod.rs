//! Text processing: tokenization and term weighting.

pub mod stopwords;
pub mod tokenizer;
pub mod weighting;

pub use tokenizer::Tokenizer;
pub use weighting::TermWeighting;
