//! Natural Language Processing components
//!
//! This module provides tokenization and stopword filtering.

pub mod stopwords;
pub mod tokenizer;

pub use stopwords::StopwordSet;
pub use tokenizer::{tokenize, Tokenizer, Tokens, WORD_PATTERN};
