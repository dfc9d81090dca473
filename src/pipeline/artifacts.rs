//! Pipeline output handed to the reporting surface.
//!
//! [`AnalysisReport`] is plain data; formatting is left to the caller.

use serde::{Deserialize, Serialize};

use crate::types::RankedEntry;

/// Everything a run produces, as structured values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Size of the stopword set used
    pub stopword_count: usize,
    /// Tokens retained after stopword removal
    pub total_tokens: u64,
    /// Distinct retained words
    pub unique_word_count: usize,
    /// Requested top-N size (the list may be shorter)
    pub top_n: usize,
    /// Highest-ranked words, best first
    pub top_words: Vec<RankedEntry>,
    /// Sum of `top_words` counts
    pub top_n_count: u64,
    /// `top_n_count / total_tokens`
    pub top_n_ratio: f64,
    /// Sum of retained-token lengths
    pub total_characters: u64,
    pub average_word_length: f64,
}
