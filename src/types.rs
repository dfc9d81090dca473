//! Core data types shared across the pipeline

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Running totals over retained tokens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Number of tokens kept after stopword removal
    pub total_token_count: u64,
    /// Sum of the character lengths of kept tokens
    pub total_characters: u64,
}

impl AggregateStats {
    /// Fold one retained token into the totals
    #[inline]
    pub fn record(&mut self, token: &str) {
        self.total_token_count += 1;
        self.total_characters += token.chars().count() as u64;
    }

    /// Add another set of totals (shard merge)
    pub fn merge(&mut self, other: &AggregateStats) {
        self.total_token_count += other.total_token_count;
        self.total_characters += other.total_characters;
    }
}

/// A word with its count, ordered for ranking
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedEntry {
    pub word: String,
    pub count: u64,
}

impl RankedEntry {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }

    /// Ranking order: higher count first, then ascending word.
    ///
    /// `Ordering::Less` means `self` ranks ahead of `other`.
    #[inline]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl Ord for RankedEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank_cmp(other)
    }
}

impl PartialOrd for RankedEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Derived statistics over the finished table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub unique_word_count: usize,
    pub average_word_length: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_chars() {
        let mut stats = AggregateStats::default();
        stats.record("cat");
        stats.record("well-known's");

        assert_eq!(stats.total_token_count, 2);
        assert_eq!(stats.total_characters, 3 + 12);
    }

    #[test]
    fn test_rank_order_count_then_word() {
        let mut entries = vec![
            RankedEntry::new("sat", 1),
            RankedEntry::new("cat", 2),
            RankedEntry::new("ran", 1),
        ];
        entries.sort();

        let words: Vec<_> = entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["cat", "ran", "sat"]);
    }

    #[test]
    fn test_stats_merge() {
        let mut a = AggregateStats {
            total_token_count: 3,
            total_characters: 10,
        };
        let b = AggregateStats {
            total_token_count: 1,
            total_characters: 4,
        };
        a.merge(&b);
        assert_eq!(a.total_token_count, 4);
        assert_eq!(a.total_characters, 14);
    }
}
