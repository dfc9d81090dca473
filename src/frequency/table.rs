//! Word → count table

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::types::{AggregateStats, RankedEntry};

/// Mapping from normalized word to occurrence count
///
/// Every stored count is at least 1; a word that was never recorded reads
/// as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    counts: FxHashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert with count 1 if absent, else increment
    #[inline]
    pub fn increment(&mut self, word: &str) {
        if let Some(count) = self.counts.get_mut(word) {
            *count += 1;
        } else {
            self.counts.insert(word.to_owned(), 1);
        }
    }

    /// Add `count` occurrences of `word`. Zero is a no-op.
    pub fn add(&mut self, word: &str, count: u64) {
        if count == 0 {
            return;
        }
        if let Some(existing) = self.counts.get_mut(word) {
            *existing += count;
        } else {
            self.counts.insert(word.to_owned(), count);
        }
    }

    /// Count for `word`, 0 if never seen
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// All entries as ranked values, in no particular order
    pub fn entries(&self) -> Vec<RankedEntry> {
        self.counts
            .iter()
            .map(|(w, &c)| RankedEntry::new(w.clone(), c))
            .collect()
    }

    /// Count-wise sum of another table into this one
    pub fn merge(&mut self, other: FrequencyTable) {
        if self.counts.is_empty() {
            self.counts = other.counts;
            return;
        }
        for (word, count) in other.counts {
            *self.counts.entry(word).or_insert(0) += count;
        }
    }
}

/// The finished result of one aggregation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    pub table: FrequencyTable,
    pub stats: AggregateStats,
    /// Tokens dropped as stopwords.
    pub discarded: u64,
}

impl Aggregate {
    pub fn new(table: FrequencyTable, stats: AggregateStats) -> Self {
        Self {
            table,
            stats,
            discarded: 0,
        }
    }

    pub fn with_discarded(mut self, discarded: u64) -> Self {
        self.discarded = discarded;
        self
    }

    /// Combine two partial aggregates. Commutative and associative.
    pub fn merge(mut self, other: Aggregate) -> Aggregate {
        self.table.merge(other.table);
        self.stats.merge(&other.stats);
        self.discarded += other.discarded;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.stats.total_token_count == 0
    }

    pub fn into_parts(self) -> (FrequencyTable, AggregateStats) {
        (self.table, self.stats)
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for word in iter {
            table.increment(word);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_inserts_then_counts() {
        let mut table = FrequencyTable::new();
        table.increment("cat");
        table.increment("cat");
        table.increment("sat");

        assert_eq!(table.count("cat"), 2);
        assert_eq!(table.count("sat"), 1);
        assert_eq!(table.count("dog"), 0);
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_add_zero_keeps_invariant() {
        let mut table = FrequencyTable::new();
        table.add("ghost", 0);
        assert!(table.is_empty());
        assert!(table.iter().all(|(_, c)| c >= 1));
    }

    #[test]
    fn test_merge_sums_counts() {
        let mut a: FrequencyTable = ["cat", "sat"].into_iter().collect();
        let b: FrequencyTable = ["cat", "ran"].into_iter().collect();
        a.merge(b);

        assert_eq!(a.count("cat"), 2);
        assert_eq!(a.count("sat"), 1);
        assert_eq!(a.count("ran"), 1);
    }

    #[test]
    fn test_aggregate_merge_is_commutative() {
        let left = Aggregate::new(
            ["cat", "cat"].into_iter().collect(),
            AggregateStats {
                total_token_count: 2,
                total_characters: 6,
            },
        );
        let right = Aggregate::new(
            ["ran"].into_iter().collect(),
            AggregateStats {
                total_token_count: 1,
                total_characters: 3,
            },
        )
        .with_discarded(4);

        let lr = left.clone().merge(right.clone());
        let rl = right.merge(left);
        assert_eq!(lr, rl);
        assert_eq!(lr.stats.total_token_count, 3);
        assert_eq!(lr.discarded, 4);
    }
}
