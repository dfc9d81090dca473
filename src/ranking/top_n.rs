//! Top-N selection over a finished frequency table
//!
//! Entries are ordered by count descending with ties broken by ascending
//! word, which makes the output deterministic regardless of hash order.
//! Selection partitions around the n-th entry and sorts only the prefix, so
//! the cost is O(M + n log n) for M unique words while producing exactly the
//! prefix a full sort would.

use crate::error::{Result, WordFreqError};
use crate::frequency::FrequencyTable;
use crate::types::RankedEntry;

/// The `n` highest-ranked entries, `min(n, |table|)` long
pub fn top_n(table: &FrequencyTable, n: usize) -> Result<Vec<RankedEntry>> {
    if n == 0 {
        return Err(WordFreqError::InvalidTopN);
    }
    Ok(select_top(table.entries(), n))
}

/// Rank every entry in the table
pub fn rank_all(table: &FrequencyTable) -> Vec<RankedEntry> {
    let mut entries = table.entries();
    entries.sort_unstable_by(RankedEntry::rank_cmp);
    entries
}

pub(crate) fn select_top(mut entries: Vec<RankedEntry>, n: usize) -> Vec<RankedEntry> {
    if n < entries.len() {
        entries.select_nth_unstable_by(n - 1, RankedEntry::rank_cmp);
        entries.truncate(n);
    }
    // The order is total (words are unique keys), so unstable sort is exact.
    entries.sort_unstable_by(RankedEntry::rank_cmp);
    entries
}

/// Sum of counts covered by a ranked list
pub fn covered_count(entries: &[RankedEntry]) -> u64 {
    entries.iter().map(|e| e.count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, u64)]) -> FrequencyTable {
        let mut t = FrequencyTable::new();
        for &(w, c) in pairs {
            t.add(w, c);
        }
        t
    }

    fn words(entries: &[RankedEntry]) -> Vec<(&str, u64)> {
        entries.iter().map(|e| (e.word.as_str(), e.count)).collect()
    }

    #[test]
    fn test_cat_sat_tie_break() {
        let t = table(&[("cat", 2), ("sat", 1), ("ran", 1)]);
        let top = top_n(&t, 2).unwrap();
        assert_eq!(words(&top), vec![("cat", 2), ("ran", 1)]);
    }

    #[test]
    fn test_n_larger_than_table() {
        let t = table(&[("b", 1), ("a", 1), ("c", 5)]);
        let top = top_n(&t, 10).unwrap();
        assert_eq!(words(&top), vec![("c", 5), ("a", 1), ("b", 1)]);
    }

    #[test]
    fn test_zero_n_rejected() {
        let t = table(&[("a", 1)]);
        assert!(matches!(top_n(&t, 0), Err(WordFreqError::InvalidTopN)));
    }

    #[test]
    fn test_empty_table() {
        let t = FrequencyTable::new();
        assert!(top_n(&t, 3).unwrap().is_empty());
    }

    #[test]
    fn test_partial_selection_matches_full_sort() {
        let pairs: Vec<(String, u64)> = (0..200)
            .map(|i| (format!("w{:03}", (i * 37) % 200), (i % 7) as u64 + 1))
            .collect();
        let mut t = FrequencyTable::new();
        for (w, c) in &pairs {
            t.add(w, *c);
        }

        let full = rank_all(&t);
        for n in [1, 2, 7, 50, 199, 200, 500] {
            let top = top_n(&t, n).unwrap();
            assert_eq!(top.as_slice(), &full[..n.min(full.len())], "n = {n}");
        }
    }

    #[test]
    fn test_subset_property() {
        let t = table(&[("a", 3), ("b", 9), ("c", 1), ("d", 9), ("e", 4)]);
        let top = top_n(&t, 3).unwrap();
        let min_in = top.iter().map(|e| e.count).min().unwrap();

        for (word, count) in t.iter() {
            if !top.iter().any(|e| e.word == word) {
                assert!(count <= min_in);
            }
        }
        assert_eq!(covered_count(&top), 9 + 9 + 4);
    }
}
