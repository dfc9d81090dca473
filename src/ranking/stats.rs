//! Ratio and summary statistics

use crate::error::{Result, WordFreqError};
use crate::frequency::FrequencyTable;
use crate::types::{RankedEntry, SummaryStats};

use super::top_n::covered_count;

/// Share of all retained tokens covered by `entries`
///
/// Zero total tokens is a contract violation (`EmptyCorpus` should have
/// stopped the caller earlier) and yields `DivisionUndefined`.
pub fn top_n_ratio(entries: &[RankedEntry], total_token_count: u64) -> Result<f64> {
    if total_token_count == 0 {
        return Err(WordFreqError::DivisionUndefined);
    }
    Ok(covered_count(entries) as f64 / total_token_count as f64)
}

/// Unique-word count and average word length
///
/// The average of zero tokens is reported as 0.0 rather than an error.
pub fn summary_stats(table: &FrequencyTable, total_token_count: u64, total_characters: u64) -> SummaryStats {
    let average_word_length = if total_token_count > 0 {
        total_characters as f64 / total_token_count as f64
    } else {
        0.0
    };
    SummaryStats {
        unique_word_count: table.len(),
        average_word_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::top_n;

    #[test]
    fn test_ratio_cat_sat() {
        let mut t = FrequencyTable::new();
        t.add("cat", 2);
        t.add("sat", 1);
        t.add("ran", 1);

        let top = top_n(&t, 2).unwrap();
        let ratio = top_n_ratio(&top, 4).unwrap();
        assert!((ratio - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_ratio_full_coverage_is_one() {
        let mut t = FrequencyTable::new();
        t.add("a", 5);
        t.add("b", 2);

        let top = top_n(&t, 10).unwrap();
        assert_eq!(top_n_ratio(&top, t.total()).unwrap(), 1.0);
    }

    #[test]
    fn test_ratio_zero_total() {
        assert!(matches!(top_n_ratio(&[], 0), Err(WordFreqError::DivisionUndefined)));
    }

    #[test]
    fn test_summary_stats() {
        let mut t = FrequencyTable::new();
        t.add("cat", 2);
        t.add("sat", 1);
        t.add("ran", 1);

        let s = summary_stats(&t, 4, 12);
        assert_eq!(s.unique_word_count, 3);
        assert_eq!(s.average_word_length, 3.0);
    }

    #[test]
    fn test_summary_stats_zero_tokens() {
        let s = summary_stats(&FrequencyTable::new(), 0, 0);
        assert_eq!(s.unique_word_count, 0);
        assert_eq!(s.average_word_length, 0.0);
    }
}
