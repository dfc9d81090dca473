//! Frequency aggregation
//!
//! One forward pass over the token stream. Each token is checked against the
//! stopword set; retained tokens bump their table entry and the running
//! totals. The result is an owned [`Aggregate`] handed back to the caller.

use tracing::warn;

use super::table::{Aggregate, FrequencyTable};
use crate::error::{Result, WordFreqError};
use crate::nlp::{StopwordSet, Tokenizer};
use crate::types::AggregateStats;

/// Streaming accumulator over normalized tokens
#[derive(Debug)]
pub struct FrequencyAggregator<'s> {
    stopwords: &'s StopwordSet,
    tokenizer: Tokenizer,
    tally: Tally,
}

#[derive(Debug, Default)]
struct Tally {
    table: FrequencyTable,
    stats: AggregateStats,
    discarded: u64,
}

impl Tally {
    #[inline]
    fn fold(&mut self, stopwords: &StopwordSet, token: &str) -> bool {
        if stopwords.contains(token) {
            self.discarded += 1;
            return false;
        }
        self.table.increment(token);
        self.stats.record(token);
        true
    }
}

impl<'s> FrequencyAggregator<'s> {
    pub fn new(stopwords: &'s StopwordSet) -> Self {
        Self::with_tokenizer(stopwords, Tokenizer::new())
    }

    pub fn with_tokenizer(stopwords: &'s StopwordSet, tokenizer: Tokenizer) -> Self {
        Self {
            stopwords,
            tokenizer,
            tally: Tally::default(),
        }
    }

    /// Fold one normalized token. Returns whether it was retained.
    #[inline]
    pub fn push(&mut self, token: &str) -> bool {
        self.tally.fold(self.stopwords, token)
    }

    /// Tokenize one raw line and fold its tokens
    pub fn push_line(&mut self, line: &str) {
        let Self {
            stopwords,
            tokenizer,
            tally,
        } = self;
        for token in tokenizer.tokenize_line(line) {
            tally.fold(stopwords, &token);
        }
    }

    /// Totals so far
    pub fn stats(&self) -> AggregateStats {
        self.tally.stats
    }

    /// Number of tokens dropped as stopwords so far
    pub fn discarded(&self) -> u64 {
        self.tally.discarded
    }

    /// Freeze the pass. Fails with `EmptyCorpus` if nothing was retained.
    pub fn finish(self) -> Result<Aggregate> {
        let aggregate = self.finish_unchecked();
        require_tokens(aggregate)
    }

    /// Freeze the pass without the emptiness check (used for shards).
    pub fn finish_unchecked(self) -> Aggregate {
        let Tally {
            table,
            stats,
            discarded,
        } = self.tally;
        Aggregate::new(table, stats).with_discarded(discarded)
    }
}

/// `EmptyCorpus` unless at least one token was retained
pub(crate) fn require_tokens(aggregate: Aggregate) -> Result<Aggregate> {
    if aggregate.is_empty() {
        warn!(discarded = aggregate.discarded, "no tokens retained after stopword removal");
        return Err(WordFreqError::EmptyCorpus);
    }
    Ok(aggregate)
}

/// Aggregate a token sequence against a stopword set
pub fn aggregate<I, S>(tokens: I, stopwords: &StopwordSet) -> Result<Aggregate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut aggregator = FrequencyAggregator::new(stopwords);
    for token in tokens {
        aggregator.push(token.as_ref());
    }
    aggregator.finish()
}
