//! Shard-parallel aggregation
//!
//! Each shard is an independent slice of corpus lines. Shards are tokenized
//! and aggregated on the rayon pool, each into its own [`Aggregate`], and the
//! partial results are folded with [`Aggregate::merge`]. The merge is a
//! count-wise sum, so the fold order does not affect the result.

use rayon::prelude::*;

use super::aggregator::{require_tokens, FrequencyAggregator};
use super::table::Aggregate;
use crate::error::Result;
use crate::nlp::StopwordSet;

/// Below this many lines the sequential pass is faster.
pub const MIN_PARALLEL_LINES: usize = 1000;

/// Aggregate pre-split shards in parallel
pub fn aggregate_shards<S>(shards: &[S], stopwords: &StopwordSet) -> Result<Aggregate>
where
    S: AsRef<[String]> + Sync,
{
    let merged = shards
        .par_iter()
        .map(|shard| {
            let mut aggregator = FrequencyAggregator::new(stopwords);
            for line in shard.as_ref() {
                aggregator.push_line(line);
            }
            aggregator.finish_unchecked()
        })
        .reduce(Aggregate::default, Aggregate::merge);

    require_tokens(merged)
}

/// Split `lines` into `shards` contiguous chunks and aggregate them in parallel
///
/// Small inputs take the sequential path.
pub fn aggregate_parallel(lines: &[String], stopwords: &StopwordSet, shards: usize) -> Result<Aggregate> {
    let shards = shards.max(1);
    if shards == 1 || lines.len() < MIN_PARALLEL_LINES {
        let mut aggregator = FrequencyAggregator::new(stopwords);
        for line in lines {
            aggregator.push_line(line);
        }
        return aggregator.finish();
    }

    let chunk_size = lines.len().div_ceil(shards);
    let chunks: Vec<&[String]> = lines.chunks(chunk_size).collect();
    aggregate_shards(&chunks, stopwords)
}
