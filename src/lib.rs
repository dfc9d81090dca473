//! # rapid-wordfreq
//!
//! Word-frequency statistics over a text corpus: tokenize, drop stopwords,
//! count, rank, and summarize.
//!
//! ```
//! use rapid_wordfreq::{analyze, StopwordSet};
//!
//! let stop = StopwordSet::from_list(&["the"]);
//! let report = analyze(["the cat sat", "the cat ran"], &stop, 2).unwrap();
//!
//! assert_eq!(report.total_tokens, 4);
//! assert_eq!(report.top_words[0].word, "cat");
//! assert_eq!(report.top_n_ratio, 0.75);
//! ```

pub mod error;
pub mod frequency;
pub mod nlp;
pub mod pipeline;
pub mod ranking;
pub mod source;
pub mod types;

pub use error::{Result, SourceKind, WordFreqError};
pub use frequency::{aggregate, aggregate_parallel, Aggregate, FrequencyAggregator, FrequencyTable};
pub use nlp::{tokenize, StopwordSet, Tokenizer};
pub use pipeline::{AnalysisReport, AnalysisSpec, Pipeline, StopwordSpec};
pub use ranking::{summary_stats, top_n, top_n_ratio};
pub use source::{FileSource, LineSource, MemorySource};
pub use types::{AggregateStats, RankedEntry, SummaryStats};

/// Run the whole pipeline over in-memory lines
pub fn analyze<I, S>(lines: I, stopwords: &StopwordSet, n: usize) -> Result<AnalysisReport>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let source = MemorySource::new(lines);
    Pipeline::new(stopwords.clone())
        .with_top_n(n)
        .run(&source, &mut pipeline::NoopObserver)
}
