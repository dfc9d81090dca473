//! Pipeline runner: orchestrates stage execution and artifact flow.
//!
//! A [`Pipeline`] owns the frozen stopword set and the run settings. Calling
//! [`Pipeline::run`] streams a corpus through the aggregator, then ranks and
//! summarizes the finished aggregate, notifying a [`PipelineObserver`] at
//! each stage boundary. The aggregate is created per run and returned by
//! value; nothing accumulates across runs.

use tracing::{debug, info};

use crate::error::{Result, SourceKind, WordFreqError};
use crate::frequency::{aggregate_parallel, Aggregate, FrequencyAggregator};
use crate::nlp::{StopwordSet, Tokenizer};
use crate::pipeline::artifacts::AnalysisReport;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_AGGREGATE,
    STAGE_RANK, STAGE_STOPWORDS, STAGE_SUMMARY,
};
use crate::pipeline::spec::{AnalysisSpec, StopwordSpec, DEFAULT_TOP_N};
use crate::pipeline::validation::ValidationEngine;
use crate::ranking::{covered_count, summary_stats, top_n, top_n_ratio};
use crate::source::{read_all_lines, FileSource, LineSource};

/// Enter a tracing span for a pipeline stage.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Pipeline
// ============================================================================

#[derive(Debug, Clone)]
pub struct Pipeline {
    stopwords: StopwordSet,
    tokenizer: Tokenizer,
    top_n: usize,
    shards: usize,
}

impl Pipeline {
    /// Sequential pipeline reporting the default top 10.
    pub fn new(stopwords: StopwordSet) -> Self {
        Self {
            stopwords,
            tokenizer: Tokenizer::new(),
            top_n: DEFAULT_TOP_N,
            shards: 1,
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Aggregate in `shards` parallel chunks (1 = sequential).
    pub fn with_shards(mut self, shards: usize) -> Self {
        self.shards = shards.max(1);
        self
    }

    /// Validate `spec` and load its stopword source.
    pub fn from_spec(spec: &AnalysisSpec) -> Result<Self> {
        Self::from_spec_observed(spec, &mut NoopObserver)
    }

    /// Like [`Pipeline::from_spec`], reporting the stopword stage to `observer`.
    pub fn from_spec_observed(spec: &AnalysisSpec, observer: &mut impl PipelineObserver) -> Result<Self> {
        let report = ValidationEngine::with_defaults().validate(spec);
        for warning in report.warnings() {
            tracing::warn!("{warning}");
        }
        if report.has_errors() {
            return Err(WordFreqError::InvalidSpec(report));
        }

        let stopword_spec = spec
            .stopwords
            .as_ref()
            .ok_or_else(|| WordFreqError::InvalidSpec(report.clone()))?;

        trace_stage!(STAGE_STOPWORDS);
        observer.on_stage_start(STAGE_STOPWORDS);
        let clock = StageClock::start();
        let stopwords = load_stopwords(stopword_spec)?;
        let stage = StageReportBuilder::new(clock.elapsed())
            .items(stopwords.len() as u64)
            .build();
        observer.on_stage_end(STAGE_STOPWORDS, &stage);
        observer.on_stopwords(&stopwords);

        Ok(Self::new(stopwords)
            .with_top_n(spec.top_n)
            .with_shards(spec.shard_count()))
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn shards(&self) -> usize {
        self.shards
    }

    /// Stream `corpus` through the aggregator.
    ///
    /// Fails with `EmptyCorpus` when nothing survives stopword removal.
    pub fn aggregate<S: LineSource + ?Sized>(&self, corpus: &S) -> Result<Aggregate> {
        if self.shards > 1 {
            let lines = read_all_lines(corpus, SourceKind::Corpus)?;
            return aggregate_parallel(&lines, &self.stopwords, self.shards);
        }

        let lines = corpus.open_as(SourceKind::Corpus)?;
        let mut aggregator = FrequencyAggregator::with_tokenizer(&self.stopwords, self.tokenizer.clone());
        for line in lines {
            let line = line.map_err(|err| WordFreqError::read(SourceKind::Corpus, corpus.location(), err))?;
            aggregator.push_line(&line);
        }
        debug!(
            retained = aggregator.stats().total_token_count,
            discarded = aggregator.discarded(),
            "corpus aggregated"
        );
        aggregator.finish()
    }

    /// Rank and summarize a finished aggregate.
    pub fn report(&self, aggregate: &Aggregate) -> Result<AnalysisReport> {
        self.report_observed(aggregate, &mut NoopObserver)
    }

    fn report_observed(&self, aggregate: &Aggregate, observer: &mut impl PipelineObserver) -> Result<AnalysisReport> {
        if aggregate.is_empty() {
            return Err(WordFreqError::EmptyCorpus);
        }

        // Stage: rank
        trace_stage!(STAGE_RANK);
        observer.on_stage_start(STAGE_RANK);
        let clock = StageClock::start();
        let top_words = top_n(&aggregate.table, self.top_n)?;
        let stage = StageReportBuilder::new(clock.elapsed())
            .items(top_words.len() as u64)
            .build();
        observer.on_stage_end(STAGE_RANK, &stage);
        observer.on_ranked(&top_words);

        // Stage: summary
        trace_stage!(STAGE_SUMMARY);
        observer.on_stage_start(STAGE_SUMMARY);
        let clock = StageClock::start();
        let stats = aggregate.stats;
        let ratio = top_n_ratio(&top_words, stats.total_token_count)?;
        let summary = summary_stats(&aggregate.table, stats.total_token_count, stats.total_characters);
        observer.on_stage_end(STAGE_SUMMARY, &StageReport::new(clock.elapsed()));

        Ok(AnalysisReport {
            stopword_count: self.stopwords.len(),
            total_tokens: stats.total_token_count,
            unique_word_count: summary.unique_word_count,
            top_n: self.top_n,
            top_n_count: covered_count(&top_words),
            top_words,
            top_n_ratio: ratio,
            total_characters: stats.total_characters,
            average_word_length: summary.average_word_length,
        })
    }

    /// Run every stage over `corpus`.
    ///
    /// Stages run in order:
    /// 1. Aggregate (tokenize, filter, count)
    /// 2. Rank (top-N)
    /// 3. Summary (ratio, unique words, average length)
    pub fn run<S: LineSource + ?Sized>(
        &self,
        corpus: &S,
        observer: &mut impl PipelineObserver,
    ) -> Result<AnalysisReport> {
        // Stage: aggregate
        let aggregate = {
            trace_stage!(STAGE_AGGREGATE);
            observer.on_stage_start(STAGE_AGGREGATE);
            let clock = StageClock::start();
            let aggregate = self.aggregate(corpus)?;
            let stage = StageReportBuilder::new(clock.elapsed())
                .items(aggregate.table.len() as u64)
                .retained(aggregate.stats.total_token_count)
                .discarded(aggregate.discarded)
                .build();
            observer.on_stage_end(STAGE_AGGREGATE, &stage);
            observer.on_aggregate(&aggregate);
            aggregate
        };

        let report = self.report_observed(&aggregate, observer)?;
        info!(
            total_tokens = report.total_tokens,
            unique_words = report.unique_word_count,
            top_n_ratio = report.top_n_ratio,
            "analysis complete"
        );
        Ok(report)
    }
}

/// Build the stopword set named by a spec section.
pub fn load_stopwords(spec: &StopwordSpec) -> Result<StopwordSet> {
    if let Some(path) = &spec.path {
        return StopwordSet::from_source(&FileSource::new(path));
    }
    if let Some(language) = &spec.language {
        return Ok(StopwordSet::builtin(language));
    }
    if let Some(words) = &spec.words {
        return Ok(StopwordSet::load(words));
    }
    Err(WordFreqError::InvalidSpec(
        ValidationEngine::with_defaults().validate(&AnalysisSpec::new(spec.clone())),
    ))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::observer::StageTimingObserver;
    use crate::source::MemorySource;
    use crate::types::RankedEntry;

    fn cat_corpus() -> MemorySource {
        MemorySource::new(["the cat sat", "the cat ran"])
    }

    #[test]
    fn test_run_cat_sat_scenario() {
        let pipeline = Pipeline::new(StopwordSet::from_list(&["the"])).with_top_n(2);
        let report = pipeline.run(&cat_corpus(), &mut NoopObserver).unwrap();

        assert_eq!(report.stopword_count, 1);
        assert_eq!(report.total_tokens, 4);
        assert_eq!(report.unique_word_count, 3);
        assert_eq!(
            report.top_words,
            vec![RankedEntry::new("cat", 2), RankedEntry::new("ran", 1)]
        );
        assert_eq!(report.top_n_count, 3);
        assert!((report.top_n_ratio - 0.75).abs() < 1e-12);
        assert_eq!(report.total_characters, 12);
        assert_eq!(report.average_word_length, 3.0);
    }

    #[test]
    fn test_run_empty_corpus() {
        let pipeline = Pipeline::new(StopwordSet::from_list(&["the"]));
        let mut obs = StageTimingObserver::new();

        let err = pipeline.run(&MemorySource::default(), &mut obs).unwrap_err();
        assert!(matches!(err, WordFreqError::EmptyCorpus));
        // Ranking never started.
        assert!(obs.report(STAGE_RANK).is_none());
    }

    #[test]
    fn test_timing_observer_sees_all_stages() {
        let pipeline = Pipeline::new(StopwordSet::from_list(&["the"]));
        let mut obs = StageTimingObserver::new();

        pipeline.run(&cat_corpus(), &mut obs).unwrap();

        let names: Vec<&str> = obs.reports().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec![STAGE_AGGREGATE, STAGE_RANK, STAGE_SUMMARY]);

        let agg = obs.report(STAGE_AGGREGATE).unwrap();
        assert_eq!(agg.items(), Some(3));
        assert_eq!(agg.retained(), Some(4));
        assert_eq!(agg.discarded(), Some(2));
    }

    #[test]
    fn test_sharded_run_reports_discarded() {
        let lines: Vec<String> = (0..1200).map(|_| "the cat sat".to_string()).collect();
        let pipeline = Pipeline::new(StopwordSet::from_list(&["the"])).with_shards(4);
        let mut obs = StageTimingObserver::new();

        pipeline.run(&MemorySource::new(lines), &mut obs).unwrap();

        let agg = obs.report(STAGE_AGGREGATE).unwrap();
        assert_eq!(agg.retained(), Some(2400));
        assert_eq!(agg.discarded(), Some(1200));
    }

    struct ArtifactObserver {
        saw_stopwords: bool,
        saw_aggregate: bool,
        ranked: Vec<RankedEntry>,
    }

    impl PipelineObserver for ArtifactObserver {
        fn on_stopwords(&mut self, _stopwords: &StopwordSet) {
            self.saw_stopwords = true;
        }
        fn on_aggregate(&mut self, _aggregate: &Aggregate) {
            self.saw_aggregate = true;
        }
        fn on_ranked(&mut self, entries: &[RankedEntry]) {
            self.ranked = entries.to_vec();
        }
    }

    #[test]
    fn test_artifact_hooks_fire() {
        let spec = AnalysisSpec::new(StopwordSpec::words(["the"])).with_top_n(1);
        let mut obs = ArtifactObserver {
            saw_stopwords: false,
            saw_aggregate: false,
            ranked: Vec::new(),
        };

        let pipeline = Pipeline::from_spec_observed(&spec, &mut obs).unwrap();
        pipeline.run(&cat_corpus(), &mut obs).unwrap();

        assert!(obs.saw_stopwords, "on_stopwords not called");
        assert!(obs.saw_aggregate, "on_aggregate not called");
        assert_eq!(obs.ranked, vec![RankedEntry::new("cat", 2)]);
    }

    #[test]
    fn test_from_spec_rejects_invalid() {
        let spec = AnalysisSpec::new(StopwordSpec::language("en")).with_top_n(0);
        let err = Pipeline::from_spec(&spec).unwrap_err();
        match err {
            WordFreqError::InvalidSpec(report) => assert!(report.has_errors()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_spec_missing_stopword_file() {
        let spec = AnalysisSpec::new(StopwordSpec::path("/no/such/stopwords.txt"));
        let err = Pipeline::from_spec(&spec).unwrap_err();
        assert!(matches!(
            err,
            WordFreqError::SourceUnavailable {
                kind: SourceKind::Stopwords,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_corpus_is_unavailable() {
        let pipeline = Pipeline::new(StopwordSet::empty());
        let err = pipeline
            .run(&FileSource::new("/no/such/alice29.txt"), &mut NoopObserver)
            .unwrap_err();
        assert!(matches!(
            err,
            WordFreqError::SourceUnavailable {
                kind: SourceKind::Corpus,
                ..
            }
        ));
    }

    #[test]
    fn test_sharded_run_matches_sequential() {
        let lines: Vec<String> = (0..1500)
            .map(|i| format!("word{} alpha beta-gamma the {}", i % 3, if i % 2 == 0 { "even" } else { "odd" }))
            .collect();
        let corpus = MemorySource::new(lines);
        let stop = StopwordSet::from_list(&["the"]);

        let sequential = Pipeline::new(stop.clone()).run(&corpus, &mut NoopObserver).unwrap();
        let sharded = Pipeline::new(stop).with_shards(4).run(&corpus, &mut NoopObserver).unwrap();

        assert_eq!(sequential, sharded);
    }

    #[test]
    fn test_report_rejects_empty_aggregate() {
        let pipeline = Pipeline::new(StopwordSet::empty());
        let err = pipeline.report(&Aggregate::default()).unwrap_err();
        assert!(matches!(err, WordFreqError::EmptyCorpus));
    }
}
