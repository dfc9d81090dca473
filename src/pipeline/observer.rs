//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Every method has an empty default, so an observer only
//! implements the hooks it cares about.

use std::time::{Duration, Instant};

use crate::frequency::Aggregate;
use crate::nlp::StopwordSet;
use crate::types::RankedEntry;

pub const STAGE_STOPWORDS: &str = "stopwords";
pub const STAGE_AGGREGATE: &str = "aggregate";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_SUMMARY: &str = "summary";

/// Callbacks fired by [`super::runner::Pipeline::run`].
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    fn on_stopwords(&mut self, _stopwords: &StopwordSet) {}

    fn on_aggregate(&mut self, _aggregate: &Aggregate) {}

    fn on_ranked(&mut self, _entries: &[RankedEntry]) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Wall-clock timer for one stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Timing plus optional per-stage metrics.
#[derive(Debug, Clone, Default)]
pub struct StageReport {
    elapsed: Duration,
    items: Option<u64>,
    retained: Option<u64>,
    discarded: Option<u64>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Items produced by the stage (stopwords loaded, entries ranked, ...).
    pub fn items(&self) -> Option<u64> {
        self.items
    }

    /// Tokens kept by the aggregation stage.
    pub fn retained(&self) -> Option<u64> {
        self.retained
    }

    /// Tokens dropped as stopwords by the aggregation stage.
    pub fn discarded(&self) -> Option<u64> {
        self.discarded
    }
}

pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn items(mut self, items: u64) -> Self {
        self.report.items = Some(items);
        self
    }

    pub fn retained(mut self, retained: u64) -> Self {
        self.report.retained = Some(retained);
        self
    }

    pub fn discarded(mut self, discarded: u64) -> Self {
        self.report.discarded = Some(discarded);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Collects a [`StageReport`] per completed stage, in order.
#[derive(Debug, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    pub fn total_elapsed(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }

    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, r)| r)
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}
