//! Analysis specification, validation, and execution.
//!
//! ## Submodules
//!
//! - [`spec`]: Declarative, versioned JSON configuration
//! - [`validation`]: Rule engine producing structured diagnostics
//! - [`runner`]: Stage orchestration and artifact threading
//! - [`observer`]: Logging, profiling, and debug hooks
//! - [`artifacts`]: The structured report handed to callers

pub mod artifacts;
pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod validation;

pub use artifacts::AnalysisReport;

pub use error_code::ErrorCode;
pub use errors::SpecError;

pub use observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder,
    StageTimingObserver, STAGE_AGGREGATE, STAGE_RANK, STAGE_STOPWORDS, STAGE_SUMMARY,
};

pub use runner::{load_stopwords, Pipeline};

pub use spec::{AnalysisSpec, ParallelSpec, StopwordSpec, DEFAULT_TOP_N, SPEC_VERSION};

pub use validation::{
    Severity, ValidationDiagnostic, ValidationEngine, ValidationReport, ValidationRule,
};
