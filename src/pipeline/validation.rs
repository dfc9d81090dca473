//! Validation engine for analysis specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against an
//! [`AnalysisSpec`](super::spec::AnalysisSpec) and collects every diagnostic
//! into a [`ValidationReport`]. It never short-circuits on the first error,
//! so users see all problems at once.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use rapid_wordfreq::pipeline::validation::ValidationEngine;
//!
//! let engine = ValidationEngine::with_defaults();
//! let report = engine.validate(&spec);
//! if report.has_errors() {
//!     for err in report.errors() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use std::collections::HashMap;

use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::SpecError;
use super::spec::*;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding attached to a [`SpecError`].
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: SpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: SpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: SpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects an [`AnalysisSpec`] and returns
/// zero or more diagnostics.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"top_n"`).
    fn name(&self) -> &str;

    /// Inspect `spec` and return any findings.
    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against an [`AnalysisSpec`] and collects
/// all diagnostics into a [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(TopNRule));
        engine.add_rule(Box::new(StopwordSourceRule));
        engine.add_rule(Box::new(ParallelRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules against `spec` and return the collected report.
    pub fn validate(&self, spec: &AnalysisSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Supported version ───────────────────────────────────────────────────

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
        if spec.v == SPEC_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("spec version {} is not supported", spec.v),
            )
            .with_hint(format!("Set \"v\": {SPEC_VERSION}")),
        )]
    }
}

// ─── 2. top_n must be positive ──────────────────────────────────────────────

struct TopNRule;

impl ValidationRule for TopNRule {
    fn name(&self) -> &str {
        "top_n"
    }

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
        if spec.top_n > 0 {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(ErrorCode::OutOfRange, "/top_n", "top_n must be greater than 0")
                .with_hint(format!("Omit top_n to use the default of {DEFAULT_TOP_N}")),
        )]
    }
}

// ─── 3. Exactly one stopword source ─────────────────────────────────────────

struct StopwordSourceRule;

impl ValidationRule for StopwordSourceRule {
    fn name(&self) -> &str {
        "stopword_source"
    }

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
        let Some(stopwords) = &spec.stopwords else {
            return vec![ValidationDiagnostic::error(
                SpecError::new(
                    ErrorCode::MissingStage,
                    "/stopwords",
                    "a stopword source is required",
                )
                .with_hint("Add stopwords: { \"path\": ... }, { \"language\": \"en\" }, or { \"words\": [...] }"),
            )];
        };

        match stopwords.sources_set() {
            1 => vec![],
            0 => vec![ValidationDiagnostic::error(
                SpecError::new(
                    ErrorCode::MissingStage,
                    "/stopwords",
                    "stopwords must name a path, a language, or inline words",
                )
                .with_hint("Set exactly one of path, language, words"),
            )],
            _ => vec![ValidationDiagnostic::error(
                SpecError::new(
                    ErrorCode::InvalidCombo,
                    "/stopwords",
                    "only one stopword source may be set",
                )
                .with_hint("Set exactly one of path, language, words"),
            )],
        }
    }
}

// ─── 4. Shard count must be positive ────────────────────────────────────────

struct ParallelRule;

impl ValidationRule for ParallelRule {
    fn name(&self) -> &str {
        "parallel"
    }

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
        match &spec.parallel {
            Some(p) if p.shards == 0 => vec![ValidationDiagnostic::error(
                SpecError::new(
                    ErrorCode::OutOfRange,
                    "/parallel/shards",
                    "shards must be greater than 0",
                )
                .with_hint("Remove parallel to aggregate sequentially, or set a positive value"),
            )],
            _ => vec![],
        }
    }
}

// ─── 5. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    /// Collect unknown-field diagnostics at the given JSON pointer `path`
    /// from a map of extra fields captured by `#[serde(flatten)]`.
    fn check_unknowns(
        path: &str,
        unknowns: &HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<&String> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    SpecError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();
        out.extend(Self::check_unknowns("", &spec.unknown_fields, spec.strict));
        if let Some(stopwords) = &spec.stopwords {
            out.extend(Self::check_unknowns(
                "/stopwords",
                &stopwords.unknown_fields,
                spec.strict,
            ));
        }
        if let Some(parallel) = &spec.parallel {
            out.extend(Self::check_unknowns(
                "/parallel",
                &parallel.unknown_fields,
                spec.strict,
            ));
        }
        out
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════
