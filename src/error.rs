//! Crate-wide error type
//!
//! Source failures are fatal to a run; `EmptyCorpus` is a distinguishable
//! signal the caller is expected to check before ranking.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::pipeline::validation::ValidationReport;

/// Which input a source error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Stopwords,
    Corpus,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stopwords => "stopwords",
            Self::Corpus => "corpus",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum WordFreqError {
    /// The stopword list or the corpus could not be opened.
    #[error("{kind} source unavailable: {location}")]
    SourceUnavailable {
        kind: SourceKind,
        location: String,
        #[source]
        source: io::Error,
    },

    /// A source opened fine but failed while being read.
    #[error("failed reading {kind} source {location}")]
    SourceRead {
        kind: SourceKind,
        location: String,
        #[source]
        source: io::Error,
    },

    /// No tokens survived stopword filtering.
    #[error("corpus produced no tokens after stopword removal")]
    EmptyCorpus,

    /// A ratio was requested against a zero token total.
    #[error("ratio undefined: total token count is zero")]
    DivisionUndefined,

    #[error("top-N size must be positive")]
    InvalidTopN,

    #[error("analysis spec is invalid ({} error(s))", .0.errors().count())]
    InvalidSpec(ValidationReport),

    #[error("failed to parse analysis spec: {0}")]
    SpecParse(#[from] serde_json::Error),
}

impl WordFreqError {
    pub(crate) fn unavailable(kind: SourceKind, location: impl Into<String>, source: io::Error) -> Self {
        Self::SourceUnavailable {
            kind,
            location: location.into(),
            source,
        }
    }

    pub(crate) fn read(kind: SourceKind, location: impl Into<String>, source: io::Error) -> Self {
        Self::SourceRead {
            kind,
            location: location.into(),
            source,
        }
    }

    /// True for errors that abort a run outright.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::EmptyCorpus)
    }
}

pub type Result<T> = std::result::Result<T, WordFreqError>;
