//! Analysis specification types.
//!
//! An [`AnalysisSpec`] describes where stopwords come from, how many top
//! words to report, and whether to aggregate in parallel shards. These types
//! are the input to the [`super::validation::ValidationEngine`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "top_n": 10,
//!   "stopwords": { "path": "stopwords.txt" },
//!   "parallel": { "shards": 4 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

/// Default number of top words reported.
pub const DEFAULT_TOP_N: usize = 10;

/// Top-level analysis specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Number of top-ranked words to report.
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Where the stopword list comes from. Required.
    #[serde(default)]
    pub stopwords: Option<StopwordSpec>,

    /// Shard-parallel aggregation; absent means sequential.
    #[serde(default)]
    pub parallel: Option<ParallelSpec>,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl AnalysisSpec {
    /// A v1 spec with the given stopword source and defaults elsewhere.
    pub fn new(stopwords: StopwordSpec) -> Self {
        Self {
            v: SPEC_VERSION,
            top_n: DEFAULT_TOP_N,
            stopwords: Some(stopwords),
            parallel: None,
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_shards(mut self, shards: usize) -> Self {
        self.parallel = Some(ParallelSpec {
            shards,
            unknown_fields: HashMap::new(),
        });
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of shards to aggregate with (1 = sequential).
    pub fn shard_count(&self) -> usize {
        self.parallel.as_ref().map_or(1, |p| p.shards)
    }
}

/// Stopword source selection.
///
/// Exactly one of the fields should be set; the validator reports anything
/// else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StopwordSpec {
    /// Whitespace-delimited word list on disk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Built-in list by language code (e.g. `"en"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Inline words.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<String>>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl StopwordSpec {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn language(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            ..Self::default()
        }
    }

    pub fn words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: Some(words.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Number of sources set (valid specs have exactly one).
    pub fn sources_set(&self) -> usize {
        [self.path.is_some(), self.language.is_some(), self.words.is_some()]
            .iter()
            .filter(|set| **set)
            .count()
    }
}

/// Parallel aggregation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParallelSpec {
    /// Number of contiguous line shards.
    pub shards: usize,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}
