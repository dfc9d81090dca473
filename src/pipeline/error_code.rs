//! Stable error codes for analysis spec diagnostics.

use std::fmt;

use serde::Serialize;

/// Machine-readable category of a spec diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The spec version is not supported.
    UnsupportedVersion,
    /// A numeric field is outside its allowed range.
    OutOfRange,
    /// A required section is missing.
    MissingStage,
    /// Two settings cannot be used together.
    InvalidCombo,
    /// A field is not part of the schema.
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion => "unsupported_version",
            Self::OutOfRange => "out_of_range",
            Self::MissingStage => "missing_stage",
            Self::InvalidCombo => "invalid_combo",
            Self::UnknownField => "unknown_field",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
