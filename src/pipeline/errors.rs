//! Structured spec diagnostics.
//!
//! Each [`SpecError`] carries a stable [`ErrorCode`], a JSON pointer to the
//! offending field, a message, and an optional hint for fixing it.

use std::fmt;

use serde::Serialize;

use super::error_code::ErrorCode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecError {
    pub code: ErrorCode,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl SpecError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "/" } else { &self.path };
        write!(f, "[{}] {}: {}", self.code, path, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}

impl std::error::Error for SpecError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_hint() {
        let err = SpecError::new(ErrorCode::OutOfRange, "/top_n", "top_n must be greater than 0")
            .with_hint("Use a positive value such as 10");
        assert_eq!(
            err.to_string(),
            "[out_of_range] /top_n: top_n must be greater than 0 (hint: Use a positive value such as 10)"
        );
    }

    #[test]
    fn test_serialize_skips_missing_hint() {
        let err = SpecError::new(ErrorCode::UnknownField, "/bogus", "unrecognized field \"bogus\"");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "unknown_field");
        assert!(json.get("hint").is_none());
    }
}
