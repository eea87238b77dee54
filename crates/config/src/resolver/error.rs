//! Error types for configuration resolution.
//!
//! Responsibilities:
//! - Define error variants for every resolution failure mode.
//! - Classify `serde_json` failures into a diagnostic sub-kind.
//!
//! Invariants:
//! - `JsonErrorKind` is diagnostic only; it never changes resolver control
//!   flow beyond pass/fail.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret
//!   leakage.

use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving a logging configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A candidate file was located but could not be read. Non-fatal at
    /// the resolver level; triggers fallthrough to the next candidate.
    #[error("failed to read config file at {path}: {kind}")]
    FileUnreadable { path: PathBuf, kind: ErrorKind },

    /// A candidate file was not valid JSON.
    #[error("invalid JSON in config file at {path} ({kind}): {message}")]
    JsonParse {
        path: PathBuf,
        kind: JsonErrorKind,
        message: String,
    },

    /// A candidate parsed as JSON but carried no `handlers` array.
    #[error("config file at {path} has no `handlers` array")]
    MissingHandlers { path: PathBuf },

    /// No candidate across the full priority list yielded a valid document.
    #[error("no logging configuration found{}", .last.as_deref().map(|m| format!(" (last error: {m})")).unwrap_or_default())]
    NotFound { last: Option<String> },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: only the byte index of the failure is reported, never the
    /// offending line content.
    #[error(
        "failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from the dotenvy crate).
    #[error("failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

/// Diagnostic classification of a JSON parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonErrorKind {
    /// Nesting exceeded the parser's depth limit.
    DepthLimit,
    /// Valid JSON that did not match the expected document shape.
    StateMismatch,
    /// Illegal control character inside a string.
    ControlCharacter,
    /// General syntax error, including truncated input.
    Syntax,
    /// Malformed text encoding (invalid UTF-8 or unicode escape).
    Encoding,
    /// Anything the classifier could not identify.
    Unknown,
}

impl fmt::Display for JsonErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            JsonErrorKind::DepthLimit => "depth limit exceeded",
            JsonErrorKind::StateMismatch => "state mismatch",
            JsonErrorKind::ControlCharacter => "control character",
            JsonErrorKind::Syntax => "syntax error",
            JsonErrorKind::Encoding => "malformed encoding",
            JsonErrorKind::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Classify a `serde_json` error by category and message.
pub(crate) fn classify_json_error(err: &serde_json::Error) -> JsonErrorKind {
    use serde_json::error::Category;

    match err.classify() {
        Category::Data => JsonErrorKind::StateMismatch,
        Category::Eof => JsonErrorKind::Syntax,
        Category::Syntax => {
            let message = err.to_string();
            if message.contains("recursion limit") {
                JsonErrorKind::DepthLimit
            } else if message.contains("control character") {
                JsonErrorKind::ControlCharacter
            } else if message.contains("unicode") || message.contains("surrogate") {
                JsonErrorKind::Encoding
            } else {
                JsonErrorKind::Syntax
            }
        }
        Category::Io => JsonErrorKind::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(input: &str) -> JsonErrorKind {
        let err = serde_json::from_str::<serde_json::Value>(input).unwrap_err();
        classify_json_error(&err)
    }

    #[test]
    fn test_classify_syntax_error() {
        assert_eq!(classify("{ not json }"), JsonErrorKind::Syntax);
    }

    #[test]
    fn test_classify_truncated_input_as_syntax() {
        assert_eq!(classify("{\"handlers\": ["), JsonErrorKind::Syntax);
    }

    #[test]
    fn test_classify_control_character() {
        assert_eq!(classify("{\"a\": \"b\u{0001}c\"}"), JsonErrorKind::ControlCharacter);
    }

    #[test]
    fn test_classify_depth_limit() {
        let deep = "[".repeat(200) + &"]".repeat(200);
        assert_eq!(classify(&deep), JsonErrorKind::DepthLimit);
    }

    #[test]
    fn test_classify_bad_unicode_escape_as_encoding() {
        assert_eq!(classify("{\"a\": \"\\ud800\"}"), JsonErrorKind::Encoding);
    }

    #[test]
    fn test_classify_shape_mismatch_as_state_mismatch() {
        let err =
            serde_json::from_str::<crate::document::ConfigDocument>("{\"handlers\": [42]}")
                .unwrap_err();
        assert_eq!(classify_json_error(&err), JsonErrorKind::StateMismatch);
    }

    #[test]
    fn test_not_found_display_carries_last_diagnostic() {
        let plain = ConfigError::NotFound { last: None };
        assert_eq!(plain.to_string(), "no logging configuration found");

        let detailed = ConfigError::NotFound {
            last: Some("syntax error".to_string()),
        };
        assert!(detailed.to_string().contains("syntax error"));
    }
}
