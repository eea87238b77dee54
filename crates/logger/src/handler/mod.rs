//! Handler trait and built-in handler implementations.
//!
//! Responsibilities:
//! - Define the `Handler` seam between the logger frontend and sinks.
//! - Provide the built-in constructible types the registry knows about.
//!
//! Does NOT handle:
//! - Class-name dispatch (see registry.rs).
//! - Level translation (done by the builder before construction).

mod file;
mod null;
mod stream;

use std::io;

use serde_json::{Map, Value};

use crate::error::BuildError;
use crate::logger::Record;
use crate::severity::Severity;

pub use file::FileHandler;
pub use null::NullHandler;
pub use stream::{StreamHandler, StreamTarget};

/// A log sink attached to a logger.
pub trait Handler: Send + std::fmt::Debug {
    /// Class name this handler was constructed as.
    fn class(&self) -> &'static str;

    /// Minimum severity this handler accepts.
    fn level(&self) -> Severity;

    /// Whether a record of the given severity should reach this handler.
    fn is_handling(&self, severity: Severity) -> bool {
        severity >= self.level()
    }

    /// Write one record to the sink.
    fn handle(&mut self, record: &Record) -> io::Result<()>;
}

/// The `level` entry of a parameter bag, defaulting to DEBUG.
pub(crate) fn level_from_parameters(parameters: Option<&Map<String, Value>>) -> Severity {
    parameters
        .and_then(|p| p.get("level"))
        .map(Severity::from_value)
        .unwrap_or(Severity::Debug)
}

/// A string-typed parameter, rejecting non-string values.
pub(crate) fn str_parameter<'a>(
    parameters: Option<&'a Map<String, Value>>,
    class: &str,
    key: &str,
) -> Result<Option<&'a str>, BuildError> {
    match parameters.and_then(|p| p.get(key)) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(BuildError::InvalidParameters {
            class: class.to_string(),
            message: format!("`{key}` must be a string, got {other}"),
        }),
    }
}

/// Render one record as a text line.
pub(crate) fn format_line(record: &Record) -> String {
    if record.context.is_empty() {
        format!("{}: {}", record.severity, record.message)
    } else {
        format!(
            "{}: {} {}",
            record.severity,
            record.message,
            Value::Object(record.context.clone())
        )
    }
}
