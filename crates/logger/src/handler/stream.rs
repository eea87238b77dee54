//! Handler writing records to a standard process stream.

use std::io::{self, Write};

use serde_json::{Map, Value};

use crate::error::BuildError;
use crate::logger::Record;
use crate::severity::Severity;

use super::{Handler, format_line, level_from_parameters, str_parameter};

/// Which process stream a [`StreamHandler`] writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamTarget {
    Stdout,
    Stderr,
}

/// Writes formatted records to stdout or stderr.
#[derive(Debug)]
pub struct StreamHandler {
    target: StreamTarget,
    level: Severity,
}

impl StreamHandler {
    pub const CLASS: &'static str = "StreamHandler";

    pub fn new(target: StreamTarget, level: Severity) -> Self {
        Self { target, level }
    }

    /// Construct from a parameter bag: optional `stream` ("stdout" or
    /// "stderr", default stderr) and optional `level`.
    pub fn from_parameters(parameters: Option<&Map<String, Value>>) -> Result<Self, BuildError> {
        let target = match str_parameter(parameters, Self::CLASS, "stream")? {
            None | Some("stderr") => StreamTarget::Stderr,
            Some("stdout") => StreamTarget::Stdout,
            Some(other) => {
                return Err(BuildError::InvalidParameters {
                    class: Self::CLASS.to_string(),
                    message: format!("unsupported stream `{other}`"),
                });
            }
        };
        Ok(Self::new(target, level_from_parameters(parameters)))
    }

    pub fn target(&self) -> StreamTarget {
        self.target
    }
}

impl Handler for StreamHandler {
    fn class(&self) -> &'static str {
        Self::CLASS
    }

    fn level(&self) -> Severity {
        self.level
    }

    fn handle(&mut self, record: &Record) -> io::Result<()> {
        let line = format_line(record);
        match self.target {
            StreamTarget::Stdout => writeln!(io::stdout().lock(), "{line}"),
            StreamTarget::Stderr => writeln!(io::stderr().lock(), "{line}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_defaults_to_stderr_and_debug() {
        let handler = StreamHandler::from_parameters(None).unwrap();
        assert_eq!(handler.target(), StreamTarget::Stderr);
        assert_eq!(handler.level(), Severity::Debug);
    }

    #[test]
    fn test_stream_and_level_parameters() {
        let bag = params(json!({"stream": "stdout", "level": "WARNING"}));
        let handler = StreamHandler::from_parameters(Some(&bag)).unwrap();
        assert_eq!(handler.target(), StreamTarget::Stdout);
        assert_eq!(handler.level(), Severity::Warning);
    }

    #[test]
    fn test_unsupported_stream_is_rejected() {
        let bag = params(json!({"stream": "php://temp"}));
        let err = StreamHandler::from_parameters(Some(&bag)).unwrap_err();
        assert!(matches!(err, BuildError::InvalidParameters { .. }));
    }
}
