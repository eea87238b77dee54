//! Handler discarding every record it receives.

use std::io;

use serde_json::{Map, Value};

use crate::error::BuildError;
use crate::logger::Record;
use crate::severity::Severity;

use super::{Handler, level_from_parameters};

/// Accepts records up to its threshold and drops them.
#[derive(Debug)]
pub struct NullHandler {
    level: Severity,
}

impl NullHandler {
    pub const CLASS: &'static str = "NullHandler";

    pub fn new(level: Severity) -> Self {
        Self { level }
    }

    /// Construct from a parameter bag: optional `level`.
    pub fn from_parameters(parameters: Option<&Map<String, Value>>) -> Result<Self, BuildError> {
        Ok(Self::new(level_from_parameters(parameters)))
    }
}

impl Handler for NullHandler {
    fn class(&self) -> &'static str {
        Self::CLASS
    }

    fn level(&self) -> Severity {
        self.level
    }

    fn handle(&mut self, _record: &Record) -> io::Result<()> {
        Ok(())
    }
}
