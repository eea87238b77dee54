//! Handler appending records to a file.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::error::BuildError;
use crate::logger::Record;
use crate::severity::Severity;

use super::{Handler, format_line, level_from_parameters, str_parameter};

/// Appends formatted records to a file, creating it if needed.
#[derive(Debug)]
pub struct FileHandler {
    path: PathBuf,
    file: File,
    level: Severity,
}

impl FileHandler {
    pub const CLASS: &'static str = "FileHandler";

    /// Open `path` for appending.
    pub fn new(path: PathBuf, level: Severity) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { path, file, level })
    }

    /// Construct from a parameter bag: required `path`, optional `level`.
    pub fn from_parameters(parameters: Option<&Map<String, Value>>) -> Result<Self, BuildError> {
        let path = str_parameter(parameters, Self::CLASS, "path")?.ok_or_else(|| {
            BuildError::InvalidParameters {
                class: Self::CLASS.to_string(),
                message: "`path` is required".to_string(),
            }
        })?;

        Self::new(PathBuf::from(path), level_from_parameters(parameters)).map_err(|source| {
            BuildError::Construction {
                class: Self::CLASS.to_string(),
                source,
            }
        })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Handler for FileHandler {
    fn class(&self) -> &'static str {
        Self::CLASS
    }

    fn level(&self) -> Severity {
        self.level
    }

    fn handle(&mut self, record: &Record) -> io::Result<()> {
        writeln!(self.file, "{}", format_line(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_path_is_rejected() {
        let bag = json!({"level": "ERROR"}).as_object().unwrap().clone();
        let err = FileHandler::from_parameters(Some(&bag)).unwrap_err();
        assert!(matches!(err, BuildError::InvalidParameters { .. }));
    }

    #[test]
    fn test_appends_records_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let bag = json!({"path": path.to_str().unwrap(), "level": "INFO"})
            .as_object()
            .unwrap()
            .clone();

        let mut handler = FileHandler::from_parameters(Some(&bag)).unwrap();
        assert_eq!(handler.level(), Severity::Info);

        handler
            .handle(&Record::new(Severity::Error, "disk full"))
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "ERROR: disk full\n");
    }

    #[test]
    fn test_unwritable_path_is_a_construction_error() {
        let bag = json!({"path": "/nonexistent-dir/app.log"})
            .as_object()
            .unwrap()
            .clone();
        let err = FileHandler::from_parameters(Some(&bag)).unwrap_err();
        assert!(matches!(err, BuildError::Construction { .. }));
    }
}
