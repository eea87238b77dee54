//! Parsed configuration document types.
//!
//! Responsibilities:
//! - Define the shape of a resolved logging configuration.
//! - Deserialize handler entries while preserving their declared order.
//!
//! Does NOT handle:
//! - Candidate discovery or JSON error classification (see resolver).
//! - Handler construction (see `monolog-logger`).
//!
//! Invariants:
//! - A document is immutable once produced by the resolver.
//! - `handlers` order is the handler attachment order on the logger.

use serde::Deserialize;
use serde_json::{Map, Value};

/// A validated logging configuration.
///
/// Unknown top-level keys are ignored; only `handlers` is required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConfigDocument {
    /// Handler entries in attachment order.
    pub handlers: Vec<HandlerSpec>,
}

/// One entry of the `handlers` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HandlerSpec {
    /// Name of the concrete handler type to construct.
    pub class: String,

    /// Constructor parameter bag. A `level` key, if present, holds either
    /// an integer severity rank or a level name string.
    #[serde(default)]
    pub parameters: Option<Map<String, Value>>,
}

impl HandlerSpec {
    /// Create a spec with no parameters.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            parameters: None,
        }
    }

    /// Attach a parameter bag.
    pub fn with_parameters(mut self, parameters: Map<String, Value>) -> Self {
        self.parameters = Some(parameters);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_preserves_handler_order() {
        let doc: ConfigDocument = serde_json::from_value(json!({
            "handlers": [
                {"class": "A"},
                {"class": "B", "parameters": {"level": "ERROR"}},
            ]
        }))
        .unwrap();

        assert_eq!(doc.handlers.len(), 2);
        assert_eq!(doc.handlers[0].class, "A");
        assert!(doc.handlers[0].parameters.is_none());
        assert_eq!(doc.handlers[1].class, "B");
        assert_eq!(
            doc.handlers[1].parameters.as_ref().unwrap().get("level"),
            Some(&json!("ERROR"))
        );
    }

    #[test]
    fn test_document_ignores_unknown_top_level_keys() {
        let doc: ConfigDocument = serde_json::from_value(json!({
            "version": 2,
            "handlers": [],
        }))
        .unwrap();

        assert!(doc.handlers.is_empty());
    }

    #[test]
    fn test_handler_entry_requires_class() {
        let result: Result<ConfigDocument, _> = serde_json::from_value(json!({
            "handlers": [{"parameters": {}}]
        }));

        assert!(result.is_err());
    }
}
