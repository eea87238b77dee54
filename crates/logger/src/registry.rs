//! Handler factory registry.
//!
//! Responsibilities:
//! - Map class names to factory functions that unpack a parameter bag
//!   into a concrete handler instance.
//!
//! Does NOT handle:
//! - Level translation (the builder rewrites `level` before dispatch).
//!
//! Invariants:
//! - Dispatch is a closed table; unknown class names fail loudly instead
//!   of falling back to some default handler.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::BuildError;
use crate::handler::{FileHandler, Handler, NullHandler, StreamHandler};

/// Factory turning a parameter bag into a handler instance.
pub type HandlerFactory =
    Box<dyn Fn(Option<&Map<String, Value>>) -> Result<Box<dyn Handler>, BuildError> + Send + Sync>;

/// Registry of constructible handler types, keyed by class name.
pub struct HandlerRegistry {
    factories: HashMap<String, HandlerFactory>,
}

impl HandlerRegistry {
    /// An empty registry.
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registry preloaded with the built-in handler types.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(StreamHandler::CLASS, |params| {
            Ok(Box::new(StreamHandler::from_parameters(params)?))
        });
        registry.register(FileHandler::CLASS, |params| {
            Ok(Box::new(FileHandler::from_parameters(params)?))
        });
        registry.register(NullHandler::CLASS, |params| {
            Ok(Box::new(NullHandler::from_parameters(params)?))
        });
        registry
    }

    /// Register a factory for a class name, replacing any previous entry.
    pub fn register<F>(&mut self, class: impl Into<String>, factory: F)
    where
        F: Fn(Option<&Map<String, Value>>) -> Result<Box<dyn Handler>, BuildError>
            + Send
            + Sync
            + 'static,
    {
        self.factories.insert(class.into(), Box::new(factory));
    }

    /// Whether a class name is registered.
    pub fn contains(&self, class: &str) -> bool {
        self.factories.contains_key(class)
    }

    /// Construct a handler of the named type from a parameter bag.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnknownHandlerType`] for unregistered names;
    /// factory failures propagate unchanged.
    pub fn construct(
        &self,
        class: &str,
        parameters: Option<&Map<String, Value>>,
    ) -> Result<Box<dyn Handler>, BuildError> {
        let factory = self
            .factories
            .get(class)
            .ok_or_else(|| BuildError::UnknownHandlerType {
                class: class.to_string(),
            })?;
        factory(parameters)
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_knows_default_types() {
        let registry = HandlerRegistry::builtin();
        assert!(registry.contains("StreamHandler"));
        assert!(registry.contains("FileHandler"));
        assert!(registry.contains("NullHandler"));
        assert!(!registry.contains("SyslogHandler"));
    }

    #[test]
    fn test_unknown_class_fails() {
        let registry = HandlerRegistry::builtin();
        let err = registry.construct("DoesNotExist", None).unwrap_err();
        assert!(matches!(err, BuildError::UnknownHandlerType { class } if class == "DoesNotExist"));
    }

    #[test]
    fn test_custom_factory_registration() {
        let mut registry = HandlerRegistry::empty();
        registry.register("CustomNull", |params| {
            Ok(Box::new(NullHandler::from_parameters(params)?))
        });

        let handler = registry.construct("CustomNull", None).unwrap();
        assert_eq!(handler.class(), "NullHandler");
    }
}
