//! Logger builder: turns a resolved configuration into a populated logger.
//!
//! Responsibilities:
//! - Iterate `handlers` entries in order, translating `level` values and
//!   dispatching construction through the registry.
//!
//! Invariants:
//! - Construction is all-or-nothing: the first bad entry aborts the build
//!   and no partially populated logger escapes.
//! - Handler attachment order equals the configuration order.

use serde_json::{Map, Value};

use monolog_config::ConfigDocument;

use crate::error::BuildError;
use crate::logger::Logger;
use crate::registry::HandlerRegistry;
use crate::severity::convert_level;

/// Builds loggers from resolved configuration documents.
pub struct LoggerBuilder {
    registry: HandlerRegistry,
}

impl LoggerBuilder {
    /// Builder backed by the built-in handler registry.
    pub fn new() -> Self {
        Self {
            registry: HandlerRegistry::builtin(),
        }
    }

    /// Builder backed by a custom registry.
    pub fn with_registry(registry: HandlerRegistry) -> Self {
        Self { registry }
    }

    /// Mutable access to the registry for registering extra types.
    pub fn registry_mut(&mut self) -> &mut HandlerRegistry {
        &mut self.registry
    }

    /// Build a logger named `name` from `config`.
    ///
    /// With `config` absent the bare logger is returned unchanged.
    ///
    /// # Errors
    ///
    /// The first handler entry that fails to resolve or construct aborts
    /// the whole build.
    pub fn build(
        &self,
        name: &str,
        config: Option<&ConfigDocument>,
    ) -> Result<Logger, BuildError> {
        let mut logger = Logger::new(name);
        let Some(config) = config else {
            return Ok(logger);
        };

        for spec in &config.handlers {
            let parameters = spec.parameters.as_ref().map(translate_level);
            let handler = self.registry.construct(&spec.class, parameters.as_ref())?;
            tracing::debug!(logger = name, class = %spec.class, "attached handler");
            logger.append_handler(handler);
        }

        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace a `level` entry with its translated integer rank.
fn translate_level(parameters: &Map<String, Value>) -> Map<String, Value> {
    let mut translated = parameters.clone();
    if let Some(level) = translated.get("level") {
        let rank = convert_level(level);
        translated.insert("level".to_string(), Value::from(rank));
    }
    translated
}
