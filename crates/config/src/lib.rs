//! Configuration discovery for the monolog logging pipeline.
//!
//! This crate locates a JSON logging configuration through a prioritized
//! list of candidate sources, validates it, and hands the parsed document
//! to the logger builder in `monolog-logger`.

pub mod constants;
mod document;
mod resolver;
mod settings;

pub use document::{ConfigDocument, HandlerSpec};
pub use resolver::{ConfigError, ConfigResolver, JsonErrorKind, env_var_or_none};
pub use settings::{MapSettings, SettingsProvider};

use std::path::Path;

/// Resolve a logging configuration with default resolver settings.
///
/// When `path` is `None` the resolver falls back to the `MONOLOG_CFG`
/// environment variable and the default `monolog.cfg` include-path search.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] when no candidate source yields a
/// valid `handlers`-bearing document.
pub fn load_config_from_file(path: Option<&Path>) -> Result<ConfigDocument, ConfigError> {
    ConfigResolver::new().resolve(path)
}
