//! Logger assembly from a resolved configuration.
//!
//! This crate turns a [`ConfigDocument`] into a named [`Logger`] with an
//! ordered handler chain, constructing each handler through an explicit
//! factory registry and translating level names to severity ranks.

mod builder;
mod error;
mod handler;
mod logger;
mod registry;
pub mod severity;

pub use builder::LoggerBuilder;
pub use error::{BuildError, Error};
pub use handler::{FileHandler, Handler, NullHandler, StreamHandler, StreamTarget};
pub use logger::{Logger, Record};
pub use registry::HandlerRegistry;
pub use severity::{Severity, convert_level};

pub use monolog_config::{
    ConfigDocument, ConfigError, ConfigResolver, HandlerSpec, load_config_from_file,
};

/// Logger name used when the caller does not supply one.
pub const DEFAULT_LOGGER_NAME: &str = "monolog";

/// Build a logger from an already resolved configuration.
///
/// With `config` absent the bare logger is returned with no handlers
/// attached.
///
/// # Errors
///
/// Returns [`BuildError::UnknownHandlerType`] (or a construction error)
/// on the first bad handler entry; no partially populated logger is ever
/// returned.
pub fn get_logger(name: &str, config: Option<&ConfigDocument>) -> Result<Logger, BuildError> {
    LoggerBuilder::new().build(name, config)
}

/// Resolve the default configuration and build a logger from it.
///
/// Composes [`load_config_from_file`] and [`get_logger`]; resolution
/// failures propagate rather than silently producing a bare logger.
pub fn get_default_logger(name: Option<&str>) -> Result<Logger, Error> {
    let config = load_config_from_file(None)?;
    let logger = get_logger(name.unwrap_or(DEFAULT_LOGGER_NAME), Some(&config))?;
    Ok(logger)
}
