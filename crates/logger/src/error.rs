//! Error types for logger assembly.
//!
//! Invariants:
//! - Builder errors are never retried or swallowed; a bad handler entry
//!   aborts the whole build and no partial logger is returned.

use thiserror::Error;

use monolog_config::ConfigError;

/// Errors that can occur while building a logger from a configuration.
#[derive(Error, Debug)]
pub enum BuildError {
    /// A `class` name did not resolve to a registered handler type.
    #[error("unknown handler type `{class}`")]
    UnknownHandlerType { class: String },

    /// A parameter bag did not match what the handler type expects.
    #[error("invalid parameters for {class}: {message}")]
    InvalidParameters { class: String, message: String },

    /// The handler type was known and the parameters were well-formed,
    /// but constructing the instance failed.
    #[error("failed to construct {class}")]
    Construction {
        class: String,
        #[source]
        source: std::io::Error,
    },
}

/// Combined error for entry points that resolve and build in one step.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Build(#[from] BuildError),
}
