//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish
//!   failure modes.
//! - Map resolution and build errors to appropriate codes.
//!
//! Invariants:
//! - Exit codes 1-4 are reserved for specific error categories.

use monolog_logger::{BuildError, ConfigError, Error};

/// Structured exit codes for monolog-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// No candidate source yielded a valid configuration.
    ///
    /// Scripts should create a config file or point MONOLOG_CFG at one.
    ConfigNotFound = 2,

    /// A configuration was found but could not be used.
    ///
    /// Scripts should fix the file and not retry unchanged.
    InvalidConfig = 3,

    /// A handler entry named an unregistered type.
    UnknownHandler = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config(ConfigError::NotFound { .. }) => ExitCode::ConfigNotFound,
            Error::Config(_) => ExitCode::InvalidConfig,
            Error::Build(BuildError::UnknownHandlerType { .. }) => ExitCode::UnknownHandler,
            Error::Build(_) => ExitCode::InvalidConfig,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_to_exit_code_mapping() {
        let not_found = Error::Config(ConfigError::NotFound { last: None });
        assert_eq!(ExitCode::from(&not_found), ExitCode::ConfigNotFound);

        let unknown = Error::Build(BuildError::UnknownHandlerType {
            class: "Nope".to_string(),
        });
        assert_eq!(ExitCode::from(&unknown), ExitCode::UnknownHandler);

        let bad_params = Error::Build(BuildError::InvalidParameters {
            class: "FileHandler".to_string(),
            message: "`path` is required".to_string(),
        });
        assert_eq!(ExitCode::from(&bad_params), ExitCode::InvalidConfig);
    }
}
