//! Well-known names used during configuration discovery.
//!
//! These identifiers are part of the external contract: deployments set
//! them to point the resolver at a configuration file.

/// Environment variable naming a config file (path or searchable basename).
pub const CONFIG_ENV_VAR: &str = "MONOLOG_CFG";

/// Process-level setting key with the same semantics as [`CONFIG_ENV_VAR`],
/// at lower priority.
pub const CONFIG_SETTING_KEY: &str = "monolog.config";

/// Default config filename, searched via the include-path list only.
pub const DEFAULT_CONFIG_FILENAME: &str = "monolog.cfg";

/// Environment variable listing extra include directories, separated like
/// `PATH` entries.
pub const INCLUDE_PATH_ENV_VAR: &str = "MONOLOG_INCLUDE_PATH";
