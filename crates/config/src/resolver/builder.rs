//! Resolver implementation: candidate iteration and document parsing.
//!
//! Responsibilities:
//! - Iterate candidate sources in priority order, stopping at the first
//!   valid document.
//! - Parse and validate candidate files, classifying JSON failures.
//! - Load `.env` files on request, honoring the `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - Candidate path location rules (see candidate.rs).
//! - Error classification details (see error.rs).
//!
//! Invariants:
//! - Per-candidate errors are swallowed; only the last diagnostic is
//!   retained as context for the final `NotFound` error.
//! - An unreadable located file never contributes to the final error
//!   unless no invalid candidate was seen afterwards.

use std::fs;
use std::path::{Path, PathBuf};

use crate::document::ConfigDocument;
use crate::settings::{MapSettings, SettingsProvider};

use super::candidate::ConfigCandidate;
use super::env::include_dirs_from_env;
use super::error::{ConfigError, JsonErrorKind, classify_json_error};

/// Outcome of probing one candidate source.
enum Probe {
    /// Candidate yielded a valid document.
    Document(ConfigDocument),
    /// Candidate was unset or no file was found; silent fallthrough.
    Absent,
    /// Candidate file was located but could not be read; fallthrough.
    Unreadable(ConfigError),
    /// Candidate file was found but invalid; fallthrough, retained as the
    /// last diagnostic.
    Invalid(ConfigError),
}

/// Locates and parses the logging configuration.
///
/// Each `resolve` call is independent; the resolver holds no mutable
/// state and is safe to share across threads.
pub struct ConfigResolver {
    include_dirs: Vec<PathBuf>,
    settings: Box<dyn SettingsProvider + Send + Sync>,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolver {
    /// Create a resolver with the default include directories: the current
    /// directory plus any entries from `MONOLOG_INCLUDE_PATH`.
    pub fn new() -> Self {
        let mut include_dirs = vec![PathBuf::from(".")];
        include_dirs.extend(include_dirs_from_env());
        Self {
            include_dirs,
            settings: Box::new(MapSettings::new()),
        }
    }

    /// Replace the include directory list.
    pub fn with_include_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.include_dirs = dirs;
        self
    }

    /// Append one include directory.
    pub fn with_include_dir(mut self, dir: PathBuf) -> Self {
        self.include_dirs.push(dir);
        self
    }

    /// Attach a process-level settings provider consulted for the
    /// `monolog.config` key.
    pub fn with_settings<S>(mut self, settings: S) -> Self
    where
        S: SettingsProvider + Send + Sync + 'static,
    {
        self.settings = Box::new(settings);
        self
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the `.env` file is
    /// not loaded (useful for testing). Missing `.env` files are silently
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DotenvParse` or `ConfigError::DotenvIo` when
    /// the file exists but cannot be used.
    ///
    /// SAFETY: error values never include raw .env line contents.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Resolve the configuration, trying candidates strictly in priority
    /// order and stopping at the first success.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when every candidate is exhausted,
    /// carrying the last diagnostic produced by an invalid candidate.
    pub fn resolve(&self, explicit: Option<&Path>) -> Result<ConfigDocument, ConfigError> {
        let mut candidates = Vec::with_capacity(4);
        if let Some(path) = explicit {
            candidates.push(ConfigCandidate::Explicit(path.to_path_buf()));
        }
        candidates.push(ConfigCandidate::EnvVar);
        candidates.push(ConfigCandidate::Setting);
        candidates.push(ConfigCandidate::DefaultFile);

        let mut last_invalid: Option<ConfigError> = None;
        let mut last_unreadable: Option<ConfigError> = None;

        for candidate in candidates {
            match self.probe(&candidate) {
                Probe::Document(doc) => {
                    tracing::debug!(candidate = %candidate, "resolved logging configuration");
                    return Ok(doc);
                }
                Probe::Absent => {
                    tracing::debug!(candidate = %candidate, "candidate absent");
                }
                Probe::Unreadable(err) => {
                    tracing::debug!(candidate = %candidate, error = %err, "candidate unreadable");
                    last_unreadable = Some(err);
                }
                Probe::Invalid(err) => {
                    tracing::warn!(candidate = %candidate, error = %err, "candidate invalid");
                    last_invalid = Some(err);
                }
            }
        }

        let last = last_invalid.or(last_unreadable).map(|e| e.to_string());
        Err(ConfigError::NotFound { last })
    }

    fn probe(&self, candidate: &ConfigCandidate) -> Probe {
        let Some(target) = candidate.target(self.settings.as_ref()) else {
            return Probe::Absent;
        };
        let Some(path) = target.locate(&self.include_dirs) else {
            return Probe::Absent;
        };
        parse_document(&path)
    }
}

/// Read and validate one candidate file.
fn parse_document(path: &Path) -> Probe {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            return Probe::Unreadable(ConfigError::FileUnreadable {
                path: path.to_path_buf(),
                kind: err.kind(),
            });
        }
    };

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            return Probe::Invalid(ConfigError::JsonParse {
                path: path.to_path_buf(),
                kind: JsonErrorKind::Encoding,
                message: err.to_string(),
            });
        }
    };

    let value: serde_json::Value = match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(err) => {
            return Probe::Invalid(ConfigError::JsonParse {
                path: path.to_path_buf(),
                kind: classify_json_error(&err),
                message: err.to_string(),
            });
        }
    };

    // A parsed document must carry a `handlers` array; anything else falls
    // through like an absent candidate, but is kept as a diagnostic.
    if !matches!(value.get("handlers"), Some(serde_json::Value::Array(_))) {
        return Probe::Invalid(ConfigError::MissingHandlers {
            path: path.to_path_buf(),
        });
    }

    match serde_json::from_value::<ConfigDocument>(value) {
        Ok(doc) => Probe::Document(doc),
        Err(err) => Probe::Invalid(ConfigError::JsonParse {
            path: path.to_path_buf(),
            kind: classify_json_error(&err),
            message: err.to_string(),
        }),
    }
}
