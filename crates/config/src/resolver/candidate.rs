//! Candidate config sources and path location.
//!
//! Responsibilities:
//! - Enumerate the candidate sources in priority order.
//! - Turn a candidate into a concrete file path, trying a direct path
//!   first and then a basename search across the include directories.
//!
//! Invariants:
//! - The default filename is never interpreted as a direct path; it is
//!   only searched via the include directories.

use std::fmt;
use std::path::PathBuf;

use crate::constants::{CONFIG_ENV_VAR, CONFIG_SETTING_KEY, DEFAULT_CONFIG_FILENAME};
use crate::settings::SettingsProvider;

use super::env::env_var_or_none;

/// One source to probe for a configuration file.
#[derive(Debug, Clone)]
pub(crate) enum ConfigCandidate {
    /// A path handed to `resolve` by the caller.
    Explicit(PathBuf),
    /// The `MONOLOG_CFG` environment variable.
    EnvVar,
    /// The `monolog.config` process setting.
    Setting,
    /// The hardcoded `monolog.cfg` default.
    DefaultFile,
}

impl ConfigCandidate {
    /// The file this candidate points at, or None when the source is unset.
    pub(crate) fn target(&self, settings: &dyn SettingsProvider) -> Option<CandidateTarget> {
        match self {
            ConfigCandidate::Explicit(path) => Some(CandidateTarget::direct(path.clone())),
            ConfigCandidate::EnvVar => {
                env_var_or_none(CONFIG_ENV_VAR).map(|v| CandidateTarget::direct(v.into()))
            }
            ConfigCandidate::Setting => settings
                .get(CONFIG_SETTING_KEY)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(|v| CandidateTarget::direct(v.into())),
            ConfigCandidate::DefaultFile => {
                Some(CandidateTarget::search_only(DEFAULT_CONFIG_FILENAME.into()))
            }
        }
    }
}

impl fmt::Display for ConfigCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigCandidate::Explicit(path) => write!(f, "explicit path {}", path.display()),
            ConfigCandidate::EnvVar => write!(f, "{CONFIG_ENV_VAR} environment variable"),
            ConfigCandidate::Setting => write!(f, "{CONFIG_SETTING_KEY} setting"),
            ConfigCandidate::DefaultFile => write!(f, "default {DEFAULT_CONFIG_FILENAME}"),
        }
    }
}

/// A named file to locate on disk.
pub(crate) struct CandidateTarget {
    path: PathBuf,
    direct: bool,
}

impl CandidateTarget {
    /// Target tried as a filesystem path first, then by basename search.
    fn direct(path: PathBuf) -> Self {
        Self { path, direct: true }
    }

    /// Target located via the include directories only.
    fn search_only(path: PathBuf) -> Self {
        Self {
            path,
            direct: false,
        }
    }

    /// Locate the target file, returning the first existing path.
    pub(crate) fn locate(&self, include_dirs: &[PathBuf]) -> Option<PathBuf> {
        if self.direct && self.path.is_file() {
            return Some(self.path.clone());
        }
        let name = self.path.file_name()?;
        include_dirs
            .iter()
            .map(|dir| dir.join(name))
            .find(|p| p.is_file())
    }
}
