//! Environment variable helpers for configuration discovery.
//!
//! Responsibilities:
//! - Read env vars with empty/whitespace filtering.
//! - Derive extra include directories from `MONOLOG_INCLUDE_PATH`.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.

use std::path::PathBuf;

use crate::constants::INCLUDE_PATH_ENV_VAR;

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Include directories listed in `MONOLOG_INCLUDE_PATH`, split like `PATH`.
pub(crate) fn include_dirs_from_env() -> Vec<PathBuf> {
    match std::env::var_os(INCLUDE_PATH_ENV_VAR) {
        Some(raw) => std::env::split_paths(&raw).collect(),
        None => Vec::new(),
    }
}
