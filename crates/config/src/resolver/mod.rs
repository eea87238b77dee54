//! Configuration resolver for the logging pipeline.
//!
//! Responsibilities:
//! - Probe candidate config sources in priority order until one yields a
//!   valid `handlers`-bearing JSON document.
//! - Classify JSON failures for diagnostics and retain the last one for
//!   the final `NotFound` error.
//! - Enforce the `DOTENV_DISABLED` gate before any `.env` loading.
//!
//! Does NOT handle:
//! - Handler construction or level translation (see `monolog-logger`).
//! - Persisting configuration back to disk.
//!
//! Invariants / Assumptions:
//! - Candidate priority: explicit path > `MONOLOG_CFG` env var >
//!   `monolog.config` setting > default `monolog.cfg` filename.
//! - An unreadable candidate falls through silently; an invalid candidate
//!   falls through but is retained as the last diagnostic.
//! - Either a fully valid document is returned or resolution fails; no
//!   partially valid document reaches the caller.

mod builder;
mod candidate;
mod env;
mod error;

pub use builder::ConfigResolver;
pub use env::env_var_or_none;
pub use error::{ConfigError, JsonErrorKind};
