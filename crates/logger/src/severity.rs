//! Severity table shared by the logger frontend and the builder.
//!
//! Responsibilities:
//! - Define the fixed bidirectional rank/name mapping.
//! - Translate configured `level` values (rank or name) to integer ranks.
//!
//! Invariants:
//! - The table is an immutable process-wide constant.
//! - `convert_level` is total: unmappable input deterministically becomes
//!   the DEBUG rank, never an arbitrary value and never an error.

use std::fmt;

use serde_json::Value;

/// Severity levels in ascending rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum Severity {
    /// Detailed debug information.
    Debug = 100,
    /// Interesting runtime events.
    Info = 200,
    /// Uncommon but normal events.
    Notice = 250,
    /// Exceptional occurrences that are not errors.
    Warning = 300,
    /// Runtime errors that do not require immediate action.
    Error = 400,
    /// Critical conditions.
    Critical = 500,
    /// Action must be taken immediately.
    Alert = 550,
    /// System is unusable.
    Emergency = 600,
}

impl Severity {
    /// All levels, ascending by rank.
    pub const ALL: [Severity; 8] = [
        Severity::Debug,
        Severity::Info,
        Severity::Notice,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
        Severity::Alert,
        Severity::Emergency,
    ];

    /// Integer rank of this level.
    pub const fn rank(self) -> u32 {
        self as u32
    }

    /// Canonical uppercase name of this level.
    pub const fn name(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Notice => "NOTICE",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
            Severity::Alert => "ALERT",
            Severity::Emergency => "EMERGENCY",
        }
    }

    /// Look up a level by its exact integer rank.
    pub fn from_rank(rank: u32) -> Option<Severity> {
        Severity::ALL.into_iter().find(|s| s.rank() == rank)
    }

    /// Look up a level by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Severity> {
        Severity::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// Interpret a configured `level` value, defaulting to DEBUG.
    pub fn from_value(value: &Value) -> Severity {
        Severity::from_rank(convert_level(value)).unwrap_or(Severity::Debug)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Translate a configured `level` value to an integer severity rank.
///
/// Recognized integer ranks pass through unchanged; recognized names map
/// to their rank; everything else becomes the DEBUG rank.
pub fn convert_level(value: &Value) -> u32 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|raw| u32::try_from(raw).ok())
            .and_then(Severity::from_rank)
            .map(Severity::rank)
            .unwrap_or(Severity::Debug.rank()),
        Value::String(name) => Severity::from_name(name)
            .unwrap_or(Severity::Debug)
            .rank(),
        _ => Severity::Debug.rank(),
    }
}
