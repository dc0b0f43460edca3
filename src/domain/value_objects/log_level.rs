use serde::{Deserialize, Serialize};

/// Severity of a log record that survives triage.
///
/// Only two levels are operationally significant; every other level
/// (info, debug, notice, ...) is discarded before a `LogRecord` exists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warning,
}

impl LogLevel {
    /// Parses a raw level token, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for any level other than `warning` or `error`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            _ => None,
        }
    }

    /// Sort rank: lower ranks come first in a triaged report.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Error => 0,
            Self::Warning => 1,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
