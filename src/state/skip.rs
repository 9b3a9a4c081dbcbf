use serde::Serialize;
use std::fmt;

/// Why a fetch-and-extract task contributed nothing
///
/// Skips are values, not errors: a task that ends in one of these leaves its
/// siblings untouched and is reported alongside the results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "kebab-case")]
pub enum SkipReason {
    /// The server answered with a status other than 200
    HttpStatus(u16),

    /// Timeout, connection failure or unreadable body
    Network(String),

    /// A resolved media URL failed its reachability probe
    Unreachable(String),

    /// Input that could not be interpreted (bad URL, missing path segment)
    Malformed(String),

    /// The page was fetched but lacked the element the rule needs
    NotFound(String),

    /// The URL matched an exclusion filter
    Filtered(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpStatus(status) => write!(f, "HTTP {}", status),
            Self::Network(error) => write!(f, "network error: {}", error),
            Self::Unreachable(url) => write!(f, "media not reachable: {}", url),
            Self::Malformed(message) => write!(f, "malformed input: {}", message),
            Self::NotFound(what) => write!(f, "not found: {}", what),
            Self::Filtered(why) => write!(f, "filtered: {}", why),
        }
    }
}

/// A task target that was skipped, with the reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skipped {
    /// The URL (or seed) the task was working on
    pub target: String,
    pub reason: SkipReason,
}

impl Skipped {
    pub fn new(target: impl Into<String>, reason: SkipReason) -> Self {
        Self {
            target: target.into(),
            reason,
        }
    }
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.target, self.reason)
    }
}
