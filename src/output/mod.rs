//! Output module for rendering discovery results
//!
//! This module handles:
//! - Plain text listings for the terminal
//! - JSON export of a whole run
//! - Markdown run reports

mod markdown;
mod text;

pub use markdown::{format_markdown_summary, write_markdown_summary};
pub use text::{format_discovery, print_discovery, to_json};

use crate::source::Source;
use crate::state::Discovery;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to format output: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// A finished run: what was asked, when, and what was found
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryReport {
    pub source: Source,
    pub seed: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// True when only albums were requested
    pub albums_only: bool,
    #[serde(flatten)]
    pub discovery: Discovery,
}

impl DiscoveryReport {
    /// Wraps a discovery that finished just now
    pub fn finish(
        source: Source,
        seed: impl Into<String>,
        started_at: DateTime<Utc>,
        albums_only: bool,
        discovery: Discovery,
    ) -> Self {
        Self {
            source,
            seed: seed.into(),
            started_at,
            finished_at: Utc::now(),
            albums_only,
            discovery,
        }
    }

    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }
}
