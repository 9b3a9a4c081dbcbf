//! State module for tracking discovery progress
//!
//! This module provides the value types a discovery run produces and the
//! per-run working state that accumulates them.
//!
//! # Components
//!
//! - `UrlSet`: exact-match URL set used for dedup and the cycle guard
//! - `AlbumRef` / `MediaRef`: what the extraction rules discover
//! - `SkipReason`: why a task contributed nothing
//! - `DiscoverySession`: the working state of one run, ending in a `Discovery`

mod refs;
mod session;
mod skip;
mod url_set;

// Re-export main types
pub use refs::{AlbumRef, MediaKind, MediaRef};
pub use session::{Discovery, DiscoverySession};
pub use skip::{SkipReason, Skipped};
pub use url_set::UrlSet;
