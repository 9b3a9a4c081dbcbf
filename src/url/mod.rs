//! URL handling module for Gallery-Trawl
//!
//! This module provides absolute-URL validation, relative link resolution,
//! query construction, host extraction, and the path matchers the extraction
//! rules use to accept or reject media URLs.
//!
//! URLs are compared by exact string equality everywhere in the crate. Nothing
//! here case-folds or canonicalizes query strings.

mod domain;
mod matcher;
mod resolve;

// Re-export main functions
pub use domain::{extract_domain, host_fragment};
pub use matcher::{has_path_segment, has_video_extension, is_thumbnail, VIDEO_EXTENSIONS};
pub use resolve::{first_path_segment, origin, parse_absolute, resolve_link, with_query};
