//! Crawler module for page fetching and discovery orchestration
//!
//! This module contains the core discovery logic, including:
//! - HTTP fetching and reachability probes
//! - Per-source HTML extraction rules
//! - Link-follow and numeric pagination walkers
//! - Concurrent fan-out / fan-in of fetch tasks
//! - Overall run coordination

mod coordinator;
pub mod extract;
mod fetcher;
mod orchestrator;
mod pagination;
mod progress;

pub use coordinator::{run_discovery, Trawler};
pub use fetcher::{build_http_client, fetch_page, fetch_url, probe, FetchResult, PageResult};
pub use orchestrator::{fan_out, two_phase, TaskOutcomes};
pub use pagination::{
    walk_links, walk_numeric, PageItem, PageStep, StopReason, WalkLimits, WalkOutcome,
};
pub use progress::ProgressSink;
