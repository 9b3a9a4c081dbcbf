//! Pagination walkers
//!
//! Two styles are supported:
//!
//! - **Link-follow**: one page at a time, the next URL read from the current
//!   page. Driven by an explicit state machine
//!   `Fetching → Extracting → Advancing | Done`.
//! - **Numeric**: a precomputed list of page URLs (`page=1..=N`), fetched
//!   concurrently or sequentially depending on the [`EmptyPagePolicy`].
//!
//! Both walkers keep the items of earlier pages when a later page fails, and
//! both consult the visited set so a page is fetched at most once.

use crate::config::EmptyPagePolicy;
use crate::crawler::fetcher::{fetch_page, PageResult};
use crate::crawler::orchestrator::fan_out;
use crate::state::{AlbumRef, MediaRef, SkipReason, Skipped, UrlSet};
use reqwest::Client;
use serde::Serialize;
use std::fmt;

/// Anything a walker collects, deduplicated by its URL
pub trait PageItem {
    fn key(&self) -> &str;
}

impl PageItem for AlbumRef {
    fn key(&self) -> &str {
        &self.url
    }
}

impl PageItem for MediaRef {
    fn key(&self) -> &str {
        &self.url
    }
}

impl PageItem for String {
    fn key(&self) -> &str {
        self
    }
}

/// Why a walk ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StopReason {
    /// The last page had no next pointer
    NoNextPage,
    /// The next pointer led to a page already fetched
    CycleDetected,
    /// A page could not be fetched
    FetchFailed,
    /// A page had no items and the walk requires them
    EmptyPage,
    /// A page had no new items and the walk requires progress
    NoProgress,
    /// The page ceiling was reached
    PageLimit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NoNextPage => "no next page",
            Self::CycleDetected => "cycle detected",
            Self::FetchFailed => "fetch failed",
            Self::EmptyPage => "empty page",
            Self::NoProgress => "no new items",
            Self::PageLimit => "page limit reached",
        };
        f.write_str(text)
    }
}

/// Termination rules of a link-follow walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkLimits {
    pub max_pages: usize,
    /// Stop on a page with zero items
    pub require_items: bool,
    /// Stop on a page with zero items not already collected
    pub require_progress: bool,
}

impl WalkLimits {
    /// Follow next pointers until they run out, whatever the pages hold
    pub fn follow(max_pages: usize) -> Self {
        Self {
            max_pages,
            require_items: false,
            require_progress: false,
        }
    }

    pub fn requiring_items(mut self) -> Self {
        self.require_items = true;
        self
    }

    pub fn requiring_progress(mut self) -> Self {
        self.require_progress = true;
        self
    }
}

/// What extraction found on one page of a link-follow walk
#[derive(Debug)]
pub struct PageStep<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
}

/// Result of a walk
#[derive(Debug)]
pub struct WalkOutcome<T> {
    /// Items in discovery order, without duplicates
    pub items: Vec<T>,
    pub pages_fetched: usize,
    pub stop: StopReason,
    pub skipped: Vec<Skipped>,
}

impl<T> WalkOutcome<T> {
    /// An outcome that fetched nothing
    pub fn empty(stop: StopReason) -> Self {
        Self {
            items: Vec::new(),
            pages_fetched: 0,
            stop,
            skipped: Vec::new(),
        }
    }

    /// An outcome that fetched nothing because its input was unusable
    pub fn skipped(target: impl Into<String>, reason: SkipReason) -> Self {
        Self {
            items: Vec::new(),
            pages_fetched: 0,
            stop: StopReason::FetchFailed,
            skipped: vec![Skipped::new(target, reason)],
        }
    }
}

enum WalkState {
    Fetching(String),
    Extracting(PageResult),
    Advancing(String),
    Done(StopReason),
}

/// Walks pages by following the next pointer each page exposes
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `start` - First page URL
/// * `limits` - Page ceiling and empty/no-progress rules
/// * `visited` - Cycle guard; every fetched URL is added to it
/// * `step` - Extracts the items and next pointer of a fetched page
pub async fn walk_links<T, F>(
    client: &Client,
    start: String,
    limits: WalkLimits,
    visited: &mut UrlSet,
    mut step: F,
) -> WalkOutcome<T>
where
    T: PageItem,
    F: FnMut(&PageResult) -> PageStep<T>,
{
    let mut seen = UrlSet::new();
    let mut items = Vec::new();
    let mut skipped = Vec::new();
    let mut pages_fetched = 0;

    let mut state = WalkState::Fetching(start);
    let stop = loop {
        state = match state {
            WalkState::Fetching(url) => {
                if !visited.add(url.clone()) {
                    WalkState::Done(StopReason::CycleDetected)
                } else {
                    match fetch_page(client, &url).await {
                        Ok(page) => {
                            pages_fetched += 1;
                            WalkState::Extracting(page)
                        }
                        Err(reason) => {
                            skipped.push(Skipped::new(url, reason));
                            WalkState::Done(StopReason::FetchFailed)
                        }
                    }
                }
            }
            WalkState::Extracting(page) => {
                let PageStep {
                    items: page_items,
                    next,
                } = step(&page);

                if page_items.is_empty() && limits.require_items {
                    WalkState::Done(StopReason::EmptyPage)
                } else {
                    let mut new_items = 0;
                    for item in page_items {
                        if seen.add(item.key()) {
                            items.push(item);
                            new_items += 1;
                        }
                    }
                    tracing::debug!("{}: {} new items", page.final_url, new_items);

                    if new_items == 0 && limits.require_progress {
                        WalkState::Done(StopReason::NoProgress)
                    } else {
                        match next {
                            Some(next) => WalkState::Advancing(next),
                            None => WalkState::Done(StopReason::NoNextPage),
                        }
                    }
                }
            }
            WalkState::Advancing(next) => {
                if visited.contains(&next) {
                    tracing::debug!("Next page {} already visited", next);
                    WalkState::Done(StopReason::CycleDetected)
                } else if pages_fetched >= limits.max_pages {
                    WalkState::Done(StopReason::PageLimit)
                } else {
                    WalkState::Fetching(next)
                }
            }
            WalkState::Done(reason) => break reason,
        };
    };

    WalkOutcome {
        items,
        pages_fetched,
        stop,
        skipped,
    }
}

/// Walks a precomputed list of numbered pages
///
/// With [`EmptyPagePolicy::FetchAll`] every page is fetched concurrently,
/// whatever earlier pages held. With [`EmptyPagePolicy::StopAtFirstEmpty`]
/// pages are fetched in order and the walk ends at the first page that
/// yields nothing, failed fetches included.
pub async fn walk_numeric<T, F>(
    client: &Client,
    urls: Vec<String>,
    policy: EmptyPagePolicy,
    concurrency: usize,
    visited: &mut UrlSet,
    extract: F,
) -> WalkOutcome<T>
where
    T: PageItem,
    F: Fn(&PageResult) -> Vec<T>,
{
    match policy {
        EmptyPagePolicy::FetchAll => {
            let pending: Vec<String> = urls.into_iter().filter(|url| visited.add(url.clone())).collect();
            let extract = &extract;
            let outcomes = fan_out(pending, concurrency, |url| async move {
                let page = fetch_page(client, &url).await?;
                Ok::<_, SkipReason>(extract(&page))
            })
            .await;

            let (pages, skipped) = outcomes.into_parts();
            let pages_fetched = pages.len();
            let mut seen = UrlSet::new();
            let items = pages
                .into_iter()
                .flatten()
                .filter(|item| seen.add(item.key()))
                .collect();

            WalkOutcome {
                items,
                pages_fetched,
                stop: StopReason::PageLimit,
                skipped,
            }
        }
        EmptyPagePolicy::StopAtFirstEmpty => {
            let mut outcome = WalkOutcome::empty(StopReason::PageLimit);
            let mut seen = UrlSet::new();

            for url in urls {
                if !visited.add(url.clone()) {
                    continue;
                }
                let page = match fetch_page(client, &url).await {
                    Ok(page) => page,
                    Err(reason) => {
                        outcome.skipped.push(Skipped::new(url, reason));
                        outcome.stop = StopReason::FetchFailed;
                        break;
                    }
                };
                outcome.pages_fetched += 1;

                let page_items = extract(&page);
                if page_items.is_empty() {
                    tracing::debug!("{} is empty, stopping", url);
                    outcome.stop = StopReason::EmptyPage;
                    break;
                }
                outcome
                    .items
                    .extend(page_items.into_iter().filter(|item| seen.add(item.key())));
            }

            outcome
        }
    }
}
