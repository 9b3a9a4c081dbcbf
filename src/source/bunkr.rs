//! Bunkr discovery
//!
//! Albums come from the bunkr-albums search index. Two walks exist over it:
//! the gallery walk used by discovery follows `page+1` only while the page
//! shows the next-page button and still lists albums; the titled listing
//! used for album-only runs fetches pages `1..=max-pages`.
//!
//! Album pages link to per-file media pages; each is fetched once more and
//! its asset URL confirmed with a HEAD probe before it is surfaced.

use super::{numbered_pages, SeedInput, Source};
use crate::config::{BunkrConfig, Config};
use crate::crawler::extract::bunkr::{
    album_pattern, extract_media_page_links, extract_media_url, extract_search_listing,
    has_next_search_page,
};
use crate::crawler::{
    fetch_page, probe, walk_links, walk_numeric, PageResult, PageStep, StopReason, Trawler,
    WalkLimits, WalkOutcome,
};
use crate::state::{AlbumRef, MediaRef, SkipReason, UrlSet};
use crate::url::{is_thumbnail, with_query};
use regex::Regex;

fn search_page_url(bunkr: &BunkrConfig, query: &str, page: u32) -> Result<String, crate::UrlError> {
    with_query(
        bunkr.search_base(),
        "/",
        &[("search", query), ("page", &page.to_string())],
    )
}

fn pattern(bunkr: &BunkrConfig) -> Result<Regex, SkipReason> {
    album_pattern(bunkr.album_base()).map_err(|e| SkipReason::Malformed(e.to_string()))
}

/// The album URL itself, when the seed already is one
fn seed_album(bunkr: &BunkrConfig, seed: &SeedInput) -> Option<String> {
    let url = seed.as_url()?;
    let pattern = pattern(bunkr).ok()?;
    pattern.is_match(url.as_str()).then(|| url.to_string())
}

pub(super) fn entry_urls(config: &Config, seed: &SeedInput) -> Result<Vec<String>, SkipReason> {
    let bunkr = &config.sources.bunkr;
    if let Some(album) = seed_album(bunkr, seed) {
        return Ok(vec![album]);
    }
    search_page_url(bunkr, seed.as_str(), 1)
        .map(|url| vec![url])
        .map_err(|e| SkipReason::Malformed(e.to_string()))
}

/// Gallery walk over the search index
pub(super) async fn search(
    trawler: &Trawler,
    seed: &SeedInput,
    visited: &mut UrlSet,
) -> WalkOutcome<AlbumRef> {
    let config = trawler.config();
    let bunkr = &config.sources.bunkr;

    if let Some(album) = seed_album(bunkr, seed) {
        let mut outcome = WalkOutcome::empty(StopReason::NoNextPage);
        outcome.items.push(AlbumRef::new(album));
        return outcome;
    }

    let (start, pattern) = match (search_page_url(bunkr, seed.as_str(), 1), pattern(bunkr)) {
        (Ok(start), Ok(pattern)) => (start, pattern),
        (Err(e), _) => return WalkOutcome::skipped(seed.as_str(), SkipReason::Malformed(e.to_string())),
        (_, Err(reason)) => return WalkOutcome::skipped(seed.as_str(), reason),
    };

    trawler
        .progress()
        .emit(format!("bunkr: searching albums for '{}'", seed));

    let limits = WalkLimits::follow(config.crawler.max_follow_pages as usize).requiring_items();
    walk_links(trawler.client(), start, limits, visited, |page| PageStep {
        items: extract_search_listing(&page.body, &pattern),
        next: Source::Bunkr.next_page(&config.sources, page),
    })
    .await
}

/// Titled search listing over pages `1..=max-pages`
///
/// An album URL seed is listed as is, without searching.
pub(super) async fn search_listing(
    trawler: &Trawler,
    seed: &SeedInput,
    visited: &mut UrlSet,
) -> WalkOutcome<AlbumRef> {
    let config = trawler.config();
    let bunkr = &config.sources.bunkr;

    if let Some(album) = seed_album(bunkr, seed) {
        let mut outcome = WalkOutcome::empty(StopReason::NoNextPage);
        outcome.items.push(AlbumRef::new(album));
        return outcome;
    }

    let urls = match numbered_pages(config.crawler.max_pages, |page| {
        search_page_url(bunkr, seed.as_str(), page)
    }) {
        Ok(urls) => urls,
        Err(reason) => return WalkOutcome::skipped(seed.as_str(), reason),
    };
    let pattern = match pattern(bunkr) {
        Ok(pattern) => pattern,
        Err(reason) => return WalkOutcome::skipped(seed.as_str(), reason),
    };

    trawler.progress().emit(format!(
        "bunkr: listing {} search pages for '{}'",
        urls.len(),
        seed
    ));

    walk_numeric(
        trawler.client(),
        urls,
        config.crawler.empty_page_policy,
        trawler.concurrency(),
        visited,
        |page| extract_search_listing(&page.body, &pattern),
    )
    .await
}

/// Next search page, present only when the page shows the `page+1` button
///
/// The query and current page number are read back from the page's own URL,
/// so pages that are not search results never have a successor.
pub(super) fn next_page(bunkr: &BunkrConfig, page: &PageResult) -> Option<String> {
    let mut query = None;
    let mut number = None;
    for (key, value) in page.final_url.query_pairs() {
        match key.as_ref() {
            "search" => query = Some(value.into_owned()),
            "page" => number = value.parse::<u32>().ok(),
            _ => {}
        }
    }
    let query = query?;
    let next = number?.checked_add(1)?;

    if !has_next_search_page(&page.body, &page.final_url, &query, next) {
        tracing::debug!("No button for page {} of '{}'", next, query);
        return None;
    }
    search_page_url(bunkr, &query, next).ok()
}

pub(super) async fn list_album_media(
    trawler: &Trawler,
    album: &AlbumRef,
    visited: &mut UrlSet,
) -> WalkOutcome<MediaRef> {
    let album_base = trawler.config().sources.bunkr.album_base();
    walk_links(
        trawler.client(),
        album.url.clone(),
        WalkLimits::follow(1),
        visited,
        |page| PageStep {
            items: extract_media_page_links(&page.body, album_base),
            next: None,
        },
    )
    .await
}

/// Fetches a media page and returns its probed asset URL
pub(super) async fn resolve_media(trawler: &Trawler, page_url: &str) -> Result<MediaRef, SkipReason> {
    let page = fetch_page(trawler.client(), page_url).await?;

    let media_url = extract_media_url(&page.body, &page.final_url)
        .ok_or_else(|| SkipReason::NotFound("object-cover image".to_string()))?;

    if is_thumbnail(&media_url) {
        return Err(SkipReason::Filtered(format!("thumbnail {}", media_url)));
    }

    if !probe(trawler.client(), &media_url).await {
        return Err(SkipReason::Unreachable(media_url));
    }

    tracing::debug!("Resolved {} to {}", page_url, media_url);
    Ok(MediaRef::image(media_url))
}
