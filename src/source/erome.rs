use super::{numbered_pages, SeedInput};
use crate::config::Config;
use crate::crawler::extract::erome::{extract_album_links, extract_album_media};
use crate::crawler::{walk_links, walk_numeric, PageStep, StopReason, Trawler, WalkLimits, WalkOutcome};
use crate::state::{AlbumRef, MediaRef, SkipReason, UrlSet};
use crate::url::with_query;

/// Search result pages for the seed, or the album itself for an album URL
pub(super) fn entry_urls(config: &Config, seed: &SeedInput) -> Result<Vec<String>, SkipReason> {
    let erome = &config.sources.erome;
    if let Some(album) = seed_album(config, seed) {
        return Ok(vec![album]);
    }

    numbered_pages(config.crawler.max_pages, |page| {
        with_query(erome.base(), "/search", &[("q", seed.as_str()), ("page", &page.to_string())])
    })
}

fn seed_album(config: &Config, seed: &SeedInput) -> Option<String> {
    seed.as_url()
        .map(|url| url.as_str())
        .filter(|url| url.starts_with(&config.sources.erome.album_prefix()))
        .map(str::to_string)
}

pub(super) async fn search(
    trawler: &Trawler,
    seed: &SeedInput,
    visited: &mut UrlSet,
) -> WalkOutcome<AlbumRef> {
    let config = trawler.config();
    if let Some(album) = seed_album(config, seed) {
        let mut outcome = WalkOutcome::empty(StopReason::NoNextPage);
        outcome.items.push(AlbumRef::new(album));
        return outcome;
    }

    let urls = match entry_urls(config, seed) {
        Ok(urls) => urls,
        Err(reason) => return WalkOutcome::skipped(seed.as_str(), reason),
    };

    let album_prefix = config.sources.erome.album_prefix();
    trawler.progress().emit(format!(
        "erome: searching {} result pages for '{}'",
        urls.len(),
        seed
    ));

    walk_numeric(
        trawler.client(),
        urls,
        config.crawler.empty_page_policy,
        trawler.concurrency(),
        visited,
        |page| extract_album_links(&page.body, &album_prefix),
    )
    .await
}

pub(super) async fn list_album_media(
    trawler: &Trawler,
    album: &AlbumRef,
    visited: &mut UrlSet,
) -> WalkOutcome<MediaRef> {
    walk_links(
        trawler.client(),
        album.url.clone(),
        WalkLimits::follow(1),
        visited,
        |page| PageStep {
            items: extract_album_media(&page.body, &page.final_url),
            next: None,
        },
    )
    .await
}
