use super::{SeedInput, Source};
use crate::config::{Config, Jpg5Config};
use crate::crawler::extract::jpg5::{extract_images, extract_next};
use crate::crawler::{walk_links, PageResult, PageStep, StopReason, Trawler, WalkLimits, WalkOutcome};
use crate::state::{AlbumRef, MediaRef, SkipReason, UrlSet};
use crate::url::{host_fragment, parse_absolute};

/// The album URL for a seed
///
/// URL seeds lose their trailing slash; anything else is taken as an album
/// id under `{base-url}/album/`.
pub(super) fn album_url(jpg5: &Jpg5Config, seed: &SeedInput) -> String {
    match seed {
        SeedInput::Url(url) => url.as_str().trim_end_matches('/').to_string(),
        SeedInput::Username(id) => format!("{}/album/{}", jpg5.base(), id),
    }
}

pub(super) fn search(config: &Config, seed: &SeedInput) -> WalkOutcome<AlbumRef> {
    let mut outcome = WalkOutcome::empty(StopReason::NoNextPage);
    outcome
        .items
        .push(AlbumRef::new(album_url(&config.sources.jpg5, seed)));
    outcome
}

pub(super) fn next_page(jpg5: &Jpg5Config, page: &PageResult) -> Option<String> {
    let site = parse_absolute(jpg5.base()).ok()?;
    extract_next(&page.body, &site)
}

/// Walks an album's pages until one is empty or adds nothing new
pub(super) async fn list_album_media(
    trawler: &Trawler,
    album: &AlbumRef,
    visited: &mut UrlSet,
) -> WalkOutcome<MediaRef> {
    let config = trawler.config();
    let jpg5 = &config.sources.jpg5;

    let fragment = match host_fragment(jpg5.base()) {
        Some(fragment) => fragment,
        None => {
            return WalkOutcome::skipped(
                album.url.clone(),
                SkipReason::Malformed(format!("no host in {}", jpg5.base_url)),
            )
        }
    };

    trawler
        .progress()
        .emit(format!("jpg5: collecting media from {}", album.url));

    let limits = WalkLimits::follow(config.crawler.max_follow_pages as usize)
        .requiring_items()
        .requiring_progress();
    walk_links(trawler.client(), album.url.clone(), limits, visited, |page| PageStep {
        items: extract_images(&page.body, &fragment),
        next: Source::Jpg5.next_page(&config.sources, page),
    })
    .await
}
