use super::{SeedInput, Source};
use crate::config::{Config, FapelloConfig};
use crate::crawler::extract::fapello::{extract_media, extract_next, ProfileFilter};
use crate::crawler::{walk_links, PageResult, PageStep, StopReason, Trawler, WalkLimits, WalkOutcome};
use crate::state::{AlbumRef, MediaRef, SkipReason, UrlSet};
use crate::url::{first_path_segment, parse_absolute};

/// The profile URL for a seed
///
/// A bare username becomes `{base-url}/{username}/`; a URL seed is used as is.
pub(super) fn album_url(fapello: &FapelloConfig, seed: &SeedInput) -> Result<String, SkipReason> {
    match seed {
        SeedInput::Url(url) => Ok(url.to_string()),
        SeedInput::Username(name) => {
            if name.contains('/') {
                return Err(SkipReason::Malformed(format!(
                    "'{}' is neither a URL nor a username",
                    name
                )));
            }
            Ok(format!("{}/{}/", fapello.base(), name))
        }
    }
}

pub(super) fn search(config: &Config, seed: &SeedInput) -> WalkOutcome<AlbumRef> {
    match album_url(&config.sources.fapello, seed) {
        Ok(url) => {
            let mut outcome = WalkOutcome::empty(StopReason::NoNextPage);
            outcome.items.push(AlbumRef::new(url));
            outcome
        }
        Err(reason) => WalkOutcome::skipped(seed.as_str(), reason),
    }
}

pub(super) fn next_page(page: &PageResult) -> Option<String> {
    extract_next(&page.body, &page.final_url)
}

/// Walks a profile's infinite-scroll pages
///
/// Media is scoped to the username in the profile URL's first path segment;
/// an album URL without one is skipped as malformed.
pub(super) async fn list_album_media(
    trawler: &Trawler,
    album: &AlbumRef,
    visited: &mut UrlSet,
) -> WalkOutcome<MediaRef> {
    let username = match parse_absolute(&album.url)
        .ok()
        .as_ref()
        .and_then(first_path_segment)
    {
        Some(username) => username,
        None => {
            tracing::warn!("No username in album URL {}", album.url);
            return WalkOutcome::skipped(
                album.url.clone(),
                SkipReason::Malformed("album URL has no username segment".to_string()),
            );
        }
    };

    let config = trawler.config();
    let filter = ProfileFilter::new(username, &config.sources.fapello);
    trawler.progress().emit(format!(
        "fapello: collecting media for {}",
        filter.username()
    ));

    let limits = WalkLimits::follow(config.crawler.max_follow_pages as usize);
    walk_links(trawler.client(), album.url.clone(), limits, visited, |page| PageStep {
        items: extract_media(&page.body, &filter),
        next: Source::Fapello.next_page(&config.sources, page),
    })
    .await
}
