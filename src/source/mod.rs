//! Source adapters
//!
//! Each supported gallery host is a variant of the closed [`Source`] enum.
//! The discovery run is written once against its capability methods:
//!
//! - `search`: seed to album references
//! - `list_album_media`: one album to media references
//! - `next_page`: the continuation pointer of a fetched page
//! - `resolve_media`: one more hop for intermediate media pages
//!
//! The per-host modules compose the extraction rules, the pagination walkers
//! and the fetcher into those capabilities.

mod bunkr;
mod erome;
mod fapello;
mod jpg5;
mod seed;

pub use seed::SeedInput;

use crate::config::{Config, SourcesConfig};
use crate::crawler::{PageResult, Trawler, WalkOutcome};
use crate::state::{AlbumRef, MediaRef, SkipReason, Skipped, UrlSet};
use crate::TrawlError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A supported gallery host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Album search, albums listing images
    Erome,
    /// Album search, albums linking to per-file media pages
    Bunkr,
    /// Profile pages with infinite-scroll continuation
    Fapello,
    /// Paginated albums
    Jpg5,
}

impl Source {
    pub fn all() -> [Source; 4] {
        [Self::Erome, Self::Bunkr, Self::Fapello, Self::Jpg5]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Erome => "erome",
            Self::Bunkr => "bunkr",
            Self::Fapello => "fapello",
            Self::Jpg5 => "jpg5",
        }
    }

    /// Finds the albums a seed refers to
    ///
    /// Erome and Bunkr run a site search; Fapello and Jpg5 turn the seed into
    /// its single album without touching the network.
    pub async fn search(
        &self,
        trawler: &Trawler,
        seed: &SeedInput,
        visited: &mut UrlSet,
    ) -> WalkOutcome<AlbumRef> {
        match self {
            Self::Erome => erome::search(trawler, seed, visited).await,
            Self::Bunkr => bunkr::search(trawler, seed, visited).await,
            Self::Fapello => fapello::search(trawler.config(), seed),
            Self::Jpg5 => jpg5::search(trawler.config(), seed),
        }
    }

    /// Finds albums for album-only listings
    ///
    /// Bunkr uses its titled search listing; every other source is the same
    /// as [`Source::search`].
    pub async fn search_albums(
        &self,
        trawler: &Trawler,
        seed: &SeedInput,
        visited: &mut UrlSet,
    ) -> WalkOutcome<AlbumRef> {
        match self {
            Self::Bunkr => bunkr::search_listing(trawler, seed, visited).await,
            _ => self.search(trawler, seed, visited).await,
        }
    }

    /// Collects the media of one album
    ///
    /// Fails only when the album yields nothing at all: its first page could
    /// not be fetched or its URL is unusable.
    pub async fn list_album_media(
        &self,
        trawler: &Trawler,
        album: &AlbumRef,
    ) -> Result<AlbumListing, SkipReason> {
        let mut visited = UrlSet::new();
        let walk = match self {
            Self::Erome => erome::list_album_media(trawler, album, &mut visited).await,
            Self::Bunkr => bunkr::list_album_media(trawler, album, &mut visited).await,
            Self::Fapello => fapello::list_album_media(trawler, album, &mut visited).await,
            Self::Jpg5 => jpg5::list_album_media(trawler, album, &mut visited).await,
        };
        AlbumListing::from_walk(walk, visited)
    }

    /// The continuation pointer of a fetched page, if the source has one
    pub fn next_page(&self, sources: &SourcesConfig, page: &PageResult) -> Option<String> {
        match self {
            Self::Erome => None,
            Self::Bunkr => bunkr::next_page(&sources.bunkr, page),
            Self::Fapello => fapello::next_page(page),
            Self::Jpg5 => jpg5::next_page(&sources.jpg5, page),
        }
    }

    /// Turns an intermediate media page into a final media reference
    ///
    /// Final references pass through unchanged.
    pub async fn resolve_media(
        &self,
        trawler: &Trawler,
        media: MediaRef,
    ) -> Result<MediaRef, SkipReason> {
        if media.kind.is_final() {
            return Ok(media);
        }
        match self {
            Self::Bunkr => bunkr::resolve_media(trawler, &media.url).await,
            _ => Err(SkipReason::Malformed(format!(
                "{} has no intermediate media pages",
                self
            ))),
        }
    }

    /// The page URLs a run for this seed starts from
    pub fn entry_urls(&self, config: &Config, seed: &SeedInput) -> Vec<String> {
        let urls = match self {
            Self::Erome => erome::entry_urls(config, seed),
            Self::Bunkr => bunkr::entry_urls(config, seed),
            Self::Fapello => fapello::album_url(&config.sources.fapello, seed).map(|u| vec![u]),
            Self::Jpg5 => Ok(vec![jpg5::album_url(&config.sources.jpg5, seed)]),
        };
        urls.unwrap_or_default()
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Source {
    type Err = TrawlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|source| source.name() == wanted)
            .ok_or_else(|| TrawlError::UnknownSource(s.to_string()))
    }
}

/// Media collected from one album, with the walk's bookkeeping
#[derive(Debug, Default)]
pub struct AlbumListing {
    pub media: Vec<MediaRef>,
    /// Pages the album walk fetched
    pub visited: UrlSet,
    pub pages_fetched: usize,
    /// Later pages that failed after the album produced something
    pub skipped: Vec<Skipped>,
}

impl AlbumListing {
    fn from_walk(walk: WalkOutcome<MediaRef>, visited: UrlSet) -> Result<Self, SkipReason> {
        let WalkOutcome {
            items,
            pages_fetched,
            mut skipped,
            ..
        } = walk;

        if pages_fetched == 0 && !skipped.is_empty() {
            return Err(skipped.remove(0).reason);
        }

        Ok(Self {
            media: items,
            visited,
            pages_fetched,
            skipped,
        })
    }
}

/// One search URL per page, `1..=max_pages`
pub(crate) fn numbered_pages<F>(max_pages: u32, page_url: F) -> Result<Vec<String>, SkipReason>
where
    F: Fn(u32) -> Result<String, crate::UrlError>,
{
    (1..=max_pages)
        .map(|page| page_url(page).map_err(|e| SkipReason::Malformed(e.to_string())))
        .collect()
}
