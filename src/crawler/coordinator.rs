//! Discovery coordinator - runs one source end to end
//!
//! A run goes through three stages:
//! - Search: the seed becomes a list of albums (sequential walk)
//! - Listing: every album is walked concurrently, after search has finished
//! - Resolution: intermediate media pages are fetched concurrently and
//!   replaced by the asset they point at
//!
//! Tasks never share mutable state. Each returns its own value and the
//! coordinator folds those into the [`DiscoverySession`] after fan-in.

use crate::config::{validate, Config};
use crate::crawler::orchestrator::{fan_out, two_phase};
use crate::crawler::{build_http_client, ProgressSink};
use crate::source::{SeedInput, Source};
use crate::state::{AlbumRef, Discovery, DiscoverySession, MediaRef, UrlSet};
use crate::TrawlError;
use reqwest::Client;
use std::sync::Arc;

/// Discovery engine for all sources
///
/// Holds the HTTP client and configuration shared read-only by every task of
/// a run.
#[derive(Debug, Clone)]
pub struct Trawler {
    client: Client,
    config: Arc<Config>,
    progress: ProgressSink,
}

impl Trawler {
    /// Creates a trawler from a configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Trawler)` - Configuration valid and client built
    /// * `Err(TrawlError)` - Invalid configuration or client build failure
    pub fn new(config: Config) -> Result<Self, TrawlError> {
        validate(&config)?;
        let client = build_http_client(&config.crawler, &config.user_agent)?;

        Ok(Self {
            client,
            config: Arc::new(config),
            progress: ProgressSink::disabled(),
        })
    }

    /// Attaches a progress sink
    pub fn with_progress(mut self, progress: ProgressSink) -> Self {
        self.progress = progress;
        self
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn progress(&self) -> &ProgressSink {
        &self.progress
    }

    /// Fetches allowed in flight during a fan-out
    pub fn concurrency(&self) -> usize {
        self.config.crawler.max_concurrent_fetches as usize
    }

    /// Discovers albums and media for a seed
    ///
    /// An empty or whitespace seed returns an empty result without any
    /// network activity. Failures of individual pages are reported in
    /// [`Discovery::skipped`] and never abort the run.
    pub async fn discover(&self, source: Source, raw_seed: &str) -> Discovery {
        let seed = match self.parse_seed(source, raw_seed) {
            Some(seed) => seed,
            None => return Discovery::default(),
        };

        tracing::info!("Discovering {} media for '{}'", source, seed);
        let mut session = DiscoverySession::new();

        let (albums, listings) = two_phase(
            self.search_phase(source, &seed, &mut session),
            self.concurrency(),
            |album_url| async move {
                source
                    .list_album_media(self, &AlbumRef::new(album_url))
                    .await
            },
        )
        .await;

        if albums.is_empty() {
            self.progress
                .emit(format!("{}: no albums found for '{}'", source, seed));
            return session.into_discovery();
        }

        let (listings, skipped) = listings.into_parts();
        session.record_skips(skipped);

        let mut pending = UrlSet::new();
        for listing in listings {
            session.merge_visited(listing.visited);
            session.add_pages_fetched(listing.pages_fetched);
            session.record_skips(listing.skipped);

            for media in listing.media {
                if media.kind.is_final() {
                    session.add_media(media);
                } else {
                    pending.add(media.url);
                }
            }
        }

        if !pending.is_empty() {
            self.progress.emit(format!(
                "{}: resolving {} media pages",
                source,
                pending.len()
            ));

            let resolved = fan_out(pending.into_vec(), self.concurrency(), |url| async move {
                source.resolve_media(self, MediaRef::intermediate(url)).await
            })
            .await;

            let (media, skipped) = resolved.into_parts();
            for media in media {
                session.add_media(media);
            }
            session.record_skips(skipped);
        }

        let discovery = session.into_discovery();
        tracing::info!(
            "{}: {} albums, {} media, {} skipped",
            source,
            discovery.albums.len(),
            discovery.media.len(),
            discovery.skipped.len()
        );
        self.progress.emit(format!(
            "{}: found {} media in {} albums",
            source,
            discovery.media.len(),
            discovery.albums.len()
        ));
        discovery
    }

    /// Lists albums for a seed without collecting their media
    pub async fn search_albums(&self, source: Source, raw_seed: &str) -> Discovery {
        let seed = match self.parse_seed(source, raw_seed) {
            Some(seed) => seed,
            None => return Discovery::default(),
        };

        let mut session = DiscoverySession::new();
        let walk = source
            .search_albums(self, &seed, session.visited_mut())
            .await;

        session.add_pages_fetched(walk.pages_fetched);
        session.record_skips(walk.skipped);
        for album in walk.items {
            session.add_album(album);
        }

        self.progress.emit(format!(
            "{}: found {} albums for '{}'",
            source,
            session.album_count(),
            seed
        ));
        session.into_discovery()
    }

    fn parse_seed(&self, source: Source, raw_seed: &str) -> Option<SeedInput> {
        match SeedInput::parse(raw_seed) {
            Ok(seed) => Some(seed),
            Err(e) => {
                tracing::warn!("{}: {}", source, e);
                self.progress
                    .emit(format!("{}: please enter a username or URL", source));
                None
            }
        }
    }

    /// Runs the search and records its albums, returning their URLs
    async fn search_phase(
        &self,
        source: Source,
        seed: &SeedInput,
        session: &mut DiscoverySession,
    ) -> Vec<String> {
        let walk = source.search(self, seed, session.visited_mut()).await;
        tracing::debug!(
            "{} search stopped ({}) after {} pages",
            source,
            walk.stop,
            walk.pages_fetched
        );

        session.add_pages_fetched(walk.pages_fetched);
        session.record_skips(walk.skipped);
        for album in walk.items {
            session.add_album(album);
        }

        let albums = session.album_urls();
        if !albums.is_empty() {
            self.progress
                .emit(format!("{}: found {} albums", source, albums.len()));
        }
        albums
    }
}

/// Runs one discovery with a fresh trawler
///
/// # Arguments
///
/// * `config` - The configuration
/// * `source` - Which host to trawl
/// * `seed` - Username or URL
///
/// # Returns
///
/// * `Ok(Discovery)` - Deduplicated albums and media, possibly empty
/// * `Err(TrawlError)` - The configuration is invalid
pub async fn run_discovery(
    config: Config,
    source: Source,
    seed: &str,
) -> Result<Discovery, TrawlError> {
    let trawler = Trawler::new(config)?;
    Ok(trawler.discover(source, seed).await)
}
