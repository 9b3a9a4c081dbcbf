//! Working state of a single discovery run
//!
//! A session is created when a run starts and turned into a [`Discovery`]
//! when it ends. Concurrent tasks never touch it: they return independent
//! values that the run merges in after each fan-in.

use crate::state::{AlbumRef, MediaKind, MediaRef, Skipped, UrlSet};
use crate::url::is_thumbnail;
use serde::Serialize;
use std::collections::BTreeMap;

/// Accumulating state of one discovery run
#[derive(Debug, Default)]
pub struct DiscoverySession {
    /// Pages already fetched in this run (cycle guard)
    visited: UrlSet,

    /// Albums keyed by URL
    albums: BTreeMap<String, Option<String>>,

    /// Final media keyed by URL
    media: BTreeMap<String, MediaKind>,

    /// Tasks that contributed nothing, with the reason
    skipped: Vec<Skipped>,

    /// Pages successfully fetched
    pages_fetched: usize,
}

impl DiscoverySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited_mut(&mut self) -> &mut UrlSet {
        &mut self.visited
    }

    /// Folds the visited pages of an independently run task into the session
    pub fn merge_visited(&mut self, visited: UrlSet) {
        self.visited.merge(visited);
    }

    /// Records an album, returning true if it was new
    ///
    /// A title seen later fills in an album first recorded without one.
    pub fn add_album(&mut self, album: AlbumRef) -> bool {
        match self.albums.get_mut(&album.url) {
            Some(title) => {
                if title.is_none() {
                    *title = album.title;
                }
                false
            }
            None => {
                self.albums.insert(album.url, album.title);
                true
            }
        }
    }

    /// Records a final media reference, returning true if it was accepted
    ///
    /// Intermediate pages and thumbnails are rejected; a URL already present
    /// is not counted twice.
    pub fn add_media(&mut self, media: MediaRef) -> bool {
        if !media.kind.is_final() {
            tracing::debug!("Refusing unresolved media page {}", media.url);
            return false;
        }
        if is_thumbnail(&media.url) {
            tracing::debug!("Dropping thumbnail {}", media.url);
            return false;
        }
        if self.media.contains_key(&media.url) {
            return false;
        }
        self.media.insert(media.url, media.kind);
        true
    }

    pub fn record_skip(&mut self, skipped: Skipped) {
        tracing::debug!("Skipped {}", skipped);
        self.skipped.push(skipped);
    }

    pub fn record_skips(&mut self, skipped: impl IntoIterator<Item = Skipped>) {
        for entry in skipped {
            self.record_skip(entry);
        }
    }

    pub fn add_pages_fetched(&mut self, pages: usize) {
        self.pages_fetched += pages;
    }

    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    /// Album URLs in stable order
    pub fn album_urls(&self) -> Vec<String> {
        self.albums.keys().cloned().collect()
    }

    /// Ends the session, producing the caller-facing result
    pub fn into_discovery(self) -> Discovery {
        Discovery {
            albums: self
                .albums
                .into_iter()
                .map(|(url, title)| AlbumRef::with_title(url, title))
                .collect(),
            media: self
                .media
                .into_iter()
                .map(|(url, kind)| MediaRef { url, kind })
                .collect(),
            skipped: self.skipped,
            pages_fetched: self.pages_fetched,
        }
    }
}

/// Deduplicated result of a discovery run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Discovery {
    pub albums: Vec<AlbumRef>,
    pub media: Vec<MediaRef>,
    pub skipped: Vec<Skipped>,
    pub pages_fetched: usize,
}

impl Discovery {
    /// Returns true if neither albums nor media were found
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty() && self.media.is_empty()
    }

    pub fn album_urls(&self) -> Vec<&str> {
        self.albums.iter().map(|a| a.url.as_str()).collect()
    }

    pub fn media_urls(&self) -> Vec<&str> {
        self.media.iter().map(|m| m.url.as_str()).collect()
    }

    pub fn images(&self) -> impl Iterator<Item = &MediaRef> {
        self.media.iter().filter(|m| m.kind == MediaKind::Image)
    }

    pub fn videos(&self) -> impl Iterator<Item = &MediaRef> {
        self.media.iter().filter(|m| m.kind == MediaKind::Video)
    }
}
