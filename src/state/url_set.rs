use serde::Serialize;
use std::collections::BTreeSet;

/// A set of absolute URLs keyed by exact string equality
///
/// Used both as the visited-page cycle guard and as the dedup collector for
/// albums and media. Callers insert already-absolute URLs; the set performs no
/// case folding or query canonicalization. Iteration order is sorted, so two
/// sets holding the same URLs iterate identically however they were filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UrlSet {
    urls: BTreeSet<String>,
}

impl UrlSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a URL, returning true if it was not already present
    pub fn add(&mut self, url: impl Into<String>) -> bool {
        self.urls.insert(url.into())
    }

    /// Moves every URL of `other` into this set
    ///
    /// Returns the number of URLs that were new to this set.
    pub fn merge(&mut self, other: UrlSet) -> usize {
        let before = self.urls.len();
        self.urls.extend(other.urls);
        self.urls.len() - before
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.urls.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for UrlSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            urls: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for UrlSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.urls.extend(iter.into_iter().map(Into::into));
    }
}
