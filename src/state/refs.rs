use serde::Serialize;
use std::fmt;

/// An album (gallery) page on a source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumRef {
    /// Absolute album URL
    pub url: String,

    /// Display title, when the listing exposes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl AlbumRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
        }
    }

    pub fn with_title(url: impl Into<String>, title: Option<String>) -> Self {
        Self {
            url: url.into(),
            title,
        }
    }
}

/// What a media URL points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    /// A page that must be fetched once more to reveal the asset URL
    Intermediate,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Intermediate => "intermediate",
        }
    }

    /// Returns true for kinds that may appear in final results
    pub fn is_final(&self) -> bool {
        !matches!(self, Self::Intermediate)
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A media asset (or intermediate media page) discovered on a source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaRef {
    pub url: String,
    pub kind: MediaKind,
}

impl MediaRef {
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind: MediaKind::Image,
        }
    }

    pub fn video(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind: MediaKind::Video,
        }
    }

    pub fn intermediate(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind: MediaKind::Intermediate,
        }
    }
}
