use crate::url::origin;
use serde::{Deserialize, Serialize};

/// Main configuration structure for Gallery-Trawl
///
/// Every section is optional; a missing file or section falls back to the
/// defaults, which point at the public hosts.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub sources: SourcesConfig,
}

/// What a numeric-page walk does once a page comes back empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyPagePolicy {
    /// Fetch every page up to the ceiling concurrently, whatever they contain
    #[default]
    FetchAll,
    /// Fetch pages in order and stop at the first one with no items
    StopAtFirstEmpty,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Page ceiling for numeric-page walks (search listings)
    #[serde(rename = "max-pages")]
    pub max_pages: u32,

    /// Page ceiling for link-follow walks (album continuation pages)
    #[serde(rename = "max-follow-pages")]
    pub max_follow_pages: u32,

    /// Maximum number of fetches in flight during a fan-out
    #[serde(rename = "max-concurrent-fetches")]
    pub max_concurrent_fetches: u32,

    /// Total timeout for a single HTTP request (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Connect timeout for a single HTTP request (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    #[serde(rename = "empty-page-policy")]
    pub empty_page_policy: EmptyPagePolicy,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: 10,
            max_follow_pages: 500,
            max_concurrent_fetches: 16,
            request_timeout_secs: 60,
            connect_timeout_secs: 10,
            empty_page_policy: EmptyPagePolicy::FetchAll,
        }
    }
}

/// User agent sent with every request
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UserAgentConfig {
    pub value: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            value: "Mozilla/5.0".to_string(),
        }
    }
}

/// Per-source host configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub erome: EromeConfig,
    pub bunkr: BunkrConfig,
    pub fapello: FapelloConfig,
    pub jpg5: Jpg5Config,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EromeConfig {
    /// Site origin; search pages and album URLs live under it
    #[serde(rename = "base-url")]
    pub base_url: String,
}

impl Default for EromeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.erome.com".to_string(),
        }
    }
}

impl EromeConfig {
    pub fn base(&self) -> &str {
        origin(&self.base_url)
    }

    /// Prefix every accepted album link must start with
    pub fn album_prefix(&self) -> String {
        format!("{}/a/", self.base())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BunkrConfig {
    /// Origin of the album search index
    #[serde(rename = "search-url")]
    pub search_url: String,

    /// Origin albums and media pages are served from
    #[serde(rename = "album-url")]
    pub album_url: String,
}

impl Default for BunkrConfig {
    fn default() -> Self {
        Self {
            search_url: "https://bunkr-albums.io".to_string(),
            album_url: "https://bunkr.cr".to_string(),
        }
    }
}

impl BunkrConfig {
    pub fn search_base(&self) -> &str {
        origin(&self.search_url)
    }

    pub fn album_base(&self) -> &str {
        origin(&self.album_url)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FapelloConfig {
    /// Site origin; profiles and images live under it
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Origin videos are served from
    #[serde(rename = "cdn-url")]
    pub cdn_url: String,
}

impl Default for FapelloConfig {
    fn default() -> Self {
        Self {
            base_url: "https://fapello.com".to_string(),
            cdn_url: "https://cdn.fapello.com".to_string(),
        }
    }
}

impl FapelloConfig {
    pub fn base(&self) -> &str {
        origin(&self.base_url)
    }

    pub fn image_prefix(&self) -> String {
        format!("{}/content/", self.base())
    }

    pub fn video_prefix(&self) -> String {
        format!("{}/content/", origin(&self.cdn_url))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Jpg5Config {
    #[serde(rename = "base-url")]
    pub base_url: String,
}

impl Default for Jpg5Config {
    fn default() -> Self {
        Self {
            base_url: "https://jpg5.su".to_string(),
        }
    }
}

impl Jpg5Config {
    pub fn base(&self) -> &str {
        origin(&self.base_url)
    }
}
