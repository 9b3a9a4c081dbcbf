use crate::url::parse_absolute;
use crate::TrawlError;
use std::fmt;
use url::Url;

/// What the caller asked to trawl: an account name or a starting URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedInput {
    Username(String),
    Url(Url),
}

impl SeedInput {
    /// Parses a raw seed
    ///
    /// Surrounding whitespace is ignored. Anything that parses as an absolute
    /// http(s) URL is a URL seed; everything else is a username.
    ///
    /// # Examples
    ///
    /// ```
    /// use gallery_trawl::SeedInput;
    ///
    /// assert!(matches!(SeedInput::parse(" alice ").unwrap(), SeedInput::Username(name) if name == "alice"));
    /// assert!(matches!(SeedInput::parse("https://jpg5.su/album/x").unwrap(), SeedInput::Url(_)));
    /// assert!(SeedInput::parse("   ").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, TrawlError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TrawlError::EmptySeed);
        }

        match parse_absolute(trimmed) {
            Ok(url) => Ok(Self::Url(url)),
            Err(_) => Ok(Self::Username(trimmed.to_string())),
        }
    }

    /// The seed as text, used as a search query
    pub fn as_str(&self) -> &str {
        match self {
            Self::Username(name) => name,
            Self::Url(url) => url.as_str(),
        }
    }

    pub fn as_url(&self) -> Option<&Url> {
        match self {
            Self::Url(url) => Some(url),
            Self::Username(_) => None,
        }
    }
}

impl fmt::Display for SeedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
