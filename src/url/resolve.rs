use crate::UrlError;
use url::Url;

/// Parses a string as an absolute HTTP(S) URL
///
/// Unlike a crawler frontier, the discovery engine never rewrites URLs: the
/// returned value serializes to the same string a site handed us (modulo the
/// `url` crate's own serialization, e.g. an empty path becoming `/`).
///
/// # Arguments
///
/// * `url_str` - The URL string to parse
///
/// # Returns
///
/// * `Ok(Url)` - A parsed absolute URL with an http or https scheme
/// * `Err(UrlError)` - The string is not an absolute HTTP(S) URL
///
/// # Examples
///
/// ```
/// use gallery_trawl::url::parse_absolute;
///
/// let url = parse_absolute("https://fapello.com/someone/").unwrap();
/// assert_eq!(url.as_str(), "https://fapello.com/someone/");
/// assert!(parse_absolute("someone").is_err());
/// ```
pub fn parse_absolute(url_str: &str) -> Result<Url, UrlError> {
    let url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingDomain);
    }

    Ok(url)
}

/// Resolves a link href to an absolute URL
///
/// Returns None if the link should be ignored:
/// - empty hrefs and fragment-only anchors
/// - javascript:, mailto:, tel: and data: links
/// - hrefs that cannot be joined to the base
/// - non-HTTP(S) URLs after resolution
pub fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) => {
            if absolute_url.scheme() == "http" || absolute_url.scheme() == "https" {
                Some(absolute_url.to_string())
            } else {
                None
            }
        }
        Err(_) => None,
    }
}

/// Returns a configured origin without its trailing slash
///
/// Config values such as `https://bunkr.cr/` and `https://bunkr.cr` are
/// treated identically so prefix filters can be built with `format!`.
pub fn origin(base: &str) -> &str {
    base.trim().trim_end_matches('/')
}

/// Builds `{base}{path}?k=v&...` with the parameters form-encoded
///
/// # Examples
///
/// ```
/// use gallery_trawl::url::with_query;
///
/// let url = with_query("https://www.erome.com", "/search", &[("q", "jane doe"), ("page", "2")]).unwrap();
/// assert_eq!(url, "https://www.erome.com/search?q=jane+doe&page=2");
/// ```
pub fn with_query(base: &str, path: &str, params: &[(&str, &str)]) -> Result<String, UrlError> {
    let raw = format!("{}{}", origin(base), path);
    let url = Url::parse_with_params(&raw, params).map_err(|e| UrlError::Parse(e.to_string()))?;
    Ok(url.to_string())
}

/// Returns the first non-empty path segment of a URL
///
/// Album URLs on profile-style hosts carry the account name there
/// (`https://fapello.com/<username>/`).
pub fn first_path_segment(url: &Url) -> Option<String> {
    url.path_segments()?
        .find(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
}
