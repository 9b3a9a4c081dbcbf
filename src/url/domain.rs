use url::Url;

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
/// If the URL has no host (which shouldn't happen for valid HTTP(S) URLs), it returns None.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use gallery_trawl::url::extract_domain;
///
/// let url = Url::parse("https://JPG5.su/album/x").unwrap();
/// assert_eq!(extract_domain(&url), Some("jpg5.su".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Returns the host fragment media URLs of a site are expected to contain
///
/// Image hosts serve assets from numbered subdomains (`simp6.jpg5.su`), so the
/// configured origin's host with any `www.` prefix removed is used as a
/// substring filter rather than an exact host match.
///
/// # Examples
///
/// ```
/// use gallery_trawl::url::host_fragment;
///
/// assert_eq!(host_fragment("https://www.jpg5.su"), Some("jpg5.su".to_string()));
/// assert_eq!(host_fragment("not a url"), None);
/// ```
pub fn host_fragment(base: &str) -> Option<String> {
    let url = Url::parse(base.trim()).ok()?;
    let domain = extract_domain(&url)?;
    if let Some(rest) = domain.strip_prefix("www.") {
        return Some(rest.to_string());
    }
    Some(domain)
}
