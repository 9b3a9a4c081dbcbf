//! Bunkr rules: search listing, search pagination marker, album page and
//! media page.
//!
//! Album pages only link to per-file media pages, so album extraction yields
//! intermediate refs that need one more fetch to reveal the asset URL.

use super::{select_attr, select_text};
use crate::state::{AlbumRef, MediaRef, UrlSet};
use crate::url::resolve_link;
use regex::Regex;
use scraper::Html;
use url::Url;

/// Pattern album links on a search page must match
///
/// # Example
///
/// ```
/// use gallery_trawl::crawler::extract::bunkr::album_pattern;
///
/// let pattern = album_pattern("https://bunkr.cr").unwrap();
/// assert!(pattern.is_match("https://bunkr.cr/a/Xy-12"));
/// assert!(!pattern.is_match("https://bunkr.cr/f/Xy-12"));
/// ```
pub fn album_pattern(album_base: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"^{}/a/[\w-]+", regex::escape(album_base)))
}

/// Album links and titles on one search results page
///
/// Titles come from `span.truncate` and pair with album links by position.
/// Albums beyond the last title get no title.
pub fn extract_search_listing(html: &str, pattern: &Regex) -> Vec<AlbumRef> {
    let document = Html::parse_document(html);

    let links: Vec<&str> = select_attr(&document, "a[href]", "href")
        .into_iter()
        .filter(|href| pattern.is_match(href))
        .collect();
    let titles = select_text(&document, "span.truncate");

    links
        .into_iter()
        .enumerate()
        .map(|(i, link)| {
            let title = titles.get(i).filter(|t| !t.is_empty()).cloned();
            AlbumRef::with_title(link, title)
        })
        .collect()
}

/// Whether a search page links to page `next_page` of the same query
///
/// The marker is an `a.btn.btn-sm.btn-main` whose href carries
/// `search={query}` and `page={next_page}`.
pub fn has_next_search_page(html: &str, page_url: &Url, query: &str, next_page: u32) -> bool {
    let document = Html::parse_document(html);
    let expected_page = next_page.to_string();

    select_attr(&document, "a.btn.btn-sm.btn-main[href]", "href")
        .into_iter()
        .filter_map(|href| page_url.join(href).ok())
        .any(|target| {
            let mut search = None;
            let mut page = None;
            for (key, value) in target.query_pairs() {
                match key.as_ref() {
                    "search" => search = Some(value.into_owned()),
                    "page" => page = Some(value.into_owned()),
                    _ => {}
                }
            }
            search.as_deref() == Some(query) && page.as_deref() == Some(expected_page.as_str())
        })
}

/// Media page links on an album page
///
/// Download anchors hold either a root-relative `/f/...` path, which is
/// prefixed with the album origin, or an absolute `{album_base}/f/...` URL.
pub fn extract_media_page_links(html: &str, album_base: &str) -> Vec<MediaRef> {
    let document = Html::parse_document(html);
    let absolute_prefix = format!("{}/f/", album_base);

    let pages: UrlSet = select_attr(&document, r#"a[aria-label="download"][href]"#, "href")
        .into_iter()
        .filter_map(|href| {
            if href.starts_with("/f/") {
                Some(format!("{}{}", album_base, href))
            } else if href.starts_with(&absolute_prefix) {
                Some(href.to_string())
            } else {
                None
            }
        })
        .collect();

    pages.into_vec().into_iter().map(MediaRef::intermediate).collect()
}

/// The asset URL on a media page
///
/// Taken from the first `img` with a class containing `object-cover`. If that
/// image has no usable `src`, there is no asset.
pub fn extract_media_url(html: &str, page_url: &Url) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = super::selector("img")?;

    let image = document.select(&selector).find(|element| {
        element
            .value()
            .classes()
            .any(|class| class.contains("object-cover"))
    })?;

    resolve_link(image.value().attr("src")?, page_url)
}
