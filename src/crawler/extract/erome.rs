use super::select_attr;
use crate::state::{AlbumRef, MediaRef, UrlSet};
use crate::url::resolve_link;
use scraper::Html;
use url::Url;

/// Album links on a search results page
///
/// Only `a.album-link` anchors whose href starts with `album_prefix` count.
/// The result is deduplicated and sorted.
pub fn extract_album_links(html: &str, album_prefix: &str) -> Vec<AlbumRef> {
    let document = Html::parse_document(html);

    let links: UrlSet = select_attr(&document, "a.album-link[href]", "href")
        .into_iter()
        .filter(|href| href.starts_with(album_prefix))
        .collect();

    links.into_vec().into_iter().map(AlbumRef::new).collect()
}

/// Image URLs on an album page, from `div.img[data-src]`
///
/// Sources are resolved against the page's post-redirect URL.
pub fn extract_album_media(html: &str, page_url: &Url) -> Vec<MediaRef> {
    let document = Html::parse_document(html);

    let media: UrlSet = select_attr(&document, "div.img[data-src]", "data-src")
        .into_iter()
        .filter_map(|src| resolve_link(src, page_url))
        .collect();

    media.into_vec().into_iter().map(MediaRef::image).collect()
}
