use super::select_attr;
use crate::state::{MediaRef, UrlSet};
use crate::url::resolve_link;
use scraper::Html;
use url::Url;

/// Image URLs on an album page containing the media host fragment
///
/// An empty fragment matches nothing.
pub fn extract_images(html: &str, host_fragment: &str) -> Vec<MediaRef> {
    if host_fragment.is_empty() {
        return Vec::new();
    }

    let document = Html::parse_document(html);
    let images: UrlSet = select_attr(&document, "img[src]", "src")
        .into_iter()
        .filter(|src| src.contains(host_fragment))
        .collect();

    images.into_vec().into_iter().map(MediaRef::image).collect()
}

/// The next album page from `a[data-pagination="next"]`
///
/// Relative hrefs resolve against the site origin, not the current page.
pub fn extract_next(html: &str, site: &Url) -> Option<String> {
    let document = Html::parse_document(html);
    select_attr(&document, r#"a[data-pagination="next"][href]"#, "href")
        .into_iter()
        .next()
        .and_then(|href| resolve_link(href, site))
}
