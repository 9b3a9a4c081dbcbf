use super::select_attr;
use crate::config::FapelloConfig;
use crate::state::{MediaRef, UrlSet};
use crate::url::{has_path_segment, has_video_extension, resolve_link};
use scraper::Html;
use url::Url;

/// Which media on a profile page belong to the profile's owner
///
/// Profile pages also show other accounts' content (suggestions, ads), so an
/// image only counts if it lives under the content prefix *and* its path
/// carries the owner's username as a segment.
#[derive(Debug, Clone)]
pub struct ProfileFilter {
    username: String,
    image_prefix: String,
    video_prefix: String,
}

impl ProfileFilter {
    pub fn new(username: impl Into<String>, config: &FapelloConfig) -> Self {
        Self {
            username: username.into(),
            image_prefix: config.image_prefix(),
            video_prefix: config.video_prefix(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn accepts_image(&self, src: &str) -> bool {
        src.starts_with(&self.image_prefix) && has_path_segment(src, &self.username)
    }

    pub fn accepts_video(&self, src: &str) -> bool {
        src.starts_with(&self.video_prefix) && has_video_extension(src)
    }
}

/// Images and videos on one profile page that pass `filter`
pub fn extract_media(html: &str, filter: &ProfileFilter) -> Vec<MediaRef> {
    let document = Html::parse_document(html);

    let images: UrlSet = select_attr(&document, "img[src]", "src")
        .into_iter()
        .filter(|src| filter.accepts_image(src))
        .collect();
    let videos: UrlSet = select_attr(&document, r#"source[type="video/mp4"][src]"#, "src")
        .into_iter()
        .filter(|src| filter.accepts_video(src))
        .collect();

    images
        .into_vec()
        .into_iter()
        .map(MediaRef::image)
        .chain(videos.into_vec().into_iter().map(MediaRef::video))
        .collect()
}

/// The infinite-scroll continuation link, resolved against the page URL
pub fn extract_next(html: &str, page_url: &Url) -> Option<String> {
    let document = Html::parse_document(html);
    select_attr(&document, "div#next_page a[href]", "href")
        .into_iter()
        .next()
        .and_then(|href| resolve_link(href, page_url))
}
