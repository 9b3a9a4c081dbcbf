/// Path segment marking preview renditions rather than source assets
const THUMBNAIL_SEGMENT: &str = "/thumb/";

/// File extensions accepted for video sources
pub const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".m4v"];

/// Checks if a media URL points at a thumbnail
///
/// # Examples
///
/// ```
/// use gallery_trawl::url::is_thumbnail;
///
/// assert!(is_thumbnail("https://i-burger.bunkr.ru/thumb/abc.png"));
/// assert!(!is_thumbnail("https://i-burger.bunkr.ru/abc.png"));
/// ```
pub fn is_thumbnail(url: &str) -> bool {
    url.contains(THUMBNAIL_SEGMENT)
}

/// Checks if a URL contains `segment` as a whole path segment
///
/// The match is on `/{segment}/`, so `ann` does not match `/annie/`.
///
/// # Examples
///
/// ```
/// use gallery_trawl::url::has_path_segment;
///
/// assert!(has_path_segment("https://fapello.com/content/a/ann/1.jpg", "ann"));
/// assert!(!has_path_segment("https://fapello.com/content/a/annie/1.jpg", "ann"));
/// ```
pub fn has_path_segment(url: &str, segment: &str) -> bool {
    if segment.is_empty() {
        return false;
    }
    url.contains(&format!("/{}/", segment))
}

/// Checks if a URL ends in one of the accepted video extensions
pub fn has_video_extension(url: &str) -> bool {
    VIDEO_EXTENSIONS.iter().any(|ext| url.ends_with(ext))
}
