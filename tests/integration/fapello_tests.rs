use crate::common::{create_test_config, create_trawler, html_page};
use gallery_trawl::{AlbumRef, MediaKind, SkipReason, Source};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_profile_media_scoped_to_username() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/alice/"))
        .respond_with(html_page(&format!(
            r#"<img src="{0}/content/a/l/alice/1000/alice_0001.jpg">
               <img src="{0}/content/o/t/otheruser/1000/x.jpg">
               <video><source type="video/mp4" src="{0}/content/a/l/alice/1000/clip.mp4"></video>
               <video><source type="video/mp4" src="{0}/content/a/l/alice/1000/clip.mov"></video>"#,
            base_url
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let trawler = create_trawler(create_test_config(&base_url));
    let discovery = trawler.discover(Source::Fapello, "alice").await;

    assert_eq!(discovery.albums, vec![AlbumRef::new(format!("{}/alice/", base_url))]);

    let images: Vec<&str> = discovery.images().map(|m| m.url.as_str()).collect();
    assert_eq!(
        images,
        vec![format!("{}/content/a/l/alice/1000/alice_0001.jpg", base_url).as_str()]
    );

    let videos: Vec<&str> = discovery.videos().map(|m| m.url.as_str()).collect();
    assert_eq!(
        videos,
        vec![format!("{}/content/a/l/alice/1000/clip.mp4", base_url).as_str()]
    );
}

#[tokio::test]
async fn test_infinite_scroll_cycle_terminates() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/alice/"))
        .respond_with(html_page(&format!(
            r#"<img src="{0}/content/alice/1.jpg">
               <div id="next_page"><a href="/ajax/alice/page-2/">more</a></div>"#,
            base_url
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Page 2 points back at page 1
    Mock::given(method("GET"))
        .and(path("/ajax/alice/page-2/"))
        .respond_with(html_page(&format!(
            r#"<img src="{0}/content/alice/2.jpg">
               <img src="{0}/content/alice/1.jpg">
               <div id="next_page"><a href="/alice/">more</a></div>"#,
            base_url
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let trawler = create_trawler(create_test_config(&base_url));
    let discovery = trawler
        .discover(Source::Fapello, &format!("{}/alice/", base_url))
        .await;

    assert_eq!(discovery.media.len(), 2);
    assert!(discovery.media.iter().all(|m| m.kind == MediaKind::Image));
    assert_eq!(discovery.pages_fetched, 2);
}

#[tokio::test]
async fn test_failure_mid_walk_keeps_earlier_pages() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/alice/"))
        .respond_with(html_page(&format!(
            r#"<img src="{0}/content/alice/1.jpg">
               <div id="next_page"><a href="/ajax/alice/page-2/">more</a></div>"#,
            base_url
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/ajax/alice/page-2/"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let trawler = create_trawler(create_test_config(&base_url));
    let discovery = trawler.discover(Source::Fapello, "alice").await;

    assert_eq!(
        discovery.media_urls(),
        vec![format!("{}/content/alice/1.jpg", base_url).as_str()]
    );
    assert_eq!(discovery.skipped.len(), 1);
    assert_eq!(discovery.skipped[0].reason, SkipReason::HttpStatus(503));
}

#[tokio::test]
async fn test_album_url_without_username_is_malformed() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .respond_with(html_page(""))
        .expect(0)
        .mount(&mock_server)
        .await;

    let trawler = create_trawler(create_test_config(&base_url));
    let discovery = trawler.discover(Source::Fapello, &format!("{}/", base_url)).await;

    assert!(discovery.media.is_empty());
    assert!(matches!(
        discovery.skipped[0].reason,
        SkipReason::Malformed(_)
    ));
}
