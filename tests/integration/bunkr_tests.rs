use crate::common::{create_test_config, create_trawler, html_page};
use gallery_trawl::{MediaRef, SkipReason, Source};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts a two-page search index and three albums behind it
///
/// `albums_fetched` sets whether album and media pages must be requested once
/// or never.
async fn mount_bunkr_site(mock_server: &MockServer, albums_fetched: bool) {
    let base_url = mock_server.uri();
    let hits: u64 = if albums_fetched { 1 } else { 0 };

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("search", "alice"))
        .and(query_param("page", "1"))
        .respond_with(html_page(&format!(
            r#"<a href="{0}/a/one"><span class="truncate">One</span></a>
               <a href="{0}/a/two"><span class="truncate">Two</span></a>
               <a class="btn btn-sm btn-main" href="?search=alice&page=2">Next</a>"#,
            base_url
        )))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("search", "alice"))
        .and(query_param("page", "2"))
        .respond_with(html_page(&format!(
            r#"<a href="{0}/a/three"><span class="truncate">Three</span></a>"#,
            base_url
        )))
        .mount(mock_server)
        .await;

    // Album one: a relative and an absolute media page link
    Mock::given(method("GET"))
        .and(path("/a/one"))
        .respond_with(html_page(&format!(
            r#"<a aria-label="download" href="/f/photo">dl</a>
               <a aria-label="download" href="{}/f/thumbnail">dl</a>"#,
            base_url
        )))
        .expect(hits)
        .mount(mock_server)
        .await;

    // Album two repeats a media page from album one
    Mock::given(method("GET"))
        .and(path("/a/two"))
        .respond_with(html_page(
            r#"<a aria-label="download" href="/f/photo">dl</a>
               <a aria-label="download" href="/f/gone">dl</a>"#,
        ))
        .expect(hits)
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/a/three"))
        .respond_with(html_page("<p>empty album</p>"))
        .expect(hits)
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/f/photo"))
        .respond_with(html_page(&format!(
            r#"<img class="w-full object-cover" src="{}/files/photo.jpg">"#,
            base_url
        )))
        .expect(hits)
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/f/thumbnail"))
        .respond_with(html_page(&format!(
            r#"<img class="object-cover" src="{}/thumb/small.jpg">"#,
            base_url
        )))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/f/gone"))
        .respond_with(html_page(&format!(
            r#"<img class="object-cover" src="{}/files/gone.jpg">"#,
            base_url
        )))
        .mount(mock_server)
        .await;

    Mock::given(method("HEAD"))
        .and(path("/files/photo.jpg"))
        .respond_with(ResponseTemplate::new(200))
        .mount(mock_server)
        .await;

    Mock::given(method("HEAD"))
        .and(path("/files/gone.jpg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_gallery_discovery_resolves_media_pages() {
    let mock_server = MockServer::start().await;
    mount_bunkr_site(&mock_server, true).await;
    let base_url = mock_server.uri();

    let trawler = create_trawler(create_test_config(&base_url));
    let discovery = trawler.discover(Source::Bunkr, "alice").await;

    assert_eq!(
        discovery.album_urls(),
        vec![
            format!("{}/a/one", base_url).as_str(),
            format!("{}/a/three", base_url).as_str(),
            format!("{}/a/two", base_url).as_str(),
        ]
    );

    // Thumbnail filtered, unreachable asset skipped, duplicate page resolved once
    assert_eq!(
        discovery.media,
        vec![MediaRef::image(format!("{}/files/photo.jpg", base_url))]
    );

    let reasons: Vec<&SkipReason> = discovery.skipped.iter().map(|s| &s.reason).collect();
    assert!(reasons.iter().any(|r| matches!(r, SkipReason::Filtered(_))));
    assert!(reasons.iter().any(|r| matches!(r, SkipReason::Unreachable(_))));
}

#[tokio::test]
async fn test_gallery_walk_stops_without_next_button() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("page", "1"))
        .respond_with(html_page(&format!(r#"<a href="{}/a/only">only</a>"#, base_url)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("page", "2"))
        .respond_with(html_page(""))
        .expect(0)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/a/only"))
        .respond_with(html_page(""))
        .mount(&mock_server)
        .await;

    let trawler = create_trawler(create_test_config(&base_url));
    let discovery = trawler.discover(Source::Bunkr, "alice").await;

    assert_eq!(discovery.albums.len(), 1);
    assert!(discovery.media.is_empty());
}

#[tokio::test]
async fn test_album_listing_with_titles() {
    let mock_server = MockServer::start().await;
    mount_bunkr_site(&mock_server, false).await;
    let base_url = mock_server.uri();

    let trawler = create_trawler(create_test_config(&base_url));
    let discovery = trawler.search_albums(Source::Bunkr, "alice").await;

    let titled: Vec<(String, Option<String>)> = discovery
        .albums
        .iter()
        .map(|a| (a.url.clone(), a.title.clone()))
        .collect();

    assert_eq!(
        titled,
        vec![
            (format!("{}/a/one", base_url), Some("One".to_string())),
            (format!("{}/a/three", base_url), Some("Three".to_string())),
            (format!("{}/a/two", base_url), Some("Two".to_string())),
        ]
    );
    assert!(discovery.media.is_empty());
}

#[tokio::test]
async fn test_album_url_seed_listed_without_search() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(query_param("page", "1"))
        .respond_with(html_page(""))
        .expect(0)
        .mount(&mock_server)
        .await;

    let trawler = create_trawler(create_test_config(&base_url));
    let discovery = trawler
        .search_albums(Source::Bunkr, &format!("{}/a/Xy-12", base_url))
        .await;

    assert_eq!(discovery.album_urls(), vec![format!("{}/a/Xy-12", base_url).as_str()]);
    assert_eq!(discovery.pages_fetched, 0);

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}
