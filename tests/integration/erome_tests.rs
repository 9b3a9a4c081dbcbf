use crate::common::{create_test_config, create_trawler, html_page};
use gallery_trawl::config::EmptyPagePolicy;
use gallery_trawl::{AlbumRef, MediaRef, Source};
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_search_then_album_end_to_end() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Search page 1 lists album A1, plus a link outside the album prefix
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "alice"))
        .and(query_param("page", "1"))
        .respond_with(html_page(&format!(
            r#"<a class="album-link" href="{0}/a/A1">A1</a>
               <a class="album-link" href="{0}/user/alice">profile</a>"#,
            base_url
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Page 2 is empty but still fetched
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("page", "2"))
        .respond_with(html_page("<p>No results</p>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/a/A1"))
        .respond_with(html_page(
            r#"<div class="img" data-src="/media/i1.jpg"></div>
               <div class="img" data-src="/media/i2.jpg"></div>"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let trawler = create_trawler(create_test_config(&base_url));
    let discovery = trawler.discover(Source::Erome, "alice").await;

    assert_eq!(discovery.albums, vec![AlbumRef::new(format!("{}/a/A1", base_url))]);
    assert_eq!(
        discovery.media,
        vec![
            MediaRef::image(format!("{}/media/i1.jpg", base_url)),
            MediaRef::image(format!("{}/media/i2.jpg", base_url)),
        ]
    );
    assert!(discovery.skipped.is_empty());
    assert_eq!(discovery.pages_fetched, 3);
}

#[tokio::test]
async fn test_no_albums_means_no_album_fetches() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(html_page("<p>No results</p>"))
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex("^/a/"))
        .respond_with(html_page(""))
        .expect(0)
        .mount(&mock_server)
        .await;

    let trawler = create_trawler(create_test_config(&mock_server.uri()));
    let discovery = trawler.discover(Source::Erome, "nobody").await;

    assert!(discovery.albums.is_empty());
    assert!(discovery.media.is_empty());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn test_same_album_on_two_pages_listed_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let listing = format!(r#"<a class="album-link" href="{}/a/Same">Same</a>"#, base_url);

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(html_page(&listing))
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/a/Same"))
        .respond_with(html_page(r#"<div class="img" data-src="/media/x.jpg"></div>"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let trawler = create_trawler(create_test_config(&base_url));
    let discovery = trawler.discover(Source::Erome, "alice").await;

    assert_eq!(discovery.albums.len(), 1);
    assert_eq!(discovery.media.len(), 1);
}

#[tokio::test]
async fn test_failed_album_is_skipped_others_survive() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("page", "1"))
        .respond_with(html_page(&format!(
            r#"<a class="album-link" href="{0}/a/Good">g</a>
               <a class="album-link" href="{0}/a/Broken">b</a>"#,
            base_url
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/a/Good"))
        .respond_with(html_page(r#"<div class="img" data-src="/media/ok.jpg"></div>"#))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/a/Broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let trawler = create_trawler(create_test_config(&base_url));
    let discovery = trawler.discover(Source::Erome, "alice").await;

    assert_eq!(discovery.albums.len(), 2);
    assert_eq!(
        discovery.media_urls(),
        vec![format!("{}/media/ok.jpg", base_url).as_str()]
    );
    assert!(discovery
        .skipped
        .iter()
        .any(|s| s.target == format!("{}/a/Broken", base_url)));
}

#[tokio::test]
async fn test_stop_at_first_empty_page() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("page", "1"))
        .respond_with(html_page(&format!(
            r#"<a class="album-link" href="{}/a/A1">A1</a>"#,
            base_url
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("page", "2"))
        .respond_with(html_page(""))
        .expect(1)
        .mount(&mock_server)
        .await;

    for page in ["3", "4", "5"] {
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("page", page))
            .respond_with(html_page(""))
            .expect(0)
            .mount(&mock_server)
            .await;
    }

    let mut config = create_test_config(&base_url);
    config.crawler.max_pages = 5;
    config.crawler.empty_page_policy = EmptyPagePolicy::StopAtFirstEmpty;

    let trawler = create_trawler(config);
    let discovery = trawler.search_albums(Source::Erome, "alice").await;

    assert_eq!(discovery.albums, vec![AlbumRef::new(format!("{}/a/A1", base_url))]);
}
