use crate::common::{create_test_config, create_trawler, html_page};
use gallery_trawl::config::Config;
use gallery_trawl::{run_discovery, ProgressSink, Source, TrawlError};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer};

#[tokio::test]
async fn test_empty_seed_makes_no_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(html_page(""))
        .expect(0)
        .mount(&mock_server)
        .await;

    let trawler = create_trawler(create_test_config(&mock_server.uri()));
    for source in Source::all() {
        for seed in ["", "   ", "\t\n"] {
            let discovery = trawler.discover(source, seed).await;
            assert!(discovery.is_empty());
            assert!(discovery.skipped.is_empty());

            let albums = trawler.search_albums(source, seed).await;
            assert!(albums.is_empty());
        }
    }
}

#[tokio::test]
async fn test_progress_lines_reach_the_sink() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/album/x"))
        .respond_with(html_page(&format!(r#"<img src="{}/images/a.jpg">"#, base_url)))
        .mount(&mock_server)
        .await;

    let (sink, mut rx) = ProgressSink::channel();
    let trawler = create_trawler(create_test_config(&base_url)).with_progress(sink);
    let discovery = trawler.discover(Source::Jpg5, "x").await;
    drop(trawler);

    let mut lines = Vec::new();
    while let Some(line) = rx.recv().await {
        lines.push(line);
    }

    assert_eq!(discovery.media.len(), 1);
    assert!(lines.iter().any(|l| l.contains("found 1 media in 1 albums")));
}

#[tokio::test]
async fn test_run_discovery_rejects_invalid_config() {
    let mut config = Config::default();
    config.crawler.max_concurrent_fetches = 0;

    let result = run_discovery(config, Source::Erome, "alice").await;
    assert!(matches!(result, Err(TrawlError::Config(_))));
}

#[tokio::test]
async fn test_run_discovery_end_to_end() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/bob/"))
        .respond_with(html_page(&format!(
            r#"<img src="{}/content/b/o/bob/1/a.jpg">"#,
            base_url
        )))
        .mount(&mock_server)
        .await;

    let discovery = run_discovery(create_test_config(&base_url), Source::Fapello, " bob ")
        .await
        .unwrap();

    assert_eq!(discovery.albums.len(), 1);
    assert_eq!(discovery.media.len(), 1);
}
