use crate::common::{create_test_config, create_trawler, html_page};
use gallery_trawl::{AlbumRef, Source};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer};

#[tokio::test]
async fn test_album_pages_deduplicated() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/album/holiday"))
        .respond_with(html_page(&format!(
            r#"<img src="{0}/images/a.jpg">
               <img src="{0}/images/b.jpg">
               <img src="https://tracker.example/pixel.gif">
               <a data-pagination="next" href="/album/holiday/2">Next</a>"#,
            base_url
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/album/holiday/2"))
        .respond_with(html_page(&format!(
            r#"<img src="{0}/images/b.jpg">
               <img src="{0}/images/c.jpg">"#,
            base_url
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let trawler = create_trawler(create_test_config(&base_url));
    let discovery = trawler
        .discover(Source::Jpg5, &format!("{}/album/holiday/", base_url))
        .await;

    assert_eq!(
        discovery.albums,
        vec![AlbumRef::new(format!("{}/album/holiday", base_url))]
    );
    assert_eq!(
        discovery.media_urls(),
        vec![
            format!("{}/images/a.jpg", base_url).as_str(),
            format!("{}/images/b.jpg", base_url).as_str(),
            format!("{}/images/c.jpg", base_url).as_str(),
        ]
    );
}

#[tokio::test]
async fn test_walk_stops_when_no_new_media() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let same_page = format!(
        r#"<img src="{0}/images/a.jpg">
           <a data-pagination="next" href="/album/loop/{{}}">Next</a>"#,
        base_url
    );

    Mock::given(method("GET"))
        .and(path("/album/loop"))
        .respond_with(html_page(&same_page.replace("{}", "2")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/album/loop/2"))
        .respond_with(html_page(&same_page.replace("{}", "3")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/album/loop/3"))
        .respond_with(html_page(""))
        .expect(0)
        .mount(&mock_server)
        .await;

    let trawler = create_trawler(create_test_config(&base_url));
    let discovery = trawler.discover(Source::Jpg5, "loop").await;

    assert_eq!(discovery.media.len(), 1);
    assert_eq!(discovery.pages_fetched, 2);
}

#[tokio::test]
async fn test_walk_stops_on_empty_page() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/album/short"))
        .respond_with(html_page(&format!(
            r#"<img src="{}/images/a.jpg">
               <a data-pagination="next" href="/album/short/2">Next</a>"#,
            base_url
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/album/short/2"))
        .respond_with(html_page(
            r#"<p>nothing here</p><a data-pagination="next" href="/album/short/3">Next</a>"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/album/short/3"))
        .respond_with(html_page(""))
        .expect(0)
        .mount(&mock_server)
        .await;

    let trawler = create_trawler(create_test_config(&base_url));
    let discovery = trawler.discover(Source::Jpg5, "short").await;

    assert_eq!(discovery.media.len(), 1);
}
