use gallery_trawl::config::Config;
use gallery_trawl::Trawler;
use wiremock::ResponseTemplate;

/// Creates a test configuration with every source pointed at `base_url`
pub fn create_test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.crawler.max_pages = 2;
    config.crawler.max_concurrent_fetches = 4;
    config.crawler.request_timeout_secs = 5;
    config.crawler.connect_timeout_secs = 2;
    config.user_agent.value = "TestBot/1.0".to_string();

    config.sources.erome.base_url = base_url.to_string();
    config.sources.bunkr.search_url = base_url.to_string();
    config.sources.bunkr.album_url = base_url.to_string();
    config.sources.fapello.base_url = base_url.to_string();
    config.sources.fapello.cdn_url = base_url.to_string();
    config.sources.jpg5.base_url = base_url.to_string();
    config
}

pub fn create_trawler(config: Config) -> Trawler {
    Trawler::new(config).expect("Failed to create trawler")
}

/// A 200 HTML response wrapping `body`
pub fn html_page(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><body>{}</body></html>", body))
        .insert_header("content-type", "text/html")
}
