//! Integration tests for the detection chain
//!
//! These tests use wiremock to stand in for the target website and run the
//! production strategy chain against it end-to-end.

use sitemap_detector::config::Config;
use sitemap_detector::strategy::{DetectionStrategy, RobotsTxtStrategy, WellKnownStrategy};
use sitemap_detector::SitemapDetector;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Address on which nothing is expected to listen
const UNREACHABLE: &str = "http://127.0.0.1:1";

fn create_detector() -> SitemapDetector {
    SitemapDetector::from_config(&Config::default()).expect("Failed to build detector")
}

async fn mount_status(server: &MockServer, route: &str, status: u16, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_robots_txt_lists_sitemap() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "User-agent: *\nSitemap: https://example.com/sitemap.xml\n",
        ))
        .mount(&mock_server)
        .await;

    let strategy = RobotsTxtStrategy::new(reqwest::Client::new());
    let result = strategy.detect(&mock_server.uri()).await;

    assert_eq!(result, vec!["https://example.com/sitemap.xml"]);
}

#[tokio::test]
async fn test_robots_txt_resolved_against_origin() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Sitemap: /nested.xml"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let strategy = RobotsTxtStrategy::new(reqwest::Client::new());
    let result = strategy
        .detect(&format!("{}/deep/page.html?q=1", mock_server.uri()))
        .await;

    assert_eq!(result, vec!["/nested.xml"]);
}

#[tokio::test]
async fn test_robots_txt_without_directive_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow: /"))
        .mount(&mock_server)
        .await;

    let strategy = RobotsTxtStrategy::new(reqwest::Client::new());
    assert!(strategy.detect(&mock_server.uri()).await.is_empty());
}

#[tokio::test]
async fn test_robots_hit_short_circuits_well_known() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("Sitemap: https://example.com/listed.xml"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    // None of the second strategy's requests may be issued
    mount_status(&mock_server, "/sitemap.xml", 200, 0).await;
    mount_status(&mock_server, "/sitemap_index.xml", 200, 0).await;
    mount_status(&mock_server, "/sitemap1.xml", 200, 0).await;
    mount_status(&mock_server, "/", 200, 0).await;

    let detector = create_detector();
    let result = detector.detect_sitemap(&mock_server.uri()).await;

    assert_eq!(result, vec!["https://example.com/listed.xml"]);
}

#[tokio::test]
async fn test_robots_404_falls_back_to_well_known_path() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_status(&mock_server, "/robots.txt", 404, 1).await;
    mount_status(&mock_server, "/sitemap.xml", 200, 1).await;
    mount_status(&mock_server, "/sitemap_index.xml", 404, 1).await;
    mount_status(&mock_server, "/sitemap1.xml", 404, 1).await;

    let detector = create_detector();
    let result = detector.detect_sitemap(&base_url).await;

    assert_eq!(result, vec![format!("{}/sitemap.xml", base_url)]);
}

#[tokio::test]
async fn test_link_tag_found_when_paths_missing() {
    let mock_server = MockServer::start().await;

    mount_status(&mock_server, "/robots.txt", 404, 1).await;
    mount_status(&mock_server, "/sitemap.xml", 404, 1).await;
    mount_status(&mock_server, "/sitemap_index.xml", 404, 1).await;
    mount_status(&mock_server, "/sitemap1.xml", 404, 1).await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(
                    r#"<html><head><title>Home</title><link rel="sitemap" href="/map.xml"></head><body></body></html>"#,
                )
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let detector = create_detector();
    let result = detector.detect_sitemap(&format!("{}/", mock_server.uri())).await;

    assert_eq!(result, vec!["/map.xml"]);
}

#[tokio::test]
async fn test_all_hits_from_well_known_strategy_are_combined() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_status(&mock_server, "/sitemap.xml", 200, 1).await;
    mount_status(&mock_server, "/sitemap1.xml", 200, 1).await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<link rel="sitemap" href="https://cdn.example.com/a.xml"><link rel="sitemap" href="/b.xml">"#,
        ))
        .mount(&mock_server)
        .await;

    let strategy = WellKnownStrategy::new(reqwest::Client::new());
    let result = strategy.detect(&format!("{}/", base_url)).await;

    assert_eq!(
        result,
        vec![
            format!("{}/sitemap.xml", base_url),
            format!("{}/sitemap1.xml", base_url),
            "https://cdn.example.com/a.xml".to_string(),
            "/b.xml".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_unreachable_site_yields_empty() {
    let detector = create_detector();
    let result = detector.detect_sitemap(UNREACHABLE).await;
    assert!(result.is_empty());
}

#[tokio::test]
async fn test_repeat_detection_uses_cache() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Sitemap: /cached.xml"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let detector = create_detector();
    let first = detector.detect_sitemap(&mock_server.uri()).await;
    let second = detector.detect_sitemap(&mock_server.uri()).await;

    assert_eq!(first, vec!["/cached.xml"]);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_empty_answer_is_cached() {
    let mock_server = MockServer::start().await;

    mount_status(&mock_server, "/robots.txt", 404, 1).await;
    mount_status(&mock_server, "/sitemap.xml", 404, 1).await;
    mount_status(&mock_server, "/sitemap_index.xml", 404, 1).await;
    mount_status(&mock_server, "/sitemap1.xml", 404, 1).await;
    mount_status(&mock_server, "/", 404, 1).await;

    let detector = create_detector();
    assert!(detector.detect_sitemap(&mock_server.uri()).await.is_empty());
    assert!(detector.detect_sitemap(&mock_server.uri()).await.is_empty());
}
