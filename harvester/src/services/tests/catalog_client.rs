//! Tests for HttpCatalogClient against a local mock server

use std::time::Duration;

use serde_json::json;
use shared::{Category, FetchFailure};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::error::HarvesterError;
use crate::services::catalog_client::HttpCatalogClient;
use crate::traits::CatalogClient;

fn client_for(server: &MockServer) -> HttpCatalogClient {
    HttpCatalogClient::new(&format!("{}/api", server.uri()), Duration::from_secs(2)).unwrap()
}

#[test]
fn test_entity_url_has_trailing_slash() {
    let client = HttpCatalogClient::new("https://swapi.dev/api/", Duration::from_secs(1)).unwrap();
    assert_eq!(client.entity_url(Category::People, 4), "https://swapi.dev/api/people/4/");
    assert_eq!(client.entity_url(Category::Planets, 12), "https://swapi.dev/api/planets/12/");
}

#[test]
fn test_invalid_base_url_is_config_error() {
    let result = HttpCatalogClient::new("not a url", Duration::from_secs(1));
    assert!(matches!(result, Err(HarvesterError::ConfigError { .. })));
}

#[tokio::test]
async fn test_fetch_person() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/people/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Luke Skywalker",
            "height": "172",
            "mass": "77"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let entity = client_for(&server).fetch(Category::People, 1).await.unwrap();
    assert_eq!(entity.get("name"), Some(&json!("Luke Skywalker")));
    assert_eq!(entity.get("height"), Some(&json!("172")));
}

#[tokio::test]
async fn test_fetch_planet() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/planets/3/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Yavin IV",
            "terrain": "jungle, rainforests"
        })))
        .mount(&server)
        .await;

    let entity = client_for(&server).fetch(Category::Planets, 3).await.unwrap();
    assert_eq!(entity.get("terrain"), Some(&json!("jungle, rainforests")));
}

#[tokio::test]
async fn test_not_found_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/people/17/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found"})))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch(Category::People, 17).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(
        err,
        HarvesterError::UpstreamFetchError { category: Category::People, id: 17, .. }
    ));
}

#[tokio::test]
async fn test_server_error_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch(Category::Planets, 2).await.unwrap_err();
    match err {
        HarvesterError::UpstreamFetchError { reason: FetchFailure::ServerError(status), .. } => {
            assert!(status.contains("503"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_object_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Tatooine"])))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch(Category::Planets, 1).await.unwrap_err();
    assert!(matches!(
        err,
        HarvesterError::UpstreamFetchError { reason: FetchFailure::InvalidResponse(_), .. }
    ));
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch(Category::People, 1).await.unwrap_err();
    assert!(matches!(
        err,
        HarvesterError::UpstreamFetchError { reason: FetchFailure::InvalidResponse(_), .. }
    ));
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    // Reserve a free port, then release it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let base_url = format!("http://127.0.0.1:{port}/api");
    let client = HttpCatalogClient::new(&base_url, Duration::from_millis(500)).unwrap();

    let err = client.fetch(Category::People, 1).await.unwrap_err();
    assert!(matches!(
        err,
        HarvesterError::UpstreamFetchError { reason: FetchFailure::NetworkError(_), .. }
    ));
}
