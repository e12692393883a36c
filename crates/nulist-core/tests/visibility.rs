// SPDX-License-Identifier: Apache-2.0

//! Wire-level tests for gallery visibility requests.
//!
//! Runs the real HTTP transport against a local mock gallery and asserts
//! the verb, path, query parameter, and empty-body handling on the wire.

use secrecy::SecretString;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nulist_core::{GalleryClient, GalleryConfig, NulistError};

fn client_for(gallery_url: &str) -> GalleryClient {
    let config = GalleryConfig {
        url: gallery_url.to_string(),
        api_key: None,
        timeout_seconds: 5,
    };
    GalleryClient::new(&config).expect("client should build")
}

fn key(s: &str) -> SecretString {
    SecretString::new(s.to_string().into())
}

#[tokio::test]
async fn hide_sends_delete_with_empty_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/Package/Foo/1.0.0"))
        .and(query_param("apiKey", "KEY123"))
        .and(header("content-length", "0"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let result = client.hide("Foo", "1.0.0", &key("KEY123")).await.unwrap();

    assert!(result.succeeded);
    assert_eq!(result.status, 200);
    assert_eq!(
        result.message,
        "Package 'Foo' Version '1.0.0' has been hidden (unlisted)."
    );
}

#[tokio::test]
async fn show_sends_post_with_empty_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/Package/Foo/1.0.0"))
        .and(query_param("apiKey", "KEY123"))
        .and(header("content-length", "0"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let result = client.show("Foo", "1.0.0", &key("KEY123")).await.unwrap();

    assert!(result.succeeded);
    assert_eq!(
        result.message,
        "Package 'Foo' Version '1.0.0' has been shown (listed)."
    );
}

#[tokio::test]
async fn loose_action_string_reaches_the_wire_as_delete() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/Package/Bar/2.1.0"))
        .and(query_param("apiKey", "SECRET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let result = client
        .set_visibility("Hide", "Bar", "2.1.0", &key("SECRET"))
        .await
        .unwrap();

    assert!(result.succeeded);
}

#[tokio::test]
async fn non_success_status_is_data_not_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/Package/Missing/9.9.9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let result = client
        .hide("Missing", "9.9.9", &key("KEY123"))
        .await
        .unwrap();

    assert!(!result.succeeded);
    assert_eq!(result.status, 404);
    assert!(result.message.contains("404"));
}

#[tokio::test]
async fn forbidden_status_is_reported_without_throwing() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/Package/Foo/1.0.0"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let result = client.show("Foo", "1.0.0", &key("WRONG")).await.unwrap();

    assert!(!result.succeeded);
    assert_eq!(result.status, 403);
}

#[tokio::test]
async fn connection_failure_propagates_as_network_error() {
    // Bind a listener to grab a free port, then drop it so nothing answers.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = client_for(&format!("http://127.0.0.1:{port}"));
    let err = client
        .hide("Foo", "1.0.0", &key("KEY123"))
        .await
        .unwrap_err();

    assert!(matches!(err, NulistError::Network(_)));
}

#[tokio::test]
async fn validation_failure_never_reaches_the_gallery() {
    let mock_server = MockServer::start().await;
    // No mounted mocks: any request would 404, and `expect(0)` on a catch-all
    // verifies nothing arrives at all.
    Mock::given(method("DELETE"))
        .and(path("/api/v2/Package/Foo/1.0.0"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let err = client.hide("Foo", "1.0.0", &key("")).await.unwrap_err();

    assert!(matches!(
        err,
        NulistError::MissingParameter { name: "api key" }
    ));
}
