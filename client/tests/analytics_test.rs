//! Integration tests for the analytics endpoint and unauthenticated access.

use std::sync::Arc;

use mockito::{Matcher, Server};

use ll_client::{ApiClient, ClientConfig, ClientError, MemoryTokenStore, TokenPair};

fn client_for(server: &Server, store: Arc<MemoryTokenStore>) -> ApiClient {
    ApiClient::new(ClientConfig::new(server.url()), store).expect("client should build")
}

#[tokio::test]
async fn platform_analytics_returns_payload() {
    let mut server = Server::new_async().await;

    let analytics_mock = server
        .mock("GET", "/analytics/platform")
        .match_header("authorization", "Bearer T1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "success": true,
                "data": { "totalProjects": 128, "totalSimulations": 512 }
            }"#,
        )
        .expect(1)
        .create_async()
        .await;

    let store = Arc::new(MemoryTokenStore::with_pair(TokenPair::new("T1", "R1")));
    let client = client_for(&server, store);

    let data = client.platform_analytics().await.expect("fetch should succeed");

    analytics_mock.assert_async().await;
    assert_eq!(data["totalProjects"], 128);
    assert_eq!(data["totalSimulations"], 512);
}

#[tokio::test]
async fn no_stored_credentials_sends_no_auth_header_and_surfaces_401() {
    let mut server = Server::new_async().await;

    let analytics_mock = server
        .mock("GET", "/analytics/platform")
        .match_header("authorization", Matcher::Missing)
        .with_status(401)
        .expect(1)
        .create_async()
        .await;

    // No refresh credential stored, so no refresh call is made.
    let refresh_mock = server
        .mock("POST", "/auth/refresh")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server, Arc::new(MemoryTokenStore::new()));

    let err = client.platform_analytics().await.unwrap_err();

    analytics_mock.assert_async().await;
    refresh_mock.assert_async().await;

    assert!(err.is_unauthorized());
    // An empty error body is replaced with a generic message.
    assert!(err.to_string().contains("Request failed"));
}

#[tokio::test]
async fn envelope_flagging_failure_is_a_malformed_response() {
    let mut server = Server::new_async().await;

    let analytics_mock = server
        .mock("GET", "/analytics/platform")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "success": false }"#)
        .expect(1)
        .create_async()
        .await;

    let store = Arc::new(MemoryTokenStore::with_pair(TokenPair::new("T1", "R1")));
    let client = client_for(&server, store);

    let err = client.platform_analytics().await.unwrap_err();

    analytics_mock.assert_async().await;
    assert!(matches!(err, ClientError::MalformedResponse { .. }));
}

#[tokio::test]
async fn non_json_success_body_is_a_malformed_response() {
    let mut server = Server::new_async().await;

    let analytics_mock = server
        .mock("GET", "/analytics/platform")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .expect(1)
        .create_async()
        .await;

    let store = Arc::new(MemoryTokenStore::with_pair(TokenPair::new("T1", "R1")));
    let client = client_for(&server, store);

    let err = client.platform_analytics().await.unwrap_err();

    analytics_mock.assert_async().await;
    assert!(matches!(err, ClientError::MalformedResponse { .. }));
}
