use super::*;
use serde_json::json;
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> (ApiClient, String) {
    let client = ApiClient::new(Some("test-key".to_string()), RetryPolicy::fixed_count(3));
    (client, format!("{}/process", server.uri()))
}

#[test]
fn test_from_config_uses_max_retries() {
    let config = PluginConfig {
        max_retries: 5,
        ..Default::default()
    };
    let client = ApiClient::from_config(&config).unwrap();
    assert_eq!(client.policy().max_attempts, 5);
}

#[tokio::test]
async fn test_post_json_success() {
    let server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/process"))
        .and(matchers::header("Authorization", "Bearer test-key"))
        .and(matchers::header("Content-Type", "application/json"))
        .and(matchers::body_json(json!({"input": "x"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, endpoint) = client(&server);
    let body = client.post_json(&endpoint, &json!({"input": "x"})).await.unwrap();
    assert_eq!(body, json!({"ok": true}));
}

#[tokio::test]
async fn test_post_json_fails_twice_then_succeeds() {
    let server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Error"))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"attempt": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, endpoint) = client(&server);
    let body = client.post_json(&endpoint, &json!({})).await.unwrap();
    assert_eq!(body, json!({"attempt": 3}));
}

#[tokio::test]
async fn test_post_json_always_failing_stops_after_max_attempts() {
    let server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(3)
        .mount(&server)
        .await;

    let (client, endpoint) = client(&server);
    let err = client.post_json(&endpoint, &json!({})).await.unwrap_err();
    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "unavailable");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_post_json_without_api_key_sends_no_auth() {
    let server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(None, RetryPolicy::none());
    client
        .post_json(&format!("{}/x", server.uri()), &json!({}))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_post_json_invalid_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = ApiClient::new(None, RetryPolicy::none());
    let err = client
        .post_json(&format!("{}/x", server.uri()), &json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_post_json_connection_refused() {
    let client = ApiClient::new(None, RetryPolicy::fixed_count(2));
    let err = client
        .post_json("http://127.0.0.1:1/unreachable", &json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Connection(_)));
}
