//! Registry client tests against a mock registry.

use pretty_assertions::assert_eq;
use publisher_core::{IssueSeverity, ServerDescriptor, schema::CURRENT_SCHEMA_URL};
use publisher_registry::{RegistryClient, RegistryEndpoint, RegistryError};
use serde_json::json;
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn descriptor() -> ServerDescriptor {
    ServerDescriptor {
        schema: CURRENT_SCHEMA_URL.into(),
        name: "com.example/test-server".into(),
        description: "A test server".into(),
        version: "1.0.0".into(),
        ..Default::default()
    }
}

fn client() -> RegistryClient {
    RegistryClient::new().expect("client builds")
}

#[tokio::test]
async fn publish_sends_bearer_token_and_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v0/publish"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "server": {"name": "com.example/test-server", "version": "1.0.0"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = RegistryEndpoint::new(server.uri()).with_token("test-token");
    let response = client().publish(&endpoint, &descriptor()).await.unwrap();

    assert_eq!(response.server.name, "com.example/test-server");
    assert_eq!(response.server.version, "1.0.0");
}

#[tokio::test]
async fn publish_accepts_200() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v0/publish"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "server": {"name": "com.example/test-server", "version": "1.0.0"}
        })))
        .mount(&server)
        .await;

    let endpoint = RegistryEndpoint::new(server.uri()).with_token("t");
    assert!(client().publish(&endpoint, &descriptor()).await.is_ok());
}

#[tokio::test]
async fn publish_422_carries_status_and_body() {
    let server = MockServer::start().await;
    let body = r#"{"message":"Failed to publish server, invalid schema: call /validate for details"}"#;
    Mock::given(method("POST"))
        .and(path("/v0/publish"))
        .respond_with(ResponseTemplate::new(422).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = RegistryEndpoint::new(server.uri()).with_token("t");
    let err = client().publish(&endpoint, &descriptor()).await.unwrap_err();

    assert_eq!(err.status(), Some(422));
    match err {
        RegistryError::Rejected { body: raw, .. } => assert_eq!(raw, body),
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn publish_undecodable_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v0/publish"))
        .respond_with(ResponseTemplate::new(201).set_body_string("created"))
        .mount(&server)
        .await;

    let endpoint = RegistryEndpoint::new(server.uri()).with_token("t");
    let err = client().publish(&endpoint, &descriptor()).await.unwrap_err();
    assert!(matches!(err, RegistryError::Decode(_)));
}

#[tokio::test]
async fn validate_is_anonymous_and_decodes_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v0/validate"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "valid": false,
            "issues": [{
                "type": "semantic",
                "path": "version",
                "message": "version must be a specific version, not a range",
                "severity": "error",
                "reference": "semantic-version-range"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = RegistryEndpoint::new(format!("{}/", server.uri()));
    let result = client().validate(&endpoint, &descriptor()).await.unwrap();

    assert!(!result.valid);
    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].severity, IssueSeverity::Error);

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn validate_non_200_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v0/validate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let endpoint = RegistryEndpoint::new(server.uri());
    let err = client().validate(&endpoint, &descriptor()).await.unwrap_err();
    assert_eq!(err.to_string(), "server returned status 500: boom");
}

#[tokio::test]
async fn validate_twice_sends_identical_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v0/validate"))
        .and(header_exists("content-type"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"valid": true, "issues": []})))
        .expect(2)
        .mount(&server)
        .await;

    let mut descriptor = descriptor();
    descriptor
        .extra
        .insert("remotes".into(), json!([{"type": "streamable-http", "url": "https://example.com/mcp"}]));
    descriptor.extra.insert("_meta".into(), json!({"b": 1, "a": 2}));

    let endpoint = RegistryEndpoint::new(server.uri());
    let first = client().validate(&endpoint, &descriptor).await.unwrap();
    let second = client().validate(&endpoint, &descriptor).await.unwrap();
    assert_eq!(first, second);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].body, requests[1].body);

    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent["remotes"][0]["type"], "streamable-http");
    assert_eq!(sent["$schema"], CURRENT_SCHEMA_URL);
}

#[tokio::test]
async fn unreachable_registry_is_transport_error() {
    // Port 9 (discard) on localhost is not expected to accept HTTP.
    let endpoint = RegistryEndpoint::new("http://127.0.0.1:9");
    let err = client().validate(&endpoint, &descriptor()).await.unwrap_err();
    assert!(matches!(err, RegistryError::Http(_)));
    assert_eq!(err.status(), None);
}
