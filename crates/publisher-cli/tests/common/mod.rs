//! Shared fixtures: a mock registry, a descriptor on disk, and a token file.

#![allow(dead_code)]

use std::path::PathBuf;

use publisher_config::{AuthConfig, PublisherConfig};
use publisher_core::schema::CURRENT_SCHEMA_URL;
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const DEPRECATED_SCHEMA: &str =
    "https://static.modelcontextprotocol.io/schemas/2025-07-09/server.schema.json";

pub struct Workspace {
    pub dir: TempDir,
    pub server_file: PathBuf,
    pub config: PublisherConfig,
}

impl Workspace {
    /// Descriptor written to `server.json`; token file path configured but
    /// not created.
    pub fn new(descriptor: &Value) -> Self {
        let dir = TempDir::new().expect("tmp dir");
        let server_file = dir.path().join("server.json");
        std::fs::write(
            &server_file,
            serde_json::to_vec_pretty(descriptor).expect("encode descriptor"),
        )
        .expect("write server.json");

        let config = PublisherConfig {
            auth: AuthConfig {
                token_file: dir
                    .path()
                    .join(".mcp_publisher_token")
                    .to_string_lossy()
                    .into_owned(),
                ..Default::default()
            },
            ..Default::default()
        };

        Self {
            dir,
            server_file,
            config,
        }
    }

    /// Record a login for `registry` with `token`.
    pub fn with_token(self, registry: &str, token: &str) -> Self {
        std::fs::write(
            &self.config.auth.token_file,
            json!({"token": token, "registry": registry}).to_string(),
        )
        .expect("write token");
        self
    }
}

pub fn descriptor(schema: &str, version: &str) -> Value {
    json!({
        "$schema": schema,
        "name": "com.example/test-server",
        "description": "A test server",
        "version": version
    })
}

pub fn current_descriptor() -> Value {
    descriptor(CURRENT_SCHEMA_URL, "1.0.0")
}

pub fn published_echo() -> ResponseTemplate {
    ResponseTemplate::new(201).set_body_json(json!({
        "server": {"name": "com.example/test-server", "version": "1.0.0"}
    }))
}

pub fn publish_rejected(status: u16) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_string(
        r#"{"message":"Failed to publish server, invalid schema: call /validate for details"}"#,
    )
}

pub fn validation(valid: bool, issues: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"valid": valid, "issues": issues}))
}

pub fn deprecated_warning() -> Value {
    json!([{
        "type": "semantic",
        "path": "schema",
        "message": "schema version 2025-07-09 is not the current version",
        "severity": "warning",
        "reference": "schema-version-deprecated"
    }])
}

pub async fn mount_publish(server: &MockServer, response: ResponseTemplate, calls: u64) {
    Mock::given(method("POST"))
        .and(path("/v0/publish"))
        .respond_with(response)
        .expect(calls)
        .named("publish")
        .mount(server)
        .await;
}

pub async fn mount_validate(server: &MockServer, response: ResponseTemplate, calls: u64) {
    Mock::given(method("POST"))
        .and(path("/v0/validate"))
        .respond_with(response)
        .expect(calls)
        .named("validate")
        .mount(server)
        .await;
}

pub fn output(buffer: &[u8]) -> String {
    String::from_utf8_lossy(buffer).into_owned()
}
