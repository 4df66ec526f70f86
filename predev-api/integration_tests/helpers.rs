// Shared fixtures for the wiremock-backed integration tests

use predev_api::PredevClient;

use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test_api_key";

/// Start a mock service and a client pointed at it.
pub async fn start_mock_api() -> (MockServer, PredevClient) {
    let server = MockServer::start().await;
    let client = PredevClient::with_base_url(TEST_API_KEY, &server.uri())
        .expect("client should build against the mock server");
    (server, client)
}

/// A finished generation with both artifact URLs populated.
pub fn completed_spec(spec_id: &str) -> Value {
    json!({
        "_id": spec_id,
        "createdAt": "2025-11-02T10:00:00Z",
        "endpoint": "fast_spec",
        "input": "Build a todo app",
        "status": "completed",
        "success": true,
        "codingAgentSpecUrl": format!("https://pre.dev/s/{spec_id}/agent"),
        "humanSpecUrl": format!("https://pre.dev/s/{spec_id}/human"),
        "processingTime": 31.7
    })
}

/// An in-flight generation, as the status endpoint reports it.
pub fn processing_spec(spec_id: &str) -> Value {
    json!({
        "specId": spec_id,
        "status": "processing",
        "progress": "Drafting architecture"
    })
}

/// The immediate body of an async-mode submission.
pub fn pending_handle(spec_id: &str) -> Value {
    json!({
        "specId": spec_id,
        "status": "pending"
    })
}

/// One page of list/search results.
pub fn spec_page(total: u64, has_more: bool) -> Value {
    json!({
        "specs": [completed_spec("spec_1")],
        "total": total,
        "hasMore": has_more
    })
}
