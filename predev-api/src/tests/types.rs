// Unit tests for wire-shape deserialization

use crate::types::{AsyncSpecHandle, SpecEndpoint, SpecListPage, SpecResponse, SpecStatus};

use serde_json::json;

// ============================================
// UNIT TESTS: Enum Spellings
// ============================================

#[test]
fn given_status_values_when_serialized_then_lowercase_spellings() {
    assert_eq!(serde_json::to_string(&SpecStatus::Pending).unwrap(), "\"pending\"");
    assert_eq!(
        serde_json::to_string(&SpecStatus::Processing).unwrap(),
        "\"processing\""
    );
    assert_eq!(
        serde_json::to_string(&SpecStatus::Completed).unwrap(),
        "\"completed\""
    );
    assert_eq!(serde_json::to_string(&SpecStatus::Failed).unwrap(), "\"failed\"");
}

#[test]
fn given_statuses_when_checked_then_only_completed_and_failed_are_terminal() {
    assert!(!SpecStatus::Pending.is_terminal());
    assert!(!SpecStatus::Processing.is_terminal());
    assert!(SpecStatus::Completed.is_terminal());
    assert!(SpecStatus::Failed.is_terminal());
}

#[test]
fn given_endpoint_values_when_serialized_then_snake_case_spellings() {
    assert_eq!(
        serde_json::to_string(&SpecEndpoint::FastSpec).unwrap(),
        "\"fast_spec\""
    );
    assert_eq!(SpecEndpoint::DeepSpec.as_str(), "deep_spec");
}

// ============================================
// UNIT TESTS: Response Shapes
// ============================================

/// **VALUE**: Verifies a completed result deserializes with all artifact
/// fields populated.
///
/// **WHY THIS MATTERS**: This is the shape callers consume after every
/// successful generation; a rename here breaks every downstream user.
#[test]
fn given_completed_response_json_when_deserialized_then_fields_populate() {
    let body = json!({
        "_id": "spec_123",
        "createdAt": "2025-11-02T10:00:00Z",
        "endpoint": "fast_spec",
        "input": "Build a todo app",
        "status": "completed",
        "success": true,
        "codingAgentSpecUrl": "https://pre.dev/s/spec_123/agent",
        "humanSpecUrl": "https://pre.dev/s/spec_123/human",
        "deepLinks": {"cursor": "cursor://open?spec=spec_123"},
        "zippedDocsURLs": [{"url": "https://pre.dev/docs/spec_123.zip", "name": "docs.zip"}],
        "processingTime": 34.2
    });

    let response: SpecResponse = serde_json::from_value(body).unwrap();

    assert_eq!(response.spec_id.as_deref(), Some("spec_123"));
    assert_eq!(response.endpoint, Some(SpecEndpoint::FastSpec));
    assert_eq!(response.status, Some(SpecStatus::Completed));
    assert!(response.success);
    assert_eq!(
        response.coding_agent_spec_url.as_deref(),
        Some("https://pre.dev/s/spec_123/agent")
    );
    assert_eq!(
        response.deep_links.as_ref().and_then(|links| links.get("cursor")).map(String::as_str),
        Some("cursor://open?spec=spec_123")
    );
    assert_eq!(
        response.zipped_docs_urls.as_ref().map(|urls| urls.len()),
        Some(1)
    );
    assert_eq!(response.processing_time, Some(34.2));
}

/// **VALUE**: Verifies early-stage results with almost no fields still parse.
///
/// **WHY THIS MATTERS**: Status polling sees pending/processing results
/// where most output fields are absent; every field except the basics must
/// tolerate omission.
#[test]
fn given_sparse_processing_response_when_deserialized_then_defaults_apply() {
    let body = json!({
        "specId": "spec_456",
        "status": "processing",
        "progress": "Analyzing requirements"
    });

    let response: SpecResponse = serde_json::from_value(body).unwrap();

    assert_eq!(response.spec_id.as_deref(), Some("spec_456"));
    assert_eq!(response.status, Some(SpecStatus::Processing));
    assert_eq!(response.progress.as_deref(), Some("Analyzing requirements"));
    assert!(!response.success);
    assert!(response.coding_agent_spec_url.is_none());
    assert!(response.error_message.is_none());
}

#[test]
fn given_async_handle_json_when_deserialized_then_id_and_status_populate() {
    let handle: AsyncSpecHandle =
        serde_json::from_value(json!({"specId": "spec_789", "status": "pending"})).unwrap();

    assert_eq!(handle.spec_id, "spec_789");
    assert_eq!(handle.status, SpecStatus::Pending);
}

#[test]
fn given_list_page_json_when_deserialized_then_has_more_maps() {
    let page: SpecListPage = serde_json::from_value(json!({
        "specs": [{"specId": "spec_1", "status": "completed"}],
        "total": 42,
        "hasMore": true
    }))
    .unwrap();

    assert_eq!(page.specs.len(), 1);
    assert_eq!(page.total, 42);
    assert!(page.has_more);
}
