// Unit tests for request-body encoding
// Covers the JSON/multipart branch point, optional-field omission, the
// async flag, and fallback file naming

use crate::client::payload::{SpecPayload, encode_spec_request};
use crate::types::{FileAttachment, OutputFormat, SpecRequest};

use serde_json::json;

fn json_value(payload: SpecPayload) -> serde_json::Value {
    match payload {
        SpecPayload::Json(value) => value,
        SpecPayload::Multipart(_) => panic!("expected JSON payload, got multipart"),
    }
}

// ============================================
// UNIT TESTS: JSON Branch
// ============================================

/// **VALUE**: Verifies a minimal request serializes to exactly `{"input": ...}`.
///
/// **WHY THIS MATTERS**: Unset optionals must be omitted, never sent as
/// null - the service treats a null `currentContext` differently from an
/// absent one.
///
/// **BUG THIS CATCHES**: Would catch a missing `skip_serializing_if` on any
/// optional field, or the async flag leaking into sync-mode bodies.
#[test]
fn given_minimal_request_when_encoded_then_body_contains_only_input() {
    let request = SpecRequest::new("Build a todo app");

    let body = json_value(encode_spec_request(&request, false).unwrap());

    assert_eq!(body, json!({"input": "Build a todo app"}));
}

/// **VALUE**: Verifies every supplied field round-trips under its wire name.
///
/// **WHY THIS MATTERS**: The service contract is camelCase with the
/// irregular `docURLs` spelling; a rename regression would silently drop
/// fields server-side.
///
/// **BUG THIS CATCHES**: Would catch `doc_urls` serializing as `docUrls`
/// (the rename_all default) instead of `docURLs`.
#[test]
fn given_full_request_when_encoded_then_all_fields_round_trip() {
    let request = SpecRequest::new("Build a customer support ticketing system")
        .with_output_format(OutputFormat::Url)
        .with_current_context("Existing helpdesk with email intake only")
        .with_doc_urls(vec![
            String::from("https://docs.pre.dev"),
            String::from("https://docs.stripe.com"),
        ]);

    let body = json_value(encode_spec_request(&request, false).unwrap());

    assert_eq!(
        body,
        json!({
            "input": "Build a customer support ticketing system",
            "outputFormat": "url",
            "currentContext": "Existing helpdesk with email intake only",
            "docURLs": ["https://docs.pre.dev", "https://docs.stripe.com"],
        })
    );
}

/// **VALUE**: Verifies async mode sets `async: true` and sync mode omits it.
///
/// **BUG THIS CATCHES**: Would catch the flag being sent as `false` in sync
/// mode, which some server versions treat as an explicit opt-out.
#[test]
fn given_async_mode_when_encoded_then_async_flag_is_set() {
    let request = SpecRequest::new("Build an e-commerce platform");

    let sync_body = json_value(encode_spec_request(&request, false).unwrap());
    let async_body = json_value(encode_spec_request(&request, true).unwrap());

    assert!(sync_body.get("async").is_none());
    assert_eq!(async_body.get("async"), Some(&json!(true)));
}

// ============================================
// UNIT TESTS: Encoding Selection
// ============================================

/// **VALUE**: Verifies attachment presence is the one switch between
/// encodings.
///
/// **WHY THIS MATTERS**: This presence check is the core of the encoding
/// selection algorithm; everything else is assembly.
#[test]
fn given_attachment_when_encoded_then_multipart_is_selected() {
    let without_file = SpecRequest::new("Build a blog");
    let with_file = SpecRequest::new("Build a blog")
        .with_attachment(FileAttachment::new(b"# Notes".to_vec()));

    assert!(matches!(
        encode_spec_request(&without_file, false).unwrap(),
        SpecPayload::Json(_)
    ));
    assert!(matches!(
        encode_spec_request(&with_file, false).unwrap(),
        SpecPayload::Multipart(_)
    ));
}

// ============================================
// UNIT TESTS: Fallback File Names
// ============================================

/// **VALUE**: Verifies the deterministic fallback name derivation.
///
/// **WHY THIS MATTERS**: Multipart parts need a file name; when the caller
/// supplies none we derive one from the content type so uploads stay
/// reproducible.
#[test]
fn given_unnamed_attachment_when_named_then_fallback_derives_from_content_type() {
    let unnamed = FileAttachment::new(vec![1, 2, 3]);
    let pdf = FileAttachment::new(vec![1, 2, 3]).with_content_type("application/pdf");
    let named = FileAttachment::new(vec![1, 2, 3]).with_file_name("requirements.md");

    assert_eq!(unnamed.effective_file_name(), "attachment.txt");
    assert_eq!(pdf.effective_file_name(), "attachment.pdf");
    assert_eq!(named.effective_file_name(), "requirements.md");
}
