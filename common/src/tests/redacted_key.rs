use crate::RedactedApiKey;

/// **VALUE**: Verifies the credential never appears in Debug or Display
/// output.
///
/// **WHY THIS MATTERS**: Error messages and logs routinely format whole
/// structs; the one job of this wrapper is to make that safe.
#[test]
fn given_key_when_formatted_then_value_is_redacted() {
    let key = RedactedApiKey::new(String::from("super_secret_key"));

    assert!(!format!("{key:?}").contains("super_secret_key"));
    assert!(!format!("{key}").contains("super_secret_key"));
}

#[test]
fn given_key_when_transmitting_then_as_str_exposes_value() {
    let key = RedactedApiKey::new(String::from("super_secret_key"));

    assert_eq!(key.as_str(), "super_secret_key");
    assert_eq!(key.len(), 16);
    assert!(!key.is_empty());
}

#[test]
fn given_key_when_serialized_then_refused() {
    let key = RedactedApiKey::new(String::from("super_secret_key"));

    assert!(serde_json::to_string(&key).is_err());
}
