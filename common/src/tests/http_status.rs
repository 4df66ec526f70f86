use crate::HttpStatusCode;

#[test]
fn given_taxonomy_codes_when_classified_then_predicates_match() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(401).is_authentication());
    assert!(HttpStatusCode(429).is_rate_limit());
    assert!(HttpStatusCode(404).is_client_error());
    assert!(HttpStatusCode(503).is_server_error());
}

#[test]
fn given_boundary_codes_when_classified_then_no_false_positives() {
    assert!(!HttpStatusCode(400).is_authentication());
    assert!(!HttpStatusCode(403).is_authentication());
    assert!(!HttpStatusCode(428).is_rate_limit());
    assert!(!HttpStatusCode(299).is_client_error());
    assert!(HttpStatusCode(299).is_success());
}

#[test]
fn given_code_when_displayed_then_bare_number() {
    assert_eq!(HttpStatusCode(500).to_string(), "500");
}
