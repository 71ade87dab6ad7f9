use super::*;

// =============================================================
// classify_failure
// =============================================================

#[test]
fn classify_401_is_unauthorized() {
    assert_eq!(classify_failure(401, r#"{"message":"unauthenticated"}"#), GatewayError::Unauthorized);
}

#[test]
fn classify_400_carries_backend_message() {
    let err = classify_failure(400, r#"{"message":"Email is already in use"}"#);
    assert_eq!(
        err,
        GatewayError::Client { status: 400, message: Some("Email is already in use".to_owned()) }
    );
    assert_eq!(err.client_message(), Some("Email is already in use"));
}

#[test]
fn classify_404_reads_error_key() {
    let err = classify_failure(404, r#"{"error":"User not found"}"#);
    assert_eq!(err.client_message(), Some("User not found"));
}

#[test]
fn classify_400_without_json_body_has_no_message() {
    let err = classify_failure(400, "");
    assert_eq!(err, GatewayError::Client { status: 400, message: None });
}

#[test]
fn classify_5xx_is_server() {
    assert_eq!(classify_failure(500, "{}"), GatewayError::Server { status: 500 });
    assert_eq!(classify_failure(503, ""), GatewayError::Server { status: 503 });
}

#[test]
fn classify_unexpected_status_is_server() {
    assert_eq!(classify_failure(304, ""), GatewayError::Server { status: 304 });
}

// =============================================================
// helpers
// =============================================================

#[test]
fn is_success_covers_2xx_only() {
    assert!(is_success(200));
    assert!(is_success(201));
    assert!(!is_success(199));
    assert!(!is_success(300));
}

#[test]
fn join_url_trims_trailing_slash() {
    assert_eq!(join_url("http://localhost:8000/", "/api/user"), "http://localhost:8000/api/user");
}

#[test]
fn join_url_empty_base_is_same_origin() {
    assert_eq!(join_url("", "/api/login"), "/api/login");
}

#[test]
fn client_message_is_none_for_other_variants() {
    assert_eq!(GatewayError::Unauthorized.client_message(), None);
    assert_eq!(GatewayError::Network("down".into()).client_message(), None);
}
