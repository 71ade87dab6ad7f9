use super::*;

#[test]
fn user_decodes_probe_body_with_id() {
    let user: User = serde_json::from_str(r#"{"id":7,"name":"Ada","email":"ada@example.com"}"#).unwrap();
    assert_eq!(user.id, Some(7));
    assert_eq!(user.name, "Ada");
    assert_eq!(user.email, "ada@example.com");
}

#[test]
fn user_decodes_login_body_and_ignores_message() {
    let user: User =
        serde_json::from_str(r#"{"message":"success","name":"Ada","email":"ada@example.com"}"#).unwrap();
    assert_eq!(user, User::new("Ada", "ada@example.com"));
}

#[test]
fn profile_update_omits_missing_password() {
    let body = ProfileUpdate { name: "Ada".into(), email: "ada@example.com".into(), password: None };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "Ada", "email": "ada@example.com" }));
}

#[test]
fn profile_update_includes_password_when_present() {
    let body = ProfileUpdate {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        password: Some("hunter2".into()),
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["password"], "hunter2");
}

#[test]
fn error_body_prefers_message_over_error() {
    let body = ErrorBody::parse(r#"{"message":"Email is already in use","error":"other"}"#).unwrap();
    assert_eq!(body.text(), Some("Email is already in use"));
}

#[test]
fn error_body_falls_back_to_error_key() {
    let body = ErrorBody::parse(r#"{"error":"Invalid data"}"#).unwrap();
    assert_eq!(body.text(), Some("Invalid data"));
}

#[test]
fn error_body_blank_values_count_as_missing() {
    let body = ErrorBody::parse(r#"{"message":"   ","error":""}"#).unwrap();
    assert_eq!(body.text(), None);
}

#[test]
fn error_body_rejects_non_json() {
    assert!(ErrorBody::parse("<html>bad gateway</html>").is_none());
}
