//! Validation rules for creation and partial-update payloads

use roster_core::types::{CreateUser, UpdateUser, EMAIL_MAX_LEN, NAME_MAX_LEN, ROLE_MAX_LEN};

fn valid_create() -> CreateUser {
    CreateUser::new("Alice Johnson", "alice@example.com", "Admin")
}

#[test]
fn test_valid_create_payload_passes() {
    assert!(valid_create().validate().is_ok());
}

#[test]
fn test_create_requires_every_field() {
    let errors = CreateUser::default().validate().unwrap_err();

    assert_eq!(errors.messages("name"), ["Name is required."]);
    assert_eq!(errors.messages("email"), ["Email is required."]);
    assert_eq!(errors.messages("role"), ["Role is required."]);
}

#[test]
fn test_create_whitespace_only_is_missing() {
    let payload = CreateUser::new("   ", "alice@example.com", "\t");
    let errors = payload.validate().unwrap_err();

    assert!(errors.contains("name"));
    assert!(errors.contains("role"));
    assert!(!errors.contains("email"));
}

#[test]
fn test_create_length_limits() {
    let payload = CreateUser::new(
        "n".repeat(NAME_MAX_LEN + 1),
        format!("{}@example.com", "e".repeat(EMAIL_MAX_LEN)),
        "r".repeat(ROLE_MAX_LEN + 1),
    );
    let errors = payload.validate().unwrap_err();

    assert_eq!(errors.messages("name"), ["Name must be at most 100 characters."]);
    assert_eq!(errors.messages("email"), ["Email must be at most 200 characters."]);
    assert_eq!(errors.messages("role"), ["Role must be at most 100 characters."]);
}

#[test]
fn test_lengths_at_the_limit_pass() {
    let local = "e".repeat(EMAIL_MAX_LEN - "@example.com".len());
    let payload = CreateUser::new(
        "n".repeat(NAME_MAX_LEN),
        format!("{}@example.com", local),
        "r".repeat(ROLE_MAX_LEN),
    );
    assert!(payload.validate().is_ok());
}

#[test]
fn test_length_is_measured_after_trimming() {
    let payload = CreateUser::new(
        format!("  {}  ", "n".repeat(NAME_MAX_LEN)),
        "alice@example.com",
        "Admin",
    );
    assert!(payload.validate().is_ok());
}

#[test]
fn test_length_counts_characters_not_bytes() {
    let payload = CreateUser::new("é".repeat(NAME_MAX_LEN), "alice@example.com", "Admin");
    assert!(payload.validate().is_ok());
}

#[test]
fn test_create_rejects_malformed_email() {
    for email in ["not-an-email", "a@b", "a b@c.com", "a@b c.com", "a@b@c.com"] {
        let payload = CreateUser::new("Alice", email, "Admin");
        let errors = payload.validate().unwrap_err();
        assert_eq!(
            errors.messages("email"),
            ["Email is not a valid email address."],
            "email {:?} should be rejected",
            email
        );
    }
}

#[test]
fn test_email_pattern_is_case_insensitive() {
    let payload = CreateUser::new("Alice", "ALICE@EXAMPLE.COM", "Admin");
    assert!(payload.validate().is_ok());
}

#[test]
fn test_overlong_invalid_email_reports_both_messages() {
    let payload = CreateUser::new("Alice", "x".repeat(EMAIL_MAX_LEN + 1), "Admin");
    let errors = payload.validate().unwrap_err();

    assert_eq!(
        errors.messages("email"),
        [
            "Email must be at most 200 characters.",
            "Email is not a valid email address."
        ]
    );
}

#[test]
fn test_empty_update_is_valid() {
    assert!(UpdateUser::default().validate().is_ok());
}

#[test]
fn test_update_blank_fields_are_ignored() {
    let payload = UpdateUser {
        name: Some(String::new()),
        email: Some("   ".to_string()),
        role: None,
    };
    assert!(payload.validate().is_ok());
}

#[test]
fn test_update_checks_supplied_fields() {
    let payload = UpdateUser {
        name: Some("n".repeat(NAME_MAX_LEN + 1)),
        email: Some("not-an-email".to_string()),
        role: Some("Dev".to_string()),
    };
    let errors = payload.validate().unwrap_err();

    assert!(errors.contains("name"));
    assert!(errors.contains("email"));
    assert!(!errors.contains("role"));
}

#[test]
fn test_update_from_json_with_missing_fields() {
    let payload: UpdateUser = serde_json::from_str(r#"{"role":"Owner"}"#).unwrap();
    assert!(payload.validate().is_ok());
    assert_eq!(payload.role(), Some("Owner"));
    assert_eq!(payload.name(), None);
}
