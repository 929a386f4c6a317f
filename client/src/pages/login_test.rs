use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(validate_login_input("  user@example.com ", "secret"), Ok("user@example.com".to_owned()));
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_requires_at_sign() {
    assert_eq!(validate_login_input("not-an-email", "secret"), Err("Enter a valid email address."));
}
