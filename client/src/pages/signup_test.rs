use super::*;

#[test]
fn validate_signup_input_accepts_complete_form() {
    assert_eq!(validate_signup_input("maria", "maria@example.com", "longenough"), Ok(()));
}

#[test]
fn validate_signup_input_checks_username_first() {
    assert_eq!(validate_signup_input("  ", "", ""), Err("Choose a username."));
}

#[test]
fn validate_signup_input_reuses_login_rules() {
    assert_eq!(validate_signup_input("maria", "maria", "longenough"), Err("Enter a valid email address."));
}

#[test]
fn validate_signup_input_enforces_password_length() {
    assert_eq!(
        validate_signup_input("maria", "maria@example.com", "short"),
        Err("Use at least 8 characters for the password.")
    );
}
