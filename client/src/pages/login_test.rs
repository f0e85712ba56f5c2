use super::*;
use crate::net::types::LoginData;

fn response(token: Option<&str>, message: &str) -> LoginResponse {
    LoginResponse { message: message.to_owned(), data: Some(LoginData { token: token.map(str::to_owned) }) }
}

#[test]
fn token_means_success_with_backend_message() {
    assert_eq!(
        login_outcome(&response(Some("jwt.abc"), "User logged in successfully")),
        LoginOutcome::Success { token: "jwt.abc".to_owned(), message: "User logged in successfully".to_owned() }
    );
}

#[test]
fn missing_token_is_rejected_with_message() {
    assert_eq!(
        login_outcome(&response(None, "Invalid credentials")),
        LoginOutcome::Rejected("Invalid credentials".to_owned())
    );
    let no_data = LoginResponse { message: "User not found".to_owned(), data: None };
    assert_eq!(login_outcome(&no_data), LoginOutcome::Rejected("User not found".to_owned()));
}

#[test]
fn blank_token_is_not_success() {
    assert!(matches!(login_outcome(&response(Some("  "), "x")), LoginOutcome::Rejected(_)));
}

#[test]
fn rejection_without_message_uses_fallback() {
    assert_eq!(login_outcome(&LoginResponse::default()), LoginOutcome::Rejected("Login failed".to_owned()));
}

#[test]
fn redirect_target_falls_back_to_root() {
    assert_eq!(redirect_target(Some("/dashboard")), "/dashboard");
    assert_eq!(redirect_target(Some("")), "/");
    assert_eq!(redirect_target(Some("https://evil.example")), "/");
    assert_eq!(redirect_target(Some("//evil.example")), "/");
    assert_eq!(redirect_target(None), "/");
}

#[test]
fn login_request_requires_both_fields() {
    let errors = login_request(&LOGIN_SCHEMA.blank_values()).unwrap_err();
    assert_eq!(errors.get("identifier"), Some("Username or email is required"));
    assert_eq!(errors.get("password"), Some("Password is required"));
}

#[test]
fn login_request_keeps_password_verbatim() {
    let values = FormValues::from_pairs([("identifier", " alice "), ("password", " s3cret ")]);
    assert_eq!(
        login_request(&values),
        Ok(LoginRequest { identifier: "alice".to_owned(), password: " s3cret ".to_owned() })
    );
}
