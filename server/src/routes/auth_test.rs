use super::*;
use crate::services::account::AccountError;

// =============================================================
// Authorization header parsing
// =============================================================

#[test]
fn token_from_header_accepts_token_scheme() {
    assert_eq!(token_from_header("Token abc123"), Some("abc123"));
}

#[test]
fn token_from_header_accepts_bearer_scheme() {
    assert_eq!(token_from_header("Bearer abc123"), Some("abc123"));
}

#[test]
fn token_from_header_is_scheme_case_insensitive() {
    assert_eq!(token_from_header("token abc"), Some("abc"));
    assert_eq!(token_from_header("BEARER abc"), Some("abc"));
}

#[test]
fn token_from_header_rejects_unknown_scheme() {
    assert_eq!(token_from_header("Basic dXNlcjpwYXNz"), None);
}

#[test]
fn token_from_header_rejects_missing_value() {
    assert_eq!(token_from_header("Token "), None);
    assert_eq!(token_from_header("Token"), None);
}

// =============================================================
// Error mapping
// =============================================================

#[test]
fn account_error_maps_taken_to_conflict() {
    assert_eq!(account_error_to_status(&AccountError::UsernameTaken), StatusCode::CONFLICT);
}

#[test]
fn account_error_maps_credentials_to_unauthorized() {
    assert_eq!(
        account_error_to_status(&AccountError::InvalidCredentials),
        StatusCode::UNAUTHORIZED
    );
}

#[test]
fn account_error_maps_validation_to_bad_request() {
    assert_eq!(account_error_to_status(&AccountError::InvalidUsername), StatusCode::BAD_REQUEST);
    assert_eq!(account_error_to_status(&AccountError::WeakPassword), StatusCode::BAD_REQUEST);
    assert_eq!(
        account_error_to_status(&AccountError::InvalidDateOfBirth),
        StatusCode::BAD_REQUEST
    );
}
