//! HTTP response assertions.
//!
//! Provides assertion utilities for testing HTTP responses.

use axum_test::TestResponse;
use serde_json::Value;

/// Asserts that the response has the expected status code.
pub fn assert_status(response: &TestResponse, expected: u16) {
    let actual = response.status_code().as_u16();
    assert_eq!(
        actual, expected,
        "Expected status {}, got {}",
        expected, actual
    );
}

/// Asserts that the response has a Location header.
pub fn assert_has_location(response: &TestResponse) {
    assert!(
        response.headers().contains_key("location"),
        "Expected Location header"
    );
}

/// Asserts that the response is an error with the given status and code,
/// returning the error body.
pub fn assert_error(response: &TestResponse, status: u16, code: &str) -> Value {
    assert_status(response, status);
    let body: Value = response.json();
    assert_eq!(
        body["code"], code,
        "Expected error code {}, got body {}",
        code, body
    );
    assert!(
        body["message"].as_str().is_some_and(|m| !m.is_empty()),
        "Expected a message in {}",
        body
    );
    body
}

/// Asserts an `invalid-field` error naming `field`.
pub fn assert_invalid_field(response: &TestResponse, field: &str) {
    let body = assert_error(response, 400, "invalid-field");
    assert_eq!(body["field"], field, "Expected field {} in {}", field, body);
}
