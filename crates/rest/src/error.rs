//! Error types for the Clinic REST API.
//!
//! This module defines the errors returned by handlers and their conversion
//! into JSON error responses.
//!
//! # Error Mapping
//!
//! Registry errors are mapped to HTTP status codes and error codes:
//!
//! | Registry Error | HTTP Status | Error Code |
//! |----------------|-------------|------------|
//! | InvalidIdentifier | 400 | invalid-identifier |
//! | InvalidField | 400 | invalid-field |
//! | NotFound | 404 | not-found |
//! | IdentifiersExhausted | 409 | identifiers-exhausted |
//!
//! Request bodies that cannot be read add `invalid-body` (400),
//! `payload-too-large` (413) and `unsupported-media-type` (415).
//!
//! Every error body has the shape `{"code": "...", "message": "..."}`;
//! `invalid-field` errors add a `field` member when a single field is at fault.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_registry::{Crm, FieldError, RegistryError};
use std::fmt;
use tracing::warn;

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// The CRM path segment is not a valid identifier (HTTP 400).
    InvalidIdentifier {
        /// The raw path segment.
        value: String,
    },

    /// A body field failed validation (HTTP 400).
    InvalidField(FieldError),

    /// No physician with the CRM (HTTP 404).
    NotFound {
        /// The CRM that was looked up.
        crm: Crm,
    },

    /// Every CRM is taken (HTTP 409).
    IdentifiersExhausted {
        /// The highest CRM in use.
        highest: Crm,
    },

    /// The request body is not a JSON object (HTTP 400).
    InvalidBody {
        /// Error message.
        message: String,
    },

    /// The request body exceeds the configured limit (HTTP 413).
    PayloadTooLarge {
        /// Error message.
        message: String,
    },

    /// The request body is not JSON (HTTP 415).
    UnsupportedMediaType {
        /// The unsupported content type.
        content_type: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::InvalidIdentifier { .. }
            | RestError::InvalidField(_)
            | RestError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::IdentifiersExhausted { .. } => StatusCode::CONFLICT,
            RestError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            RestError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            RestError::InvalidIdentifier { .. } => "invalid-identifier",
            RestError::InvalidField(_) => "invalid-field",
            RestError::NotFound { .. } => "not-found",
            RestError::IdentifiersExhausted { .. } => "identifiers-exhausted",
            RestError::InvalidBody { .. } => "invalid-body",
            RestError::PayloadTooLarge { .. } => "payload-too-large",
            RestError::UnsupportedMediaType { .. } => "unsupported-media-type",
            RestError::InternalError { .. } => "internal-error",
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::InvalidIdentifier { value } => {
                write!(
                    f,
                    "Invalid CRM '{}': must be a six-digit integer between {} and {}",
                    value,
                    Crm::MIN,
                    Crm::MAX
                )
            }
            RestError::InvalidField(err) => match err {
                FieldError::Missing(field) => write!(f, "Field '{}' is required", field),
                FieldError::Blank(field) => write!(f, "Field '{}' must not be blank", field),
                FieldError::NotAString(field) => write!(f, "Field '{}' must be a string", field),
                FieldError::NothingToUpdate => write!(
                    f,
                    "No field to update: supply at least one of 'name' or 'specialty'"
                ),
            },
            RestError::NotFound { crm } => {
                write!(f, "Physician {} not found", crm)
            }
            RestError::IdentifiersExhausted { highest } => {
                write!(f, "No CRM left to assign (highest in use: {})", highest)
            }
            RestError::InvalidBody { message } => {
                write!(f, "Invalid request body: {}", message)
            }
            RestError::PayloadTooLarge { message } => {
                write!(f, "Request body too large: {}", message)
            }
            RestError::UnsupportedMediaType { content_type } => {
                write!(f, "Unsupported media type: {}", content_type)
            }
            RestError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            warn!(error = %self, "Request failed");
        }

        let mut body = serde_json::json!({
            "code": self.code(),
            "message": self.to_string(),
        });
        if let RestError::InvalidField(err) = &self {
            if let Some(field) = err.field() {
                body["field"] = serde_json::Value::from(field.as_str());
            }
        }

        (status, Json(body)).into_response()
    }
}

impl From<RegistryError> for RestError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::InvalidIdentifier { value } => RestError::InvalidIdentifier { value },
            RegistryError::InvalidField(err) => RestError::InvalidField(err),
            RegistryError::NotFound { crm } => RestError::NotFound { crm },
            RegistryError::IdentifiersExhausted { highest } => {
                RestError::IdentifiersExhausted { highest }
            }
        }
    }
}

impl From<FieldError> for RestError {
    fn from(err: FieldError) -> Self {
        RestError::InvalidField(err)
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_registry::Field;

    fn crm(value: i64) -> Crm {
        Crm::try_from(value).unwrap()
    }

    #[test]
    fn test_not_found_display() {
        let err = RestError::NotFound { crm: crm(222_222) };
        assert_eq!(err.to_string(), "Physician 222222 not found");
    }

    #[test]
    fn test_invalid_identifier_display() {
        let err = RestError::InvalidIdentifier {
            value: "42".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid CRM '42': must be a six-digit integer between 100000 and 999999"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RestError::from(RegistryError::invalid_identifier("x")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RestError::from(FieldError::NothingToUpdate).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RestError::NotFound { crm: crm(111_111) }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RestError::IdentifiersExhausted {
                highest: crm(999_999)
            }
            .status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_body_error_status_codes() {
        let err = RestError::UnsupportedMediaType {
            content_type: "text/plain".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(err.to_string(), "Unsupported media type: text/plain");

        let err = RestError::PayloadTooLarge {
            message: "length limit exceeded".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.code(), "payload-too-large");
    }

    #[test]
    fn test_from_registry_error() {
        let err: RestError = RegistryError::NotFound { crm: crm(333_333) }.into();
        assert!(matches!(err, RestError::NotFound { .. }));

        let err: RestError = RegistryError::from(FieldError::Blank(Field::Name)).into();
        assert_eq!(err.code(), "invalid-field");
        assert_eq!(err.to_string(), "Field 'name' must not be blank");
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            RestError::InvalidIdentifier {
                value: String::new(),
            },
            RestError::InvalidField(FieldError::NothingToUpdate),
            RestError::NotFound { crm: crm(111_111) },
            RestError::IdentifiersExhausted {
                highest: crm(999_999),
            },
            RestError::InvalidBody {
                message: String::new(),
            },
            RestError::PayloadTooLarge {
                message: String::new(),
            },
            RestError::UnsupportedMediaType {
                content_type: String::new(),
            },
            RestError::InternalError {
                message: String::new(),
            },
        ];
        let codes: std::collections::HashSet<_> = errors.iter().map(RestError::code).collect();
        assert_eq!(codes.len(), errors.len());
    }
}
