//! Physician body extractor.
//!
//! Extracts the `name` and `specialty` members of a JSON request body.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{StatusCode, header},
};
use clinic_registry::{Field, FieldError, NewPhysician, PhysicianUpdate};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::RestError;

/// Axum extractor for the body of create and update requests.
///
/// The body must be a JSON object. A member that is absent or `null` is
/// treated as not supplied; any other non-string value is rejected with an
/// `invalid-field` error naming the member. Unknown members, including a
/// client-supplied `crm` or `id`, are ignored.
///
/// The rejection is a [`RestError`], so handlers that must check the CRM
/// first can take `Result<PhysicianBody, RestError>` and report the body
/// error afterwards.
///
/// # Example
///
/// ```rust,ignore
/// use clinic_rest::extractors::PhysicianBody;
///
/// async fn create_handler(body: PhysicianBody) {
///     let input = body.into_new_physician();
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhysicianBody {
    name: Option<String>,
    specialty: Option<String>,
}

impl PhysicianBody {
    /// Reads the physician members out of a parsed JSON value.
    pub fn from_value(value: &Value) -> Result<Self, RestError> {
        let object = value.as_object().ok_or_else(|| RestError::InvalidBody {
            message: "expected a JSON object".to_string(),
        })?;

        if object.contains_key("crm") || object.contains_key("id") {
            debug!("Ignoring client-supplied identifier in request body");
        }

        Ok(Self {
            name: string_member(object, Field::Name)?,
            specialty: string_member(object, Field::Specialty)?,
        })
    }

    /// Returns the supplied name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the supplied specialty, if any.
    pub fn specialty(&self) -> Option<&str> {
        self.specialty.as_deref()
    }

    /// Converts the body into the input of the create operation.
    pub fn into_new_physician(self) -> NewPhysician {
        NewPhysician {
            name: self.name,
            specialty: self.specialty,
        }
    }

    /// Converts the body into the input of the update operation.
    pub fn into_update(self) -> PhysicianUpdate {
        PhysicianUpdate {
            name: self.name,
            specialty: self.specialty,
        }
    }
}

fn string_member(object: &Map<String, Value>, field: Field) -> Result<Option<String>, FieldError> {
    match object.get(field.as_str()) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(FieldError::NotAString(field)),
    }
}

impl<S> FromRequest<S> for PhysicianBody
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/json")
            .to_string();

        if !content_type.contains("json") {
            return Err(RestError::UnsupportedMediaType { content_type });
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                RestError::PayloadTooLarge {
                    message: rejection.body_text(),
                }
            } else {
                RestError::InvalidBody {
                    message: rejection.body_text(),
                }
            }
        })?;

        let value: Value = serde_json::from_slice(&bytes).map_err(|e| RestError::InvalidBody {
            message: format!("invalid JSON: {}", e),
        })?;

        PhysicianBody::from_value(&value)
    }
}
