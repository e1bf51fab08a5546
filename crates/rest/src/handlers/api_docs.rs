//! API documentation handler.
//!
//! Serves an [OpenAPI 3.0](https://spec.openapis.org/oas/v3.0.3) document
//! describing the physician endpoints: `GET [base]/api-docs`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_registry::{Crm, PhysicianStorage};
use serde_json::{Value, json};
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the API documentation endpoint.
///
/// # HTTP Request
///
/// `GET [base]/api-docs`
///
/// # Response
///
/// Returns the OpenAPI document (200 OK).
pub async fn api_docs_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: PhysicianStorage,
{
    debug!("Processing API documentation request");

    let document = build_openapi_document(state.base_url());

    Ok((StatusCode::OK, Json(document)).into_response())
}

/// Builds the OpenAPI document for the given server URL.
pub fn build_openapi_document(base_url: &str) -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Clinic API",
            "description": "Administrative API for physician records",
            "version": env!("CARGO_PKG_VERSION")
        },
        "servers": [{ "url": base_url }],
        "paths": {
            "/physicians": {
                "get": {
                    "summary": "List every physician",
                    "operationId": "listPhysicians",
                    "responses": {
                        "200": {
                            "description": "Physicians in registration order",
                            "content": json_content(json!({
                                "type": "array",
                                "items": schema_ref("Physician")
                            }))
                        }
                    }
                },
                "post": {
                    "summary": "Register a physician",
                    "description": "The server assigns the CRM.",
                    "operationId": "createPhysician",
                    "requestBody": {
                        "required": true,
                        "content": json_content(schema_ref("NewPhysician"))
                    },
                    "responses": {
                        "201": {
                            "description": "Physician registered",
                            "content": json_content(schema_ref("Physician"))
                        },
                        "400": error_response("Missing or blank field"),
                        "409": error_response("No CRM left to assign")
                    }
                }
            },
            "/physicians/{id}": {
                "parameters": [crm_parameter()],
                "get": {
                    "summary": "Read a physician",
                    "operationId": "getPhysician",
                    "responses": {
                        "200": {
                            "description": "The physician",
                            "content": json_content(schema_ref("Physician"))
                        },
                        "400": error_response("Invalid CRM"),
                        "404": error_response("Physician not found")
                    }
                },
                "put": {
                    "summary": "Update a physician's name and/or specialty",
                    "operationId": "updatePhysician",
                    "requestBody": {
                        "required": true,
                        "content": json_content(schema_ref("PhysicianUpdate"))
                    },
                    "responses": {
                        "200": {
                            "description": "The updated physician",
                            "content": json_content(schema_ref("Physician"))
                        },
                        "400": error_response("Invalid CRM or field"),
                        "404": error_response("Physician not found")
                    }
                },
                "delete": {
                    "summary": "Remove a physician",
                    "operationId": "deletePhysician",
                    "responses": {
                        "204": { "description": "Physician removed" },
                        "400": error_response("Invalid CRM"),
                        "404": error_response("Physician not found")
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Physician": {
                    "type": "object",
                    "required": ["id", "name", "specialty"],
                    "properties": {
                        "id": crm_schema(),
                        "name": { "type": "string", "example": "Dr. Fulano" },
                        "specialty": { "type": "string", "example": "Cardiologia" }
                    }
                },
                "NewPhysician": {
                    "type": "object",
                    "required": ["name", "specialty"],
                    "properties": {
                        "name": { "type": "string", "minLength": 1 },
                        "specialty": { "type": "string", "minLength": 1 }
                    }
                },
                "PhysicianUpdate": {
                    "type": "object",
                    "minProperties": 1,
                    "properties": {
                        "name": { "type": "string", "minLength": 1 },
                        "specialty": { "type": "string", "minLength": 1 }
                    }
                },
                "Error": {
                    "type": "object",
                    "required": ["code", "message"],
                    "properties": {
                        "code": { "type": "string" },
                        "message": { "type": "string" },
                        "field": { "type": "string" }
                    }
                }
            }
        }
    })
}

fn crm_schema() -> Value {
    json!({
        "type": "integer",
        "minimum": Crm::MIN,
        "maximum": Crm::MAX,
        "description": "CRM license number",
        "example": 111111
    })
}

fn crm_parameter() -> Value {
    json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": crm_schema()
    })
}

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{}", name) })
}

fn json_content(schema: Value) -> Value {
    json!({ "application/json": { "schema": schema } })
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": json_content(schema_ref("Error"))
    })
}
