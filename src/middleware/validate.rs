use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::ApiError;
use crate::models::Validate;

/// JSON body extractor whose every failure (empty body, malformed JSON,
/// missing or mistyped fields, failed [`Validate`] checks) is a 422 with a
/// structured error body.
///
/// The `Content-Type` header is not inspected; the body is parsed as JSON
/// regardless.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::payload_too_large("Request body too large")
            } else {
                ApiError::invalid_field("Request body could not be read", "body", rejection.body_text())
            }
        })?;

        parse_body(&bytes).map(ValidatedJson)
    }
}

/// Decode and validate a raw request body. Bodies must be JSON objects.
pub fn parse_body<T>(bytes: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::invalid_field("Request body is required", "body", "Field required"));
    }

    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| ApiError::invalid_field("Request body is not valid JSON", "body", e.to_string()))?;

    if !value.is_object() {
        return Err(ApiError::invalid_field(
            "Request validation failed",
            "body",
            "Expected a JSON object",
        ));
    }

    let parsed: T = serde_json::from_value(value).map_err(|e| {
        let reason = e.to_string();
        match missing_field_name(&reason) {
            Some(field) => ApiError::invalid_field("Request validation failed", field, "Field required"),
            None => ApiError::invalid_field("Request validation failed", "body", reason),
        }
    })?;

    parsed
        .validate()
        .map_err(|field_errors| ApiError::unprocessable_entity("Request validation failed", field_errors))?;

    Ok(parsed)
}

/// serde reports absent fields as "missing field `name`"
fn missing_field_name(reason: &str) -> Option<&str> {
    reason
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
}
