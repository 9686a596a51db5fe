use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use chrono::Utc;
use serde_json::json;
use std::collections::BTreeMap;

/// Domain errors raised by the service layer; translated into HTTP
/// responses at the boundary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Requested id does not exist.
    #[error("{0}")]
    NotFound(String),
    /// Request payload failed field constraints; holds field -> message.
    #[error("Validation failed")]
    Validation(BTreeMap<String, String>),
    /// Semantically invalid query parameters or path segments.
    #[error("{0}")]
    InvalidArgument(String),
    /// Anything unanticipated; details stay in the log.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn error_label(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "Not Found",
            Self::Validation(_) => "Validation Error",
            Self::InvalidArgument(_) => "Bad Request",
            Self::Internal(_) => "Internal Server Error",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = match self {
            Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        let mut body = json!({
            "timestamp": Utc::now(),
            "status": status.as_u16(),
            "error": self.error_label(),
            "message": message,
        });
        if let Self::Validation(errors) = self {
            body["errors"] = json!(errors);
        }
        HttpResponse::build(status).json(body)
    }
}

// Storage-layer errors are logged where they occur and carry no detail
// worth forwarding.
impl From<String> for ApiError {
    fn from(message: String) -> Self {
        Self::Internal(message)
    }
}

/// Flattens serde_valid output into a field -> message map, keeping the
/// first message per field.
pub fn validation_errors<E: serde::Serialize>(errors: &E) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    if let Ok(value) = serde_json::to_value(errors) {
        if let Some(properties) = value.get("properties").and_then(|v| v.as_object()) {
            for (field, detail) in properties {
                let message = detail
                    .get("errors")
                    .and_then(|e| e.as_array())
                    .and_then(|e| e.first())
                    .and_then(|e| e.as_str())
                    .unwrap_or("Invalid value")
                    .to_string();
                map.insert(field.clone(), message);
            }
        }
    }
    map
}
