use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    NotFound,
    CollaboratorUnavailable,
    Internal,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorCode::Validation => "validation",
            ErrorCode::NotFound => "not_found",
            ErrorCode::CollaboratorUnavailable => "collaborator_unavailable",
            ErrorCode::Internal => "internal",
        };
        f.write_str(text)
    }
}

/// Error body returned by the HTTP surface.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Validation, message)
    }

    pub fn internal(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::Internal, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_round_trips_snake_case_code() {
        let err = ApiError::validation("too many substances");
        let json = serde_json::to_string(&err).expect("json");
        assert!(json.contains("\"validation\""));
        assert_eq!(err.to_string(), "validation: too many substances");

        let parsed: ApiError =
            serde_json::from_str(r#"{"code":"collaborator_unavailable","message":"down"}"#)
                .expect("parse");
        assert_eq!(parsed.code, ErrorCode::CollaboratorUnavailable);
    }
}
