// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types with a uniform `{code, message, details}` shape.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name -> list of human-readable problems with that field.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Every failure the API layer can produce.
///
/// Callers match on the variant (or on [`ApiError::code`]) and never see
/// transport-level error types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP {status}: {message}")]
    Http {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Validation failed: {message}")]
    Validation {
        status: u16,
        message: String,
        details: FieldErrors,
    },

    #[error("Response decode error: {0}")]
    Decode(String),
}

impl ApiError {
    pub const NETWORK_ERROR: &'static str = "NETWORK_ERROR";
    pub const TIMEOUT: &'static str = "TIMEOUT";
    pub const HTTP_ERROR: &'static str = "HTTP_ERROR";
    pub const VALIDATION_ERROR: &'static str = "VALIDATION_ERROR";
    pub const DECODE_ERROR: &'static str = "DECODE_ERROR";

    /// Stable machine-readable code. HTTP errors report the server's code when
    /// the body carried one.
    pub fn code(&self) -> &str {
        match self {
            ApiError::Network(_) => Self::NETWORK_ERROR,
            ApiError::Timeout => Self::TIMEOUT,
            ApiError::Http { code, .. } => code.as_deref().unwrap_or(Self::HTTP_ERROR),
            ApiError::Validation { .. } => Self::VALIDATION_ERROR,
            ApiError::Decode(_) => Self::DECODE_ERROR,
        }
    }

    /// Human-readable message without the variant prefix.
    pub fn message(&self) -> String {
        match self {
            ApiError::Network(msg) | ApiError::Decode(msg) => msg.clone(),
            ApiError::Timeout => "Request timed out".to_string(),
            ApiError::Http { message, .. } | ApiError::Validation { message, .. } => {
                message.clone()
            }
        }
    }

    /// Field-level details, present only for validation failures.
    pub fn details(&self) -> Option<&FieldErrors> {
        match self {
            ApiError::Validation { details, .. } => Some(details),
            _ => None,
        }
    }

    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } | ApiError::Validation { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected our credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Build a client-side validation error (no response was received).
    pub fn validation(details: FieldErrors) -> Self {
        ApiError::Validation {
            status: 422,
            message: "Invalid input".to_string(),
            details,
        }
    }

    /// Convert a non-2xx response into an error, using the server's error
    /// body when it has one.
    pub(crate) fn from_response(status: u16, body: &[u8]) -> Self {
        let parsed: Option<ErrorBody> = serde_json::from_slice(body).ok();

        match parsed {
            Some(ErrorBody {
                message,
                details: Some(details),
                ..
            }) if (400..500).contains(&status) && status != 408 && !details.is_empty() => {
                ApiError::Validation {
                    status,
                    message,
                    details,
                }
            }
            Some(ErrorBody { code, message, .. }) => ApiError::Http {
                status,
                code: Some(code),
                message,
            },
            None => ApiError::Http {
                status,
                code: None,
                message: String::from_utf8_lossy(body).trim().to_string(),
            },
        }
    }

    /// The uniform serializable shape of this error.
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code().to_string(),
            message: self.message(),
            details: self.details().cloned(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Error body as sent by the backend and as exposed to views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<FieldErrors>,
}

/// Errors from the persistence backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Result type alias for API calls
pub type Result<T> = std::result::Result<T, ApiError>;
