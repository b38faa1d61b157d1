//! Error taxonomy and response classification.
//!
//! Every API call resolves to either a decoded envelope or exactly one
//! [`Error`]. Non-2xx responses are classified from their status code and
//! body into semantic variants; network failures and JSON decode failures
//! are a distinct transport branch and are never retried by the client.
//!
//! # Example
//!
//! ```rust,ignore
//! match client.pages().create(&page).await {
//!     Ok(page) => println!("created page {}", page.id.unwrap_or(0)),
//!     Err(Error::Validation { errors, .. }) => {
//!         for (field, messages) in errors {
//!             println!("{field}: {messages:?}");
//!         }
//!     }
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use std::collections::HashMap;

use thiserror::Error;

/// Error type for all Admin API operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The shop's API call limit was hit (HTTP 429). Retried automatically
    /// up to the configured retry budget.
    #[error("rate limited (HTTP {status}): {message}")]
    RateLimited {
        /// The HTTP status code (429, or a platform-specific equivalent).
        status: u16,
        /// Best-effort message extracted from the response body.
        message: String,
        /// Seconds to wait before retrying, from the `Retry-After` header.
        retry_after: Option<f64>,
    },

    /// The API was temporarily unavailable (HTTP 503). Retried automatically
    /// up to the configured retry budget.
    #[error("service unavailable (HTTP {status}): {message}")]
    Unavailable {
        /// The HTTP status code.
        status: u16,
        /// Best-effort message extracted from the response body.
        message: String,
        /// Seconds to wait before retrying, from the `Retry-After` header.
        retry_after: Option<f64>,
    },

    /// The API rejected the request body (HTTP 422, or any response carrying
    /// a field-keyed error payload). Never retried.
    #[error("validation failed: {errors:?}")]
    Validation {
        /// The HTTP status code.
        status: u16,
        /// Field name mapped to the validation messages for that field.
        errors: HashMap<String, Vec<String>>,
    },

    /// The requested resource does not exist (HTTP 404). Never retried.
    #[error("not found (HTTP {status}): {message}")]
    NotFound {
        /// The HTTP status code.
        status: u16,
        /// Best-effort message extracted from the response body.
        message: String,
    },

    /// Any other non-2xx response. Never retried.
    #[error("HTTP {status}: {message}")]
    Response {
        /// The HTTP status code.
        status: u16,
        /// Best-effort message extracted from the response body.
        message: String,
    },

    /// A network-level failure (connection refused, timeout, DNS, TLS).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx response body that failed to decode into the expected envelope.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid client configuration detected at construction time.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` for the transient error classes the retry loop is
    /// allowed to retry.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Unavailable { .. })
    }

    /// Returns the server-requested retry delay in seconds, if any.
    #[must_use]
    pub const fn retry_after(&self) -> Option<f64> {
        match self {
            Self::RateLimited { retry_after, .. } | Self::Unavailable { retry_after, .. } => {
                *retry_after
            }
            _ => None,
        }
    }

    /// Returns the HTTP status code for API-level errors.
    ///
    /// Transport errors (network, decode) and configuration errors have no
    /// status of their own and return `None`.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RateLimited { status, .. }
            | Self::Unavailable { status, .. }
            | Self::Validation { status, .. }
            | Self::NotFound { status, .. }
            | Self::Response { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::Decode(_) | Self::Config(_) => None,
        }
    }
}

// Verify Error is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
};

/// Classifies a non-2xx response from its status code, `Retry-After` header
/// and body.
pub(crate) fn classify_response(status: u16, retry_after: Option<f64>, body: &str) -> Error {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();

    match status {
        429 => Error::RateLimited {
            status,
            message: extract_message(parsed.as_ref(), body),
            retry_after,
        },
        503 => Error::Unavailable {
            status,
            message: extract_message(parsed.as_ref(), body),
            retry_after,
        },
        404 => Error::NotFound {
            status,
            message: extract_message(parsed.as_ref(), body),
        },
        422 => Error::Validation {
            status,
            errors: parse_validation_errors(parsed.as_ref()),
        },
        _ => {
            // Any payload keyed by field name is treated as a validation
            // failure regardless of status
            if let Some(serde_json::Value::Object(_)) =
                parsed.as_ref().and_then(|v| v.get("errors"))
            {
                return Error::Validation {
                    status,
                    errors: parse_validation_errors(parsed.as_ref()),
                };
            }
            Error::Response {
                status,
                message: extract_message(parsed.as_ref(), body),
            }
        }
    }
}

/// Extracts a human-readable message from an error response body.
///
/// The API uses several shapes: `{"errors": {...}}`, `{"errors": [...]}`,
/// `{"errors": "..."}` and `{"error": "..."}`. Unparseable bodies fall back
/// to the raw text.
fn extract_message(body: Option<&serde_json::Value>, raw: &str) -> String {
    let Some(body) = body else {
        return raw.trim().to_string();
    };

    match body.get("errors").or_else(|| body.get("error")) {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Array(arr)) => arr
            .iter()
            .filter_map(serde_json::Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
        None => raw.trim().to_string(),
    }
}

/// Parses a field-keyed validation payload into a field → messages map.
///
/// Array and string payloads are mapped under the `"base"` key so callers
/// always receive the same shape.
fn parse_validation_errors(body: Option<&serde_json::Value>) -> HashMap<String, Vec<String>> {
    let mut result = HashMap::new();

    let Some(errors) = body.and_then(|v| v.get("errors")) else {
        return result;
    };

    match errors {
        serde_json::Value::Object(map) => {
            for (field, messages) in map {
                let msgs: Vec<String> = match messages {
                    serde_json::Value::Array(arr) => arr
                        .iter()
                        .filter_map(|v| v.as_str().map(ToString::to_string))
                        .collect(),
                    serde_json::Value::String(s) => vec![s.clone()],
                    _ => vec![messages.to_string()],
                };
                result.insert(field.clone(), msgs);
            }
        }
        serde_json::Value::Array(arr) => {
            let msgs: Vec<String> = arr
                .iter()
                .filter_map(|v| v.as_str().map(ToString::to_string))
                .collect();
            if !msgs.is_empty() {
                result.insert("base".to_string(), msgs);
            }
        }
        serde_json::Value::String(s) => {
            result.insert("base".to_string(), vec![s.clone()]);
        }
        _ => {}
    }

    result
}
