//! Error handling shared by the platform services.
//!
//! HTTP failures are captured as an [`ApiError`] first so the status code is
//! still available to callers that care, then folded into [`IdeaHubError`].

use std::fmt;

use crate::error::IdeaHubError;

/// Generic API error produced by any platform service.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code, if available
    pub status: Option<reqwest::StatusCode>,
    /// Human-readable error message
    pub message: String,
    /// Service name for context (e.g., "ideas", "zoom")
    pub service: &'static str,
}

impl ApiError {
    /// Create a new API error with HTTP status information.
    pub fn with_status(
        message: impl Into<String>,
        service: &'static str,
        status: reqwest::StatusCode,
    ) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
            service,
        }
    }

    /// Whether the platform rejected our credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status.map(|s| s.as_u16()), Some(401) | Some(403))
    }

    /// Convert this error to an IdeaHubError.
    pub fn to_ideahub_error(&self) -> IdeaHubError {
        if self.is_unauthorized() {
            return IdeaHubError::Auth(format!(
                "{} service rejected the request: {}",
                self.service, self.message
            ));
        }

        IdeaHubError::Api(format!("{} service error: {}", self.service, self.message))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<ApiError> for IdeaHubError {
    fn from(error: ApiError) -> Self {
        error.to_ideahub_error()
    }
}

/// Build an error message from a failed response status and its body.
///
/// The platform answers errors with `{"message": "..."}`; anything else is
/// reported with the status line alone.
pub fn build_status_message(status: reqwest::StatusCode, body: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Unknown");
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string));

    match detail {
        Some(detail) if !detail.is_empty() => {
            format!("HTTP {} {}: {}", status.as_u16(), reason, detail)
        }
        _ => format!("HTTP {} {}", status.as_u16(), reason),
    }
}
