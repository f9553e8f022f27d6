//! Client error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every failure a handler can see collapses into one of these variants.
//! Handlers catch at the call site, log the full error, and show the short
//! `user_message` in the status banner; nothing propagates into the view
//! tree.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors surfaced by the network layer and input validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Client-side input rejection; never reaches the network.
    #[error("{0}")]
    Validation(String),

    /// Rejection from the identity provider.
    #[error("{0}")]
    Auth(String),

    /// Non-2xx from the REST backend, message from its `detail` field
    /// when present.
    #[error("{0}")]
    Backend(String),

    /// Non-2xx from the artifact download endpoint.
    #[error("download failed: {status} {body}")]
    Download { status: u16, body: String },

    /// Transport-level failure before any HTTP status was received.
    #[error("network error: {0}")]
    Network(String),
}

impl ClientError {
    /// Short text for the status banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::Auth(msg) | Self::Backend(msg) => msg.clone(),
            Self::Download { status, body } => {
                if body.is_empty() {
                    format!("Download failed ({status}).")
                } else {
                    format!("Download failed ({status}): {body}")
                }
            }
            Self::Network(_) => "Network error. Please try again.".to_owned(),
        }
    }

    /// Build a `Backend` error from a non-2xx response body, preferring the
    /// server-supplied `detail` field over the generic fallback.
    pub fn backend_from_body(body: &str, fallback: &str) -> Self {
        Self::Backend(extract_detail(body).unwrap_or_else(|| fallback.to_owned()))
    }
}

/// Pull the `detail` string out of an error response body, if the body is
/// JSON and carries one.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}
