//! API error taxonomy.
//!
//! Three families, mirroring how callers react: transport failures, server
//! rejections (with the server's own message when it sent one), and session
//! expiry (callers redirect to sign-in, no retry is offered). Decoding
//! failures get their own variant so a malformed body is never mistaken for
//! a transport problem.

use thiserror::Error;

/// Generic fallback shown when the server did not provide a message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Gagal memproses permintaan. Cek koneksi ke server.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure; the request may never have reached the
    /// server.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// 401: the session is missing or expired.
    #[error("not authenticated")]
    Unauthenticated,

    /// The client itself was misconfigured (bad header value, bad URL).
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Build an [`ApiError::Api`] from a non-success response body.
    ///
    /// Message precedence follows the server's conventions: a top-level
    /// `message`, else the joined `errors[].msg` list, else the generic
    /// fallback.
    pub(crate) fn from_error_body(status: u16, body: &str) -> Self {
        let message =
            extract_server_message(body).unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_owned());
        ApiError::Api { status, message }
    }
}

fn extract_server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
        if !message.trim().is_empty() {
            return Some(message.to_owned());
        }
    }

    let msgs: Vec<&str> = value
        .get("errors")?
        .as_array()?
        .iter()
        .filter_map(|e| e.get("msg").and_then(|m| m.as_str()))
        .collect();
    if msgs.is_empty() {
        None
    } else {
        Some(msgs.join("; "))
    }
}
