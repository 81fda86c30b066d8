//! Error types for assistant-kit.
//!
//! Every failure keeps its cause distinguishable: configuration problems,
//! missing or malformed definition files, transport failures, and error
//! responses from the remote service each map to their own variant.

use crate::types::{RunId, RunStatus};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Unified error type for the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The client could not be constructed (missing credential, bad base URL).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An assistant definition file does not exist.
    #[error("Definition file not found: {path}")]
    FileNotFound { path: String },

    /// An assistant definition file exists but is not a valid YAML mapping.
    #[error("Failed to parse assistant definition {path}: {reason}")]
    Parse { path: String, reason: String },

    /// The HTTP request never produced a response (DNS, TLS, timeout, ...).
    #[error("Network transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote service answered with an error status.
    #[error("Remote error: HTTP {status} ({kind}): {message}")]
    Remote {
        status: u16,
        kind: String,
        code: Option<String>,
        message: String,
        retryable: bool,
    },

    /// A response body could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A run reached a terminal status other than `completed`.
    #[error("Run {run_id} ended with status {status}: {message}")]
    RunFailed {
        run_id: RunId,
        status: RunStatus,
        message: String,
    },

    /// A run stayed non-terminal past the configured deadline.
    #[error("Run {run_id} did not reach a terminal status within {timeout:?}")]
    RunTimedOut { run_id: RunId, timeout: Duration },

    /// A run completed but the thread holds no assistant reply for it.
    #[error("Run {run_id} completed without producing an assistant message")]
    EmptyRun { run_id: RunId },
}

/// Error envelope used by the remote service:
/// `{"error": {"message": ..., "type": ..., "code": ...}}`.
#[derive(Debug, Deserialize)]
struct RemoteErrorEnvelope {
    error: RemoteErrorBody,
}

#[derive(Debug, Deserialize)]
struct RemoteErrorBody {
    #[serde(default)]
    message: String,
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

impl Error {
    /// Build an [`Error::Remote`] from an HTTP status and raw response body.
    ///
    /// Bodies that do not match the service's error envelope are kept verbatim
    /// as the message so nothing is lost.
    pub(crate) fn remote(status: u16, body: &str) -> Self {
        let parsed: Option<RemoteErrorEnvelope> = serde_json::from_str(body).ok();
        let (message, kind, code) = match parsed {
            Some(envelope) => (
                envelope.error.message,
                envelope.error.kind.unwrap_or_else(|| "api_error".to_string()),
                envelope.error.code,
            ),
            None => (body.trim().to_string(), "api_error".to_string(), None),
        };

        Error::Remote {
            status,
            kind,
            code,
            message,
            retryable: is_retryable_status(status),
        }
    }

    /// Whether retrying the same request could reasonably succeed.
    ///
    /// Only remote failures carry a classification; everything else needs a
    /// caller-side fix first.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Remote { retryable: true, .. })
    }
}

fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 409 | 429) || status >= 500
}
