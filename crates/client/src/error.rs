use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// How a failed call should be treated by a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced a usable response
    TransportFailure,
    /// The server answered with a non-2xx status and a body
    ServerValidationFailure,
    /// The server answered 404
    NotFound,
}

/// Failure of a single resource call
///
/// The server payload is kept verbatim so the view can show it as-is.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with {status}: {body}")]
    Status { status: StatusCode, body: Value },
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::TransportFailure,
            Self::Status { status, .. } if *status == StatusCode::NOT_FOUND => ErrorKind::NotFound,
            Self::Status { .. } => ErrorKind::ServerValidationFailure,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// The raw rejection payload: the response body, or the transport error text
    pub fn payload(&self) -> Value {
        match self {
            Self::Transport(e) => Value::String(e.to_string()),
            Self::Status { body, .. } => body.clone(),
        }
    }

    /// The `message` field of the response body
    ///
    /// Falls back to a plain-text body, then to the status reason.
    pub fn message(&self) -> String {
        match self {
            Self::Transport(e) => e.to_string(),
            Self::Status { status, body } => match body {
                Value::Object(map) => map
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_owned)
                    .unwrap_or_else(|| reason(*status)),
                Value::String(s) if !s.trim().is_empty() => s.clone(),
                _ => reason(*status),
            },
        }
    }
}

fn reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_owned)
        .unwrap_or_else(|| status.to_string())
}
