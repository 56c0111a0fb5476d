//! Error types for botapi-client.
//!
//! Local misuse, undecodable responses and server-side rejections are kept
//! apart so callers can branch on which side failed.

use botapi_types::types::ResponseParameters;
use botapi_types::{ArgumentError, EncodeError};

// ─── RemoteCallError ──────────────────────────────────────────────────────────

/// An error returned by the Bot API in an `{"ok": false, ...}` envelope.
///
/// # Example
/// `{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 3","parameters":{"retry_after":3}}`
/// → `RemoteCallError { code: 429, description: "Too Many Requests: retry after 3", parameters: Some(..) }`
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("remote error {code}: {description}")]
pub struct RemoteCallError {
    /// HTTP-like status code from `error_code`.
    pub code:        i32,
    /// Human-readable `description`.
    pub description: String,
    /// Retry hints, passed through unmodified.
    pub parameters:  Option<ResponseParameters>,
}

impl RemoteCallError {
    /// Match on the description, with optional wildcard prefix/suffix `'*'`.
    ///
    /// # Examples
    /// - `err.is("Forbidden: bot was blocked by the user")`: exact match
    /// - `err.is("Bad Request: *")`: starts-with match
    /// - `err.is("*not found")`: ends-with match
    pub fn is(&self, pattern: &str) -> bool {
        if let Some(prefix) = pattern.strip_suffix('*') {
            self.description.starts_with(prefix)
        } else if let Some(suffix) = pattern.strip_prefix('*') {
            self.description.ends_with(suffix)
        } else {
            self.description == pattern
        }
    }

    /// Seconds to wait before repeating the request, if the server said so.
    pub fn retry_after(&self) -> Option<u32> {
        self.parameters.as_ref()?.retry_after
    }

    /// New supergroup id when the target group was migrated.
    pub fn migrate_to_chat_id(&self) -> Option<i64> {
        self.parameters.as_ref()?.migrate_to_chat_id
    }
}

// ─── DecodeError ──────────────────────────────────────────────────────────────

/// The response body could not be understood.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("decode error: {reason}")]
pub struct DecodeError {
    pub reason: String,
}

impl DecodeError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self { Self::new(e.to_string()) }
}

// ─── InvocationError ──────────────────────────────────────────────────────────

/// The error type returned from any `Client` method that talks to the Bot API.
#[derive(Debug, thiserror::Error)]
pub enum InvocationError {
    /// An argument was rejected before any network activity.
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    /// The parameter bag could not be turned into a request body.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
    /// The response body was not a valid envelope or result.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The server rejected the request.
    #[error(transparent)]
    Remote(#[from] RemoteCallError),
    /// Non-success HTTP status without a JSON envelope to explain it.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    /// Connection, TLS or timeout failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Local I/O failure, e.g. building the blocking runtime.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The call's cancellation token fired before it completed.
    #[error("request cancelled")]
    Cancelled,
}

impl InvocationError {
    /// Returns `true` if this is a remote error whose description matches
    /// `pattern` (supports `'*'` wildcards).
    pub fn is(&self, pattern: &str) -> bool {
        match self {
            Self::Remote(e) => e.is(pattern),
            _               => false,
        }
    }

    /// The remote error, if this is one.
    pub fn remote(&self) -> Option<&RemoteCallError> {
        match self {
            Self::Remote(e) => Some(e),
            _               => None,
        }
    }

    /// If the server asked to slow down, how many seconds to wait.
    pub fn retry_after(&self) -> Option<u32> {
        self.remote()?.retry_after()
    }

    /// `true` for the error produced by a fired cancellation token.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
