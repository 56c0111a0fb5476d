//! The `{ok, result | error_code, description, parameters}` response wrapper.

use botapi_types::types::ResponseParameters;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{DecodeError, InvocationError, RemoteCallError};

/// What to do with an `ok: false` envelope.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Return the remote error to the caller.
    #[default]
    Raise,
    /// Swallow the remote error and return the result type's default value.
    ///
    /// Decode, argument and transport errors are never suppressed.
    Suppress,
}

/// A decoded response envelope.
///
/// `result` is kept as raw JSON until [`Envelope::into_result`] knows the
/// envelope succeeded, so a failed call never trips over a malformed result.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope {
    pub ok:          bool,
    #[serde(default)]
    pub result:      Option<Value>,
    #[serde(default)]
    pub error_code:  Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parameters:  Option<ResponseParameters>,
}

impl Envelope {
    /// Parse raw response bytes. Fails if the body is not JSON or lacks `ok`.
    pub fn parse(body: &[u8]) -> Result<Self, DecodeError> {
        serde_json::from_slice(body).map_err(|e| DecodeError::new(format!("invalid envelope: {e}")))
    }

    /// The remote error carried by a failed envelope.
    pub fn error(&self) -> Option<RemoteCallError> {
        (!self.ok).then(|| RemoteCallError {
            code:        self.error_code.unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            parameters:  self.parameters.clone(),
        })
    }

    /// Unwrap `result` as `T`, or branch on `policy` for a failed envelope.
    pub fn into_result<T>(self, policy: ErrorPolicy) -> Result<T, InvocationError>
    where
        T: DeserializeOwned + Default,
    {
        if let Some(err) = self.error() {
            return match policy {
                ErrorPolicy::Raise    => Err(err.into()),
                ErrorPolicy::Suppress => {
                    tracing::debug!("[botapi] suppressed remote error {}: {}", err.code, err.description);
                    Ok(T::default())
                }
            };
        }
        let result = self
            .result
            .ok_or_else(|| DecodeError::new("envelope has ok=true but no result"))?;
        serde_json::from_value(result)
            .map_err(|e| DecodeError::new(format!("invalid result: {e}")).into())
    }
}
