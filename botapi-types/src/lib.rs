//! Telegram Bot API types, method parameter bags and the polymorphic JSON codec.
//!
//! # Overview
//!
//! | Module          | Contents                                                       |
//! |-----------------|----------------------------------------------------------------|
//! | [`types`]       | Models: users, chats, messages, keyboards, media, unions        |
//! | [`functions`]   | Parameter bags as `struct`s implementing [`RemoteCall`]         |
//! | [`deserialize`] | Discriminator-driven decoding shared by every union family      |
//! | [`serialize`]   | Static field tables, JSON body encoding, tagged union encoding  |
//!
//! # Raw API usage
//!
//! ```rust
//! use botapi_types::{functions, types::ChatPermissions, serialize};
//!
//! let req = functions::RestrictChatMember::new(
//!     123,
//!     456,
//!     ChatPermissions { can_send_messages: Some(false), ..Default::default() },
//! );
//!
//! let body = serialize::to_json_body(&req).unwrap();
//! assert_eq!(
//!     body,
//!     br#"{"chat_id":123,"user_id":456,"permissions":{"can_send_messages":false}}"#,
//! );
//! ```

#![deny(unsafe_code)]
#![allow(clippy::large_enum_variant)]

#[macro_use]
mod macros;

pub mod deserialize;
pub mod serialize;
pub mod types;
pub mod functions;

pub use deserialize::{Discriminated, VariantTable, decode_union};
pub use serialize::{Arg, EncodeError, Field, FieldKind, Params};

use serde::de::DeserializeOwned;

// ─── Core traits ──────────────────────────────────────────────────────────────

/// Marks a parameter bag that can be sent to the Bot API as a remote call.
///
/// `Return` is the type carried in the `result` field of a successful
/// response. It must have a [`Default`] so callers that suppress remote
/// errors still get a value back.
pub trait RemoteCall: Params {
    /// Method name as it appears in the request path, e.g. `sendMessage`.
    const METHOD: &'static str;

    /// The decoded `result` type.
    type Return: DeserializeOwned + Default;
}

// ─── ArgumentError ────────────────────────────────────────────────────────────

/// A required argument was absent or invalid.
///
/// Raised before any network activity.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid argument `{name}`: {reason}")]
pub struct ArgumentError {
    /// Name of the offending argument.
    pub name:   &'static str,
    /// Human-readable reason.
    pub reason: String,
}

impl ArgumentError {
    /// Build an error for argument `name`.
    pub fn new(name: &'static str, reason: impl Into<String>) -> Self {
        Self { name, reason: reason.into() }
    }

    /// Shorthand for an empty required string.
    pub fn empty(name: &'static str) -> Self {
        Self::new(name, "must not be empty")
    }
}
