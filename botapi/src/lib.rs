//! # botapi: Telegram Bot API library
//!
//! `botapi` wires two focused sub-crates together for convenience:
//!
//! | Sub-crate       | Role                                                        |
//! |-----------------|-------------------------------------------------------------|
//! | `botapi-types`  | Models, parameter bags, discriminated-union JSON codec       |
//! | `botapi-client` | HTTP client: body selection, envelope decoding, call styles |
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use botapi::{Client, types::{InlineKeyboardButton, InlineKeyboardMarkup}};
//! use botapi::functions::SendMessage;
//!
//! # async fn run() -> Result<(), botapi::InvocationError> {
//! let client = Client::new("123456:ABC-DEF")?;
//!
//! let keyboard = InlineKeyboardMarkup::new()
//!     .row([InlineKeyboardButton::callback_data("Yes", "vote:yes").checked()?]);
//! let req = SendMessage::new("@my_channel", "Ship it?").reply_markup(keyboard);
//! client.invoke(&req).await?;
//! # Ok(()) }
//! ```
//!
//! ## Types only
//!
//! Disable the default `client` feature to depend on the models and codec
//! without an HTTP stack.

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Re-export of [`botapi_types`]: models, parameter bags and codec.
pub use botapi_types as raw;

/// Re-export of [`botapi_client`] (requires `feature = "client"`).
#[cfg(feature = "client")]
pub use botapi_client as client;

// ─── Convenience re-exports ───────────────────────────────────────────────────

pub use botapi_types::{
    ArgumentError,
    Discriminated,
    Params,
    RemoteCall,
    functions,
    types,
};

#[cfg(feature = "client")]
pub use botapi_client::{
    CancellationToken,
    Client,
    Config,
    ErrorPolicy,
    InvocationError,
    RemoteCallError,
};
