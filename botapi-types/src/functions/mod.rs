//! Remote method parameter bags.
//!
//! Each bag is a plain `struct` whose field table, method name and return
//! type are declared through `remote_call!`. Optional fields left as `None`
//! are never sent.

mod chats;
mod inline;
mod messages;
mod updates;

pub use chats::{
    CloseGeneralForumTopic, DeleteForumTopic, GetChatAdministrators, GetChatMember,
    PromoteChatMember, RestrictChatMember,
};
pub use inline::{AnswerCallbackQuery, AnswerInlineQuery};
pub use messages::{SendAnimation, SendDocument, SendMediaGroup, SendMessage};
pub use updates::{GetMe, GetUpdates};

use crate::ArgumentError;
use crate::types::ChatId;

pub(crate) fn require_chat(chat_id: &ChatId) -> Result<(), ArgumentError> {
    if chat_id.is_empty() {
        return Err(ArgumentError::empty("chat_id"));
    }
    Ok(())
}

pub(crate) fn require_text(name: &'static str, value: &str) -> Result<(), ArgumentError> {
    if value.trim().is_empty() {
        return Err(ArgumentError::empty(name));
    }
    Ok(())
}
