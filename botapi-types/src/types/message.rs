use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{Chat, ChatMember, InlineKeyboardMarkup, User};

// ─── Files as received ────────────────────────────────────────────────────────

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSize {
    pub file_id:        String,
    pub file_unique_id: String,
    pub width:          u32,
    pub height:         u32,
    pub file_size:      Option<u64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub file_id:        String,
    pub file_unique_id: String,
    pub thumbnail:      Option<PhotoSize>,
    pub file_name:      Option<String>,
    pub mime_type:      Option<String>,
    pub file_size:      Option<u64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    pub file_id:        String,
    pub file_unique_id: String,
    pub width:          u32,
    pub height:         u32,
    pub duration:       u32,
    pub thumbnail:      Option<PhotoSize>,
    pub file_name:      Option<String>,
    pub mime_type:      Option<String>,
    pub file_size:      Option<u64>,
}

// ─── Message ──────────────────────────────────────────────────────────────────

/// A message, as returned by `send*` methods and carried in updates.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message_id:        i64,
    pub message_thread_id: Option<i64>,
    pub from:              Option<User>,
    pub chat:              Chat,
    pub date:              i64,
    pub text:              Option<String>,
    pub caption:           Option<String>,
    pub document:          Option<Document>,
    pub animation:         Option<Animation>,
    pub photo:             Option<Vec<PhotoSize>>,
    pub reply_markup:      Option<InlineKeyboardMarkup>,
}

impl Message {
    /// The text, or the media caption if there is no text.
    pub fn text_or_caption(&self) -> Option<&str> {
        self.text.as_deref().or(self.caption.as_deref())
    }
}

/// A press on an inline keyboard button.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id:                String,
    pub from:              User,
    pub message:           Option<Message>,
    pub inline_message_id: Option<String>,
    pub chat_instance:     String,
    pub data:              Option<String>,
    pub game_short_name:   Option<String>,
}

/// A change in a chat member's status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberUpdated {
    pub chat:            Chat,
    pub from:            User,
    pub date:            i64,
    pub old_chat_member: ChatMember,
    pub new_chat_member: ChatMember,
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// An incoming update returned by `getUpdates`.
///
/// At most one of the optional payloads is present.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub update_id:      i64,
    pub message:        Option<Message>,
    pub edited_message: Option<Message>,
    pub callback_query: Option<CallbackQuery>,
    pub my_chat_member: Option<ChatMemberUpdated>,
    pub chat_member:    Option<ChatMemberUpdated>,
}

/// Borrowed view of the payload an [`Update`] carries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UpdateKind<'a> {
    Message(&'a Message),
    EditedMessage(&'a Message),
    CallbackQuery(&'a CallbackQuery),
    MyChatMember(&'a ChatMemberUpdated),
    ChatMember(&'a ChatMemberUpdated),
    /// A payload type this crate does not model.
    Other,
}

impl Update {
    pub fn kind(&self) -> UpdateKind<'_> {
        if let Some(m) = &self.message             { return UpdateKind::Message(m); }
        if let Some(m) = &self.edited_message      { return UpdateKind::EditedMessage(m); }
        if let Some(q) = &self.callback_query      { return UpdateKind::CallbackQuery(q); }
        if let Some(c) = &self.my_chat_member      { return UpdateKind::MyChatMember(c); }
        if let Some(c) = &self.chat_member         { return UpdateKind::ChatMember(c); }
        UpdateKind::Other
    }
}
