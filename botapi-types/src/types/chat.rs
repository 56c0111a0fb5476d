use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

// ─── User ─────────────────────────────────────────────────────────────────────

/// A Telegram user or bot.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id:            i64,
    pub is_bot:        bool,
    pub first_name:    String,
    pub last_name:     Option<String>,
    pub username:      Option<String>,
    pub language_code: Option<String>,
}

impl User {
    /// `first_name last_name`, trimmed.
    pub fn full_name(&self) -> String {
        let last = self.last_name.as_deref().unwrap_or("");
        format!("{} {last}", self.first_name).trim().to_string()
    }
}

// ─── Chat ─────────────────────────────────────────────────────────────────────

/// A private chat, group, supergroup or channel.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id:         i64,
    /// `private`, `group`, `supergroup` or `channel`.
    #[serde(rename = "type")]
    pub kind:       String,
    pub title:      Option<String>,
    pub username:   Option<String>,
    pub first_name: Option<String>,
    pub last_name:  Option<String>,
    pub is_forum:   Option<bool>,
}

// ─── ChatId ───────────────────────────────────────────────────────────────────

/// Target chat: a numeric id or a public `@username`.
///
/// Serialized as a bare number or string, matching the Bot API's
/// `Integer or String` parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl ChatId {
    /// `true` for an empty username, which the server would reject.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Username(u) if u.trim().is_empty())
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self { Self::Id(id) }
}

impl From<i32> for ChatId {
    fn from(id: i32) -> Self { Self::Id(id.into()) }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self { Self::Username(username.to_owned()) }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self { Self::Username(username) }
}

// ─── ChatPermissions ──────────────────────────────────────────────────────────

/// What non-administrator members are allowed to do. Unset flags are omitted.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPermissions {
    pub can_send_messages:         Option<bool>,
    pub can_send_audios:           Option<bool>,
    pub can_send_documents:        Option<bool>,
    pub can_send_photos:           Option<bool>,
    pub can_send_videos:           Option<bool>,
    pub can_send_video_notes:      Option<bool>,
    pub can_send_voice_notes:      Option<bool>,
    pub can_send_polls:            Option<bool>,
    pub can_send_other_messages:   Option<bool>,
    pub can_add_web_page_previews: Option<bool>,
    pub can_change_info:           Option<bool>,
    pub can_invite_users:          Option<bool>,
    pub can_pin_messages:          Option<bool>,
    pub can_manage_topics:         Option<bool>,
}

impl ChatPermissions {
    /// Every permission granted; lifts all restrictions.
    pub fn all() -> Self {
        let t = Some(true);
        Self {
            can_send_messages:         t,
            can_send_audios:           t,
            can_send_documents:        t,
            can_send_photos:           t,
            can_send_videos:           t,
            can_send_video_notes:      t,
            can_send_voice_notes:      t,
            can_send_polls:            t,
            can_send_other_messages:   t,
            can_add_web_page_previews: t,
            can_change_info:           t,
            can_invite_users:          t,
            can_pin_messages:          t,
            can_manage_topics:         t,
        }
    }

    /// Read-only member: may not send anything.
    pub fn muted() -> Self {
        Self { can_send_messages: Some(false), ..Default::default() }
    }
}

// ─── ResponseParameters ───────────────────────────────────────────────────────

/// Hints attached to a failed response describing how it can be retried.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// The group was migrated to a supergroup with this id.
    pub migrate_to_chat_id: Option<i64>,
    /// Seconds to wait before the request may be repeated.
    pub retry_after:        Option<u32>,
}
