use crate::ArgumentError;
use crate::types::{ChatId, ChatMember, ChatPermissions};

use super::require_chat;

fn validate_chat_user(chat_id: &ChatId, user_id: i64) -> Result<(), ArgumentError> {
    require_chat(chat_id)?;
    if user_id == 0 {
        return Err(ArgumentError::new("user_id", "must be non-zero"));
    }
    Ok(())
}

// ─── restrictChatMember ───────────────────────────────────────────────────────

/// `restrictChatMember`: change what a supergroup member may do.
#[derive(Clone, Debug, PartialEq)]
pub struct RestrictChatMember {
    pub chat_id:                          ChatId,
    pub user_id:                          i64,
    pub permissions:                      ChatPermissions,
    pub use_independent_chat_permissions: Option<bool>,
    /// Unix time when restrictions are lifted; absent or `0` means forever.
    pub until_date:                       Option<i64>,
}

impl RestrictChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64, permissions: ChatPermissions) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
            permissions,
            use_independent_chat_permissions: None,
            until_date: None,
        }
    }

    pub fn until(mut self, unix_time: i64) -> Self {
        self.until_date = Some(unix_time);
        self
    }
}

remote_call! {
    RestrictChatMember => "restrictChatMember" -> bool;
    "chat_id"                          => chat_id:                          Scalar,
    "user_id"                          => user_id:                          Scalar,
    "permissions"                      => permissions:                      Composite,
    "use_independent_chat_permissions" => use_independent_chat_permissions: Scalar,
    "until_date"                       => until_date:                       Scalar,
    validate: validate_restrict;
}

fn validate_restrict(bag: &RestrictChatMember) -> Result<(), ArgumentError> {
    validate_chat_user(&bag.chat_id, bag.user_id)
}

// ─── promoteChatMember ────────────────────────────────────────────────────────

/// `promoteChatMember`: grant or revoke administrator rights.
///
/// Every flag left as `None` keeps the server default (`false`); passing all
/// `false` demotes the user.
#[derive(Clone, Debug, PartialEq)]
pub struct PromoteChatMember {
    pub chat_id:                ChatId,
    pub user_id:                i64,
    pub is_anonymous:           Option<bool>,
    pub can_manage_chat:        Option<bool>,
    pub can_delete_messages:    Option<bool>,
    pub can_manage_video_chats: Option<bool>,
    pub can_restrict_members:   Option<bool>,
    pub can_promote_members:    Option<bool>,
    pub can_change_info:        Option<bool>,
    pub can_invite_users:       Option<bool>,
    pub can_post_messages:      Option<bool>,
    pub can_edit_messages:      Option<bool>,
    pub can_pin_messages:       Option<bool>,
    pub can_manage_topics:      Option<bool>,
}

impl PromoteChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self {
            chat_id:                chat_id.into(),
            user_id,
            is_anonymous:           None,
            can_manage_chat:        None,
            can_delete_messages:    None,
            can_manage_video_chats: None,
            can_restrict_members:   None,
            can_promote_members:    None,
            can_change_info:        None,
            can_invite_users:       None,
            can_post_messages:      None,
            can_edit_messages:      None,
            can_pin_messages:       None,
            can_manage_topics:      None,
        }
    }
}

remote_call! {
    PromoteChatMember => "promoteChatMember" -> bool;
    "chat_id"                => chat_id:                Scalar,
    "user_id"                => user_id:                Scalar,
    "is_anonymous"           => is_anonymous:           Scalar,
    "can_manage_chat"        => can_manage_chat:        Scalar,
    "can_delete_messages"    => can_delete_messages:    Scalar,
    "can_manage_video_chats" => can_manage_video_chats: Scalar,
    "can_restrict_members"   => can_restrict_members:   Scalar,
    "can_promote_members"    => can_promote_members:    Scalar,
    "can_change_info"        => can_change_info:        Scalar,
    "can_invite_users"       => can_invite_users:       Scalar,
    "can_post_messages"      => can_post_messages:      Scalar,
    "can_edit_messages"      => can_edit_messages:      Scalar,
    "can_pin_messages"       => can_pin_messages:       Scalar,
    "can_manage_topics"      => can_manage_topics:      Scalar,
    validate: validate_promote;
}

fn validate_promote(bag: &PromoteChatMember) -> Result<(), ArgumentError> {
    validate_chat_user(&bag.chat_id, bag.user_id)
}

// ─── getChatMember / getChatAdministrators ────────────────────────────────────

/// `getChatMember`: one member's status.
///
/// Resolves to `None` only when remote errors are suppressed.
#[derive(Clone, Debug, PartialEq)]
pub struct GetChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl GetChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self { chat_id: chat_id.into(), user_id }
    }
}

remote_call! {
    GetChatMember => "getChatMember" -> Option<ChatMember>;
    "chat_id" => chat_id: Scalar,
    "user_id" => user_id: Scalar,
    validate: validate_get_member;
}

fn validate_get_member(bag: &GetChatMember) -> Result<(), ArgumentError> {
    validate_chat_user(&bag.chat_id, bag.user_id)
}

/// `getChatAdministrators`: every non-bot administrator of a chat.
#[derive(Clone, Debug, PartialEq)]
pub struct GetChatAdministrators {
    pub chat_id: ChatId,
}

impl GetChatAdministrators {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self { chat_id: chat_id.into() }
    }
}

remote_call! {
    GetChatAdministrators => "getChatAdministrators" -> Vec<ChatMember>;
    "chat_id" => chat_id: Scalar,
    validate: validate_get_admins;
}

fn validate_get_admins(bag: &GetChatAdministrators) -> Result<(), ArgumentError> {
    require_chat(&bag.chat_id)
}

// ─── Forum topics ─────────────────────────────────────────────────────────────

/// `deleteForumTopic`: delete a topic and all its messages.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteForumTopic {
    pub chat_id:           ChatId,
    pub message_thread_id: i64,
}

impl DeleteForumTopic {
    pub fn new(chat_id: impl Into<ChatId>, message_thread_id: i64) -> Self {
        Self { chat_id: chat_id.into(), message_thread_id }
    }
}

remote_call! {
    DeleteForumTopic => "deleteForumTopic" -> bool;
    "chat_id"           => chat_id:           Scalar,
    "message_thread_id" => message_thread_id: Scalar,
    validate: validate_delete_topic;
}

fn validate_delete_topic(bag: &DeleteForumTopic) -> Result<(), ArgumentError> {
    require_chat(&bag.chat_id)
}

/// `closeGeneralForumTopic`: close the forum's "General" topic.
#[derive(Clone, Debug, PartialEq)]
pub struct CloseGeneralForumTopic {
    pub chat_id: ChatId,
}

impl CloseGeneralForumTopic {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self { chat_id: chat_id.into() }
    }
}

remote_call! {
    CloseGeneralForumTopic => "closeGeneralForumTopic" -> bool;
    "chat_id" => chat_id: Scalar,
    validate: validate_close_general;
}

fn validate_close_general(bag: &CloseGeneralForumTopic) -> Result<(), ArgumentError> {
    require_chat(&bag.chat_id)
}
