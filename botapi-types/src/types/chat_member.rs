//! Chat member variants, discriminated by the `status` field.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::User;

tagged_union! {
    /// Information about one member of a chat.
    ///
    /// Decoded by the value of `status`; an unknown status is a decode error.
    pub enum ChatMember: "status" {
        /// Owns the chat and has every administrator privilege.
        "creator"       => Owner(ChatMemberOwner),
        /// Has some additional privileges.
        "administrator" => Administrator(ChatMemberAdministrator),
        /// Has no additional privileges or restrictions.
        "member"        => Member(ChatMemberMember),
        /// Under certain restrictions (supergroups only).
        "restricted"    => Restricted(ChatMemberRestricted),
        /// Not currently a member but may join.
        "left"          => Left(ChatMemberLeft),
        /// Banned; cannot return.
        "kicked"        => Banned(ChatMemberBanned),
    }
}

impl ChatMember {
    /// The member's user record.
    pub fn user(&self) -> &User {
        match self {
            Self::Owner(m)         => &m.user,
            Self::Administrator(m) => &m.user,
            Self::Member(m)        => &m.user,
            Self::Restricted(m)    => &m.user,
            Self::Left(m)          => &m.user,
            Self::Banned(m)        => &m.user,
        }
    }

    /// `true` if the user is currently inside the chat.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Owner(_) | Self::Administrator(_) | Self::Member(_) => true,
            Self::Restricted(m) => m.is_member,
            Self::Left(_) | Self::Banned(_) => false,
        }
    }

    /// `true` for the owner and administrators.
    pub fn is_privileged(&self) -> bool {
        matches!(self, Self::Owner(_) | Self::Administrator(_))
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMemberOwner {
    pub user:         User,
    pub is_anonymous: bool,
    pub custom_title: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMemberAdministrator {
    pub user:                   User,
    pub can_be_edited:          bool,
    pub is_anonymous:           bool,
    pub can_manage_chat:        bool,
    pub can_delete_messages:    bool,
    pub can_manage_video_chats: bool,
    pub can_restrict_members:   bool,
    pub can_promote_members:    bool,
    pub can_change_info:        bool,
    pub can_invite_users:       bool,
    pub can_post_messages:      Option<bool>,
    pub can_edit_messages:      Option<bool>,
    pub can_pin_messages:       Option<bool>,
    pub can_manage_topics:      Option<bool>,
    pub custom_title:           Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMemberMember {
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMemberRestricted {
    pub user:                      User,
    pub is_member:                 bool,
    pub can_send_messages:         bool,
    pub can_send_audios:           bool,
    pub can_send_documents:        bool,
    pub can_send_photos:           bool,
    pub can_send_videos:           bool,
    pub can_send_video_notes:      bool,
    pub can_send_voice_notes:      bool,
    pub can_send_polls:            bool,
    pub can_send_other_messages:   bool,
    pub can_add_web_page_previews: bool,
    pub can_change_info:           bool,
    pub can_invite_users:          bool,
    pub can_pin_messages:          bool,
    pub can_manage_topics:         bool,
    /// Unix time when restrictions are lifted; `0` means forever.
    pub until_date:                i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMemberLeft {
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMemberBanned {
    pub user:       User,
    /// Unix time when the ban is lifted; `0` means forever.
    pub until_date: i64,
}
