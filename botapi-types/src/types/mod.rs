//! Bot API models.
//!
//! Only the fields the client itself reads or writes are modelled; unknown
//! fields in responses are ignored by serde.

mod chat;
mod chat_member;
mod file;
mod inline;
mod keyboard;
mod media;
mod message;

pub use chat::{Chat, ChatId, ChatPermissions, ResponseParameters, User};
pub use chat_member::{
    ChatMember, ChatMemberAdministrator, ChatMemberBanned, ChatMemberLeft, ChatMemberMember,
    ChatMemberOwner, ChatMemberRestricted,
};
pub use file::{AttachedFile, InputFile};
pub use inline::{
    InlineQueryResult, InlineQueryResultArticle, InlineQueryResultCachedPhoto,
    InlineQueryResultLocation, InputLocationMessageContent, InputMessageContent,
    InputTextMessageContent,
};
pub use keyboard::{
    ButtonKind, CallbackGame, ForceReply, InlineKeyboardButton, InlineKeyboardMarkup,
    KeyboardButton, LoginUrl, ReplyKeyboardMarkup, ReplyKeyboardRemove, ReplyMarkup, WebAppInfo,
};
pub use media::{
    InputMedia, InputMediaAnimation, InputMediaAudio, InputMediaDocument, InputMediaPhoto,
    InputMediaVideo,
};
pub use message::{
    Animation, CallbackQuery, ChatMemberUpdated, Document, Message, PhotoSize, Update, UpdateKind,
};
