//! Convenience wrappers, one per supported Bot API method.
//!
//! Each wrapper builds the parameter bag and goes through
//! [`Client::invoke`]; bags with many optional fields are taken whole.

use botapi_types::functions::{
    AnswerCallbackQuery, AnswerInlineQuery, CloseGeneralForumTopic, DeleteForumTopic,
    GetChatAdministrators, GetChatMember, GetMe, GetUpdates, PromoteChatMember,
    RestrictChatMember, SendAnimation, SendDocument, SendMediaGroup, SendMessage,
};
use botapi_types::types::{
    ChatId, ChatMember, ChatPermissions, InlineQueryResult, Message, Update, User,
};

use crate::{Client, InvocationError};

impl Client {
    // ── Bot & updates ──────────────────────────────────────────────────────

    /// Fetch the bot's own user record.
    pub async fn get_me(&self) -> Result<User, InvocationError> {
        self.invoke(&GetMe).await
    }

    pub async fn get_updates(&self, req: &GetUpdates) -> Result<Vec<Update>, InvocationError> {
        self.invoke(req).await
    }

    // ── Messages ───────────────────────────────────────────────────────────

    /// Send plain text to `chat_id`.
    pub async fn send_message(
        &self,
        chat_id: impl Into<ChatId>,
        text:    impl Into<String>,
    ) -> Result<Message, InvocationError> {
        self.invoke(&SendMessage::new(chat_id, text)).await
    }

    pub async fn send_document(&self, req: &SendDocument) -> Result<Message, InvocationError> {
        self.invoke(req).await
    }

    pub async fn send_animation(&self, req: &SendAnimation) -> Result<Message, InvocationError> {
        self.invoke(req).await
    }

    /// Send an album; returns one message per item.
    pub async fn send_media_group(&self, req: &SendMediaGroup) -> Result<Vec<Message>, InvocationError> {
        self.invoke(req).await
    }

    // ── Members ────────────────────────────────────────────────────────────

    /// Restrict `user_id` in a supergroup until `until_date` (`None` = forever).
    pub async fn restrict_chat_member(
        &self,
        chat_id:     impl Into<ChatId>,
        user_id:     i64,
        permissions: ChatPermissions,
        until_date:  Option<i64>,
    ) -> Result<bool, InvocationError> {
        let mut req = RestrictChatMember::new(chat_id, user_id, permissions);
        req.until_date = until_date;
        self.invoke(&req).await
    }

    pub async fn promote_chat_member(&self, req: &PromoteChatMember) -> Result<bool, InvocationError> {
        self.invoke(req).await
    }

    /// `None` only when remote errors are suppressed and the call failed.
    pub async fn get_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
    ) -> Result<Option<ChatMember>, InvocationError> {
        self.invoke(&GetChatMember::new(chat_id, user_id)).await
    }

    pub async fn get_chat_administrators(
        &self,
        chat_id: impl Into<ChatId>,
    ) -> Result<Vec<ChatMember>, InvocationError> {
        self.invoke(&GetChatAdministrators::new(chat_id)).await
    }

    // ── Forum topics ───────────────────────────────────────────────────────

    pub async fn delete_forum_topic(
        &self,
        chat_id:           impl Into<ChatId>,
        message_thread_id: i64,
    ) -> Result<bool, InvocationError> {
        self.invoke(&DeleteForumTopic::new(chat_id, message_thread_id)).await
    }

    pub async fn close_general_forum_topic(&self, chat_id: impl Into<ChatId>) -> Result<bool, InvocationError> {
        self.invoke(&CloseGeneralForumTopic::new(chat_id)).await
    }

    // ── Inline mode ────────────────────────────────────────────────────────

    pub async fn answer_inline_query(
        &self,
        inline_query_id: impl Into<String>,
        results:         impl IntoIterator<Item = InlineQueryResult>,
    ) -> Result<bool, InvocationError> {
        self.invoke(&AnswerInlineQuery::new(inline_query_id, results)).await
    }

    pub async fn answer_callback_query(&self, req: &AnswerCallbackQuery) -> Result<bool, InvocationError> {
        self.invoke(req).await
    }
}
