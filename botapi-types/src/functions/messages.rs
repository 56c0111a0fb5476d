use crate::ArgumentError;
use crate::types::{AttachedFile, ChatId, InputFile, InputMedia, Message, ReplyMarkup};

use super::{require_chat, require_text};

// ─── sendMessage ──────────────────────────────────────────────────────────────

/// `sendMessage`: send a text message.
#[derive(Clone, Debug, PartialEq)]
pub struct SendMessage {
    pub chat_id:              ChatId,
    pub message_thread_id:    Option<i64>,
    pub text:                 String,
    pub parse_mode:           Option<String>,
    pub disable_notification: Option<bool>,
    pub protect_content:      Option<bool>,
    pub reply_to_message_id:  Option<i64>,
    pub reply_markup:         Option<ReplyMarkup>,
}

impl SendMessage {
    pub fn new(chat_id: impl Into<ChatId>, text: impl Into<String>) -> Self {
        Self {
            chat_id:              chat_id.into(),
            message_thread_id:    None,
            text:                 text.into(),
            parse_mode:           None,
            disable_notification: None,
            protect_content:      None,
            reply_to_message_id:  None,
            reply_markup:         None,
        }
    }

    pub fn reply_markup(mut self, markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(markup.into());
        self
    }
}

fn validate_send_message(bag: &SendMessage) -> Result<(), ArgumentError> {
    require_chat(&bag.chat_id)?;
    require_text("text", &bag.text)
}

remote_call! {
    SendMessage => "sendMessage" -> Message;
    "chat_id"              => chat_id:              Scalar,
    "message_thread_id"    => message_thread_id:    Scalar,
    "text"                 => text:                 Scalar,
    "parse_mode"           => parse_mode:           Scalar,
    "disable_notification" => disable_notification: Scalar,
    "protect_content"      => protect_content:      Scalar,
    "reply_to_message_id"  => reply_to_message_id:  Scalar,
    "reply_markup"         => reply_markup:         Composite,
    validate: validate_send_message;
}

// ─── sendDocument ─────────────────────────────────────────────────────────────

/// `sendDocument`: send a general file.
///
/// Travels as `multipart/form-data` when `document` or `thumbnail` holds
/// raw content, as JSON otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct SendDocument {
    pub chat_id:                        ChatId,
    pub message_thread_id:              Option<i64>,
    pub document:                       InputFile,
    pub thumbnail:                      Option<InputFile>,
    pub caption:                        Option<String>,
    pub parse_mode:                     Option<String>,
    pub disable_content_type_detection: Option<bool>,
    pub disable_notification:           Option<bool>,
    pub reply_to_message_id:            Option<i64>,
    pub reply_markup:                   Option<ReplyMarkup>,
}

impl SendDocument {
    pub fn new(chat_id: impl Into<ChatId>, document: impl Into<InputFile>) -> Self {
        Self {
            chat_id:                        chat_id.into(),
            message_thread_id:              None,
            document:                       document.into(),
            thumbnail:                      None,
            caption:                        None,
            parse_mode:                     None,
            disable_content_type_detection: None,
            disable_notification:           None,
            reply_to_message_id:            None,
            reply_markup:                   None,
        }
    }

    pub fn thumbnail(mut self, thumbnail: impl Into<InputFile>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

fn validate_send_document(bag: &SendDocument) -> Result<(), ArgumentError> {
    require_chat(&bag.chat_id)?;
    if let InputFile::Reference(r) = &bag.document {
        require_text("document", r)?;
    }
    Ok(())
}

remote_call! {
    SendDocument => "sendDocument" -> Message;
    "chat_id"                        => chat_id:                        Scalar,
    "message_thread_id"              => message_thread_id:              Scalar,
    "document"                       => document:                       File,
    "thumbnail"                      => thumbnail:                      File,
    "caption"                        => caption:                        Scalar,
    "parse_mode"                     => parse_mode:                     Scalar,
    "disable_content_type_detection" => disable_content_type_detection: Scalar,
    "disable_notification"           => disable_notification:           Scalar,
    "reply_to_message_id"            => reply_to_message_id:            Scalar,
    "reply_markup"                   => reply_markup:                   Composite,
    validate: validate_send_document;
}

// ─── sendAnimation ────────────────────────────────────────────────────────────

/// `sendAnimation`: send a GIF or a soundless H.264/MPEG-4 video.
#[derive(Clone, Debug, PartialEq)]
pub struct SendAnimation {
    pub chat_id:              ChatId,
    pub message_thread_id:    Option<i64>,
    pub animation:            InputFile,
    pub duration:             Option<u32>,
    pub width:                Option<u32>,
    pub height:               Option<u32>,
    pub thumbnail:            Option<InputFile>,
    pub caption:              Option<String>,
    pub parse_mode:           Option<String>,
    pub has_spoiler:          Option<bool>,
    pub disable_notification: Option<bool>,
    pub reply_to_message_id:  Option<i64>,
    pub reply_markup:         Option<ReplyMarkup>,
}

impl SendAnimation {
    pub fn new(chat_id: impl Into<ChatId>, animation: impl Into<InputFile>) -> Self {
        Self {
            chat_id:              chat_id.into(),
            message_thread_id:    None,
            animation:            animation.into(),
            duration:             None,
            width:                None,
            height:               None,
            thumbnail:            None,
            caption:              None,
            parse_mode:           None,
            has_spoiler:          None,
            disable_notification: None,
            reply_to_message_id:  None,
            reply_markup:         None,
        }
    }
}

fn validate_send_animation(bag: &SendAnimation) -> Result<(), ArgumentError> {
    require_chat(&bag.chat_id)?;
    if let InputFile::Reference(r) = &bag.animation {
        require_text("animation", r)?;
    }
    Ok(())
}

remote_call! {
    SendAnimation => "sendAnimation" -> Message;
    "chat_id"              => chat_id:              Scalar,
    "message_thread_id"    => message_thread_id:    Scalar,
    "animation"            => animation:            File,
    "duration"             => duration:             Scalar,
    "width"                => width:                Scalar,
    "height"               => height:               Scalar,
    "thumbnail"            => thumbnail:            File,
    "caption"              => caption:              Scalar,
    "parse_mode"           => parse_mode:           Scalar,
    "has_spoiler"          => has_spoiler:          Scalar,
    "disable_notification" => disable_notification: Scalar,
    "reply_to_message_id"  => reply_to_message_id:  Scalar,
    "reply_markup"         => reply_markup:         Composite,
    validate: validate_send_animation;
}

// ─── sendMediaGroup ───────────────────────────────────────────────────────────

/// `sendMediaGroup`: send 2-10 media items as an album.
///
/// Items whose `media` is `attach://<name>` are uploaded from
/// `attached_files`.
#[derive(Clone, Debug, PartialEq)]
pub struct SendMediaGroup {
    pub chat_id:              ChatId,
    pub message_thread_id:    Option<i64>,
    pub media:                Vec<InputMedia>,
    pub disable_notification: Option<bool>,
    pub reply_to_message_id:  Option<i64>,
    pub attached_files:       Vec<AttachedFile>,
}

impl SendMediaGroup {
    pub fn new(chat_id: impl Into<ChatId>, media: impl IntoIterator<Item = InputMedia>) -> Self {
        Self {
            chat_id:              chat_id.into(),
            message_thread_id:    None,
            media:                media.into_iter().collect(),
            disable_notification: None,
            reply_to_message_id:  None,
            attached_files:       Vec::new(),
        }
    }

    /// Upload `file` alongside the album.
    pub fn attach(mut self, file: AttachedFile) -> Self {
        self.attached_files.push(file);
        self
    }
}

fn validate_send_media_group(bag: &SendMediaGroup) -> Result<(), ArgumentError> {
    require_chat(&bag.chat_id)?;
    if !(2..=10).contains(&bag.media.len()) {
        return Err(ArgumentError::new(
            "media",
            format!("album must hold 2 to 10 items, got {}", bag.media.len()),
        ));
    }
    for item in &bag.media {
        if let Some(name) = item.media().strip_prefix("attach://") {
            if !bag.attached_files.iter().any(|f| f.name == name) {
                return Err(ArgumentError::new("media", format!("no attached file named `{name}`")));
            }
        }
    }
    Ok(())
}

remote_call! {
    SendMediaGroup => "sendMediaGroup" -> Vec<Message>;
    "chat_id"              => chat_id:              Scalar,
    "message_thread_id"    => message_thread_id:    Scalar,
    "media"                => media:                Composite,
    "disable_notification" => disable_notification: Scalar,
    "reply_to_message_id"  => reply_to_message_id:  Scalar,
    attachments: attached_files;
    validate: validate_send_media_group;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Params;
    use crate::types::InputMediaPhoto;

    #[test]
    fn empty_text_is_rejected_locally() {
        let err = SendMessage::new(1, "  ").validate().unwrap_err();
        assert_eq!(err.name, "text");
    }

    #[test]
    fn album_needs_matching_attachment() {
        let bag = SendMediaGroup::new(
            1,
            [
                InputMedia::from(InputMediaPhoto::new("attach://a")),
                InputMedia::from(InputMediaPhoto::new("AgAD")),
            ],
        );
        assert!(bag.validate().is_err());
        let bag = bag.attach(AttachedFile::new("a", "a.jpg", vec![1]));
        assert!(bag.validate().is_ok());
    }

    #[test]
    fn single_item_album_is_rejected() {
        let bag = SendMediaGroup::new(1, [InputMedia::from(InputMediaPhoto::new("AgAD"))]);
        assert_eq!(bag.validate().unwrap_err().name, "media");
    }
}
