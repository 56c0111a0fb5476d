//! Inline mode results, discriminated by the `type` field.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::InlineKeyboardMarkup;

tagged_union! {
    /// One result of an inline query.
    pub enum InlineQueryResult: "type" {
        "article"  => Article(InlineQueryResultArticle),
        "photo"    => CachedPhoto(InlineQueryResultCachedPhoto),
        "location" => Location(InlineQueryResultLocation),
    }
}

impl InlineQueryResult {
    /// The result's unique identifier.
    pub fn id(&self) -> &str {
        match self {
            Self::Article(r)     => &r.id,
            Self::CachedPhoto(r) => &r.id,
            Self::Location(r)    => &r.id,
        }
    }
}

/// A link to an article or web page.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultArticle {
    pub id:                    String,
    pub title:                 String,
    pub input_message_content: InputMessageContent,
    pub reply_markup:          Option<InlineKeyboardMarkup>,
    pub url:                   Option<String>,
    pub description:           Option<String>,
    pub thumbnail_url:         Option<String>,
}

impl InlineQueryResultArticle {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<InputMessageContent>) -> Self {
        Self {
            id:                    id.into(),
            title:                 title.into(),
            input_message_content: content.into(),
            reply_markup:          None,
            url:                   None,
            description:           None,
            thumbnail_url:         None,
        }
    }
}

/// A photo already stored on the Telegram servers.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedPhoto {
    pub id:                    String,
    pub photo_file_id:         String,
    pub title:                 Option<String>,
    pub description:           Option<String>,
    pub caption:               Option<String>,
    pub reply_markup:          Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

/// A location on a map.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultLocation {
    pub id:                    String,
    pub latitude:              f64,
    pub longitude:             f64,
    pub title:                 String,
    pub live_period:           Option<u32>,
    pub reply_markup:          Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

// ─── InputMessageContent ──────────────────────────────────────────────────────

/// Content of the message sent when an inline result is chosen.
///
/// Carries no discriminator; variants are told apart by their required
/// fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputMessageContent {
    Location(InputLocationMessageContent),
    Text(InputTextMessageContent),
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputTextMessageContent {
    pub message_text: String,
    pub parse_mode:   Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputLocationMessageContent {
    pub latitude:    f64,
    pub longitude:   f64,
    pub live_period: Option<u32>,
}

impl From<InputTextMessageContent> for InputMessageContent {
    fn from(c: InputTextMessageContent) -> Self { Self::Text(c) }
}

impl From<InputLocationMessageContent> for InputMessageContent {
    fn from(c: InputLocationMessageContent) -> Self { Self::Location(c) }
}

impl From<&str> for InputMessageContent {
    fn from(text: &str) -> Self {
        Self::Text(InputTextMessageContent { message_text: text.to_owned(), parse_mode: None })
    }
}
