//! Media to be sent, discriminated by the `type` field.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

tagged_union! {
    /// Content of a media message to be sent.
    pub enum InputMedia: "type" {
        "animation" => Animation(InputMediaAnimation),
        "audio"     => Audio(InputMediaAudio),
        "document"  => Document(InputMediaDocument),
        "photo"     => Photo(InputMediaPhoto),
        "video"     => Video(InputMediaVideo),
    }
}

impl InputMedia {
    /// The `media` reference: a `file_id`, URL or `attach://<name>`.
    pub fn media(&self) -> &str {
        match self {
            Self::Animation(m) => &m.media,
            Self::Audio(m)     => &m.media,
            Self::Document(m)  => &m.media,
            Self::Photo(m)     => &m.media,
            Self::Video(m)     => &m.media,
        }
    }

    /// The caption, if any.
    pub fn caption(&self) -> Option<&str> {
        match self {
            Self::Animation(m) => m.caption.as_deref(),
            Self::Audio(m)     => m.caption.as_deref(),
            Self::Document(m)  => m.caption.as_deref(),
            Self::Photo(m)     => m.caption.as_deref(),
            Self::Video(m)     => m.caption.as_deref(),
        }
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMediaAnimation {
    pub media:       String,
    pub thumbnail:   Option<String>,
    pub caption:     Option<String>,
    pub parse_mode:  Option<String>,
    pub width:       Option<u32>,
    pub height:      Option<u32>,
    pub duration:    Option<u32>,
    pub has_spoiler: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMediaAudio {
    pub media:      String,
    pub thumbnail:  Option<String>,
    pub caption:    Option<String>,
    pub parse_mode: Option<String>,
    pub duration:   Option<u32>,
    pub performer:  Option<String>,
    pub title:      Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMediaDocument {
    pub media:                          String,
    pub thumbnail:                      Option<String>,
    pub caption:                        Option<String>,
    pub parse_mode:                     Option<String>,
    pub disable_content_type_detection: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMediaPhoto {
    pub media:       String,
    pub caption:     Option<String>,
    pub parse_mode:  Option<String>,
    pub has_spoiler: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMediaVideo {
    pub media:              String,
    pub thumbnail:          Option<String>,
    pub caption:            Option<String>,
    pub parse_mode:         Option<String>,
    pub width:              Option<u32>,
    pub height:             Option<u32>,
    pub duration:           Option<u32>,
    pub supports_streaming: Option<bool>,
    pub has_spoiler:        Option<bool>,
}

macro_rules! media_ctor {
    ($($ty:ident),+) => {$(
        impl $ty {
            /// Media by `file_id`, URL or `attach://<name>`.
            pub fn new(media: impl Into<String>) -> Self {
                Self { media: media.into(), ..Default::default() }
            }

            /// Set the caption.
            pub fn caption(mut self, caption: impl Into<String>) -> Self {
                self.caption = Some(caption.into()); self
            }
        }
    )+};
}

media_ctor!(InputMediaAnimation, InputMediaAudio, InputMediaDocument, InputMediaPhoto, InputMediaVideo);
