//! Reply markup: inline keyboards, custom reply keyboards and friends.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::ArgumentError;

// ─── InlineKeyboardButton ─────────────────────────────────────────────────────

/// The semantic variant of an [`InlineKeyboardButton`].
///
/// Not serialized; the wire form is whichever optional field is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    Url,
    LoginUrl,
    CallbackData,
    SwitchInlineQuery,
    SwitchInlineQueryCurrentChat,
    CallbackGame,
    Pay,
    WebApp,
    /// No variant field is set.
    Unknown,
}

/// Placeholder object; a button with `callback_game` launches the bot's game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackGame {}

/// Parameters of a button used to authorize the user on a website.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginUrl {
    pub url:                  String,
    pub forward_text:         Option<String>,
    pub bot_username:         Option<String>,
    pub request_write_access: Option<bool>,
}

/// A Web App opened from a button.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAppInfo {
    pub url: String,
}

/// One button of an inline keyboard.
///
/// Exactly one of the optional fields is meant to be set. [`classify`]
/// reports the first one found; [`validate`] enforces the "exactly one" rule.
///
/// [`classify`]: InlineKeyboardButton::classify
/// [`validate`]: InlineKeyboardButton::validate
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    pub text:                             String,
    pub url:                              Option<String>,
    pub login_url:                        Option<LoginUrl>,
    pub callback_data:                    Option<String>,
    pub web_app:                          Option<WebAppInfo>,
    pub switch_inline_query:              Option<String>,
    pub switch_inline_query_current_chat: Option<String>,
    pub callback_game:                    Option<CallbackGame>,
    /// Pay button; only the presence of the flag matters.
    pub pay:                              Option<bool>,
}

impl InlineKeyboardButton {
    /// Every variant field that is currently set, in classification order.
    pub fn set_fields(&self) -> Vec<ButtonKind> {
        [
            (self.url.is_some(),                              ButtonKind::Url),
            (self.login_url.is_some(),                        ButtonKind::LoginUrl),
            (self.callback_data.is_some(),                    ButtonKind::CallbackData),
            (self.switch_inline_query.is_some(),              ButtonKind::SwitchInlineQuery),
            (self.switch_inline_query_current_chat.is_some(), ButtonKind::SwitchInlineQueryCurrentChat),
            (self.callback_game.is_some(),                    ButtonKind::CallbackGame),
            (self.pay.is_some(),                              ButtonKind::Pay),
            (self.web_app.is_some(),                          ButtonKind::WebApp),
        ]
        .into_iter()
        .filter_map(|(set, kind)| set.then_some(kind))
        .collect()
    }

    /// The first variant field found set, or [`ButtonKind::Unknown`].
    ///
    /// Permissive: a button with several fields set still classifies.
    pub fn classify(&self) -> ButtonKind {
        self.set_fields().first().copied().unwrap_or(ButtonKind::Unknown)
    }

    /// Strict classification: exactly one variant field must be set.
    pub fn validate(&self) -> Result<ButtonKind, ArgumentError> {
        match self.set_fields().as_slice() {
            [kind] => Ok(*kind),
            [] => Err(ArgumentError::new("inline_keyboard_button", "no action field is set")),
            many => Err(ArgumentError::new(
                "inline_keyboard_button",
                format!("mutually exclusive fields are set: {many:?}"),
            )),
        }
    }

    /// `self` if [`validate`](Self::validate) accepts it.
    pub fn checked(self) -> Result<Self, ArgumentError> {
        self.validate().map(|_| self)
    }

    fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Default::default() }
    }

    /// Button opening `url`.
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self { url: Some(url.into()), ..Self::with_text(text) }
    }

    /// Button authorizing the user through `login_url`.
    pub fn login_url(text: impl Into<String>, login_url: LoginUrl) -> Self {
        Self { login_url: Some(login_url), ..Self::with_text(text) }
    }

    /// Button sending `data` back in a callback query.
    pub fn callback_data(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self { callback_data: Some(data.into()), ..Self::with_text(text) }
    }

    /// Button opening a Web App.
    pub fn web_app(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self { web_app: Some(WebAppInfo { url: url.into() }), ..Self::with_text(text) }
    }

    /// Button prompting the user to pick a chat and insert `query` there.
    pub fn switch_inline_query(text: impl Into<String>, query: impl Into<String>) -> Self {
        Self { switch_inline_query: Some(query.into()), ..Self::with_text(text) }
    }

    /// Button inserting `query` into the current chat's input field.
    pub fn switch_inline_query_current_chat(text: impl Into<String>, query: impl Into<String>) -> Self {
        Self { switch_inline_query_current_chat: Some(query.into()), ..Self::with_text(text) }
    }

    /// Button launching the bot's game. Must be the first button of the first row.
    pub fn callback_game(text: impl Into<String>) -> Self {
        Self { callback_game: Some(CallbackGame {}), ..Self::with_text(text) }
    }

    /// Pay button. Must be the first button of the first row.
    pub fn pay(text: impl Into<String>) -> Self {
        Self { pay: Some(true), ..Self::with_text(text) }
    }
}

/// An inline keyboard attached to a message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    pub fn new() -> Self { Self::default() }

    /// Append a row of buttons.
    pub fn row(mut self, buttons: impl IntoIterator<Item = InlineKeyboardButton>) -> Self {
        self.inline_keyboard.push(buttons.into_iter().collect());
        self
    }

    /// Validate every button strictly.
    pub fn validate(&self) -> Result<(), ArgumentError> {
        self.inline_keyboard.iter().flatten().try_for_each(|b| b.validate().map(drop))
    }
}

// ─── Reply keyboards ──────────────────────────────────────────────────────────

/// One button of a custom reply keyboard.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardButton {
    pub text:             String,
    pub request_contact:  Option<bool>,
    pub request_location: Option<bool>,
    pub web_app:          Option<WebAppInfo>,
}

impl KeyboardButton {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Default::default() }
    }
}

/// A custom keyboard replacing the user's regular one.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard:                Vec<Vec<KeyboardButton>>,
    pub is_persistent:           Option<bool>,
    pub resize_keyboard:         Option<bool>,
    pub one_time_keyboard:       Option<bool>,
    pub input_field_placeholder: Option<String>,
    pub selective:               Option<bool>,
}

/// Removes the current custom keyboard.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyKeyboardRemove {
    pub remove_keyboard: bool,
    pub selective:       Option<bool>,
}

impl Default for ReplyKeyboardRemove {
    fn default() -> Self { Self { remove_keyboard: true, selective: None } }
}

/// Forces a reply interface on the user's client.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceReply {
    pub force_reply:             bool,
    pub input_field_placeholder: Option<String>,
    pub selective:               Option<bool>,
}

impl Default for ForceReply {
    fn default() -> Self { Self { force_reply: true, input_field_placeholder: None, selective: None } }
}

/// Any of the four reply markup objects a `reply_markup` argument accepts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    Inline(InlineKeyboardMarkup),
    Keyboard(ReplyKeyboardMarkup),
    Remove(ReplyKeyboardRemove),
    ForceReply(ForceReply),
}

impl From<InlineKeyboardMarkup> for ReplyMarkup {
    fn from(m: InlineKeyboardMarkup) -> Self { Self::Inline(m) }
}

impl From<ReplyKeyboardMarkup> for ReplyMarkup {
    fn from(m: ReplyKeyboardMarkup) -> Self { Self::Keyboard(m) }
}

impl From<ReplyKeyboardRemove> for ReplyMarkup {
    fn from(m: ReplyKeyboardRemove) -> Self { Self::Remove(m) }
}

impl From<ForceReply> for ReplyMarkup {
    fn from(m: ForceReply) -> Self { Self::ForceReply(m) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_set_field_wins() {
        let mut b = InlineKeyboardButton::callback_data("go", "x");
        b.url = Some("https://t.me".into());
        assert_eq!(b.classify(), ButtonKind::Url);
        assert!(b.validate().is_err());
    }

    #[test]
    fn pay_counts_even_when_false() {
        let b = InlineKeyboardButton { text: "buy".into(), pay: Some(false), ..Default::default() };
        assert_eq!(b.classify(), ButtonKind::Pay);
    }

    #[test]
    fn only_set_field_is_serialized() {
        let b = InlineKeyboardButton::callback_data("go", "x");
        assert_eq!(serde_json::to_string(&b).unwrap(), r#"{"text":"go","callback_data":"x"}"#);
    }

    #[test]
    fn untagged_markup_decodes_by_shape() {
        let m: ReplyMarkup = serde_json::from_str(r#"{"remove_keyboard":true}"#).unwrap();
        assert_eq!(m, ReplyMarkup::Remove(ReplyKeyboardRemove::default()));
        let m: ReplyMarkup = serde_json::from_str(r#"{"inline_keyboard":[[{"text":"a","url":"u"}]]}"#).unwrap();
        assert!(matches!(m, ReplyMarkup::Inline(_)));
    }
}
