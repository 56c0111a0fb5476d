use crate::ArgumentError;
use crate::types::InlineQueryResult;

use super::require_text;

/// `answerInlineQuery`: reply to an inline query with up to 50 results.
#[derive(Clone, Debug, PartialEq)]
pub struct AnswerInlineQuery {
    pub inline_query_id: String,
    pub results:         Vec<InlineQueryResult>,
    pub cache_time:      Option<u32>,
    pub is_personal:     Option<bool>,
    pub next_offset:     Option<String>,
}

impl AnswerInlineQuery {
    pub fn new(inline_query_id: impl Into<String>, results: impl IntoIterator<Item = InlineQueryResult>) -> Self {
        Self {
            inline_query_id: inline_query_id.into(),
            results:         results.into_iter().collect(),
            cache_time:      None,
            is_personal:     None,
            next_offset:     None,
        }
    }
}

fn validate_answer_inline(bag: &AnswerInlineQuery) -> Result<(), ArgumentError> {
    require_text("inline_query_id", &bag.inline_query_id)?;
    if bag.results.len() > 50 {
        return Err(ArgumentError::new("results", format!("at most 50 results, got {}", bag.results.len())));
    }
    Ok(())
}

remote_call! {
    AnswerInlineQuery => "answerInlineQuery" -> bool;
    "inline_query_id" => inline_query_id: Scalar,
    "results"         => results:         Composite,
    "cache_time"      => cache_time:      Scalar,
    "is_personal"     => is_personal:     Scalar,
    "next_offset"     => next_offset:     Scalar,
    validate: validate_answer_inline;
}

/// `answerCallbackQuery`: acknowledge an inline keyboard press.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerCallbackQuery {
    pub callback_query_id: String,
    pub text:              Option<String>,
    pub show_alert:        Option<bool>,
    pub url:               Option<String>,
    pub cache_time:        Option<u32>,
}

impl AnswerCallbackQuery {
    pub fn new(callback_query_id: impl Into<String>) -> Self {
        Self { callback_query_id: callback_query_id.into(), ..Default::default() }
    }

    /// Show `text` as a notification, or as an alert if `alert` is set.
    pub fn text(mut self, text: impl Into<String>, alert: bool) -> Self {
        self.text = Some(text.into());
        self.show_alert = alert.then_some(true);
        self
    }
}

fn validate_answer_callback(bag: &AnswerCallbackQuery) -> Result<(), ArgumentError> {
    require_text("callback_query_id", &bag.callback_query_id)
}

remote_call! {
    AnswerCallbackQuery => "answerCallbackQuery" -> bool;
    "callback_query_id" => callback_query_id: Scalar,
    "text"              => text:              Scalar,
    "show_alert"        => show_alert:        Scalar,
    "url"               => url:               Scalar,
    "cache_time"        => cache_time:        Scalar,
    validate: validate_answer_callback;
}
