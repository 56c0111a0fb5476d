use botapi_types::deserialize::Error;
use botapi_types::functions::{RestrictChatMember, SendDocument, SendMessage};
use botapi_types::serialize::to_json_body;
use botapi_types::types::{
    ButtonKind, CallbackGame, ChatMember, ChatPermissions, InlineKeyboardButton, InlineQueryResult,
    InputFile, InputMedia, InputMediaDocument, LoginUrl, WebAppInfo,
};
use botapi_types::{Discriminated, Params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

fn user() -> Value {
    json!({"id": 42, "is_bot": false, "first_name": "Ada"})
}

/// Decode `sample`, check its tag, re-encode and compare.
fn roundtrip<T>(sample: Value, tag: &str, field: &str)
where
    T: Discriminated + Serialize + DeserializeOwned,
{
    let decoded: T = serde_json::from_value(sample.clone()).unwrap();
    assert_eq!(decoded.tag(), tag);
    let encoded = serde_json::to_string(&decoded).unwrap();
    assert!(
        encoded.starts_with(&format!(r#"{{"{field}":"{tag}""#)),
        "discriminator must come first: {encoded}"
    );
    assert_eq!(serde_json::from_str::<Value>(&encoded).unwrap(), sample);
}

// ── ChatMember ────────────────────────────────────────────────────────────────

#[test]
fn chat_member_every_status_roundtrips() {
    let samples = [
        json!({"status": "creator", "user": user(), "is_anonymous": false, "custom_title": "boss"}),
        json!({
            "status": "administrator", "user": user(), "can_be_edited": true, "is_anonymous": false,
            "can_manage_chat": true, "can_delete_messages": true, "can_manage_video_chats": false,
            "can_restrict_members": true, "can_promote_members": false, "can_change_info": true,
            "can_invite_users": true, "can_pin_messages": true
        }),
        json!({"status": "member", "user": user()}),
        json!({
            "status": "restricted", "user": user(), "is_member": true, "can_send_messages": false,
            "can_send_audios": false, "can_send_documents": false, "can_send_photos": false,
            "can_send_videos": false, "can_send_video_notes": false, "can_send_voice_notes": false,
            "can_send_polls": false, "can_send_other_messages": false,
            "can_add_web_page_previews": false, "can_change_info": false, "can_invite_users": true,
            "can_pin_messages": false, "can_manage_topics": false, "until_date": 0
        }),
        json!({"status": "left", "user": user()}),
        json!({"status": "kicked", "user": user(), "until_date": 1_700_000_000}),
    ];
    let tags: Vec<_> = ChatMember::TABLE.tags().collect();
    assert_eq!(tags, ["creator", "administrator", "member", "restricted", "left", "kicked"]);
    for (sample, tag) in samples.into_iter().zip(tags) {
        roundtrip::<ChatMember>(sample, tag, "status");
    }
}

#[test]
fn chat_member_variant_is_selected_by_status() {
    let m: ChatMember = serde_json::from_value(json!({"status": "kicked", "user": user(), "until_date": 0})).unwrap();
    assert!(matches!(m, ChatMember::Banned(ref b) if b.until_date == 0));
    assert_eq!(m.user().first_name, "Ada");
    assert!(!m.is_present());
}

// ── InputMedia ────────────────────────────────────────────────────────────────

#[test]
fn input_media_every_type_roundtrips() {
    for tag in ["animation", "audio", "document", "photo", "video"] {
        let sample = json!({"type": tag, "media": "attach://file", "caption": "c"});
        roundtrip::<InputMedia>(sample, tag, "type");
    }
}

#[test]
fn input_media_encodes_type_first() {
    let m = InputMedia::from(InputMediaDocument::new("AgAD").caption("hi"));
    assert_eq!(
        serde_json::to_string(&m).unwrap(),
        r#"{"type":"document","media":"AgAD","caption":"hi"}"#,
    );
}

// ── InlineQueryResult ─────────────────────────────────────────────────────────

#[test]
fn inline_query_result_every_type_roundtrips() {
    let samples = [
        json!({"type": "article", "id": "1", "title": "t", "input_message_content": {"message_text": "hi"}}),
        json!({"type": "photo", "id": "2", "photo_file_id": "AgAD"}),
        json!({
            "type": "location", "id": "3", "latitude": 51.5, "longitude": -0.25, "title": "here",
            "input_message_content": {"latitude": 51.5, "longitude": -0.25}
        }),
    ];
    for (sample, tag) in samples.into_iter().zip(["article", "photo", "location"]) {
        roundtrip::<InlineQueryResult>(sample, tag, "type");
    }
}

// ── Decoder failures ──────────────────────────────────────────────────────────

#[test]
fn missing_status_is_a_decode_error() {
    let err = ChatMember::from_slice(br#"{"user":{"id":1,"is_bot":false,"first_name":"A"}}"#).unwrap_err();
    assert!(matches!(err, Error::MissingDiscriminator { field: "status" }));
}

#[test]
fn numeric_type_is_a_decode_error() {
    let err = InputMedia::from_slice(br#"{"type":3,"media":"x"}"#).unwrap_err();
    assert!(matches!(err, Error::WrongDiscriminatorType { field: "type" }));
}

#[test]
fn unknown_status_is_a_decode_error() {
    let err = ChatMember::from_slice(br#"{"status":"owner","user":{"id":1,"is_bot":false,"first_name":"A"}}"#)
        .unwrap_err();
    assert!(matches!(err, Error::UnknownVariant { ref value, .. } if value == "owner"));
}

#[test]
fn serde_path_reports_decoder_message() {
    let err = serde_json::from_str::<InputMedia>(r#"{"type":"sticker","media":"x"}"#).unwrap_err();
    assert!(err.to_string().contains("unknown variant `sticker`"), "{err}");
}

#[test]
fn invalid_json_is_a_decode_error() {
    assert!(matches!(ChatMember::from_slice(b"{not json"), Err(Error::Json(_))));
}

// ── InlineKeyboardButton classification ───────────────────────────────────────

#[test]
fn classify_each_single_field() {
    let cases = [
        (InlineKeyboardButton::url("t", "https://t.me"), ButtonKind::Url),
        (InlineKeyboardButton::login_url("t", LoginUrl { url: "https://a".into(), ..Default::default() }), ButtonKind::LoginUrl),
        (InlineKeyboardButton::callback_data("t", "d"), ButtonKind::CallbackData),
        (InlineKeyboardButton::switch_inline_query("t", "q"), ButtonKind::SwitchInlineQuery),
        (InlineKeyboardButton::switch_inline_query_current_chat("t", "q"), ButtonKind::SwitchInlineQueryCurrentChat),
        (InlineKeyboardButton::callback_game("t"), ButtonKind::CallbackGame),
        (InlineKeyboardButton::pay("t"), ButtonKind::Pay),
        (InlineKeyboardButton::web_app("t", "https://app"), ButtonKind::WebApp),
    ];
    for (button, kind) in cases {
        assert_eq!(button.classify(), kind);
        assert_eq!(button.validate(), Ok(kind));
    }
}

#[test]
fn classify_none_set_is_unknown() {
    let b = InlineKeyboardButton { text: "plain".into(), ..Default::default() };
    assert_eq!(b.classify(), ButtonKind::Unknown);
    assert!(b.checked().is_err());
}

#[test]
fn classify_is_permissive_but_validate_is_strict() {
    let b = InlineKeyboardButton {
        text:          "both".into(),
        callback_game: Some(CallbackGame {}),
        web_app:       Some(WebAppInfo { url: "https://app".into() }),
        callback_data: Some("d".into()),
        ..Default::default()
    };
    assert_eq!(b.classify(), ButtonKind::CallbackData);
    assert_eq!(b.set_fields(), [ButtonKind::CallbackData, ButtonKind::CallbackGame, ButtonKind::WebApp]);
    let err = b.validate().unwrap_err();
    assert!(err.reason.contains("mutually exclusive"), "{err}");
}

// ── Parameter bags ────────────────────────────────────────────────────────────

#[test]
fn restrict_member_body_is_exact() {
    let bag = RestrictChatMember::new(
        123,
        456,
        ChatPermissions { can_send_messages: Some(false), ..Default::default() },
    );
    assert_eq!(
        String::from_utf8(to_json_body(&bag).unwrap()).unwrap(),
        r#"{"chat_id":123,"user_id":456,"permissions":{"can_send_messages":false}}"#,
    );
}

#[test]
fn binary_detection_across_file_fields() {
    let reference = || InputFile::reference("BQAD");
    let bytes = || InputFile::upload("report.pdf", b"%PDF".to_vec());

    let cases = [
        (reference(), None,              false),
        (reference(), Some(reference()), false),
        (reference(), Some(bytes()),     true),
        (bytes(),     None,              true),
        (bytes(),     Some(reference()), true),
        (bytes(),     Some(bytes()),     true),
    ];
    for (document, thumbnail, binary) in cases {
        let mut bag = SendDocument::new(1, document);
        bag.thumbnail = thumbnail;
        assert_eq!(bag.has_binary(), binary, "{bag:?}");
    }
    assert!(SendDocument::MULTIPART);
    assert!(!SendMessage::MULTIPART);
}

#[test]
fn reference_document_encodes_as_json() {
    let bag = SendDocument::new("@channel", "BQAD").caption("report");
    assert_eq!(
        to_json_body(&bag).unwrap(),
        br#"{"chat_id":"@channel","document":"BQAD","caption":"report"}"#,
    );
}
