//! Request body selection and assembly.
//!
//! A call goes out as `GET` when its method takes no arguments, as an
//! `application/json` `POST` when no argument carries raw bytes, and as a
//! `multipart/form-data` `POST` otherwise.

use botapi_types::serialize::{self, Arg, EncodeError, FieldKind, Params};
use botapi_types::types::InputFile;
use bytes::Bytes;
use serde_json::Value;

/// Body encoding of a `POST` request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Json,
    Multipart,
}

/// Pick the body encoding for `bag`.
///
/// Multipart only when the bag type can carry files *and* one of its file
/// fields (or attachments) currently holds raw bytes.
pub fn choose_transport<B: Params>(bag: &B) -> Encoding {
    if B::MULTIPART && bag.has_binary() {
        Encoding::Multipart
    } else {
        Encoding::Json
    }
}

// ─── Body ─────────────────────────────────────────────────────────────────────

/// One part of a `multipart/form-data` body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormPart {
    /// A plain form field: a scalar literal or embedded JSON.
    Text { name: String, value: String },
    /// A file upload.
    File { name: String, filename: String, content: Bytes },
}

impl FormPart {
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }
}

/// An encoded request body.
#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    /// No arguments: sent as `GET`.
    Empty,
    /// Compact JSON object.
    Json(Vec<u8>),
    /// Form parts in wire order.
    Multipart(Vec<FormPart>),
}

impl Body {
    /// Label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty        => "get",
            Self::Json(_)      => "json",
            Self::Multipart(_) => "multipart",
        }
    }
}

/// Encode `bag` in the form [`choose_transport`] selects.
pub fn encode<B: Params>(bag: &B) -> Result<Body, EncodeError> {
    if B::FIELDS.is_empty() {
        return Ok(Body::Empty);
    }
    Ok(match choose_transport(bag) {
        Encoding::Json      => Body::Json(serialize::to_json_body(bag)?),
        Encoding::Multipart => Body::Multipart(multipart_parts(bag)?),
    })
}

/// Build form parts: declared fields in order, then attached files.
///
/// Absent fields are skipped. Strings, booleans and numbers become their
/// literal text; objects and arrays become embedded JSON.
pub fn multipart_parts<B: Params>(bag: &B) -> Result<Vec<FormPart>, EncodeError> {
    let mut parts = Vec::with_capacity(B::FIELDS.len() + bag.attached_files().len());

    for (index, field) in B::FIELDS.iter().enumerate() {
        if field.kind == FieldKind::File && field.name.is_empty() {
            return Err(EncodeError::MissingWireName { index });
        }
        let name = field.name.to_owned();
        match (field.extract)(bag)? {
            Arg::Absent => {}
            Arg::File(InputFile::Reference(r)) => {
                parts.push(FormPart::Text { name, value: r.clone() });
            }
            Arg::File(InputFile::Upload { filename, content }) => {
                parts.push(FormPart::File { name, filename: filename.clone(), content: content.clone() });
            }
            Arg::Json(value) => {
                parts.push(FormPart::Text { name, value: form_text(value) });
            }
        }
    }

    for file in bag.attached_files() {
        if file.name.is_empty() {
            return Err(EncodeError::EmptyAttachName { filename: file.filename.clone() });
        }
        parts.push(FormPart::File {
            name:     file.name.clone(),
            filename: file.filename.clone(),
            content:  file.content.clone(),
        });
    }

    Ok(parts)
}

fn form_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other            => other.to_string(),
    }
}

/// Convert parts into a `reqwest` form, guessing each file's content type
/// from its name.
pub(crate) fn into_form(parts: Vec<FormPart>) -> Result<reqwest::multipart::Form, reqwest::Error> {
    use reqwest::multipart::{Form, Part};

    let mut form = Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name, value),
            FormPart::File { name, filename, content } => {
                let mime = mime_guess::from_path(&filename).first_or_octet_stream();
                let len  = content.len() as u64;
                let part = Part::stream_with_length(reqwest::Body::from(content), len)
                    .file_name(filename)
                    .mime_str(mime.essence_str())?;
                form.part(name, part)
            }
        };
    }
    Ok(form)
}
