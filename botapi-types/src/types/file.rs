//! File payloads.
//!
//! A file argument is either a reference the server already knows (a
//! `file_id` or an HTTP URL) or raw content uploaded in the request body.
//! Only the latter forces a `multipart/form-data` request.

use bytes::Bytes;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};

// ─── InputFile ────────────────────────────────────────────────────────────────

/// The contents of a file argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputFile {
    /// A `file_id`, an HTTP(S) URL, or an `attach://<name>` pointer.
    Reference(String),
    /// Raw bytes uploaded under `filename`.
    Upload {
        filename: String,
        content:  Bytes,
    },
}

impl InputFile {
    /// A `file_id` or URL the server can fetch by itself.
    pub fn reference(id_or_url: impl Into<String>) -> Self {
        Self::Reference(id_or_url.into())
    }

    /// Raw content to upload.
    pub fn upload(filename: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self::Upload { filename: filename.into(), content: content.into() }
    }

    /// Pointer to an [`AttachedFile`] uploaded in the same request.
    pub fn attach(name: &str) -> Self {
        Self::Reference(format!("attach://{name}"))
    }

    /// `true` when this payload carries raw bytes.
    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Upload { .. })
    }

    /// The upload's filename, if any.
    pub fn filename(&self) -> Option<&str> {
        match self {
            Self::Upload { filename, .. } => Some(filename),
            Self::Reference(_)            => None,
        }
    }
}

impl From<&str> for InputFile {
    fn from(id_or_url: &str) -> Self { Self::reference(id_or_url) }
}

impl From<String> for InputFile {
    fn from(id_or_url: String) -> Self { Self::Reference(id_or_url) }
}

/// References serialize as plain strings. Raw bytes have no JSON form and
/// must travel as a multipart part.
impl Serialize for InputFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Reference(r) => serializer.serialize_str(r),
            Self::Upload { filename, .. } => Err(S::Error::custom(format!(
                "file `{filename}` holds raw content and cannot be embedded in JSON"
            ))),
        }
    }
}

// ─── AttachedFile ─────────────────────────────────────────────────────────────

/// An extra binary part sent next to a method's own fields.
///
/// Fields such as `InputMedia::media` or `thumbnail` refer to it with
/// `attach://<name>`; see [`AttachedFile::attach_url`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachedFile {
    /// Multipart part name.
    pub name:     String,
    pub filename: String,
    pub content:  Bytes,
}

impl AttachedFile {
    pub fn new(
        name:     impl Into<String>,
        filename: impl Into<String>,
        content:  impl Into<Bytes>,
    ) -> Self {
        Self { name: name.into(), filename: filename.into(), content: content.into() }
    }

    /// `attach://<name>`, for use in fields that reference this part.
    pub fn attach_url(&self) -> String {
        format!("attach://{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_serializes_as_string() {
        let f = InputFile::reference("https://example.com/a.gif");
        assert_eq!(serde_json::to_string(&f).unwrap(), r#""https://example.com/a.gif""#);
        assert!(!f.is_binary());
    }

    #[test]
    fn upload_refuses_json() {
        let f = InputFile::upload("a.gif", vec![0x47, 0x49, 0x46]);
        assert!(f.is_binary());
        assert_eq!(f.filename(), Some("a.gif"));
        assert!(serde_json::to_string(&f).is_err());
    }

    #[test]
    fn attach_url_matches_reference() {
        let a = AttachedFile::new("cover", "cover.jpg", vec![1]);
        assert_eq!(InputFile::attach("cover"), InputFile::reference(a.attach_url()));
    }
}
