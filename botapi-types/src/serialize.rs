//! Parameter bag encoding and tagged union encoding.
//!
//! Every remote method's parameters are described by a static, ordered table
//! of [`Field`]s. The table drives both the JSON body and the
//! `multipart/form-data` body, so the wire name and order of a field are
//! declared once.

use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::ArgumentError;
use crate::types::{AttachedFile, InputFile};

// ─── EncodeError ─────────────────────────────────────────────────────────────

/// Errors raised while turning a parameter bag into a request body.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// A file-capable field was declared without a wire name.
    #[error("file-capable field #{index} has no wire name")]
    MissingWireName { index: usize },
    /// An attached file was given an empty attach name.
    #[error("attached file `{filename}` has an empty attach name")]
    EmptyAttachName { filename: String },
    /// Raw file content reached the JSON encoder.
    #[error("field `{field}` holds raw file content and cannot be sent as JSON")]
    BinaryInJson { field: &'static str },
    /// A value failed to serialize.
    #[error("failed to encode `{field}`: {source}")]
    Json {
        field:  &'static str,
        #[source]
        source: serde_json::Error,
    },
}

// ─── Field table ─────────────────────────────────────────────────────────────

/// How a field is carried on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// String, integer, float or boolean.
    Scalar,
    /// May hold raw bytes and force a multipart body.
    File,
    /// Object, array or union; sent as embedded JSON in multipart bodies.
    Composite,
}

/// A field's runtime value, borrowed from its bag.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg<'a> {
    /// Unset optional field; never emitted.
    Absent,
    /// A file payload (reference or raw bytes).
    File(&'a InputFile),
    /// Any other value, already converted to JSON.
    Json(Value),
}

impl Arg<'static> {
    /// Serialize `value` for field `field`; `null` becomes [`Arg::Absent`].
    pub fn json<T: Serialize + ?Sized>(field: &'static str, value: &T) -> Result<Self, EncodeError> {
        match serde_json::to_value(value) {
            Ok(Value::Null) => Ok(Arg::Absent),
            Ok(v)           => Ok(Arg::Json(v)),
            Err(source)     => Err(EncodeError::Json { field, source }),
        }
    }
}

/// Borrow a file-capable field as an [`Arg`].
pub trait FileArg {
    fn file_arg(&self) -> Arg<'_>;
}

impl FileArg for InputFile {
    fn file_arg(&self) -> Arg<'_> { Arg::File(self) }
}

impl FileArg for Option<InputFile> {
    fn file_arg(&self) -> Arg<'_> {
        match self {
            Some(file) => Arg::File(file),
            None       => Arg::Absent,
        }
    }
}

/// One row of a bag's static field table.
pub struct Field<B: 'static> {
    /// Wire name, e.g. `"chat_id"`.
    pub name:    &'static str,
    /// Declared carrier kind.
    pub kind:    FieldKind,
    /// Read the field's current value from a bag.
    pub extract: for<'a> fn(&'a B) -> Result<Arg<'a>, EncodeError>,
}

/// A structured set of named arguments for one remote call.
pub trait Params: Sized + 'static {
    /// Fields in declaration order.
    const FIELDS: &'static [Field<Self>];

    /// Whether this bag may ever be sent as `multipart/form-data`.
    const MULTIPART: bool = false;

    /// Extra binary parts appended after the declared fields.
    fn attached_files(&self) -> &[AttachedFile] { &[] }

    /// Check required arguments before any network activity.
    fn validate(&self) -> Result<(), ArgumentError> { Ok(()) }

    /// `true` if any file-capable field currently holds raw bytes, or any
    /// attachment is present.
    fn has_binary(&self) -> bool {
        let in_fields = Self::FIELDS
            .iter()
            .filter(|f| f.kind == FieldKind::File)
            .any(|f| matches!((f.extract)(self), Ok(Arg::File(file)) if file.is_binary()));
        in_fields || !self.attached_files().is_empty()
    }
}

// ─── JSON body ───────────────────────────────────────────────────────────────

/// Encode a bag as a compact `application/json` object keyed by wire name.
///
/// Absent fields are omitted; file references become plain strings.
pub fn to_json_body<B: Params>(bag: &B) -> Result<Vec<u8>, EncodeError> {
    let mut entries = Vec::with_capacity(B::FIELDS.len());
    for field in B::FIELDS {
        match (field.extract)(bag)? {
            Arg::Absent => {}
            Arg::File(InputFile::Reference(r)) => entries.push((field.name, Value::String(r.clone()))),
            Arg::File(InputFile::Upload { .. }) => {
                return Err(EncodeError::BinaryInJson { field: field.name });
            }
            Arg::Json(v) => entries.push((field.name, v)),
        }
    }
    serde_json::to_vec(&JsonObject(&entries))
        .map_err(|source| EncodeError::Json { field: "<body>", source })
}

struct JsonObject<'a>(&'a [(&'static str, Value)]);

impl Serialize for JsonObject<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// ─── Tagged union encoding ───────────────────────────────────────────────────

/// Serialize a union variant: the discriminator first, then the variant's own
/// fields.
///
/// The discriminator is a per-variant constant and never stored on the
/// variant struct itself.
pub fn serialize_tagged<S, V>(
    serializer: S,
    field:      &'static str,
    tag:        &'static str,
    inner:      &V,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize,
{
    let fields = match serde_json::to_value(inner).map_err(S::Error::custom)? {
        Value::Object(fields) => fields,
        other => {
            return Err(S::Error::custom(format!(
                "variant `{tag}` must serialize to an object, got {other}"
            )));
        }
    };

    let mut map = serializer.serialize_map(Some(fields.len() + 1))?;
    map.serialize_entry(field, tag)?;
    for (key, value) in &fields {
        if key != field {
            map.serialize_entry(key, value)?;
        }
    }
    map.end()
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        name:  String,
        photo: Option<InputFile>,
        extra: Vec<AttachedFile>,
    }

    remote_call! {
        Probe => "probe" -> bool;
        "name"  => name:  Scalar,
        "photo" => photo: File,
        attachments: extra;
    }

    #[test]
    fn table_preserves_declaration_order() {
        let names: Vec<_> = Probe::FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(names, ["name", "photo"]);
        assert!(Probe::MULTIPART);
    }

    #[test]
    fn reference_is_not_binary() {
        let bag = Probe { name: "x".into(), photo: Some(InputFile::reference("AgAD")), extra: vec![] };
        assert!(!bag.has_binary());
        assert_eq!(to_json_body(&bag).unwrap(), br#"{"name":"x","photo":"AgAD"}"#);
    }

    #[test]
    fn upload_is_binary_and_rejected_by_json() {
        let bag = Probe {
            name:  "x".into(),
            photo: Some(InputFile::upload("a.png", vec![1, 2, 3])),
            extra: vec![],
        };
        assert!(bag.has_binary());
        assert!(matches!(to_json_body(&bag), Err(EncodeError::BinaryInJson { field: "photo" })));
    }

    #[test]
    fn attachments_count_as_binary() {
        let bag = Probe {
            name:  "x".into(),
            photo: None,
            extra: vec![AttachedFile::new("thumb", "t.jpg", vec![0xff])],
        };
        assert!(bag.has_binary());
    }

    #[test]
    fn absent_fields_are_omitted() {
        let bag = Probe { name: "only".into(), photo: None, extra: vec![] };
        assert_eq!(to_json_body(&bag).unwrap(), br#"{"name":"only"}"#);
    }
}
