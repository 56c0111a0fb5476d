//! Discriminator-driven decoding for union families.
//!
//! A union family is a closed set of record types that share one string
//! field (the *discriminator*) whose value selects the concrete record.
//! [`decode_union`] sniffs that field on a generic JSON value and then
//! re-decodes the **whole** object against the matched variant.

use serde::de::DeserializeOwned;
use serde_json::Value;

// ─── Error ───────────────────────────────────────────────────────────────────

/// Errors that can occur while decoding a union.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input is not a JSON object, so no discriminator can exist.
    #[error("expected a JSON object for {family}")]
    NotAnObject { family: &'static str },
    /// The discriminator field is absent.
    #[error("missing discriminator `{field}`")]
    MissingDiscriminator { field: &'static str },
    /// The discriminator field is present but not a string.
    #[error("wrong discriminator type: `{field}` must be a string")]
    WrongDiscriminatorType { field: &'static str },
    /// The discriminator value is not in the family's table.
    #[error("unknown variant `{value}` for discriminator `{field}`")]
    UnknownVariant { field: &'static str, value: String },
    /// The discriminator matched but the variant payload is malformed.
    #[error("invalid `{tag}` payload: {source}")]
    Variant {
        tag:    &'static str,
        #[source]
        source: serde_json::Error,
    },
    /// The input bytes are not valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Specialized `Result` for union decoding.
pub type Result<T> = std::result::Result<T, Error>;

// ─── VariantTable ────────────────────────────────────────────────────────────

/// One row of a [`VariantTable`]: a literal discriminator value and the
/// decoder for its concrete schema.
pub struct Variant<T: 'static> {
    /// Literal discriminator value, e.g. `"administrator"`.
    pub tag:    &'static str,
    /// Decode the full object as this variant.
    pub decode: fn(Value) -> serde_json::Result<T>,
}

/// The fixed mapping from discriminator value to concrete decoder.
pub struct VariantTable<T: 'static> {
    /// Family name, used in error messages.
    pub family:        &'static str,
    /// Name of the discriminator field, e.g. `"status"` or `"type"`.
    pub discriminator: &'static str,
    /// All variants in declaration order.
    pub variants:      &'static [Variant<T>],
}

impl<T: 'static> VariantTable<T> {
    /// Look up the row for `tag`.
    pub fn find(&self, tag: &str) -> Option<&'static Variant<T>> {
        self.variants.iter().find(|v| v.tag == tag)
    }

    /// Every discriminator value this family accepts.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.variants.iter().map(|v| v.tag)
    }
}

/// Decode `value` as `V` and lift it into the union `T`.
///
/// Used as the `decode` pointer of every generated [`Variant`].
pub fn decode_as<T, V>(value: Value) -> serde_json::Result<T>
where
    V: DeserializeOwned + Into<T>,
{
    serde_json::from_value::<V>(value).map(Into::into)
}

// ─── Discriminated ───────────────────────────────────────────────────────────

/// A union family whose concrete variant is chosen by a string field.
pub trait Discriminated: Sized + 'static {
    /// Discriminator name and variant table for this family.
    const TABLE: VariantTable<Self>;

    /// The constant discriminator value of this instance's variant.
    fn tag(&self) -> &'static str;

    /// Convenience: decode from raw JSON bytes.
    fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        decode_union(value, &Self::TABLE)
    }
}

// ─── decode_union ────────────────────────────────────────────────────────────

/// Decode a union member from a generic JSON value.
///
/// 1. `value` must be an object;
/// 2. the table's discriminator field must be present;
/// 3. and hold a string;
/// 4. which must name a variant in `table`;
/// 5. the complete original object is then decoded as that variant.
pub fn decode_union<T: 'static>(value: Value, table: &VariantTable<T>) -> Result<T> {
    let variant = {
        let object = value
            .as_object()
            .ok_or(Error::NotAnObject { family: table.family })?;
        let raw = object
            .get(table.discriminator)
            .ok_or(Error::MissingDiscriminator { field: table.discriminator })?;
        let tag = raw
            .as_str()
            .ok_or(Error::WrongDiscriminatorType { field: table.discriminator })?;
        table.find(tag).ok_or_else(|| Error::UnknownVariant {
            field: table.discriminator,
            value: tag.to_owned(),
        })?
    };

    (variant.decode)(value).map_err(|source| Error::Variant { tag: variant.tag, source })
}

// ─── Tests ────────────────────────────────────────────────────────────────────
