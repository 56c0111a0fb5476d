//! Declarative generators for union families and parameter bags.
//!
//! Every discriminated union and every remote method goes through one of the
//! two macros below, so the codec logic exists exactly once.

/// Declare a discriminated union family.
///
/// Generates the `enum`, its [`Discriminated`](crate::Discriminated) table,
/// `From<Variant>` impls, and `Serialize`/`Deserialize` impls that route
/// through [`decode_union`](crate::decode_union) and
/// [`serialize_tagged`](crate::serialize::serialize_tagged).
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $field:literal {
            $(
                $(#[$vmeta:meta])*
                $tag:literal => $variant:ident($ty:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant($ty), )+
        }

        impl $crate::deserialize::Discriminated for $name {
            const TABLE: $crate::deserialize::VariantTable<Self> = $crate::deserialize::VariantTable {
                family:        stringify!($name),
                discriminator: $field,
                variants: &[
                    $( $crate::deserialize::Variant {
                        tag:    $tag,
                        decode: $crate::deserialize::decode_as::<$name, $ty>,
                    }, )+
                ],
            };

            fn tag(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $tag, )+
                }
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(v: $ty) -> Self { Self::$variant(v) }
            }
        )+

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error> {
                match self {
                    $( Self::$variant(inner) => {
                        $crate::serialize::serialize_tagged(serializer, $field, $tag, inner)
                    } )+
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::core::result::Result<Self, D::Error> {
                let value = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                $crate::deserialize::decode_union(value, &<Self as $crate::deserialize::Discriminated>::TABLE)
                    .map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }
    };
}

/// Implement [`Params`](crate::Params) and [`RemoteCall`](crate::RemoteCall)
/// for a parameter bag from its ordered field list.
///
/// ```text
/// remote_call! {
///     SendDocument => "sendDocument" -> Message;
///     "chat_id"  => chat_id:  Scalar,
///     "document" => document: File,
///     ...
///     attachments: attached_files;
///     validate: validate_send_document;
/// }
/// ```
///
/// `attachments` names a `Vec<AttachedFile>` field that is appended to
/// multipart bodies; `validate` names a `fn(&Bag) -> Result<(), ArgumentError>`.
macro_rules! remote_call {
    (@field $bag:ty, $wire:literal, $field:ident, File) => {
        $crate::serialize::Field {
            name: $wire,
            kind: $crate::serialize::FieldKind::File,
            extract: {
                fn extract(bag: &$bag) -> ::core::result::Result<$crate::serialize::Arg<'_>, $crate::serialize::EncodeError> {
                    Ok($crate::serialize::FileArg::file_arg(&bag.$field))
                }
                extract
            },
        }
    };
    (@field $bag:ty, $wire:literal, $field:ident, $kind:ident) => {
        $crate::serialize::Field {
            name: $wire,
            kind: $crate::serialize::FieldKind::$kind,
            extract: {
                fn extract(bag: &$bag) -> ::core::result::Result<$crate::serialize::Arg<'_>, $crate::serialize::EncodeError> {
                    $crate::serialize::Arg::json($wire, &bag.$field)
                }
                extract
            },
        }
    };

    (@is_file File) => { true };
    (@is_file $kind:ident) => { false };
    (@present $attach:ident) => { true };

    (
        $bag:ty => $method:literal -> $ret:ty;
        $( $wire:literal => $field:ident : $kind:ident ),* $(,)?
        $( attachments: $attach:ident; )?
        $( validate: $validate:path; )?
    ) => {
        impl $crate::serialize::Params for $bag {
            const FIELDS: &'static [$crate::serialize::Field<Self>] = &[
                $( remote_call!(@field $bag, $wire, $field, $kind), )*
            ];

            const MULTIPART: bool = false
                $( || remote_call!(@is_file $kind) )*
                $( || remote_call!(@present $attach) )?;

            $(
                fn attached_files(&self) -> &[$crate::types::AttachedFile] {
                    &self.$attach
                }
            )?

            $(
                fn validate(&self) -> ::core::result::Result<(), $crate::ArgumentError> {
                    $validate(self)
                }
            )?
        }

        impl $crate::RemoteCall for $bag {
            const METHOD: &'static str = $method;
            type Return = $ret;
        }
    };
}
