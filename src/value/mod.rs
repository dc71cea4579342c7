//! Defines the [`Value`] enum, representing the runtime shape of any value.

mod from;
#[cfg(feature = "serde")]
mod ser;
mod type_name;

use std::borrow::Cow;

#[cfg(feature = "serde")]
pub use crate::value::ser::{to_value, to_value_with_depth, DEFAULT_MAX_DEPTH};
pub use crate::value::type_name::TypeName;

/// The name of a record or variant field.
pub type FieldName = Cow<'static, str>;

/// The fields of a record, in declaration order.
pub type Fields = Vec<(FieldName, Value)>;

/// The entries of a map, in iteration order.
pub type Entries = Vec<(Value, Value)>;

/// The shape of a value, represented as a recursive enum.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value at all.
    Invalid,

    /// A value pointing at another value. A `target` of `None` is a null
    /// reference, in which case `ty` names the type that would be pointed at.
    Ref {
        ty: TypeName,
        target: Option<Box<Value>>,
    },

    /// A fixed set of named fields.
    Record { ty: TypeName, fields: Fields },

    /// An ordered list of elements, `None` if the sequence itself is null.
    Seq {
        ty: TypeName,
        elems: Option<Vec<Value>>,
    },

    /// Key-value pairs, `None` if the map itself is null.
    Map {
        ty: TypeName,
        entries: Option<Entries>,
    },

    /// An enum variant.
    Variant {
        ty: TypeName,
        name: FieldName,
        body: Body,
    },

    /// A leaf value.
    Scalar(Scalar),

    /// A value that was not captured because it is nested too deeply.
    Elided,

    /// A value whose serialization failed with the given message.
    Error(String),
}

/// The payload of an enum [`Value::Variant`].
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Unit,
    Newtype(Box<Value>),
    Tuple(Vec<Value>),
    Struct(Fields),
}

/// A leaf value with a direct textual form.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Unit,
    Bool(bool),
    Int(i128),
    Uint(u128),
    Float(f64),
    Char(char),
    Str(String),
}

impl Value {
    /// Construct a record from its type name and fields.
    ///
    /// Fields are rendered in the order they are given.
    pub fn record<T, I, K>(ty: T, fields: I) -> Self
    where
        T: Into<TypeName>,
        I: IntoIterator<Item = (K, Value)>,
        K: Into<FieldName>,
    {
        Self::Record {
            ty: ty.into(),
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Construct a non-null sequence.
    pub fn seq<T, I>(ty: T, elems: I) -> Self
    where
        T: Into<TypeName>,
        I: IntoIterator<Item = Value>,
    {
        Self::Seq {
            ty: ty.into(),
            elems: Some(elems.into_iter().collect()),
        }
    }

    /// Construct a non-null map, entries are kept in the given order.
    pub fn map<T, I>(ty: T, entries: I) -> Self
    where
        T: Into<TypeName>,
        I: IntoIterator<Item = (Value, Value)>,
    {
        Self::Map {
            ty: ty.into(),
            entries: Some(entries.into_iter().collect()),
        }
    }

    /// Construct an enum variant.
    pub fn variant<T, N>(ty: T, name: N, body: Body) -> Self
    where
        T: Into<TypeName>,
        N: Into<FieldName>,
    {
        Self::Variant {
            ty: ty.into(),
            name: name.into(),
            body,
        }
    }

    /// A null reference to a value of type `ty`.
    pub fn none<T>(ty: T) -> Self
    where
        T: Into<TypeName>,
    {
        Self::Ref {
            ty: ty.into(),
            target: None,
        }
    }

    /// A non-null nullable value of type `ty`.
    ///
    /// Sequences and maps can be null themselves, so a present sequence or
    /// map is returned as is instead of being wrapped in a reference.
    pub fn some<T>(ty: T, target: Value) -> Self
    where
        T: Into<TypeName>,
    {
        match target {
            Self::Seq { elems: Some(_), .. } | Self::Map { entries: Some(_), .. } => target,
            target => Self::Ref {
                ty: ty.into(),
                target: Some(Box::new(target)),
            },
        }
    }

    /// Returns the type name carried by this value, if any.
    pub fn type_name(&self) -> Option<&TypeName> {
        match self {
            Self::Ref { ty, .. }
            | Self::Record { ty, .. }
            | Self::Seq { ty, .. }
            | Self::Map { ty, .. }
            | Self::Variant { ty, .. } => Some(ty),
            Self::Invalid | Self::Scalar(_) | Self::Elided | Self::Error(_) => None,
        }
    }

    /// Returns true if this is a null reference, sequence, or map.
    pub fn is_nil(&self) -> bool {
        matches!(
            self,
            Self::Invalid
                | Self::Ref { target: None, .. }
                | Self::Seq { elems: None, .. }
                | Self::Map { entries: None, .. }
        )
    }
}
