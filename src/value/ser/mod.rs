mod list;
mod map;
mod record;
mod variants;

use serde::ser::Serialize;

use crate::error::{Error, Result};
use crate::value::ser::list::SerializeList;
use crate::value::ser::map::SerializeMap;
use crate::value::ser::record::SerializeRecord;
use crate::value::ser::variants::{SerializeStructVariant, SerializeTupleVariant};
use crate::value::{Body, Scalar, TypeName, Value};

/// The default number of nested levels captured by [`to_value`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Capture the shape of a `T` as a `Value`.
///
/// The type name of every nested value is recorded along the way. Values
/// nested more than [`DEFAULT_MAX_DEPTH`] levels deep are replaced with
/// [`Value::Elided`].
///
/// This never fails. If a `Serialize` implementation returns an error the
/// value at that position is replaced with [`Value::Error`].
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[inline]
pub fn to_value<T>(value: &T) -> Value
where
    T: ?Sized + Serialize,
{
    to_value_with_depth(value, DEFAULT_MAX_DEPTH)
}

/// Capture the shape of a `T` as a `Value`, at most `max_depth` levels deep.
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub fn to_value_with_depth<T>(value: &T, max_depth: usize) -> Value
where
    T: ?Sized + Serialize,
{
    capture(value, TypeName::of::<T>(), Depth(max_depth))
}

/// The number of levels that may still be captured.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Depth(usize);

impl Depth {
    fn descend(self) -> Option<Self> {
        self.0.checked_sub(1).map(Depth)
    }
}

/// Capture a value nested in another, using its static type name.
pub(crate) fn nested<T>(value: &T, depth: Depth) -> Value
where
    T: ?Sized + Serialize,
{
    capture(value, TypeName::of::<T>(), depth)
}

/// Capture an element, key or value of a standard collection.
pub(crate) fn item<T>(value: &T, depth: Depth) -> Value
where
    T: ?Sized + Serialize,
{
    capture(value, TypeName::of::<T>().strip_borrow(), depth)
}

fn capture<T>(value: &T, ty: TypeName, depth: Depth) -> Value
where
    T: ?Sized + Serialize,
{
    let depth = match depth.descend() {
        Some(depth) => depth,
        None => {
            tracing::trace!(ty = %ty, "maximum depth reached, eliding value");
            return Value::Elided;
        }
    };

    // References and smart pointers serialize as the value they point at,
    // only their type name tells them apart.
    if let Some(pointee) = ty.pointee() {
        let target = capture(value, pointee.clone(), depth);
        return Value::Ref {
            ty: pointee,
            target: Some(Box::new(target)),
        };
    }

    let serializer = Serializer {
        ty: ty.clone(),
        depth,
    };
    match value.serialize(serializer) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(ty = %ty, error = %err, "failed to serialize value");
            Value::Error(err.into())
        }
    }
}

/// Serializer whose output is a `Value`.
///
/// This serializer captures a `T: Serialize` as a `Value`, tagging composite
/// values with the type name `ty` of the value being serialized.
pub(crate) struct Serializer {
    ty: TypeName,
    depth: Depth,
}

impl Serializer {
    fn scalar(scalar: Scalar) -> Result<Value> {
        Ok(Value::Scalar(scalar))
    }
}

impl serde::Serializer for Serializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeList;
    type SerializeTuple = SerializeList;
    type SerializeTupleStruct = SerializeRecord;

    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeRecord;

    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        Self::scalar(Scalar::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        self.serialize_i128(i128::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        self.serialize_i128(i128::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        self.serialize_i128(i128::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        self.serialize_i128(i128::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Self::Ok> {
        Self::scalar(Scalar::Int(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        self.serialize_u128(u128::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        self.serialize_u128(u128::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        self.serialize_u128(u128::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        self.serialize_u128(u128::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Self::Ok> {
        Self::scalar(Scalar::Uint(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        Self::scalar(Scalar::Float(f64::from(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        Self::scalar(Scalar::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        Self::scalar(Scalar::Char(v))
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        Self::scalar(Scalar::Str(String::from(v)))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok> {
        Ok(Value::seq(
            self.ty,
            v.iter().map(|b| Value::Scalar(Scalar::Uint(u128::from(*b)))),
        ))
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        let ty = self.ty.option_inner().unwrap_or(self.ty);
        let ty = ty.pointee().unwrap_or(ty);
        Ok(Value::none(ty))
    }

    fn serialize_some<T: ?Sized>(self, value: &T) -> Result<Self::Ok>
    where
        T: Serialize,
    {
        // `Option<Box<T>>` is a single nullable reference, not two
        let ty = TypeName::of::<T>();
        let ty = ty.pointee().unwrap_or(ty);
        let target = capture(value, ty.clone(), self.depth);
        Ok(Value::some(ty, target))
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Self::scalar(Scalar::Unit)
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Self::Ok> {
        Ok(Value::Record {
            ty: self.ty.or_named(name),
            fields: Vec::new(),
        })
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        Ok(Value::variant(self.ty.or_named(name), variant, Body::Unit))
    }

    fn serialize_newtype_struct<T: ?Sized>(self, name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: Serialize,
    {
        let field = nested(value, self.depth);
        Ok(Value::record(self.ty.or_named(name), [("0", field)]))
    }

    fn serialize_newtype_variant<T: ?Sized>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok>
    where
        T: Serialize,
    {
        let body = Body::Newtype(Box::new(nested(value, self.depth)));
        Ok(Value::variant(self.ty.or_named(name), variant, body))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(SerializeList::with_capacity(
            self.ty,
            self.depth,
            len.unwrap_or(0),
        ))
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Ok(SerializeRecord::with_capacity(
            self.ty.or_named(name),
            self.depth,
            len,
        ))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            ty: self.ty.or_named(name),
            name: variant,
            depth: self.depth,
            list: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(SerializeMap::with_capacity(
            self.ty,
            self.depth,
            len.unwrap_or(0),
        ))
    }

    fn serialize_struct(self, name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        Ok(SerializeRecord::with_capacity(
            self.ty.or_named(name),
            self.depth,
            len,
        ))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Ok(SerializeStructVariant {
            ty: self.ty.or_named(name),
            name: variant,
            depth: self.depth,
            fields: Vec::with_capacity(len),
        })
    }
}
