use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use crate::value::{Scalar, TypeName, Value};

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Scalar(Scalar::Unit)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Scalar(Scalar::Bool(b))
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $repr:ty: $($ty:ty)+) => {
        $(
            impl From<$ty> for Value {
                fn from(i: $ty) -> Self {
                    Self::Scalar(Scalar::$variant(<$repr>::from(i)))
                }
            }
        )+
    };
}

impl_from_int! { Int, i128: i8 i16 i32 i64 i128 }
impl_from_int! { Uint, u128: u8 u16 u32 u64 u128 }

impl From<isize> for Value {
    fn from(i: isize) -> Self {
        // isize is at most 64 bits on every supported target
        Self::Scalar(Scalar::Int(i as i128))
    }
}

impl From<usize> for Value {
    fn from(i: usize) -> Self {
        Self::Scalar(Scalar::Uint(i as u128))
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Self::Scalar(Scalar::Float(f64::from(f)))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Scalar(Scalar::Float(f))
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::Scalar(Scalar::Char(c))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Scalar(Scalar::Str(s))
    }
}

impl<'a> From<&'a str> for Value {
    fn from(s: &'a str) -> Self {
        Self::Scalar(Scalar::Str(String::from(s)))
    }
}

impl<'a> From<Cow<'a, str>> for Value {
    fn from(s: Cow<'a, str>) -> Self {
        Self::Scalar(Scalar::Str(s.into_owned()))
    }
}

impl<V> From<Vec<V>> for Value
where
    V: Into<Value>,
{
    fn from(list: Vec<V>) -> Self {
        Self::seq(TypeName::of::<Vec<V>>(), list.into_iter().map(Into::into))
    }
}

impl<V, const N: usize> From<[V; N]> for Value
where
    V: Into<Value>,
{
    fn from(list: [V; N]) -> Self {
        Self::seq(TypeName::of::<[V; N]>(), list.into_iter().map(Into::into))
    }
}

impl<K, V> From<BTreeMap<K, V>> for Value
where
    K: Into<Value>,
    V: Into<Value>,
{
    fn from(map: BTreeMap<K, V>) -> Self {
        Self::map(
            TypeName::of::<BTreeMap<K, V>>(),
            map.into_iter().map(|(k, v)| (k.into(), v.into())),
        )
    }
}

impl<K, V> From<HashMap<K, V>> for Value
where
    K: Into<Value>,
    V: Into<Value>,
{
    fn from(map: HashMap<K, V>) -> Self {
        Self::map(
            TypeName::of::<HashMap<K, V>>(),
            map.into_iter().map(|(k, v)| (k.into(), v.into())),
        )
    }
}

impl<V> From<Option<V>> for Value
where
    V: Into<Value>,
{
    fn from(opt: Option<V>) -> Self {
        let ty = TypeName::of::<V>();
        let ty = ty.pointee().unwrap_or(ty);
        match opt {
            None => Self::none(ty),
            Some(value) => match Into::<Value>::into(value) {
                // `Option<Box<T>>` is a single nullable reference
                Value::Ref {
                    target: Some(target),
                    ..
                } if TypeName::of::<V>().pointee().is_some() => Self::some(ty, *target),
                value => {
                    let ty = value.type_name().cloned().unwrap_or(ty);
                    Self::some(ty, value)
                }
            },
        }
    }
}

impl<V> From<Box<V>> for Value
where
    V: Into<Value>,
{
    fn from(boxed: Box<V>) -> Self {
        let target: Value = (*boxed).into();
        Self::Ref {
            ty: target.type_name().cloned().unwrap_or_else(TypeName::of::<V>),
            target: Some(Box::new(target)),
        }
    }
}

impl<V> FromIterator<V> for Value
where
    V: Into<Value>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self::seq(TypeName::of::<Vec<V>>(), iter.into_iter().map(Into::into))
    }
}
