use serde::ser::Serialize;

use crate::error::{Error, Result};
use crate::value::ser::{nested, Depth};
use crate::value::{Body, Fields, TypeName, Value};

pub(crate) struct SerializeTupleVariant {
    pub(crate) ty: TypeName,
    pub(crate) name: &'static str,
    pub(crate) depth: Depth,
    pub(crate) list: Vec<Value>,
}

pub(crate) struct SerializeStructVariant {
    pub(crate) ty: TypeName,
    pub(crate) name: &'static str,
    pub(crate) depth: Depth,
    pub(crate) fields: Fields,
}

impl serde::ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.list.push(nested(value, self.depth));
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Value::variant(self.ty, self.name, Body::Tuple(self.list)))
    }
}

impl serde::ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        self.fields.push((key.into(), nested(value, self.depth)));
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Value::variant(self.ty, self.name, Body::Struct(self.fields)))
    }
}
