use serde::ser::Serialize;

use crate::error::{Error, Result};
use crate::value::ser::{nested, Depth};
use crate::value::{Fields, TypeName, Value};

/// Collects the fields of a struct or tuple struct.
///
/// Tuple struct fields are named by their index.
pub(crate) struct SerializeRecord {
    ty: TypeName,
    depth: Depth,
    fields: Fields,
}

impl SerializeRecord {
    pub(crate) fn with_capacity(ty: TypeName, depth: Depth, len: usize) -> Self {
        Self {
            ty,
            depth,
            fields: Vec::with_capacity(len),
        }
    }

    fn into_value(self) -> Value {
        Value::Record {
            ty: self.ty,
            fields: self.fields,
        }
    }
}

impl serde::ser::SerializeStruct for SerializeRecord {
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
        Ok(self.into_value())
    }
}

impl serde::ser::SerializeTupleStruct for SerializeRecord {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        let key = self.fields.len().to_string();
        self.fields.push((key.into(), nested(value, self.depth)));
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(self.into_value())
    }
}
