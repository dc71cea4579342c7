use serde::ser::Serialize;

use crate::error::{Error, Result};
use crate::value::ser::{item, nested, Depth};
use crate::value::{TypeName, Value};

pub(crate) struct SerializeList {
    ty: TypeName,
    depth: Depth,
    list: Vec<Value>,
}

impl SerializeList {
    pub(crate) fn with_capacity(ty: TypeName, depth: Depth, len: usize) -> Self {
        Self {
            ty,
            depth,
            list: Vec::with_capacity(len),
        }
    }
}

impl serde::ser::SerializeSeq for SerializeList {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.list.push(item(value, self.depth));
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Value::Seq {
            ty: self.ty,
            elems: Some(self.list),
        })
    }
}

impl serde::ser::SerializeTuple for SerializeList {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        // tuple and array elements are passed without an extra borrow
        self.list.push(nested(value, self.depth));
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        serde::ser::SerializeSeq::end(self)
    }
}
