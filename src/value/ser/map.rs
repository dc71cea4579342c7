use serde::ser::Serialize;

use crate::error::{Error, Result};
use crate::value::ser::{item, Depth};
use crate::value::{Entries, TypeName, Value};

pub(crate) struct SerializeMap {
    ty: TypeName,
    depth: Depth,
    entries: Entries,
    next_key: Option<Value>,
}

impl SerializeMap {
    pub(crate) fn with_capacity(ty: TypeName, depth: Depth, len: usize) -> Self {
        Self {
            ty,
            depth,
            entries: Vec::with_capacity(len),
            next_key: None,
        }
    }
}

impl serde::ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T: ?Sized>(&mut self, key: &T) -> Result<()>
    where
        T: Serialize,
    {
        self.next_key = Some(item(key, self.depth));
        Ok(())
    }

    fn serialize_value<T: ?Sized>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| Error::new("map value serialized before its key"))?;
        self.entries.push((key, item(value, self.depth)));
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Value::Map {
            ty: self.ty,
            entries: Some(self.entries),
        })
    }
}
