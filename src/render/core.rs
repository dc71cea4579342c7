use std::borrow::Cow;
use std::fmt;

use crate::value::{Body, Entries, Fields, Scalar, TypeName, Value};

const NIL: &str = "<nil>";
const ELIDED: &str = "<...>";

/// Options that stay the same for every value rendered in a single call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Options<'a> {
    pub type_prefix: bool,
    pub entry: Option<&'a str>,
}

impl<'a> Options<'a> {
    /// Options for rendering without any type prefixes.
    pub const PLAIN: Options<'static> = Options {
        type_prefix: false,
        entry: None,
    };

    /// Returns the prefix to write before a value of type `ty`.
    ///
    /// This is empty unless type prefixes are enabled. Types in the entry
    /// crate are written using their short name.
    pub fn type_name<'t>(&self, ty: &'t TypeName) -> Cow<'t, str> {
        if !self.type_prefix {
            return Cow::Borrowed("");
        }
        ty.display_for(self.entry)
    }
}

/// Writes a [`Value`] to a buffer.
pub(crate) struct Formatter<'a> {
    buf: &'a mut (dyn fmt::Write + 'a),
    opts: Options<'a>,
}

impl<'a> Formatter<'a> {
    pub fn new(buf: &'a mut (dyn fmt::Write + 'a), opts: Options<'a>) -> Self {
        Self { buf, opts }
    }

    pub fn value(&mut self, value: &Value) -> fmt::Result {
        match value {
            Value::Invalid => self.buf.write_str(NIL),

            Value::Ref { ty, target: None }
            | Value::Seq { ty, elems: None }
            | Value::Map { ty, entries: None } => {
                self.prefix(ty)?;
                self.buf.write_str(NIL)
            }

            Value::Ref {
                target: Some(target),
                ..
            } => {
                self.buf.write_char('&')?;
                self.value(target)
            }

            Value::Record { ty, fields } => {
                self.prefix(ty)?;
                self.fields(fields)
            }

            Value::Seq {
                ty,
                elems: Some(elems),
            } => {
                self.prefix(ty)?;
                self.list('[', elems, ']')
            }

            Value::Map {
                ty,
                entries: Some(entries),
            } => {
                self.prefix(ty)?;
                self.entries(entries)
            }

            Value::Variant { ty, name, body } => {
                let prefix = self.opts.type_name(ty);
                if !prefix.is_empty() {
                    write!(self.buf, "{prefix}::")?;
                }
                self.buf.write_str(name)?;
                match body {
                    Body::Unit => Ok(()),
                    Body::Newtype(value) => self.list('(', std::slice::from_ref(&**value), ')'),
                    Body::Tuple(values) => self.list('(', values, ')'),
                    Body::Struct(fields) => self.fields(fields),
                }
            }

            Value::Scalar(scalar) => self.scalar(scalar),

            Value::Elided => self.buf.write_str(ELIDED),

            Value::Error(msg) => write!(self.buf, "<error: {msg}>"),
        }
    }

    fn prefix(&mut self, ty: &TypeName) -> fmt::Result {
        let prefix = self.opts.type_name(ty);
        self.buf.write_str(&prefix)
    }

    fn fields(&mut self, fields: &Fields) -> fmt::Result {
        self.buf.write_char('{')?;
        for (i, (name, value)) in fields.iter().enumerate() {
            if i > 0 {
                self.buf.write_str(", ")?;
            }
            write!(self.buf, "{name}:")?;
            self.value(value)?;
        }
        self.buf.write_char('}')
    }

    fn list(&mut self, open: char, values: &[Value], close: char) -> fmt::Result {
        self.buf.write_char(open)?;
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.buf.write_str(", ")?;
            }
            self.value(value)?;
        }
        self.buf.write_char(close)
    }

    fn entries(&mut self, entries: &Entries) -> fmt::Result {
        self.buf.write_char('[')?;
        for (i, (key, value)) in entries.iter().enumerate() {
            if i > 0 {
                self.buf.write_char(' ')?;
            }
            self.buf.write_str("{\"")?;
            self.key(key)?;
            self.buf.write_str("\":")?;
            self.value(value)?;
            self.buf.write_char('}')?;
        }
        self.buf.write_char(']')
    }

    /// Writes a map key in its plain textual form, it is already quoted.
    fn key(&mut self, key: &Value) -> fmt::Result {
        match key {
            Value::Scalar(Scalar::Str(s)) => self.buf.write_str(s),
            Value::Scalar(Scalar::Char(c)) => self.buf.write_char(*c),
            Value::Scalar(Scalar::Float(n)) => write!(self.buf, "{n}"),
            Value::Scalar(scalar) => self.scalar(scalar),
            Value::Ref {
                target: Some(target),
                ..
            } => self.key(target),
            key => {
                let opts = std::mem::replace(&mut self.opts, Options::PLAIN);
                let result = self.value(key);
                self.opts = opts;
                result
            }
        }
    }

    fn scalar(&mut self, scalar: &Scalar) -> fmt::Result {
        match scalar {
            Scalar::Unit => self.buf.write_str("()"),
            Scalar::Bool(b) => write!(self.buf, "{b}"),
            Scalar::Int(n) => write!(self.buf, "{n}"),
            Scalar::Uint(n) => write!(self.buf, "{n}"),
            Scalar::Float(n) => write!(self.buf, "{n:?}"),
            Scalar::Char(c) => write!(self.buf, "{c:?}"),
            Scalar::Str(s) => write!(self.buf, "{s:?}"),
        }
    }
}
