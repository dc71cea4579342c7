use std::borrow::Cow;
use std::fmt;
use std::ops::Range;

/// Generic wrappers that point at their single type argument.
const POINTERS: &[&str] = &["alloc::boxed::Box<", "alloc::rc::Rc<", "alloc::sync::Arc<"];

const OPTION: &str = "core::option::Option<";

/// The name of a Rust type, as returned by [`std::any::type_name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName(Cow<'static, str>);

impl TypeName {
    /// Returns the name of the type `T`.
    #[inline]
    pub fn of<T: ?Sized>() -> Self {
        Self(Cow::Borrowed(std::any::type_name::<T>()))
    }

    /// Returns the full name.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name as it should be displayed when `entry` is the entry
    /// crate.
    ///
    /// Every path rooted at the entry crate is shortened to its last segment,
    /// all other paths are left fully qualified.
    pub fn display_for(&self, entry: Option<&str>) -> Cow<'_, str> {
        let name = self.as_str();
        let entry = match entry {
            Some(entry) if name.contains(entry) => entry,
            _ => return Cow::Borrowed(name),
        };
        let mut out = String::with_capacity(name.len());
        for token in Tokens::new(name) {
            match token {
                Token::Path(path) => match path.split_once("::") {
                    Some((root, _)) if root == entry => out.push_str(last_segment(path)),
                    _ => out.push_str(path),
                },
                Token::Other(other) => out.push_str(other),
            }
        }
        Cow::Owned(out)
    }

    /// The name without any module path or generic arguments.
    pub(crate) fn base_name(&self) -> &str {
        let name = self.as_str();
        let name = name.find('<').map_or(name, |i| &name[..i]);
        last_segment(name)
    }

    /// Returns the type pointed at if this is a reference or smart pointer.
    ///
    /// References to unsized strings and slices are not treated as pointers
    /// since they serialize as the string or sequence itself.
    pub(crate) fn pointee(&self) -> Option<TypeName> {
        let name = self.as_str();
        let range = if let Some(rest) = name.strip_prefix("&mut ") {
            name.len() - rest.len()..name.len()
        } else if let Some(rest) = name.strip_prefix('&') {
            name.len() - rest.len()..name.len()
        } else {
            POINTERS
                .iter()
                .find_map(|open| generic_argument(name, open))?
        };
        let pointee = &name[range.clone()];
        if pointee == "str" || pointee.starts_with('[') {
            return None;
        }
        Some(self.slice(range))
    }

    /// Returns `T` if this is `Option<T>`.
    pub(crate) fn option_inner(&self) -> Option<TypeName> {
        generic_argument(self.as_str(), OPTION).map(|range| self.slice(range))
    }

    /// Returns the type that serde reported as `name`.
    ///
    /// This differs from this type when a `Serialize` implementation forwards
    /// to one of its type arguments, like `RefCell<T>`, or when the type is
    /// renamed. A renamed type keeps the module path of this type.
    pub(crate) fn or_named(self, name: &'static str) -> TypeName {
        if name.is_empty() || self.base_name() == name {
            return self;
        }
        let full = self.as_str();
        let forwarded = Tokens::new(full).find_map(|token| match token {
            Token::Path(path) if last_segment(path) == name => Some(path),
            _ => None,
        });
        if let Some(path) = forwarded {
            return TypeName::from(path.to_owned());
        }
        let path = full.find('<').map_or(full, |i| &full[..i]);
        match path.rsplit_once("::") {
            Some((module, _)) => TypeName::from(format!("{module}::{name}")),
            None => TypeName::from(name),
        }
    }

    /// Removes one leading shared borrow.
    ///
    /// The `Serialize` impls of the standard collections pass each element,
    /// key and value by reference to the serializer, so their static type is
    /// one borrow deeper than the collection's type argument.
    pub(crate) fn strip_borrow(self) -> TypeName {
        let name = self.as_str();
        if name.starts_with('&') && !name.starts_with("&mut ") {
            let range = 1..name.len();
            self.slice(range)
        } else {
            self
        }
    }

    fn slice(&self, range: Range<usize>) -> TypeName {
        match self.0 {
            Cow::Borrowed(name) => Self(Cow::Borrowed(&name[range])),
            Cow::Owned(ref name) => Self(Cow::Owned(name[range].to_owned())),
        }
    }
}

impl From<&'static str> for TypeName {
    #[inline]
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for TypeName {
    #[inline]
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the range of the type argument in `name` if it is `{open}T>`.
fn generic_argument(name: &str, open: &str) -> Option<Range<usize>> {
    let inner = name.strip_prefix(open)?.strip_suffix('>')?;
    Some(open.len()..open.len() + inner.len())
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

////////////////////////////////////////////////////////////////////////////////
// Type name scanning
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    /// A path like `alloc::vec::Vec` or `i32`.
    Path(&'a str),
    /// Anything between paths, like `<`, `, ` or `; 3]`.
    Other(&'a str),
}

struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    fn new(name: &'a str) -> Self {
        Self { rest: name }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let n = path_len(self.rest);
        let (token, rest) = if n > 0 {
            let (path, rest) = self.rest.split_at(n);
            (Token::Path(path), rest)
        } else {
            let i = self
                .rest
                .char_indices()
                .skip(1)
                .find(|&(_, c)| is_ident_start(c))
                .map_or(self.rest.len(), |(i, _)| i);
            let (other, rest) = self.rest.split_at(i);
            (Token::Other(other), rest)
        };
        self.rest = rest;
        Some(token)
    }
}

/// Returns the length of the path at the start of `s`.
fn path_len(s: &str) -> usize {
    let mut end = ident_len(s);
    if end == 0 {
        return 0;
    }
    while let Some(rest) = s[end..].strip_prefix("::") {
        match ident_len(rest) {
            0 => break,
            n => end += 2 + n,
        }
    }
    end
}

/// Returns the length of the identifier at the start of `s`.
fn ident_len(s: &str) -> usize {
    let mut chars = s.char_indices();
    match chars.next() {
        Some((_, c)) if is_ident_start(c) => {}
        _ => return 0,
    }
    chars
        .find(|&(_, c)| !is_ident(c))
        .map_or(s.len(), |(i, _)| i)
}

#[cfg(feature = "unicode")]
fn is_ident_start(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_start(c)
}

#[cfg(feature = "unicode")]
fn is_ident(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

#[cfg(not(feature = "unicode"))]
fn is_ident_start(c: char) -> bool {
    matches!(c, 'A'..='Z' | 'a'..='z' | '_')
}

#[cfg(not(feature = "unicode"))]
fn is_ident(c: char) -> bool {
    matches!(c, '0'..='9' | 'A'..='Z' | 'a'..='z' | '_')
}
