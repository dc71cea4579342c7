mod core;

use std::fmt;

use crate::render::core::{Formatter, Options};
#[cfg(feature = "serde")]
use crate::value::{to_value_with_depth, DEFAULT_MAX_DEPTH};
use crate::Value;

/// Renders values to strings.
///
/// A renderer holds the options for rendering, it is cheap to construct and
/// holds no state between calls. [`to_string`][crate::to_string] and
/// [`to_type_string`][crate::to_type_string] use a default renderer.
///
/// # Examples
///
/// Type names are written with their full path, except for types defined in
/// the entry crate.
///
/// ```
/// use valstr::{Renderer, Value};
///
/// let value = Value::record("geo::shapes::Point", [("x", Value::from(1))]);
///
/// let renderer = Renderer::new().type_prefix(true);
/// assert_eq!(renderer.render_value(&value), "geo::shapes::Point{x:1}");
///
/// let renderer = Renderer::new().type_prefix(true).entry_crate("geo");
/// assert_eq!(renderer.render_value(&value), "Point{x:1}");
/// ```
///
/// Passing [`module_path!`] makes the calling crate the entry crate, this is
/// what the [`to_type_string!`][crate::to_type_string!] macro does.
///
/// ```
/// use valstr::Renderer;
///
/// #[derive(serde::Serialize)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let renderer = Renderer::new().type_prefix(true).entry_crate(module_path!());
/// assert_eq!(renderer.render(&Some(Point { x: 1, y: 2 })), "&Point{x:1, y:2}");
/// assert_eq!(renderer.render(&None::<Point>), "Point<nil>");
/// ```
#[derive(Debug, Clone)]
pub struct Renderer<'a> {
    type_prefix: bool,
    entry_crate: Option<&'a str>,
    #[cfg(feature = "serde")]
    max_depth: usize,
}

impl Default for Renderer<'_> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Renderer<'a> {
    /// Construct a new renderer.
    ///
    /// Type prefixes are disabled by default.
    #[inline]
    pub fn new() -> Self {
        Self {
            type_prefix: false,
            entry_crate: None,
            #[cfg(feature = "serde")]
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set whether composite and nil values are prefixed with their type name.
    #[inline]
    pub fn type_prefix(mut self, enabled: bool) -> Self {
        self.type_prefix = enabled;
        self
    }

    /// Set the crate whose type names are written without a module path.
    ///
    /// Only the first segment of `path` is used, so a module path like
    /// `app::geo` selects the crate `app`. If not set, every type name is
    /// written with its full path.
    #[inline]
    pub fn entry_crate(mut self, path: &'a str) -> Self {
        let name = path.split_once("::").map_or(path, |(root, _)| root);
        self.entry_crate = Some(name);
        self
    }

    /// Set the maximum number of nested levels that will be captured.
    ///
    /// Values nested more deeply are rendered as `<...>`.
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    #[inline]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Render any serializable value to a string.
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    pub fn render<T>(&self, value: &T) -> String
    where
        T: ?Sized + serde::Serialize,
    {
        let value = to_value_with_depth(value, self.max_depth);
        self.render_value(&value)
    }

    /// Render a captured or hand built value to a string.
    pub fn render_value(&self, value: &Value) -> String {
        let mut buf = String::new();
        // writing to a `String` never fails
        let _ = self.write_value(&mut buf, value);
        buf
    }

    /// Render a value to the given buffer.
    #[tracing::instrument(level = "trace", skip_all, fields(type_prefix = self.type_prefix))]
    pub fn write_value(&self, buf: &mut dyn fmt::Write, value: &Value) -> fmt::Result {
        let opts = Options {
            type_prefix: self.type_prefix,
            entry: self.entry_crate,
        };
        Formatter::new(buf, opts).value(value)
    }
}

/// Formats the value without type prefixes, or with fully qualified type
/// prefixes when using the alternate flag `{:#}`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Renderer::new().type_prefix(f.alternate()).write_value(f, self)
    }
}
