//! Render any value as a human readable string.
//!
//! # Features
//!
//! - Render any [`serde`] serializable value without writing any formatting
//!   code: `valstr::to_string(&user)`
//! - Optional type name prefixes: `valstr::to_type_string!(&user)`
//! - References, records, sequences, maps, enums and scalars each have their
//!   own compact syntax
//! - Never fails: unsupported or failing values are rendered in place
//! - Build a [`Value`] by hand and render it with or without `serde`
//!
//! # Getting started
//!
//! The entry points are [`to_string`], [`to_type_string()`] and [`to_type_string!`].
//!
//! ```
//! #[derive(serde::Serialize)]
//! struct User {
//!     name: String,
//!     roles: Vec<&'static str>,
//! }
//!
//! let user = User {
//!     name: "John Smith".into(),
//!     roles: vec!["admin"],
//! };
//!
//! assert_eq!(valstr::to_string(&user), r#"{name:"John Smith", roles:["admin"]}"#);
//! ```
//!
//! Using [`to_type_string!`] each composite value is prefixed with the name of
//! its type. Types from the calling crate are written using their short name,
//! all other types use their full path. The [`to_type_string()`] function
//! writes every type name using its full path.
//!
//! ```
//! # #[derive(serde::Serialize)]
//! # struct User {
//! #     name: String,
//! #     roles: Vec<&'static str>,
//! # }
//! # let user = User {
//! #     name: "John Smith".into(),
//! #     roles: vec!["admin"],
//! # };
//! assert_eq!(
//!     valstr::to_type_string!(&user),
//!     r#"User{name:"John Smith", roles:alloc::vec::Vec<&str>["admin"]}"#
//! );
//! ```
//!
//! # Syntax
//!
//! | Shape | Rust types | Rendered as |
//! |-------|------------|-------------|
//! | Reference | `&T`, `Box<T>`, `Rc<T>`, `Arc<T>`, `Option<T>` | `&value` or `T<nil>` |
//! | Record | structs, tuple structs, unit structs | `T{a:1, b:2}` |
//! | Sequence | `Vec<T>`, slices, arrays, tuples, sets | `T[1, 2]` |
//! | Map | `HashMap<K, V>`, `BTreeMap<K, V>` | `T[{"a":1} {"b":2}]` |
//! | Enum variant | unit, newtype, tuple and struct variants | `T::A`, `T::B(1)`, `T::C{x:1}` |
//! | Scalar | numbers, strings, `bool`, `char`, `()` | their [`Debug`][std::fmt::Debug] form |
//!
//! `T` is only written when type prefixes are enabled. An absent value is
//! rendered as `<nil>`.
//!
//! A few more rules apply:
//!
//! - `Option<Box<T>>` is a single nullable reference, and an
//!   `Option<Vec<T>>` that is present renders as the sequence itself.
//! - Map entries are rendered in the iteration order of the map, which for a
//!   [`HashMap`][std::collections::HashMap] is not stable.
//! - Values nested more than [`DEFAULT_MAX_DEPTH`] levels deep are rendered as
//!   `<...>`, see [`Renderer::max_depth`].
//! - If a `Serialize` implementation fails, the value is rendered as
//!   `<error: message>`.
//!
//! # Rendering without `serde`
//!
//! A [`Value`] can be built by hand and rendered using a [`Renderer`] or its
//! [`Display`][std::fmt::Display] implementation. The alternate flag enables
//! type prefixes.
//!
//! ```
//! use valstr::Value;
//!
//! let point = Value::record("geo::Point", [("x", Value::from(1)), ("y", Value::from(2))]);
//! let value = Value::from(Box::new(point));
//!
//! assert_eq!(format!("{value}"), "&{x:1, y:2}");
//! assert_eq!(format!("{value:#}"), "&geo::Point{x:1, y:2}");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "serde")]
mod error;
#[cfg(feature = "serde")]
mod macros;
mod render;
mod value;

pub use crate::render::Renderer;
#[cfg(feature = "serde")]
pub use crate::value::{to_value, to_value_with_depth, DEFAULT_MAX_DEPTH};
pub use crate::value::{Body, Entries, FieldName, Fields, Scalar, TypeName, Value};

/// Render any serializable value to a string, without type prefixes.
///
/// # Examples
///
/// ```
/// assert_eq!(valstr::to_string(&vec![1, 2, 3]), "[1, 2, 3]");
/// assert_eq!(valstr::to_string(&None::<i32>), "<nil>");
/// ```
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[inline]
pub fn to_string<T>(value: &T) -> String
where
    T: ?Sized + serde::Serialize,
{
    Renderer::new().render(value)
}

/// Render any serializable value to a string, with type prefixes.
///
/// Every type name is written using its full path, use the
/// [`to_type_string!`] macro to shorten the names of the calling crate's types.
///
/// # Examples
///
/// ```
/// assert_eq!(valstr::to_type_string(&vec![1, 2, 3]), "alloc::vec::Vec<i32>[1, 2, 3]");
/// assert_eq!(valstr::to_type_string(&None::<i32>), "i32<nil>");
/// ```
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[inline]
pub fn to_type_string<T>(value: &T) -> String
where
    T: ?Sized + serde::Serialize,
{
    Renderer::new().type_prefix(true).render(value)
}
