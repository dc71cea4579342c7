/// Render any serializable value to a string, with type prefixes.
///
/// Unlike the [`to_type_string()`][fn@crate::to_type_string] function, types
/// defined in the crate calling this macro are written using their short name.
/// Types from all other crates are written using their full path.
///
/// # Examples
///
/// ```
/// #[derive(serde::Serialize)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let points = vec![Point { x: 1, y: 2 }];
/// assert_eq!(
///     valstr::to_type_string!(&points),
///     "alloc::vec::Vec<Point>[Point{x:1, y:2}]"
/// );
/// ```
#[macro_export]
macro_rules! to_type_string {
    ($value:expr $(,)?) => {
        $crate::Renderer::new()
            .type_prefix(true)
            .entry_crate(::core::module_path!())
            .render($value)
    };
}
