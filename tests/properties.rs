//! Property tests for rendering hand built values.
//!
//! Type names are drawn from `T0` to `T3` and scalars are restricted to
//! integers and booleans, so that any type name in the output was written by
//! a type prefix.

use proptest::prelude::*;

use valstr::{Body, Renderer, Value};

const TYPES: [&str; 4] = ["T0", "T1", "T2", "T3"];

fn type_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(TYPES.to_vec())
}

fn field_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["a", "b", "c", "value"])
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<u32>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        type_name().prop_map(Value::none),
        Just(Value::Elided),
        Just(Value::Invalid),
    ]
}

fn any_value() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (type_name(), inner.clone()).prop_map(|(ty, v)| Value::some(ty, v)),
            (type_name(), prop::collection::vec((field_name(), inner.clone()), 0..4))
                .prop_map(|(ty, fields)| Value::record(ty, fields)),
            (type_name(), prop::collection::vec(inner.clone(), 0..4))
                .prop_map(|(ty, elems)| Value::seq(ty, elems)),
            (type_name(), prop::collection::vec((inner.clone(), inner.clone()), 0..3))
                .prop_map(|(ty, entries)| Value::map(ty, entries)),
            (type_name(), body(inner)).prop_map(|(ty, body)| Value::variant(ty, "v", body)),
        ]
    })
}

fn body(inner: impl Strategy<Value = Value> + Clone) -> impl Strategy<Value = Body> {
    prop_oneof![
        Just(Body::Unit),
        inner.clone().prop_map(|v| Body::Newtype(Box::new(v))),
        prop::collection::vec(inner.clone(), 0..3).prop_map(Body::Tuple),
        prop::collection::vec((field_name(), inner), 0..3).prop_map(|fields| {
            Body::Struct(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
        }),
    ]
}

fn strip_type_names(s: &str) -> String {
    let mut s = s.to_owned();
    for ty in TYPES {
        s = s.replace(&format!("{ty}::"), "");
    }
    for ty in TYPES {
        s = s.replace(ty, "");
    }
    s
}

fn is_balanced(s: &str) -> bool {
    let mut stack = Vec::new();
    for c in s.chars() {
        match c {
            '{' | '[' | '(' | '<' => stack.push(c),
            '}' | ']' | ')' | '>' => {
                let open = match c {
                    '}' => '{',
                    ']' => '[',
                    ')' => '(',
                    _ => '<',
                };
                if stack.pop() != Some(open) {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

proptest! {
    #[test]
    fn render_is_deterministic(value in any_value()) {
        let renderer = Renderer::new().type_prefix(true);
        prop_assert_eq!(renderer.render_value(&value), renderer.render_value(&value.clone()));
    }

    #[test]
    fn render_plain_has_no_type_names(value in any_value()) {
        let plain = value.to_string();
        prop_assert!(!plain.contains('T'), "{}", plain);
    }

    #[test]
    fn render_type_prefix_only_adds_type_names(value in any_value()) {
        let plain = value.to_string();
        let typed = format!("{value:#}");
        prop_assert_eq!(strip_type_names(&typed), plain);
    }

    #[test]
    fn render_delimiters_are_balanced(value in any_value()) {
        let typed = format!("{value:#}");
        prop_assert!(is_balanced(&typed), "{}", typed);
    }

    #[test]
    fn render_display_matches_renderer(value in any_value()) {
        prop_assert_eq!(value.to_string(), Renderer::new().render_value(&value));
        prop_assert_eq!(
            format!("{value:#}"),
            Renderer::new().type_prefix(true).render_value(&value)
        );
    }
}
