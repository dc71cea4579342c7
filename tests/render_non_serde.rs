use std::collections::BTreeMap;

use pretty_assertions::assert_eq;

use valstr::{Body, Renderer, Scalar, TypeName, Value};

fn point(x: i32, y: i32) -> Value {
    Value::record("geo::Point", [("X", Value::from(x)), ("Y", Value::from(y))])
}

#[test]
fn render_invalid() {
    assert_eq!(Value::Invalid.to_string(), "<nil>");
    assert_eq!(format!("{:#}", Value::Invalid), "<nil>");
}

#[test]
fn render_null_reference() {
    let value = Value::none("Foo");
    assert_eq!(format!("{value}"), "<nil>");
    assert_eq!(format!("{value:#}"), "Foo<nil>");
}

#[test]
fn render_boxed_record() {
    let value = Value::from(Box::new(point(1, 2)));
    assert_eq!(format!("{value}"), "&{X:1, Y:2}");
    assert_eq!(format!("{value:#}"), "&geo::Point{X:1, Y:2}");
}

#[test]
fn render_record_field_order() {
    let value = Value::record("T", [("B", Value::from(1)), ("A", Value::from(2))]);
    assert_eq!(value.to_string(), "{B:1, A:2}");
}

#[test]
fn render_empty_composites() {
    let record = Value::record("T", Vec::<(&str, Value)>::new());
    let seq = Value::seq("T", []);
    let map = Value::map("T", []);
    assert_eq!(format!("{record:#}"), "T{}");
    assert_eq!(format!("{seq:#}"), "T[]");
    assert_eq!(format!("{map:#}"), "T[]");
}

#[test]
fn render_null_composites() {
    let seq = Value::Seq {
        ty: TypeName::from("T"),
        elems: None,
    };
    let map = Value::Map {
        ty: TypeName::from("M"),
        entries: None,
    };
    assert_eq!(format!("{seq}"), "<nil>");
    assert_eq!(format!("{seq:#}"), "T<nil>");
    assert_eq!(format!("{map:#}"), "M<nil>");
    assert!(seq.is_nil() && map.is_nil());
}

#[test]
fn render_from_vec() {
    assert_eq!(Value::from(vec![1, 2, 3]).to_string(), "[1, 2, 3]");
    assert_eq!(
        format!("{:#}", Value::from(vec![1, 2, 3])),
        "alloc::vec::Vec<i32>[1, 2, 3]"
    );
    assert_eq!(Value::from_iter(["a", "b"]).to_string(), r#"["a", "b"]"#);
}

#[test]
fn render_from_option() {
    assert_eq!(format!("{:#}", Value::from(None::<i32>)), "i32<nil>");
    assert_eq!(Value::from(Some(1)).to_string(), "&1");
    assert_eq!(Value::from(Some(Box::new(1))).to_string(), "&1");
    assert_eq!(Value::from(Some(vec![1])).to_string(), "[1]");
    assert_eq!(format!("{:#}", Value::from(None::<Box<u8>>)), "u8<nil>");
}

#[test]
fn render_from_map() {
    let map = BTreeMap::from([("a", 1), ("b", 2)]);
    assert_eq!(Value::from(map).to_string(), r#"[{"a":1} {"b":2}]"#);
}

#[test]
fn render_scalars() {
    let tests = [
        (Value::from(()), "()"),
        (Value::from(true), "true"),
        (Value::from(-1_i64), "-1"),
        (Value::from(7_usize), "7"),
        (Value::from(2.0), "2.0"),
        (Value::from(f64::NAN), "NaN"),
        (Value::from('\n'), r"'\n'"),
        (Value::from("tab\t"), r#""tab\t""#),
        (Value::from(String::from("s")), r#""s""#),
    ];
    for (value, exp) in tests {
        assert_eq!(value.to_string(), exp);
        assert_eq!(format!("{value:#}"), exp);
    }
}

#[test]
fn render_variants() {
    let ty = "app::Shape";
    let tests = [
        (Value::variant(ty, "Dot", Body::Unit), "Dot", "app::Shape::Dot"),
        (
            Value::variant(ty, "Circle", Body::Newtype(Box::new(Value::from(1)))),
            "Circle(1)",
            "app::Shape::Circle(1)",
        ),
        (
            Value::variant(ty, "Rect", Body::Tuple(vec![Value::from(1), Value::from(2)])),
            "Rect(1, 2)",
            "app::Shape::Rect(1, 2)",
        ),
        (
            Value::variant(ty, "Poly", Body::Struct(vec![("n".into(), Value::from(3))])),
            "Poly{n:3}",
            "app::Shape::Poly{n:3}",
        ),
    ];
    for (value, plain, typed) in tests {
        assert_eq!(value.to_string(), plain);
        assert_eq!(format!("{value:#}"), typed);
    }
}

#[test]
fn render_elided_and_error() {
    let value = Value::seq("T", [Value::Elided, Value::Error(String::from("boom"))]);
    assert_eq!(value.to_string(), "[<...>, <error: boom>]");
}

#[test]
fn render_map_keys_quoted_unescaped() {
    let value = Value::map(
        "M",
        [(
            Value::Scalar(Scalar::Str(String::from("a b"))),
            Value::from("c d"),
        )],
    );
    assert_eq!(value.to_string(), r#"[{"a b":"c d"}]"#);
}

#[test]
fn render_entry_crate_shortens_only_its_paths() {
    let item = Value::record("app::Item", [("x", Value::from(1))]);
    let value = Value::seq("alloc::vec::Vec<app::Item>", [item]);
    let renderer = Renderer::new().type_prefix(true).entry_crate("app");
    assert_eq!(renderer.render_value(&value), "alloc::vec::Vec<Item>[Item{x:1}]");
}

#[test]
fn render_foreign_types_fully_qualified() {
    let inner = Value::record("lib::Inner", [("x", Value::from(1))]);
    let value = Value::record("app::Outer", [("inner", inner)]);
    let renderer = Renderer::new().type_prefix(true).entry_crate("app::module");
    assert_eq!(renderer.render_value(&value), "Outer{inner:lib::Inner{x:1}}");

    // the same value rendered as a foreign root
    let renderer = Renderer::new().type_prefix(true).entry_crate("lib");
    assert_eq!(renderer.render_value(&value), "app::Outer{inner:Inner{x:1}}");
}

#[test]
fn render_without_entry_crate_is_fully_qualified() {
    let value = Value::seq("alloc::vec::Vec<app::Item>", [Value::none("app::Item")]);
    assert_eq!(format!("{value:#}"), "alloc::vec::Vec<app::Item>[app::Item<nil>]");
}

#[test]
fn render_renderer_options() {
    let value = point(1, 2);
    assert_eq!(Renderer::new().render_value(&value), "{X:1, Y:2}");
    assert_eq!(
        Renderer::new().type_prefix(true).render_value(&value),
        "geo::Point{X:1, Y:2}"
    );
    assert_eq!(
        Renderer::new()
            .type_prefix(true)
            .entry_crate("geo")
            .render_value(&value),
        "Point{X:1, Y:2}"
    );
    // an entry crate has no effect without prefixes
    assert_eq!(
        Renderer::new().entry_crate("geo").render_value(&value),
        "{X:1, Y:2}"
    );
}

#[test]
fn render_write_value() {
    let mut buf = String::from("value = ");
    Renderer::new()
        .write_value(&mut buf, &Value::from(vec![true]))
        .unwrap();
    assert_eq!(buf, "value = [true]");
}
