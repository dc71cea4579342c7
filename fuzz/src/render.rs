#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use serde::Serialize;

#[derive(Debug, Serialize, Arbitrary)]
enum Value {
    None,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Char(char),
    String(String),
    Boxed(Box<Value>),
    Optional(Option<Box<Value>>),
    List(Vec<Value>),
    Tuple(Box<Value>, Box<Value>),
    Map(BTreeMap<String, Value>),
    Keyed(Vec<(Value, Value)>),
    Record { a: Box<Value>, b: Option<i32> },
}

fuzz_target!(|data: (Value, u8)| {
    let (value, depth) = data;
    let plain = valstr::to_string(&value);
    let typed = valstr::to_type_string(&value);
    assert!(typed.len() >= plain.len());
    let _ = valstr::Renderer::new()
        .type_prefix(true)
        .max_depth(usize::from(depth))
        .render(&value);
});
