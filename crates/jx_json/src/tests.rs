use alloc::sync::Arc;
use std::collections::{BTreeMap, HashMap, VecDeque};

use jx_reflect::Reflect;
use jx_reflect::ops::{BoxError, Dynamic, Marshaler, Number, Unmarshaler};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::{FieldPlan, Json};

// -----------------------------------------------------------------------------
// Helpers

/// A JSON `\uXXXX` escape.
fn esc(hex: &str) -> String {
    format!("\\u{hex}")
}

fn one_shot(json: &Json, value: &dyn Reflect) -> String {
    json.marshal_to_string(value).unwrap()
}

fn streamed(json: &Json, value: &dyn Reflect) -> String {
    let mut encoder = json.new_encoder(Vec::new());
    encoder.encode(value).unwrap();
    let mut out = String::from_utf8(encoder.into_inner()).unwrap();
    assert_eq!(out.pop(), Some('\n'));
    out
}

fn decode_both<T: Reflect + Default>(json: &Json, data: &str) -> [Result<T, Error>; 2] {
    [
        json.from_slice(data.as_bytes()),
        json.new_decoder(data.as_bytes()).decode_into(),
    ]
}

// -----------------------------------------------------------------------------
// Fixtures

#[derive(Reflect, Default, Debug, PartialEq)]
struct Point {
    y: i32,
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Left {
    name: String,
    left: i32,
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Right {
    name: String,
    right: i32,
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Both {
    #[reflect(embed)]
    left: Left,
    #[reflect(embed)]
    right: Right,
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Audit {
    created_by: String,
    revision: u32,
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Document {
    title: String,
    #[reflect(embed)]
    audit: Option<Audit>,
    #[reflect(embed)]
    left: Left,
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Inventory {
    id: u64,
    small: i8,
    ratio: f64,
    weight: f32,
    active: bool,
    grade: char,
    name: String,
    tags: Vec<String>,
    queue: VecDeque<u16>,
    counts: BTreeMap<String, i32>,
    index: HashMap<String, Vec<u8>>,
    parent: Option<Box<Inventory>>,
    extra: Dynamic,
    big: u128,
}

fn sample_inventory() -> Inventory {
    Inventory {
        id: 7,
        small: -5,
        ratio: 0.1,
        weight: 2.5,
        active: true,
        grade: 'é',
        name: "crate <A>".into(),
        tags: vec!["a".into(), "b".into()],
        queue: VecDeque::from([3, 1, 2]),
        counts: BTreeMap::from([("x".to_owned(), 1), ("a".to_owned(), -2)]),
        index: HashMap::from([("bytes".to_owned(), vec![0, 255])]),
        parent: Some(Box::new(Inventory {
            id: 1,
            ..Default::default()
        })),
        extra: Dynamic::Map(BTreeMap::from([(
            "k".to_owned(),
            Dynamic::List(vec![
                Dynamic::Float(1.5),
                Dynamic::Null,
                Dynamic::String("s".into()),
            ]),
        )])),
        big: u128::MAX,
    }
}

// -----------------------------------------------------------------------------
// Key transform

#[allow(non_snake_case)]
#[derive(Reflect, Default, Debug, PartialEq)]
struct Keys {
    Foo: String,
    Bar: i64,
    Baz: HashMap<String, String>,
}

fn lower_first_and_append(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).chain(name.chars()).collect(),
        None => String::new(),
    }
}

#[test]
fn key_transform_applies_to_members_only() {
    let json = Json::builder()
        .key_encode_fn(lower_first_and_append)
        .build();
    let value = Keys {
        Foo: "foo".into(),
        Bar: 42,
        Baz: HashMap::from([
            ("One".to_owned(), "one".to_owned()),
            ("two".to_owned(), "two".to_owned()),
            ("three".to_owned(), "Three".to_owned()),
        ]),
    };

    let expected =
        r#"{"fooFoo":"foo","barBar":42,"bazBaz":{"One":"one","three":"Three","two":"two"}}"#;
    assert_eq!(one_shot(&json, &value), expected);
    assert_eq!(streamed(&json, &value), expected);

    let back: Keys = json.from_slice(expected.as_bytes()).unwrap();
    assert_eq!(back, value);
}

#[test]
fn key_transform_is_fixed_at_the_root() {
    let root = Json::builder()
        .key_encode_fn(|name: &str| name.to_uppercase())
        .build();
    let derived = root.omit_empty().escape_markup(false);

    assert!(derived.has_key_encode_fn());
    assert!(!Json::new().has_key_encode_fn());
    assert_eq!(one_shot(&derived, &Point { y: 1 }), r#"{"Y":1}"#);
}

// -----------------------------------------------------------------------------
// Omit-empty

#[allow(non_snake_case)]
#[derive(Reflect, Default)]
struct Optionals {
    Foo: String,
    Bar: i32,
    Baz: BTreeMap<String, Dynamic>,
}

#[allow(non_snake_case)]
#[derive(Reflect, Default)]
struct FooOmits {
    #[reflect(omit_empty)]
    Foo: String,
    Bar: i32,
}

#[allow(non_snake_case)]
#[derive(Reflect, Default)]
struct FooKept {
    #[reflect(omit_empty = false)]
    Foo: String,
    Bar: i32,
}

#[test]
fn omit_empty_by_configuration() {
    let value = Optionals {
        Foo: "foo".into(),
        ..Default::default()
    };
    let json = Json::new();

    assert_eq!(one_shot(&json, &value), r#"{"Foo":"foo","Bar":0,"Baz":{}}"#);
    assert_eq!(streamed(&json, &value), r#"{"Foo":"foo","Bar":0,"Baz":{}}"#);
    assert_eq!(one_shot(&json.omit_empty(), &value), r#"{"Foo":"foo"}"#);
    assert_eq!(streamed(&json.omit_empty(), &value), r#"{"Foo":"foo"}"#);
}

#[test]
fn omit_empty_by_member() {
    let json = Json::new();
    assert_eq!(one_shot(&json, &FooOmits::default()), r#"{"Bar":0}"#);
    assert_eq!(one_shot(&json.omit_empty(), &FooOmits::default()), "{}");

    // An explicit `false` wins over the configuration.
    assert_eq!(
        one_shot(&json.omit_empty(), &FooKept::default()),
        r#"{"Foo":""}"#
    );
}

#[derive(Reflect, Default)]
struct Measured {
    #[reflect(omit_empty)]
    exact: Number,
    float: Dynamic,
}

#[test]
fn zero_number_text_is_not_empty() {
    let value = Measured {
        exact: Number::new("0".to_owned()),
        float: Dynamic::Float(0.0),
    };
    let json = Json::new().omit_empty();
    assert_eq!(one_shot(&json, &value), r#"{"exact":0,"float":0.0}"#);
    assert_eq!(streamed(&json, &value), r#"{"exact":0,"float":0.0}"#);

    assert_eq!(one_shot(&json, &Measured::default()), "{}");
}

#[test]
fn omitted_members_decode_back_to_defaults() {
    let json = Json::new().omit_empty();
    let bytes = json.marshal(&Point::default()).unwrap();
    assert_eq!(bytes, b"{}");
    assert_eq!(json.from_slice::<Point>(&bytes).unwrap(), Point::default());
}

// -----------------------------------------------------------------------------
// Numbers in dynamic slots

#[derive(Reflect, Default, Debug, PartialEq)]
struct Slot {
    value: Dynamic,
}

#[test]
fn numbers_decode_to_float_by_default() {
    for result in decode_both::<Slot>(&Json::new(), r#"{"value":2}"#) {
        assert_eq!(result.unwrap().value, Dynamic::Float(2.0));
    }
}

#[test]
fn numbers_decode_to_text_with_use_number() {
    let expected = Dynamic::Number(Number::new("2".to_owned()));
    for result in decode_both::<Slot>(&Json::new().use_number(), r#"{"value":2}"#) {
        assert_eq!(result.unwrap().value, expected);
    }
}

#[test]
fn number_text_is_exact() {
    let json = Json::new().use_number();
    let slot: Slot = json
        .from_slice(br#"{"value":12345678901234567890.50}"#)
        .unwrap();
    assert_eq!(
        slot.value.as_number().map(Number::as_str),
        Some("12345678901234567890.50")
    );
    assert_eq!(
        json.marshal(&slot).unwrap(),
        br#"{"value":12345678901234567890.50}"#
    );
}

#[test]
fn decoder_switches_to_numbers() {
    let mut decoder = Json::new().new_decoder(&b"1.5 123"[..]);
    assert_eq!(decoder.decode_into::<Dynamic>().unwrap(), Dynamic::Float(1.5));

    decoder.use_number();
    let second: Dynamic = decoder.decode_into().unwrap();
    assert_eq!(second.as_number().map(Number::as_str), Some("123"));
}

#[test]
fn float_out_of_range_for_dynamic() {
    let err = Json::new().from_slice::<Slot>(br#"{"value":1e400}"#).unwrap_err();
    let Error::TypeMismatch(err) = err else {
        panic!("expected a type mismatch, got {err:?}");
    };
    assert_eq!(err.path, "value");
}

// -----------------------------------------------------------------------------
// Unknown fields

#[test]
fn unknown_fields_are_ignored_by_default() {
    for result in decode_both::<Point>(&Json::new(), r#"{"x":1}"#) {
        assert_eq!(result.unwrap(), Point::default());
    }
}

#[test]
fn unknown_fields_can_be_disallowed() {
    let strict = Json::new().disallow_unknown_fields();
    for result in decode_both::<Point>(&strict, r#"{"x":1}"#) {
        let err = result.unwrap_err();
        assert!(matches!(err, Error::UnknownField(_)));
        assert_eq!(err.to_string(), r#"unknown field "x""#);
    }

    let mut decoder = Json::new().new_decoder(&br#"{"x":1} {"x":2}"#[..]);
    assert_eq!(decoder.decode_into::<Point>().unwrap(), Point::default());
    decoder.disallow_unknown_fields();
    let err = decoder.decode_into::<Point>().unwrap_err();
    assert_eq!(err.to_string(), r#"unknown field "x""#);
}

// -----------------------------------------------------------------------------
// Markup escaping

#[test]
fn markup_is_escaped_by_default() {
    let value = "<&>".to_owned();
    let escaped = format!("\"{}{}{}\"", esc("003c"), esc("0026"), esc("003e"));

    let json = Json::new();
    assert!(json.escapes_markup());
    assert_eq!(one_shot(&json, &value), escaped);
    assert_eq!(streamed(&json, &value), escaped);

    let raw = json.escape_markup(false);
    assert_eq!(one_shot(&raw, &value), "\"<&>\"");
    assert_eq!(streamed(&raw, &value), "\"<&>\"");
}

#[test]
fn escaped_markup_decodes_back() {
    let escaped = format!("\"{}b{}\"", esc("003c"), esc("003e"));
    let text: String = Json::new().from_slice(escaped.as_bytes()).unwrap();
    assert_eq!(text, "<b>");
}

// -----------------------------------------------------------------------------
// Embedding

#[test]
fn ambiguous_names_are_dropped() {
    let value = Both {
        left: Left {
            name: "l".into(),
            left: 1,
        },
        right: Right {
            name: "r".into(),
            right: 2,
        },
    };
    let json = Json::new();
    assert_eq!(one_shot(&json, &value), r#"{"left":1,"right":2}"#);

    let decoded: Both = json
        .from_slice(br#"{"name":"x","left":5,"right":6}"#)
        .unwrap();
    assert_eq!(decoded.left, Left { name: String::new(), left: 5 });
    assert_eq!(decoded.right, Right { name: String::new(), right: 6 });

    let err = json
        .disallow_unknown_fields()
        .from_slice::<Both>(br#"{"name":"x"}"#)
        .unwrap_err();
    assert_eq!(err.to_string(), r#"unknown field "name""#);
}

#[test]
fn embedded_option_hides_and_fills() {
    let json = Json::new();
    let mut doc = Document {
        title: "t".into(),
        audit: None,
        left: Left {
            name: "n".into(),
            left: 1,
        },
    };
    assert_eq!(one_shot(&json, &doc), r#"{"title":"t","name":"n","left":1}"#);

    doc.audit = Some(Audit {
        created_by: "ops".into(),
        revision: 2,
    });
    assert_eq!(
        one_shot(&json, &doc),
        r#"{"title":"t","created_by":"ops","revision":2,"name":"n","left":1}"#
    );

    let decoded: Document = json.from_slice(br#"{"revision":3}"#).unwrap();
    assert_eq!(
        decoded.audit,
        Some(Audit {
            created_by: String::new(),
            revision: 3
        })
    );
}

#[allow(non_snake_case)]
#[derive(Reflect, Default, Debug, PartialEq)]
struct Cased {
    Key: i32,
    #[reflect(rename = "key")]
    lower: i32,
}

#[test]
fn keys_match_exactly_then_ignoring_case() {
    let json = Json::new();
    assert_eq!(json.from_slice::<Point>(br#"{"Y":4}"#).unwrap(), Point { y: 4 });

    let cased: Cased = json.from_slice(br#"{"key":1,"KEY":2}"#).unwrap();
    assert_eq!(cased, Cased { Key: 2, lower: 1 });
}

// -----------------------------------------------------------------------------
// Round trips

#[test]
fn round_trip() {
    let value = sample_inventory();
    for json in [
        Json::new(),
        Json::new().escape_markup(false),
        Json::builder().key_encode_fn(|n: &str| format!("_{n}")).build(),
    ] {
        let bytes = json.marshal(&value).unwrap();
        assert_eq!(json.from_slice::<Inventory>(&bytes).unwrap(), value);

        let mut encoder = json.new_encoder(Vec::new());
        encoder.set_indent("  ");
        encoder.encode(&value).unwrap();
        encoder.encode(&value).unwrap();

        let out = encoder.into_inner();
        let mut decoder = json.new_decoder(out.as_slice());
        assert_eq!(decoder.decode_into::<Inventory>().unwrap(), value);
        assert_eq!(decoder.decode_into::<Inventory>().unwrap(), value);
        assert!(decoder.decode_into::<Inventory>().unwrap_err().is_eof());
    }
}

#[test]
fn boxes_are_transparent() {
    let json = Json::new();
    let boxed = Box::new(Point { y: 3 });
    assert_eq!(one_shot(&json, &boxed), r#"{"y":3}"#);

    let mut target: Box<Point> = Box::default();
    json.unmarshal(br#"{"y":9}"#, &mut target).unwrap();
    assert_eq!(target.y, 9);
}

#[test]
fn indented_output() {
    let out = Json::new()
        .marshal_indent(&Both::default(), "\t")
        .unwrap();
    assert_eq!(out, b"{\n\t\"left\": 0,\n\t\"right\": 0\n}");

    let out = Json::new().marshal_indent(&Point::default(), "").unwrap();
    assert_eq!(out, b"{\n\"y\": 0\n}");
}

// -----------------------------------------------------------------------------
// Decode semantics

#[derive(Reflect, Default, Debug, PartialEq)]
struct Nullable {
    list: Vec<i32>,
    map: BTreeMap<String, i32>,
    opt: Option<i32>,
    num: i32,
    any: Dynamic,
}

#[test]
fn null_resets_containers_only() {
    let mut value = Nullable {
        list: vec![1],
        map: BTreeMap::from([("a".to_owned(), 1)]),
        opt: Some(1),
        num: 7,
        any: Dynamic::Bool(true),
    };
    Json::new()
        .unmarshal(
            br#"{"list":null,"map":null,"opt":null,"num":null,"any":null}"#,
            &mut value,
        )
        .unwrap();
    assert_eq!(
        value,
        Nullable {
            num: 7,
            ..Default::default()
        }
    );
}

#[test]
fn records_and_maps_merge() {
    let mut value = Nullable {
        list: vec![1, 2, 3],
        map: BTreeMap::from([("a".to_owned(), 1), ("b".to_owned(), 2)]),
        num: 7,
        ..Default::default()
    };
    Json::new()
        .unmarshal(br#"{"list":[9],"map":{"b":5,"c":6}}"#, &mut value)
        .unwrap();

    assert_eq!(value.list, [9]);
    assert_eq!(
        value.map,
        BTreeMap::from([
            ("a".to_owned(), 1),
            ("b".to_owned(), 5),
            ("c".to_owned(), 6)
        ])
    );
    assert_eq!(value.num, 7);
}

// -----------------------------------------------------------------------------
// Hooks

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(opaque, marshal, unmarshal)]
struct Celsius(f64);

impl Marshaler for Celsius {
    fn marshal_json(&self) -> Result<Vec<u8>, BoxError> {
        Ok(format!("\"{}C\"", self.0).into_bytes())
    }
}

impl Unmarshaler for Celsius {
    fn unmarshal_json(&mut self, data: &[u8]) -> Result<(), BoxError> {
        let text: String = serde_json::from_slice(data)?;
        let degrees = text.strip_suffix('C').ok_or("missing unit")?;
        self.0 = degrees.parse()?;
        Ok(())
    }
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Weather {
    city: String,
    temp: Celsius,
    #[reflect(omit_empty)]
    low: Option<Celsius>,
}

#[test]
fn hooks_own_their_subtree() {
    let json = Json::new();
    let value = Weather {
        city: "Oslo".into(),
        temp: Celsius(21.5),
        low: None,
    };

    let bytes = json.marshal(&value).unwrap();
    assert_eq!(bytes, br#"{"city":"Oslo","temp":"21.5C"}"#);
    assert_eq!(json.from_slice::<Weather>(&bytes).unwrap(), value);

    let low: Weather = json.from_slice(br#"{"low":"-3C"}"#).unwrap();
    assert_eq!(low.low, Some(Celsius(-3.0)));
}

#[test]
fn unmarshal_hook_sees_null() {
    let err = Json::new()
        .from_slice::<Weather>(br#"{"temp":null}"#)
        .unwrap_err();
    let Error::Unmarshal(err) = err else {
        panic!("expected an unmarshal error, got {err:?}");
    };
    assert!(err.type_path.ends_with("::Celsius"));
}

#[derive(Reflect, Default)]
#[reflect(opaque, marshal)]
struct Broken;

impl Marshaler for Broken {
    fn marshal_json(&self) -> Result<Vec<u8>, BoxError> {
        Err("boom".into())
    }
}

#[derive(Reflect, Default)]
#[reflect(opaque, marshal)]
struct Garbage;

impl Marshaler for Garbage {
    fn marshal_json(&self) -> Result<Vec<u8>, BoxError> {
        Ok(b"{not json".to_vec())
    }
}

#[derive(Reflect, Default)]
#[reflect(opaque, marshal)]
struct Italic;

impl Marshaler for Italic {
    fn marshal_json(&self) -> Result<Vec<u8>, BoxError> {
        Ok(br#"  "<i>"  "#.to_vec())
    }
}

#[test]
fn marshal_hook_failures() {
    let json = Json::new();

    let Error::Marshal(err) = json.marshal(&vec![Broken]).unwrap_err() else {
        panic!("expected a marshal error");
    };
    assert!(err.type_path.ends_with("::Broken"));
    assert_eq!(err.source.to_string(), "boom");

    let err = json.marshal(&Garbage).unwrap_err();
    assert!(matches!(err, Error::Marshal(_)));
}

#[test]
fn marshal_hook_output_is_compacted_and_escaped() {
    let json = Json::new();
    let escaped = format!("\"{}i{}\"", esc("003c"), esc("003e"));
    assert_eq!(one_shot(&json, &Italic), escaped);
    assert_eq!(one_shot(&json.escape_markup(false), &Italic), "\"<i>\"");
}

#[test]
fn failed_stream_encode_writes_nothing() {
    let mut encoder = Json::new().new_encoder(Vec::new());
    assert!(encoder.encode(&Broken).is_err());
    assert!(encoder.get_ref().is_empty());
}

// -----------------------------------------------------------------------------
// Serde bridge

#[derive(Reflect, Serialize, Deserialize, Default, Debug, PartialEq)]
#[reflect(opaque, serde)]
struct Rgb(u8, u8, u8);

#[derive(Reflect, Default, Debug, PartialEq)]
struct Theme {
    name: String,
    accent: Rgb,
}

#[test]
fn serde_bridged_types() {
    let json = Json::new();
    let value = Theme {
        name: "dark".into(),
        accent: Rgb(1, 2, 3),
    };

    let bytes = json.marshal(&value).unwrap();
    assert_eq!(bytes, br#"{"name":"dark","accent":[1,2,3]}"#);
    assert_eq!(json.from_slice::<Theme>(&bytes).unwrap(), value);

    let err = json
        .from_slice::<Theme>(br#"{"accent":"red"}"#)
        .unwrap_err();
    let Error::TypeMismatch(err) = err else {
        panic!("expected a type mismatch, got {err:?}");
    };
    assert_eq!(err.path, "accent");
    assert_eq!(err.found, "string");
}

#[derive(Reflect)]
#[reflect(opaque)]
struct Handle(#[allow(dead_code)] u32);

#[test]
fn opaque_without_bridge_is_unsupported() {
    let err = Json::new().marshal(&Handle(1)).unwrap_err();
    assert!(matches!(err, Error::UnsupportedValue(_)));
}

// -----------------------------------------------------------------------------
// Errors

#[derive(Reflect, Default, Debug)]
struct Items {
    items: Vec<i32>,
}

#[derive(Reflect, Default, Debug)]
struct Outer {
    inner: Items,
}

#[derive(Reflect, Default, Debug)]
struct Small {
    byte: u8,
}

#[test]
fn syntax_errors_carry_positions() {
    let err = Json::new().from_slice::<Point>(br#"{"y": }"#).unwrap_err();
    let Error::Syntax(err) = err else {
        panic!("expected a syntax error, got {err:?}");
    };
    assert_eq!((err.line, err.column, err.offset), (1, 7, 7));

    let err = Json::new().from_slice::<Point>(b"{} x").unwrap_err();
    assert!(matches!(err, Error::Syntax(_)));

    let err = Json::new().from_slice::<Point>(b"").unwrap_err();
    assert!(matches!(err, Error::Syntax(_)));
}

#[test]
fn stream_syntax_errors_count_bytes() {
    let mut decoder = Json::new().new_decoder(&br#"{"y":1} {"y":}"#[..]);
    assert_eq!(decoder.decode_into::<Point>().unwrap(), Point { y: 1 });
    assert_eq!(decoder.byte_offset(), 7);

    let err = decoder.decode_into::<Point>().unwrap_err();
    let Error::Syntax(err) = err else {
        panic!("expected a syntax error, got {err:?}");
    };
    assert!(err.offset > 7);
}

#[test]
fn decoder_over_composed_readers() {
    use std::io::Read;

    let reader = (&br#"{"y":1} {"#[..]).chain(&br#""y":2}"#[..]);
    let mut decoder = Json::new().new_decoder(reader);
    assert_eq!(decoder.decode_into::<Point>().unwrap(), Point { y: 1 });
    assert_eq!(decoder.decode_into::<Point>().unwrap(), Point { y: 2 });
    assert!(decoder.decode_into::<Point>().unwrap_err().is_eof());
}

#[test]
fn type_mismatch_reports_member_path() {
    let err = Json::new()
        .from_slice::<Outer>(br#"{"inner":{"items":[1,2,"x"]}}"#)
        .unwrap_err();
    let Error::TypeMismatch(err) = err else {
        panic!("expected a type mismatch, got {err:?}");
    };
    assert_eq!(err.path, "inner.items[2]");
    assert_eq!(err.found, "string");
    assert_eq!(err.type_path, "i32");

    let err = Json::new().from_slice::<Outer>(br#"{"inner":[]}"#).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch(_)));
}

#[test]
fn numbers_must_fit() {
    let json = Json::new();
    for input in [r#"{"byte":300}"#, r#"{"byte":-1}"#, r#"{"byte":1.5}"#] {
        let err = json.from_slice::<Small>(input.as_bytes()).unwrap_err();
        let Error::TypeMismatch(err) = err else {
            panic!("expected a type mismatch for {input}");
        };
        assert_eq!(err.path, "byte");
        assert!(err.detail.is_some());
    }
    assert_eq!(json.from_slice::<Small>(br#"{"byte":255}"#).unwrap().byte, 255);
}

#[test]
fn non_finite_floats_are_unsupported() {
    let json = Json::new();
    assert!(matches!(
        json.marshal(&f64::NAN).unwrap_err(),
        Error::UnsupportedValue(_)
    ));
    assert!(matches!(
        json.marshal(&vec![Dynamic::Float(f64::INFINITY)]).unwrap_err(),
        Error::UnsupportedValue(_)
    ));
    assert!(matches!(
        json.marshal(&Number::new("abc".to_owned())).unwrap_err(),
        Error::UnsupportedValue(_)
    ));
    assert_eq!(json.marshal(&Number::new(String::new())).unwrap(), b"0");
}

#[test]
fn plans_exist_for_records_only() {
    let json = Json::new();
    assert!(matches!(
        json.field_plan::<i32>().unwrap_err(),
        Error::Resolution(_)
    ));
    assert_eq!(json.field_plan_of(&Both::default()).unwrap().len(), 2);
}

// -----------------------------------------------------------------------------
// Configuration sharing

#[test]
fn derived_configurations_share_caches() {
    let root = Json::new();
    let derived = root
        .omit_empty()
        .use_number()
        .disallow_unknown_fields()
        .escape_markup(false);

    assert!(derived.omits_empty() && derived.uses_number());
    assert!(derived.disallows_unknown_fields() && !derived.escapes_markup());
    assert!(!root.omits_empty());

    assert!(derived.shares_caches_with(&root));
    assert!(!Json::new().shares_caches_with(&root));

    let a = root.field_plan::<Both>().unwrap();
    let b = derived.field_plan::<Both>().unwrap();
    assert!(Arc::ptr_eq(&a, &b));

    let other = Json::new().field_plan::<Both>().unwrap();
    assert!(!Arc::ptr_eq(&a, &other));
}

#[test]
fn concurrent_use_resolves_one_plan() {
    let json = Json::new();

    let plans: Vec<Arc<FieldPlan>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8u64)
            .map(|id| {
                let json = json.omit_empty();
                scope.spawn(move || {
                    let value = Inventory {
                        id,
                        ..sample_inventory()
                    };
                    let bytes = json.marshal(&value).unwrap();
                    let back: Inventory = json.from_slice(&bytes).unwrap();
                    assert_eq!(back.id, id);
                    json.field_plan::<Inventory>().unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(plans.iter().all(|plan| Arc::ptr_eq(plan, &plans[0])));
}

#[test]
fn default_instance() {
    assert_eq!(crate::marshal(&Point { y: 1 }).unwrap(), br#"{"y":1}"#);
    assert!(crate::omit_empty().shares_caches_with(crate::default_json()));
    assert!(!crate::escape_markup(false).escapes_markup());

    let point: Point = crate::from_slice(br#"{"y":2}"#).unwrap();
    assert_eq!(point.y, 2);

    let mut decoder = crate::new_decoder(&b"{\"y\":3}"[..]);
    assert_eq!(decoder.decode_into::<Point>().unwrap().y, 3);
}
