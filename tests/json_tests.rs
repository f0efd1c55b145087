//! Integration tests over the public API: the whole grammar end to end,
//! driven through [`jsonade::parse`].

use indexmap::IndexMap;
use jsonade::{parse, ParseError, Value};

fn parsed(src: &str) -> Value {
    let (value, consumed) = parse(src).expect("input should parse");
    assert_eq!(consumed, src.len(), "the whole input should be consumed");
    value
}

fn object(entries: Vec<(&str, Value)>) -> Value {
    let map: IndexMap<String, Value> = entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    Value::Object(map)
}

#[test]
fn parses_each_literal_kind() {
    assert_eq!(parsed(r#""hello""#), Value::Str("hello".to_string()));
    assert_eq!(parsed("true"), Value::Bool(true));
    assert_eq!(parsed("false"), Value::Bool(false));
    assert_eq!(parsed("null"), Value::Null);
}

#[test]
fn parses_every_number_form() {
    assert_eq!(parsed("123"), Value::Num(123.0));
    assert_eq!(parsed("-123"), Value::Num(-123.0));
    assert_eq!(parsed("123.456"), Value::Num(123.456));
    assert_eq!(parsed("-123.456"), Value::Num(-123.456));
    assert_eq!(parsed("1e3"), Value::Num(1000.0));
    assert_eq!(parsed("-1.23456e2"), Value::Num(-123.456));
    assert_eq!(parsed("0"), Value::Num(0.0));
}

#[test]
fn float_exponents_are_numbers_not_failures() {
    let (value, consumed) = parse("1e3.5").expect("the scientific form admits a float exponent");
    assert_eq!(consumed, 5);
    assert!(value.as_f64().expect("should be a number").is_nan());
}

#[test]
fn parses_empty_and_single_element_arrays() {
    assert_eq!(parsed("[]"), Value::Array(vec![]));
    assert_eq!(
        parsed(r#"["hello"]"#),
        Value::Array(vec![Value::Str("hello".to_string())])
    );
}

#[test]
fn whitespace_has_no_effect_on_array_contents() {
    let compact = parsed(r#"["hello","world"]"#);
    let spaced = parsed(r#"[ "hello" , "world" ]"#);
    assert_eq!(compact, spaced);
    assert_eq!(
        compact,
        Value::Array(vec![
            Value::Str("hello".to_string()),
            Value::Str("world".to_string()),
        ])
    );
}

#[test]
fn parses_empty_and_small_objects() {
    assert_eq!(parsed("{}"), Value::Object(IndexMap::new()));
    assert_eq!(
        parsed(r#"{"key": "value"}"#),
        object(vec![("key", Value::Str("value".to_string()))])
    );
}

#[test]
fn duplicate_keys_resolve_last_write_wins() {
    let value = parsed(r#"{"a":1,"a":2}"#);
    assert_eq!(value, object(vec![("a", Value::Num(2.0))]));
}

#[test]
fn duplicate_keys_keep_their_first_seen_slot() {
    let value = parsed(r#"{"a":1,"b":2,"a":3}"#);
    let map = value.as_object().expect("should be an object");
    let keys: Vec<&String> = map.keys().collect();
    assert_eq!(keys, ["a", "b"]);
    assert_eq!(map.get("a"), Some(&Value::Num(3.0)));
}

#[test]
fn parses_nested_mixed_structures() {
    let value = parsed(
        r#"{
            "mixedArray": [1, "hello", true, null, [1, "hi"]]
        }"#,
    );
    let map = value.as_object().expect("should be an object");
    let items = map
        .get("mixedArray")
        .and_then(Value::as_array)
        .expect("mixedArray should be an array");
    let kinds: Vec<&str> = items.iter().map(Value::kind_desc).collect();
    assert_eq!(kinds, ["number", "string", "bool", "null", "array"]);
    assert_eq!(
        items[4],
        Value::Array(vec![Value::Num(1.0), Value::Str("hi".to_string())])
    );
}

#[test]
fn parses_deeply_nested_objects() {
    let value = parsed(
        r#"{
            "name": "John Doe",
            "age": 30,
            "cars": {
                "car1": "Ford",
                "car2": "BMW",
                "car3": "Fiat"
            },
            "numbers": [1, 2, 3, 4, 5, 6],
            "emptyArray": [],
            "emptyObject": {}
        }"#,
    );
    let map = value.as_object().expect("should be an object");
    assert_eq!(map.len(), 6);
    assert_eq!(
        map.get("name").and_then(Value::as_str),
        Some("John Doe")
    );
    assert_eq!(map.get("age").and_then(Value::as_f64), Some(30.0));
    let cars = map
        .get("cars")
        .and_then(Value::as_object)
        .expect("cars should be an object");
    assert_eq!(cars.get("car2").and_then(Value::as_str), Some("BMW"));
    assert_eq!(
        map.get("numbers").and_then(Value::as_array).map(<[Value]>::len),
        Some(6)
    );
    assert_eq!(map.get("emptyArray"), Some(&Value::Array(vec![])));
    assert_eq!(map.get("emptyObject"), Some(&Value::Object(IndexMap::new())));
}

#[test]
fn escaped_quotes_are_kept_verbatim() {
    assert_eq!(
        parsed(r#""hello \"world\"""#),
        Value::Str(r#"hello \"world\""#.to_string())
    );
}

#[test]
fn bare_words_fail_to_parse() {
    let err = parse("hello").expect_err("bare words are not JSON");
    assert_eq!(err.at(), 0);
}

#[test]
fn unterminated_string_reports_where_it_opened() {
    let err = parse(r#""hello"#).expect_err("missing close quote");
    assert_eq!(
        err,
        ParseError::Unterminated {
            construct: "string",
            opened_at: 0,
            at: 6,
        }
    );
}

#[test]
fn unterminated_array_and_object_are_reported() {
    let err = parse(r#"["a", 1"#).expect_err("missing close bracket");
    assert!(matches!(
        err,
        ParseError::Unterminated {
            construct: "array",
            ..
        }
    ));

    let err = parse(r#"{"a": 1"#).expect_err("missing close brace");
    assert!(matches!(
        err,
        ParseError::Unterminated {
            construct: "object",
            ..
        }
    ));
}

#[test]
fn trailing_input_is_left_to_the_caller() {
    let (value, consumed) = parse("[] tail").expect("the array itself parses");
    assert_eq!(value, Value::Array(vec![]));
    // The value and its surrounding whitespace are consumed; the rest is the
    // caller's problem.
    assert_eq!(&"[] tail"[consumed..], "tail");
}

#[test]
fn parsing_is_deterministic() {
    let src = r#"{
        "name": "John Doe",
        "grades": [90, 80, 85],
        "address": { "street": "123 Main St", "city": "Springfield" }
    }"#;
    let first = parse(src).expect("should parse");
    let second = parse(src).expect("should parse");
    assert_eq!(first, second);
}
