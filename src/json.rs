//! The JSON grammar, composed from the primitives in [`crate::combinator`].
//!
//! The grammar is mutually recursive: arrays and objects contain values, and
//! a value chooses among arrays and objects. [`recursive`] breaks the knot by
//! resolving the `value` rule lazily at the moment of invocation.
//!
//! Known limitation, kept deliberately: only quote characters are
//! escape-aware inside strings. A backslash followed by `"` or `'` is
//! consumed as a pair and both characters are kept verbatim in the parsed
//! text; every other escape sequence (`\n`, `\t`, `\uXXXX`, ...) passes
//! through as literal characters. Numbers are also not validated against the
//! full JSON grammar: leading zeros are accepted and no range checking is
//! performed.

use crate::combinator::{between, choice, digits, just, one_of, recursive, satisfy, token, Parser};
use crate::error::ParseError;
use crate::value::{object_from_entries, Value};

/// Parse a complete JSON value starting at the beginning of `src`.
///
/// On success, returns the value tree together with the cursor just past the
/// consumed input (surrounding whitespace included). Whether trailing input
/// after the value is an error is the caller's decision.
pub fn parse(src: &str) -> Result<(Value, usize), ParseError> {
    value().parse(src)
}

/// Any JSON value: ordered choice over number, boolean, null, string, array
/// and object, with optional surrounding whitespace. The lead token of each
/// alternative is unambiguous (digit or sign, `t`/`f`, `n`, `"`, `[`, `{`),
/// so the order only affects how quickly a branch is dismissed.
pub fn value() -> Parser<Value> {
    choice(vec![
        number().map(Value::Num),
        boolean().map(Value::Bool),
        null().map(|_| Value::Null),
        string().map(Value::Str),
        array(),
        object(),
    ])
    .padded()
}

/// A backslash followed by a double or single quote; both characters are kept
/// verbatim.
fn escaped_quote() -> Parser<String> {
    just('\\')
        .then(one_of("\"'"))
        .map(|(backslash, quote)| format!("{backslash}{quote}"))
}

/// A string literal. A missing close quote is an unterminated-construct
/// failure; a missing open quote fails at the entry cursor.
pub fn string() -> Parser<String> {
    let body = choice(vec![
        escaped_quote(),
        satisfy(|c| c != '"', "any character except `\"`").map(String::from),
    ])
    .repeated()
    .map(|pieces| pieces.concat());

    between(just('"'), just('"'), "string", body).labelled("string")
}

/// The literal text `true` or `false`.
pub fn boolean() -> Parser<bool> {
    choice(vec![token("true").map(|_| true), token("false").map(|_| false)]).labelled("boolean")
}

/// The literal text `null`.
pub fn null() -> Parser<()> {
    token("null").map(|_| ()).labelled("null")
}

/// An optional leading sign followed by digits, as the matched text.
fn int_text() -> Parser<String> {
    one_of("+-").or_not().then(digits()).map(|(sign, digits)| {
        let mut text = String::new();
        if let Some(sign) = sign {
            text.push(sign);
        }
        text.push_str(&digits);
        text
    })
}

/// Sign, digits, a literal decimal point, digits. A bare integer does not
/// match this form.
fn float_text() -> Parser<String> {
    int_text()
        .then(just('.'))
        .then(digits())
        .map(|((whole, _), frac)| format!("{whole}.{frac}"))
}

/// A float-or-integer mantissa, an exponent marker, and a float-or-integer
/// exponent.
fn scientific_text() -> Parser<String> {
    choice(vec![float_text(), int_text()])
        .then(one_of("eE"))
        .then(choice(vec![float_text(), int_text()]))
        .map(|((mantissa, marker), exponent)| format!("{mantissa}{marker}{exponent}"))
}

/// A numeric literal: scientific, float or integer form, in that order. The
/// full matched text goes through [`str::parse`]; all forms collapse to
/// `f64`. The grammar admits texts the standard conversion rejects (a float
/// exponent such as `1e3.5`); those still parse, as NaN.
pub fn number() -> Parser<f64> {
    choice(vec![scientific_text(), float_text(), int_text()])
        .map(|text| text.parse::<f64>().unwrap_or(f64::NAN))
        .labelled("number")
}

/// A bracketed, comma-separated, possibly empty list of values. An absent
/// element list yields an empty array, not a failure.
pub fn array() -> Parser<Value> {
    between(
        just('[').padded(),
        just(']').padded(),
        "array",
        recursive(value).separated_by(just(',').padded()),
    )
    .map(Value::from)
    .labelled("array")
}

/// One `"key": value` entry.
pub fn key_value() -> Parser<(String, Value)> {
    string()
        .then_ignore(just(':').padded())
        .then(recursive(value))
        .padded()
}

/// A braced, comma-separated list of key-value entries, folded left to right
/// into one map. Duplicate keys resolve last-write-wins with the first-seen
/// slot retained; see [`object_from_entries`].
pub fn object() -> Parser<Value> {
    between(
        just('{').padded(),
        just('}').padded(),
        "object",
        key_value().separated_by(just(',').padded()),
    )
    .map(|entries| Value::Object(object_from_entries(entries)))
    .labelled("object")
}
