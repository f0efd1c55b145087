//! A recursive-descent JSON parser built from small composable parsing
//! primitives. The intention is not to be *fast* or to cover every corner of
//! the JSON spec, but to keep the grammar legible as a composition of
//! combinators and to report failures with enough positional context for a
//! good diagnostic.
//!
//! The library turns a fully materialized UTF-8 buffer into a tagged
//! [`Value`] tree, or a [`ParseError`] carrying the offset where matching
//! stopped and what was expected there. It performs no I/O and never
//! serializes a tree back to text; reading files and rendering output belong
//! to the callers (see the `jsonade` binary).
//!
//! Deliberate limitations, documented rather than fixed: only quote
//! characters are escape-aware inside strings, and numbers are not validated
//! against the full JSON number grammar (see [`json`]).

pub mod combinator;
pub mod error;
pub mod json;
pub mod value;

pub use error::ParseError;
pub use json::parse;
pub use value::Value;
