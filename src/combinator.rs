//! Parsing primitives. A [`Parser`] is a reference-counted closure from
//! "input text plus cursor" to either a parsed value plus the new cursor, or
//! a positioned [`ParseError`]. Grammars are composed out of these primitives
//! rather than written as monolithic state machines; the JSON grammar in
//! [`crate::json`] is the only consumer in this crate, but nothing here is
//! JSON-specific.
//!
//! Parsers never consume input on failure: the caller's cursor is whatever it
//! passed in, so ordered choice can retry alternatives from the same spot.

use std::rc::Rc;

use crate::error::ParseError;

/// A parsed value paired with the cursor just past the consumed input, or a
/// failure carrying the offset where matching stopped.
pub type ParseResult<T> = Result<(T, usize), ParseError>;

/// A composable parser producing a `T`.
///
/// Cloning is cheap (a reference-count bump), which is what lets one parser
/// appear in several places in a grammar.
pub struct Parser<T> {
    run: Rc<dyn Fn(&str, usize) -> ParseResult<T>>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Parser {
            run: Rc::clone(&self.run),
        }
    }
}

impl<T: 'static> Parser<T> {
    pub fn new(run: impl Fn(&str, usize) -> ParseResult<T> + 'static) -> Self {
        Parser { run: Rc::new(run) }
    }

    /// Run this parser against `src` starting at byte offset `at`.
    pub fn parse_at(&self, src: &str, at: usize) -> ParseResult<T> {
        (self.run)(src, at)
    }

    /// Run this parser from the start of `src`.
    pub fn parse(&self, src: &str) -> ParseResult<T> {
        self.parse_at(src, 0)
    }

    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + 'static) -> Parser<U> {
        Parser::new(move |src, at| {
            let (value, next) = self.parse_at(src, at)?;
            Ok((f(value), next))
        })
    }

    /// Like [`Parser::map`], but the mapping itself may fail. The closure
    /// receives the offset at which this parser started matching.
    pub fn try_map<U: 'static>(
        self,
        f: impl Fn(T, usize) -> Result<U, ParseError> + 'static,
    ) -> Parser<U> {
        Parser::new(move |src, at| {
            let (value, next) = self.parse_at(src, at)?;
            Ok((f(value, at)?, next))
        })
    }

    /// Sequence: this parser, then `next`. Fails fast: the first failure
    /// propagates verbatim and any partial result is discarded.
    pub fn then<U: 'static>(self, next: Parser<U>) -> Parser<(T, U)> {
        Parser::new(move |src, at| {
            let (first, mid) = self.parse_at(src, at)?;
            let (second, end) = next.parse_at(src, mid)?;
            Ok(((first, second), end))
        })
    }

    pub fn then_ignore<U: 'static>(self, next: Parser<U>) -> Parser<T> {
        self.then(next).map(|(first, _)| first)
    }

    pub fn ignore_then<U: 'static>(self, next: Parser<U>) -> Parser<U> {
        self.then(next).map(|(_, second)| second)
    }

    /// Zero or more repetitions. Never fails; zero matches yields an empty
    /// vector. A repetition that succeeds without consuming input ends the
    /// loop rather than spinning forever.
    pub fn repeated(self) -> Parser<Vec<T>> {
        Parser::new(move |src, at| {
            let mut items = Vec::new();
            let mut cursor = at;
            while let Ok((item, next)) = self.parse_at(src, cursor) {
                items.push(item);
                if next == cursor {
                    break;
                }
                cursor = next;
            }
            Ok((items, cursor))
        })
    }

    /// Optional: `None` consumes no input.
    pub fn or_not(self) -> Parser<Option<T>> {
        Parser::new(move |src, at| match self.parse_at(src, at) {
            Ok((value, next)) => Ok((Some(value), next)),
            Err(_) => Ok((None, at)),
        })
    }

    /// A possibly-empty list of this parser separated by `sep`. The list ends
    /// the moment "separator then element" stops matching, leaving the cursor
    /// before the unconsumed separator. Never fails.
    pub fn separated_by<S: 'static>(self, sep: Parser<S>) -> Parser<Vec<T>> {
        Parser::new(move |src, at| {
            let mut items = Vec::new();
            let mut cursor = at;
            match self.parse_at(src, cursor) {
                Ok((first, next)) => {
                    items.push(first);
                    cursor = next;
                }
                Err(_) => return Ok((items, cursor)),
            }
            loop {
                let after_sep = match sep.parse_at(src, cursor) {
                    Ok((_, next)) => next,
                    Err(_) => break,
                };
                match self.parse_at(src, after_sep) {
                    Ok((item, next)) => {
                        items.push(item);
                        cursor = next;
                    }
                    Err(_) => break,
                }
            }
            Ok((items, cursor))
        })
    }

    /// Optionally consume whitespace before and after this parser. The
    /// whitespace never appears in the result.
    pub fn padded(self) -> Parser<T> {
        Parser::new(move |src, at| {
            let start = skip_whitespace(src, at);
            let (value, next) = self.parse_at(src, start)?;
            Ok((value, skip_whitespace(src, next)))
        })
    }

    /// Rename a failure raised at this parser's entry cursor. Failures that
    /// made progress past the entry point pass through untouched, so a
    /// specific deep failure is not masked by a generic label.
    pub fn labelled(self, expected: &'static str) -> Parser<T> {
        Parser::new(move |src, at| {
            self.parse_at(src, at).map_err(|e| {
                if e.at() == at {
                    ParseError::unexpected(at, expected)
                } else {
                    e
                }
            })
        })
    }
}

fn skip_whitespace(src: &str, mut at: usize) -> usize {
    for c in src[at..].chars() {
        if !c.is_whitespace() {
            break;
        }
        at += c.len_utf8();
    }
    at
}

/// Match exactly the character `expected`.
pub fn just(expected: char) -> Parser<char> {
    Parser::new(move |src, at| match src[at..].chars().next() {
        Some(c) if c == expected => Ok((c, at + c.len_utf8())),
        _ => Err(ParseError::unexpected(at, format!("`{expected}`"))),
    })
}

/// Match exactly the string `expected`, advancing by its length.
pub fn token(expected: &'static str) -> Parser<&'static str> {
    Parser::new(move |src, at| {
        if src[at..].starts_with(expected) {
            Ok((expected, at + expected.len()))
        } else {
            Err(ParseError::unexpected(at, format!("`{expected}`")))
        }
    })
}

/// Match any single character for which `pred` holds.
pub fn satisfy(pred: impl Fn(char) -> bool + 'static, expected: &'static str) -> Parser<char> {
    Parser::new(move |src, at| match src[at..].chars().next() {
        Some(c) if pred(c) => Ok((c, at + c.len_utf8())),
        _ => Err(ParseError::unexpected(at, expected)),
    })
}

/// Match any single character contained in `set`.
pub fn one_of(set: &'static str) -> Parser<char> {
    Parser::new(move |src, at| match src[at..].chars().next() {
        Some(c) if set.contains(c) => Ok((c, at + c.len_utf8())),
        _ => Err(ParseError::unexpected(at, format!("one of `{set}`"))),
    })
}

/// One or more ASCII digits, as the matched text.
pub fn digits() -> Parser<String> {
    Parser::new(|src, at| {
        let len = src[at..]
            .chars()
            .take_while(char::is_ascii_digit)
            .count();
        if len == 0 {
            return Err(ParseError::unexpected(at, "digits"));
        }
        Ok((src[at..at + len].to_string(), at + len))
    })
}

/// Ordered choice: try `alternatives` in order at the same starting cursor
/// and return the first success.
///
/// Failure policy (deterministic): the branch failure that progressed
/// furthest is propagated as-is. If several branches tie at the furthest
/// offset, their expectations merge into a single
/// [`ParseError::ExhaustedAlternatives`] at that offset.
pub fn choice<T: 'static>(alternatives: Vec<Parser<T>>) -> Parser<T> {
    Parser::new(move |src, at| {
        let mut failures = Vec::with_capacity(alternatives.len());
        for alternative in &alternatives {
            match alternative.parse_at(src, at) {
                Ok(ok) => return Ok(ok),
                Err(e) => failures.push(e),
            }
        }
        let deepest = failures.iter().map(ParseError::at).max().unwrap_or(at);
        let mut at_deepest: Vec<ParseError> =
            failures.into_iter().filter(|e| e.at() == deepest).collect();
        if at_deepest.len() == 1 {
            Err(at_deepest.swap_remove(0))
        } else {
            let mut expected = Vec::new();
            for failure in &at_deepest {
                let desc = failure.expected_desc();
                if !expected.contains(&desc) {
                    expected.push(desc);
                }
            }
            Err(ParseError::ExhaustedAlternatives {
                at: deepest,
                expected,
            })
        }
    })
}

/// Delimited-between: `open`, then `inner`, then `close`. Propagates the
/// inner result and discards the delimiters. A missing close token becomes a
/// [`ParseError::Unterminated`] naming `construct`, anchored at the offset
/// where the construct opened.
pub fn between<O: 'static, C: 'static, T: 'static>(
    open: Parser<O>,
    close: Parser<C>,
    construct: &'static str,
    inner: Parser<T>,
) -> Parser<T> {
    Parser::new(move |src, at| {
        let (_, after_open) = open.parse_at(src, at)?;
        let (value, after_inner) = inner.parse_at(src, after_open)?;
        match close.parse_at(src, after_inner) {
            Ok((_, end)) => Ok((value, end)),
            Err(e) => Err(ParseError::Unterminated {
                construct,
                opened_at: at,
                at: e.at(),
            }),
        }
    })
}

/// A deferred parser for self-referential grammar rules: `thunk` is invoked
/// lazily each time the parser runs, never at construction time, so a rule
/// can reference itself or a sibling that is defined in terms of it.
pub fn recursive<T: 'static>(thunk: impl Fn() -> Parser<T> + 'static) -> Parser<T> {
    Parser::new(move |src, at| thunk().parse_at(src, at))
}
