//! Parse failures. Failures are plain values returned by parsers, never
//! panics; callers decide whether to propagate, try an alternative, or render
//! a diagnostic.

use thiserror::Error;

/// A positioned parse failure. Every variant records the byte offset at which
/// matching stopped and what was expected there.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A literal or character matcher did not find its expected text.
    #[error("expected {expected} at byte {at}")]
    Unexpected { at: usize, expected: String },

    /// Every branch of an ordered choice failed at the same furthest offset.
    #[error("no alternative matched at byte {at}, expected {}", .expected.join(" or "))]
    ExhaustedAlternatives { at: usize, expected: Vec<String> },

    /// A delimited construct's closing token was never found.
    #[error("unterminated {construct} starting at byte {opened_at}")]
    Unterminated {
        construct: &'static str,
        opened_at: usize,
        at: usize,
    },
}

impl ParseError {
    pub fn unexpected(at: usize, expected: impl Into<String>) -> Self {
        ParseError::Unexpected {
            at,
            expected: expected.into(),
        }
    }

    /// The byte offset at which matching stopped.
    pub fn at(&self) -> usize {
        match self {
            ParseError::Unexpected { at, .. }
            | ParseError::ExhaustedAlternatives { at, .. }
            | ParseError::Unterminated { at, .. } => *at,
        }
    }

    /// A human-readable description of what was expected at [`Self::at`].
    pub fn expected_desc(&self) -> String {
        match self {
            ParseError::Unexpected { expected, .. } => expected.clone(),
            ParseError::ExhaustedAlternatives { expected, .. } => expected.join(" or "),
            ParseError::Unterminated { construct, .. } => {
                format!("the closing delimiter of this {construct}")
            }
        }
    }
}
