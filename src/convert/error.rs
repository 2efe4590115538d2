//! Error type for values that are not well-formed decimal numbers

use thiserror::Error;

/// The value token could not be read as a number.
///
/// Carries the raw token exactly as supplied so the message can echo it back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{raw}' is not a valid number.")]
pub struct ParseError {
    pub raw: String,
}

impl ParseError {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}
