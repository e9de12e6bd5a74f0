//! Input errors
//!
//! The engine's only hard failure. Everything past input decoding degrades gracefully.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The input was an empty string
    Empty,
    /// The input bytes were not valid UTF-8
    InvalidUtf8 { valid_up_to: usize },
}

impl std::error::Error for InputError {}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "Empty input: macro text is empty"),
            InputError::InvalidUtf8 { valid_up_to } => write!(
                f,
                "Empty input: macro text is not valid UTF-8 (valid up to byte {})",
                valid_up_to
            ),
        }
    }
}
