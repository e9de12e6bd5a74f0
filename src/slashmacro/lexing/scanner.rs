//! Line scanning and line tokenization
//!
//! `split_lines` turns raw macro text into numbered, trimmed, non-blank lines.
//! `tokenize_line` runs the bracket-aware lexer over a single line, keeping byte spans so
//! that callers can slice argument text back out of the line with its original
//! interior spacing.

use super::tokens::{group_brackets, lex_raw, Token};
use std::ops::Range;

/// A non-blank source line with its 1-based emitted line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Split text into trimmed, non-blank lines numbered in emission order
pub fn split_lines(source: &str) -> Vec<ScannedLine<'_>> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(i, text)| ScannedLine { number: i + 1, text })
        .collect()
}

/// Tokenize one line with byte spans relative to the line
pub fn tokenize_line(line: &str) -> Vec<(Token, Range<usize>)> {
    group_brackets(line, &lex_raw(line))
}
