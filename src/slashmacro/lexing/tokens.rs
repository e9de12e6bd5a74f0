//! Token definitions for macro lines
//!
//! Lexing is two steps. The logos-derived [`RawToken`] splits a line into brackets,
//! semicolons, whitespace and words; its set is total, every character belongs to some
//! token. [`group_brackets`] then folds each `[` whose next bracket is a `]` into a
//! single [`Token::Bracket`]. Any other bracket stays a lone `OpenBracket` or
//! `CloseBracket`, so unterminated and nested brackets survive as literal text.
use logos::Logos;
use std::ops::Range;

/// Character-level tokens produced by logos
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RawToken {
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token(";")]
    Semicolon,
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,
    // Anything else, up to the next space, bracket or semicolon
    #[regex(r"[^ \t\r\n\f\[\];]+")]
    Word,
}

/// Bracket-aware tokens of one macro line
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// A complete, non-nested bracket group; carries its interior
    Bracket(String),
    /// Brackets that are not part of a complete group
    OpenBracket,
    CloseBracket,
    /// Clause separator
    Semicolon,
    Whitespace,
    Word(String),
}

impl Token {
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }

    pub fn is_bracket_group(&self) -> bool {
        matches!(self, Token::Bracket(_))
    }
}

/// Lex a line into raw tokens with byte spans.
///
/// Spans logos cannot match are kept as words, so the spans always cover the line.
pub fn lex_raw(line: &str) -> Vec<(RawToken, Range<usize>)> {
    let mut lexer = RawToken::lexer(line);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        tokens.push((result.unwrap_or(RawToken::Word), lexer.span()));
    }
    tokens
}

/// Fold complete `[...]` spans of `line` into bracket groups
pub fn group_brackets(line: &str, raw: &[(RawToken, Range<usize>)]) -> Vec<(Token, Range<usize>)> {
    let mut tokens = Vec::with_capacity(raw.len());
    let mut i = 0;

    while i < raw.len() {
        let (kind, span) = &raw[i];
        match kind {
            RawToken::OpenBracket => {
                let next_bracket = raw[i + 1..]
                    .iter()
                    .position(|(k, _)| matches!(k, RawToken::OpenBracket | RawToken::CloseBracket))
                    .map(|offset| i + 1 + offset);
                match next_bracket {
                    Some(j) if raw[j].0 == RawToken::CloseBracket => {
                        let end = raw[j].1.end;
                        let interior = &line[span.end..raw[j].1.start];
                        tokens.push((Token::Bracket(interior.to_string()), span.start..end));
                        i = j + 1;
                        continue;
                    }
                    _ => tokens.push((Token::OpenBracket, span.clone())),
                }
            }
            RawToken::CloseBracket => tokens.push((Token::CloseBracket, span.clone())),
            RawToken::Semicolon => tokens.push((Token::Semicolon, span.clone())),
            RawToken::Whitespace => tokens.push((Token::Whitespace, span.clone())),
            RawToken::Word => tokens.push((Token::Word(line[span.clone()].to_string()), span.clone())),
        }
        i += 1;
    }

    tokens
}
