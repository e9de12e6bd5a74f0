//! Line Classification
//!
//! Determines which parse path a trimmed line takes. Classification looks only at the
//! leading character and follows this order:
//! 1. `#` -> directive
//! 2. `/` -> command
//! 3. `;` -> comment
//! 4. anything else -> passthrough comment (kept verbatim)

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Directive,
    Command,
    Comment,
    Passthrough,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineKind::Directive => "DIRECTIVE_LINE",
            LineKind::Command => "COMMAND_LINE",
            LineKind::Comment => "COMMENT_LINE",
            LineKind::Passthrough => "PASSTHROUGH_LINE",
        };
        write!(f, "{}", name)
    }
}

/// Classify a trimmed line by its first character
pub fn classify_line(line: &str) -> LineKind {
    match line.chars().next() {
        Some('#') => LineKind::Directive,
        Some('/') => LineKind::Command,
        Some(';') => LineKind::Comment,
        _ => LineKind::Passthrough,
    }
}
