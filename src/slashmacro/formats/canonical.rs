//! Canonical macro rendering
//!
//! Renders a tree back to macro text, one line per [`MacroLine`] in source order:
//!
//!     directive   #showtooltip Fireball
//!     command     /cast [mod:shift][@focus] Polymorph; Frostbolt
//!     comment     ; note             (passthrough lines are written verbatim)
//!
//! Parsing the untrimmed rendering yields a tree equal to the one rendered.
//!
//! Trim mode
//!
//!     Trimming reclaims characters against the length ceiling: whitespace runs collapse
//!     to one space on every line, and on command lines spaces next to brackets are
//!     dropped (`/cast[mod:shift]Polymorph`). Trimming a trimmed rendering again is a
//!     no-op.

use super::registry::{FormatError, Formatter};
use crate::slashmacro::ast::{Macro, MacroLine};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static SPACED_BRACKET: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*([\[\]])\s*").unwrap());

/// Render a whole macro, lines joined with `\n`
pub fn format_macro(m: &Macro, trim: bool) -> String {
    let output = m
        .lines
        .iter()
        .map(|line| format_line(line, trim))
        .collect::<Vec<_>>()
        .join("\n");
    log::trace!(
        "formatted macro '{}' ({} chars, trim={})",
        m.name,
        output.chars().count(),
        trim
    );
    output
}

/// Render a single line
pub fn format_line(line: &MacroLine, trim: bool) -> String {
    let rendered = match line {
        MacroLine::Directive(directive) => directive.to_string(),
        MacroLine::Command(command) => command.to_string(),
        MacroLine::Comment(comment) => comment.to_string(),
    };
    let rendered = rendered.trim_end();

    if !trim {
        return rendered.to_string();
    }

    let collapsed = WHITESPACE_RUN.replace_all(rendered, " ");
    match line {
        MacroLine::Command(_) => SPACED_BRACKET.replace_all(&collapsed, "$1").into_owned(),
        MacroLine::Directive(_) | MacroLine::Comment(_) => collapsed.into_owned(),
    }
}

/// Formatter implementation for canonical macro text
pub struct CanonicalFormatter {
    pub trim: bool,
}

impl Formatter for CanonicalFormatter {
    fn name(&self) -> &str {
        if self.trim {
            "macro-trim"
        } else {
            "macro"
        }
    }

    fn serialize(&self, m: &Macro) -> Result<String, FormatError> {
        Ok(format_macro(m, self.trim))
    }

    fn description(&self) -> &str {
        if self.trim {
            "Canonical macro text with redundant whitespace removed"
        } else {
            "Canonical macro text"
        }
    }
}
