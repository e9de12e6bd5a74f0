//! Macro parser
//!
//! Drives scanning and classification, and builds one [`MacroLine`] per scanned line.

use super::command::parse_command;
use super::error::InputError;
use crate::slashmacro::ast::{CommentLine, DirectiveLine, Macro, MacroLine};
use crate::slashmacro::lexing::{classify_line, split_lines, LineKind, ScannedLine};
use once_cell::sync::Lazy;
use regex::Regex;

static DIRECTIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#\w*").unwrap());

/// Decode raw bytes into macro text
pub fn decode_input(bytes: &[u8]) -> Result<&str, InputError> {
    let text = std::str::from_utf8(bytes).map_err(|e| InputError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })?;
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(text)
}

/// Parse macro text into a named macro.
///
/// Fails only on empty input. Whitespace-only input parses into a macro with no lines,
/// which the validator reports.
pub fn parse_macro(name: &str, source: &str) -> Result<Macro, InputError> {
    if source.is_empty() {
        return Err(InputError::Empty);
    }

    let lines: Vec<MacroLine> = split_lines(source).into_iter().map(parse_line).collect();
    log::debug!("parsed macro '{}' into {} line(s)", name, lines.len());

    Ok(Macro::new(name).with_lines(lines))
}

/// Parse one scanned line according to its classification
pub fn parse_line(line: ScannedLine<'_>) -> MacroLine {
    let kind = classify_line(line.text);
    log::trace!("line {} classified as {}", line.number, kind);

    match kind {
        LineKind::Directive => MacroLine::Directive(parse_directive(line.text, line.number)),
        LineKind::Command => MacroLine::Command(parse_command(line.text, line.number)),
        LineKind::Comment => {
            let text = line.text.trim_start_matches(';').trim();
            MacroLine::Comment(CommentLine::new(line.number, text).with_raw(line.text))
        }
        LineKind::Passthrough => {
            MacroLine::Comment(CommentLine::passthrough(line.number, line.text))
        }
    }
}

fn parse_directive(line: &str, line_number: usize) -> DirectiveLine {
    let (directive, argument) = match DIRECTIVE.find(line) {
        Some(m) => (m.as_str(), line[m.end()..].trim()),
        None => (line, ""),
    };
    DirectiveLine::new(line_number, directive)
        .with_argument(argument)
        .with_raw(line)
}
