//! The public engine surface
//!
//! Thin entry points over the pipeline stages, using the standard reference tables and
//! default limits. Callers that need substitute tables or other limits use
//! [`Validator`] and [`Analyzer`](crate::slashmacro::analysis::Analyzer) directly.

use super::analysis::{self, DiagnosticRecord};
use super::ast::Macro;
use super::formats::format_macro;
use super::parsing::{decode_input, parse_macro, InputError};
use super::validation::{ReferenceTables, Validator};

/// Parse macro text into an unnamed macro
pub fn parse(text: &str) -> Result<Macro, InputError> {
    parse_macro("", text)
}

pub fn parse_named(name: &str, text: &str) -> Result<Macro, InputError> {
    parse_macro(name, text)
}

/// Parse raw bytes, rejecting invalid UTF-8
pub fn parse_bytes(bytes: &[u8]) -> Result<Macro, InputError> {
    parse(decode_input(bytes)?)
}

/// Fast structural pre-flight over raw text
pub fn validate_text(text: &str) -> Result<Vec<String>, InputError> {
    Validator::new(ReferenceTables::standard()).validate_text(text)
}

pub fn validate(m: &Macro) -> Vec<String> {
    Validator::new(ReferenceTables::standard()).validate(m)
}

/// Canonical rendering, optionally trimmed
pub fn format(m: &Macro, trim: bool) -> String {
    format_macro(m, trim)
}

pub fn enhance(basic_errors: &[String], text: &str) -> Vec<DiagnosticRecord> {
    analysis::enhance(basic_errors, text)
}

pub fn known_commands() -> Vec<String> {
    ReferenceTables::standard().known_commands()
}

pub fn known_conditional_keys() -> Vec<String> {
    ReferenceTables::standard().known_conditional_keys()
}

/// Allowed values for a key; empty when any value is accepted or the key is unknown
pub fn allowed_values_for(key: &str) -> Vec<String> {
    ReferenceTables::standard()
        .allowed_values_for(key)
        .map(<[String]>::to_vec)
        .unwrap_or_default()
}
