//! Structural and semantic validation
//!
//! Each check is a small method returning zero or more messages; `validate` and
//! `validate_text` compose them in a fixed order. Messages are short, user-facing and
//! name exactly one problem each.

use super::brackets::{check_brackets, check_unbracketed_conditionals};
use super::reference::ReferenceTables;
use crate::slashmacro::ast::{CommandLine, Condition, DirectiveLine, Macro, MacroLine};
use crate::slashmacro::formats::format_macro;
use crate::slashmacro::lexing::{classify_line, split_lines, LineKind};
use crate::slashmacro::parsing::{split_verb, InputError};
use serde::Deserialize;

pub const MAX_MACRO_LENGTH: usize = 255;
pub const NEAR_LIMIT_LENGTH: usize = 215;

/// Length thresholds, in characters of the canonical rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Limits {
    pub max_characters: usize,
    pub near_limit: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_characters: MAX_MACRO_LENGTH,
            near_limit: NEAR_LIMIT_LENGTH,
        }
    }
}

pub struct Validator<'t> {
    tables: &'t ReferenceTables,
    limits: Limits,
}

impl<'t> Validator<'t> {
    pub fn new(tables: &'t ReferenceTables) -> Self {
        Self {
            tables,
            limits: Limits::default(),
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Full validation of a parsed macro
    pub fn validate(&self, m: &Macro) -> Vec<String> {
        let mut errors = Vec::new();

        errors.extend(self.check_content(m));

        for line in &m.lines {
            match line {
                MacroLine::Directive(directive) => errors.extend(self.check_directive(directive)),
                MacroLine::Command(command) => errors.extend(self.check_command(command)),
                MacroLine::Comment(_) => {}
            }
        }

        errors.extend(self.check_length(m));

        log::debug!("validated macro '{}': {} error(s)", m.name, errors.len());
        errors
    }

    /// Pre-flight structural checks on raw text, without building a tree
    pub fn validate_text(&self, text: &str) -> Result<Vec<String>, InputError> {
        if text.is_empty() {
            return Err(InputError::Empty);
        }

        let lines = split_lines(text);
        let mut errors = Vec::new();

        if lines.is_empty() {
            errors.push("Macro is empty".to_string());
            return Ok(errors);
        }

        let mut has_content = false;
        for line in &lines {
            match classify_line(line.text) {
                LineKind::Command => {
                    has_content = true;
                    errors.extend(self.check_command_text(line.text, line.number));
                }
                LineKind::Directive => has_content = true,
                LineKind::Comment | LineKind::Passthrough => {}
            }
        }

        if !has_content {
            errors.push("Macro contains no commands or directives".to_string());
        }

        Ok(errors)
    }

    /// The macro must hold at least one directive or command
    pub fn check_content(&self, m: &Macro) -> Option<String> {
        if m.is_empty() {
            Some("Macro is empty".to_string())
        } else if !m.has_content() {
            Some("Macro contains no commands or directives".to_string())
        } else {
            None
        }
    }

    pub fn check_directive(&self, directive: &DirectiveLine) -> Option<String> {
        if self.tables.is_known_directive(&directive.directive) {
            None
        } else {
            Some(format!("Invalid directive: {}", directive.directive))
        }
    }

    /// Bracket structure, verb and every condition of a command line
    pub fn check_command(&self, command: &CommandLine) -> Vec<String> {
        let mut errors = Vec::new();

        if !command.raw.is_empty() {
            errors.extend(check_brackets(&command.raw, command.line_number));
            errors.extend(check_unbracketed_conditionals(
                &command.raw,
                command.line_number,
                self.tables,
            ));
        }

        if !self.tables.is_known_command(&command.verb) {
            errors.push(format!("Invalid command: {}", command.verb));
        }

        for clause in &command.clauses {
            if let Some(conditional) = &clause.conditional {
                errors.extend(conditional.conditions().filter_map(|c| self.check_condition(c)));
            }
        }

        errors
    }

    fn check_command_text(&self, line: &str, line_number: usize) -> Vec<String> {
        let mut errors = check_brackets(line, line_number);
        errors.extend(check_unbracketed_conditionals(line, line_number, self.tables));
        let (verb, _) = split_verb(line);
        if !self.tables.is_known_command(verb) {
            errors.push(format!("Invalid command: {}", verb));
        }
        errors
    }

    /// Key must be known; a value must be allowed when the key restricts values.
    ///
    /// A value may list alternatives separated by `/` (`mod:shift/ctrl`); each
    /// alternative is checked on its own.
    pub fn check_condition(&self, condition: &Condition) -> Option<String> {
        let allowed = match self.tables.allowed_values_for(&condition.key) {
            Some(allowed) => allowed,
            None => return Some(format!("Invalid condition: {}", condition.key)),
        };

        let value = match &condition.value {
            Some(value) if !allowed.is_empty() => value,
            _ => return None,
        };

        let accepted = allowed.iter().any(|a| a == value)
            || value
                .split('/')
                .all(|alternative| allowed.iter().any(|a| a == alternative));

        if accepted {
            None
        } else {
            Some(format!(
                "Invalid value '{}' for condition: {}",
                value, condition.key
            ))
        }
    }

    /// Length is measured on the canonical rendering, not the raw input
    pub fn check_length(&self, m: &Macro) -> Option<String> {
        let length = format_macro(m, false).chars().count();
        if length > self.limits.max_characters {
            Some(format!(
                "Macro exceeds {} character limit ({} characters)",
                self.limits.max_characters, length
            ))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slashmacro::parsing::parse_macro;

    fn validate(source: &str) -> Vec<String> {
        let m = parse_macro("test", source).unwrap();
        Validator::new(ReferenceTables::standard()).validate(&m)
    }

    #[test]
    fn test_valid_macro() {
        assert!(validate("#showtooltip\n/cast [mod:shift,@focus] Polymorph; Frostbolt").is_empty());
    }

    #[test]
    fn test_invalid_command_and_condition() {
        assert_eq!(
            validate("/notacommand [badkey] Foo"),
            vec![
                "Invalid command: /notacommand".to_string(),
                "Invalid condition: badkey".to_string(),
            ]
        );
    }

    #[test]
    fn test_invalid_directive() {
        assert_eq!(
            validate("#showtip\n/cast Fireball"),
            vec!["Invalid directive: #showtip".to_string()]
        );
    }

    #[test]
    fn test_value_checks() {
        assert_eq!(
            validate("/cast [mod:super] Fireball"),
            vec!["Invalid value 'super' for condition: mod".to_string()]
        );
        assert!(validate("/cast [mod:shift/ctrl] Fireball").is_empty());
        assert!(validate("/cast [channeling:Mind Flay] Fireball").is_empty());
        assert!(validate("/cast [MOD:shift] Fireball").is_empty());
        assert_eq!(validate("/cast [mod:Shift] Fireball").len(), 1);
    }

    #[test]
    fn test_comment_only_macro() {
        assert_eq!(
            validate("; nothing here"),
            vec!["Macro contains no commands or directives".to_string()]
        );
        assert_eq!(validate("   "), vec!["Macro is empty".to_string()]);
    }

    #[test]
    fn test_length_uses_canonical_rendering() {
        let padded = format!("/cast{}{}", " ".repeat(20), "A".repeat(245));
        assert!(padded.chars().count() > MAX_MACRO_LENGTH);
        assert!(validate(&padded).is_empty());
        let long = format!("/cast {}", "A".repeat(300));
        assert_eq!(
            validate(&long),
            vec!["Macro exceeds 255 character limit (306 characters)".to_string()]
        );
    }

    #[test]
    fn test_custom_limits() {
        let m = parse_macro("test", "/cast Fireball").unwrap();
        let validator = Validator::new(ReferenceTables::standard()).with_limits(Limits {
            max_characters: 10,
            near_limit: 5,
        });
        assert_eq!(
            validator.validate(&m),
            vec!["Macro exceeds 10 character limit (14 characters)".to_string()]
        );
    }

    #[test]
    fn test_validate_text() {
        let validator = Validator::new(ReferenceTables::standard());
        assert_eq!(validator.validate_text(""), Err(InputError::Empty));
        assert_eq!(
            validator.validate_text("/cast [mod:shift Polymorph"),
            Ok(vec!["Unclosed bracket '[' at position 7 on line 1".to_string()])
        );
        assert_eq!(
            validator.validate_text("/bogus Fireball"),
            Ok(vec!["Invalid command: /bogus".to_string()])
        );
        assert_eq!(
            validator.validate_text("\n\n"),
            Ok(vec!["Macro is empty".to_string()])
        );
    }

    #[test]
    fn test_substitute_tables() {
        let tables = ReferenceTables::new(
            ["#show"],
            [("/zap", super::super::reference::CommandCategory::Combat)],
            [("charged", vec![])],
        );
        let m = parse_macro("test", "/zap [charged] Bolt\n/cast Fireball").unwrap();
        assert_eq!(
            Validator::new(&tables).validate(&m),
            vec!["Invalid command: /cast".to_string()]
        );
    }
}
