//! Macro line elements
//!
//! Every line of a macro is one of three kinds, dispatched on its first character:
//!
//!     #showtooltip Polymorph                directive
//!     /cast [mod:shift] Polymorph; Frostbolt command
//!     ; swap to focus polymorph             comment
//!
//! Lines carry their 1-based line number and the raw (trimmed) source text.

use super::super::traits::AstNode;
use super::conditional::Conditional;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of a macro
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MacroLine {
    Directive(DirectiveLine),
    Command(CommandLine),
    Comment(CommentLine),
}

impl MacroLine {
    pub fn line_number(&self) -> usize {
        match self {
            MacroLine::Directive(d) => d.line_number,
            MacroLine::Command(c) => c.line_number,
            MacroLine::Comment(c) => c.line_number,
        }
    }

    pub fn raw(&self) -> &str {
        match self {
            MacroLine::Directive(d) => &d.raw,
            MacroLine::Command(c) => &c.raw,
            MacroLine::Comment(c) => &c.raw,
        }
    }

    pub fn as_command(&self) -> Option<&CommandLine> {
        match self {
            MacroLine::Command(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_directive(&self) -> Option<&DirectiveLine> {
        match self {
            MacroLine::Directive(d) => Some(d),
            _ => None,
        }
    }

    /// Directives and commands count as content, comments do not
    pub fn is_content(&self) -> bool {
        !matches!(self, MacroLine::Comment(_))
    }
}

impl AstNode for MacroLine {
    fn node_type(&self) -> &'static str {
        match self {
            MacroLine::Directive(d) => d.node_type(),
            MacroLine::Command(c) => c.node_type(),
            MacroLine::Comment(c) => c.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            MacroLine::Directive(d) => d.display_label(),
            MacroLine::Command(c) => c.display_label(),
            MacroLine::Comment(c) => c.display_label(),
        }
    }
}

/// A `#`-prefixed engine hint such as `#showtooltip Fireball`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectiveLine {
    pub line_number: usize,
    pub raw: String,
    /// The directive token including its `#`
    pub directive: String,
    pub argument: Option<String>,
}

impl DirectiveLine {
    pub fn new(line_number: usize, directive: impl Into<String>) -> Self {
        let directive = directive.into();
        Self {
            line_number,
            raw: directive.clone(),
            directive,
            argument: None,
        }
    }

    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        let argument = argument.into();
        self.argument = if argument.trim().is_empty() {
            None
        } else {
            Some(argument)
        };
        self
    }

    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = raw.into();
        self
    }
}

// raw is diagnostic only
impl PartialEq for DirectiveLine {
    fn eq(&self, other: &Self) -> bool {
        self.line_number == other.line_number
            && self.directive == other.directive
            && self.argument == other.argument
    }
}

impl fmt::Display for DirectiveLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.argument {
            Some(argument) => write!(f, "{} {}", self.directive, argument),
            None => write!(f, "{}", self.directive),
        }
    }
}

impl AstNode for DirectiveLine {
    fn node_type(&self) -> &'static str {
        "DirectiveLine"
    }

    fn display_label(&self) -> String {
        self.to_string()
    }
}

/// One `(conditional, argument)` alternative of a command line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub conditional: Option<Conditional>,
    pub argument: String,
}

impl Clause {
    /// A clause that always applies
    pub fn unconditional(argument: impl Into<String>) -> Self {
        Self {
            conditional: None,
            argument: argument.into(),
        }
    }

    pub fn new(conditional: Option<Conditional>, argument: impl Into<String>) -> Self {
        Self {
            conditional,
            argument: argument.into(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.conditional.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.conditional.is_none() && self.argument.is_empty()
    }
}

/// Renders `[set][set] argument`
impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.conditional {
            Some(conditional) if self.argument.is_empty() => write!(f, "{}", conditional),
            Some(conditional) => write!(f, "{} {}", conditional, self.argument),
            None => write!(f, "{}", self.argument),
        }
    }
}

impl AstNode for Clause {
    fn node_type(&self) -> &'static str {
        "Clause"
    }

    fn display_label(&self) -> String {
        if self.argument.is_empty() {
            "(no argument)".to_string()
        } else {
            self.argument.clone()
        }
    }
}

/// A slash command with its clauses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandLine {
    pub line_number: usize,
    pub raw: String,
    /// The verb including its leading slash, as written
    pub verb: String,
    pub clauses: Vec<Clause>,
}

impl CommandLine {
    pub fn new(line_number: usize, verb: impl Into<String>, clauses: Vec<Clause>) -> Self {
        Self {
            line_number,
            raw: String::new(),
            verb: verb.into(),
            clauses,
        }
    }

    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = raw.into();
        self
    }

    /// Verb normalised for table lookups
    pub fn normalized_verb(&self) -> String {
        self.verb.to_lowercase()
    }

    pub fn has_conditionals(&self) -> bool {
        self.clauses.iter().any(|c| c.conditional.is_some())
    }

    /// Non-empty arguments across all clauses, in order
    pub fn arguments(&self) -> Vec<&str> {
        self.clauses
            .iter()
            .map(|c| c.argument.as_str())
            .filter(|a| !a.is_empty())
            .collect()
    }
}

// raw is diagnostic only
impl PartialEq for CommandLine {
    fn eq(&self, other: &Self) -> bool {
        self.line_number == other.line_number
            && self.verb == other.verb
            && self.clauses == other.clauses
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clauses: Vec<String> = self.clauses.iter().map(|c| c.to_string()).collect();
        let body = clauses.join("; ");
        if body.is_empty() {
            write!(f, "{}", self.verb)
        } else {
            write!(f, "{} {}", self.verb, body)
        }
    }
}

impl AstNode for CommandLine {
    fn node_type(&self) -> &'static str {
        "CommandLine"
    }

    fn display_label(&self) -> String {
        format!("{} ({} clause(s))", self.verb, self.clauses.len())
    }
}

/// How a comment line was written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentStyle {
    /// `; text`, prefix stripped
    Semicolon,
    /// An unclassifiable line kept verbatim
    Passthrough,
}

/// A comment, or a line that could not be classified
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentLine {
    pub line_number: usize,
    pub raw: String,
    pub text: String,
    pub style: CommentStyle,
}

impl CommentLine {
    pub fn new(line_number: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            line_number,
            raw: format!("; {}", text),
            text,
            style: CommentStyle::Semicolon,
        }
    }

    pub fn passthrough(line_number: usize, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            line_number,
            text: raw.clone(),
            raw,
            style: CommentStyle::Passthrough,
        }
    }

    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = raw.into();
        self
    }
}

// raw is diagnostic only
impl PartialEq for CommentLine {
    fn eq(&self, other: &Self) -> bool {
        self.line_number == other.line_number
            && self.text == other.text
            && self.style == other.style
    }
}

impl fmt::Display for CommentLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            CommentStyle::Semicolon if self.text.is_empty() => write!(f, ";"),
            CommentStyle::Semicolon => write!(f, "; {}", self.text),
            CommentStyle::Passthrough => write!(f, "{}", self.text),
        }
    }
}

impl AstNode for CommentLine {
    fn node_type(&self) -> &'static str {
        "CommentLine"
    }

    fn display_label(&self) -> String {
        self.text.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::super::conditional::{Condition, ConditionSet};
    use super::*;

    #[test]
    fn test_directive_rendering() {
        let directive = DirectiveLine::new(1, "#showtooltip").with_argument("Fireball");
        assert_eq!(directive.to_string(), "#showtooltip Fireball");
        assert_eq!(DirectiveLine::new(1, "#show").to_string(), "#show");
    }

    #[test]
    fn test_clause_rendering() {
        let conditional =
            Conditional::from_sets(vec![ConditionSet::new(vec![Condition::new("harm")])]);
        assert_eq!(Clause::new(conditional.clone(), "Fireball").to_string(), "[harm] Fireball");
        assert_eq!(Clause::new(conditional, "").to_string(), "[harm]");
        assert_eq!(Clause::unconditional("Frostbolt").to_string(), "Frostbolt");
    }

    #[test]
    fn test_command_rendering_joins_clauses() {
        let conditional =
            Conditional::from_sets(vec![ConditionSet::new(vec![Condition::new("@focus")])]);
        let command = CommandLine::new(
            1,
            "/cast",
            vec![
                Clause::new(conditional, "Polymorph"),
                Clause::unconditional("Frostbolt"),
            ],
        );
        assert_eq!(command.to_string(), "/cast [@focus] Polymorph; Frostbolt");
        assert_eq!(command.arguments(), vec!["Polymorph", "Frostbolt"]);
    }

    #[test]
    fn test_equality_ignores_raw() {
        let a = CommandLine::new(1, "/cast", vec![Clause::unconditional("Fireball")])
            .with_raw("/cast   Fireball");
        let b = CommandLine::new(1, "/cast", vec![Clause::unconditional("Fireball")])
            .with_raw("/cast Fireball");
        assert_eq!(a, b);
    }

    #[test]
    fn test_comment_rendering() {
        assert_eq!(CommentLine::new(1, "note").to_string(), "; note");
        assert_eq!(CommentLine::new(1, "").to_string(), ";");
        assert_eq!(
            CommentLine::passthrough(1, "cast Fireball").to_string(),
            "cast Fireball"
        );
    }
}
