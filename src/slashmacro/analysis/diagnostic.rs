//! Advisory diagnostic records

use crate::slashmacro::validation::Limits;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Taxonomy shared by validation messages and detector diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorCategory {
    SyntaxError,
    StructureError,
    CommandError,
    ConditionalError,
    CharacterLimit,
    GeneralError,
}

impl ErrorCategory {
    /// Infer the category of a plain validation message from its wording
    pub fn classify(message: &str) -> Self {
        let lower = message.to_lowercase();
        if lower.contains("bracket") || lower.contains("unexpected ']'") {
            ErrorCategory::SyntaxError
        } else if lower.starts_with("invalid command") || lower.starts_with("invalid directive") {
            ErrorCategory::CommandError
        } else if lower.starts_with("invalid condition") || lower.starts_with("invalid value") {
            ErrorCategory::ConditionalError
        } else if lower.contains("character limit") {
            ErrorCategory::CharacterLimit
        } else if lower.starts_with("macro is empty") || lower.contains("no commands") {
            ErrorCategory::StructureError
        } else {
            ErrorCategory::GeneralError
        }
    }

    /// A one-sentence explanation attached to lifted validation messages
    pub fn explanation(&self, limits: &Limits) -> String {
        match self {
            ErrorCategory::SyntaxError => {
                "Conditionals are written inside single, balanced square brackets.".to_string()
            }
            ErrorCategory::StructureError => {
                "The order or shape of the lines and clauses keeps the macro from doing anything useful."
                    .to_string()
            }
            ErrorCategory::CommandError => {
                "The game only runs slash commands and directives it knows; anything else is ignored."
                    .to_string()
            }
            ErrorCategory::ConditionalError => {
                "Unknown conditions or values never match, so the clause they guard is skipped."
                    .to_string()
            }
            ErrorCategory::CharacterLimit => format!(
                "The game rejects macros longer than {} characters.",
                limits.max_characters
            ),
            ErrorCategory::GeneralError => {
                "This is a suggestion, the macro works without it.".to_string()
            }
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::SyntaxError => "SyntaxError",
            ErrorCategory::StructureError => "StructureError",
            ErrorCategory::CommandError => "CommandError",
            ErrorCategory::ConditionalError => "ConditionalError",
            ErrorCategory::CharacterLimit => "CharacterLimit",
            ErrorCategory::GeneralError => "GeneralError",
        };
        write!(f, "{}", name)
    }
}

/// A user-facing advisory: what is wrong, where, and how to fix it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    pub category: ErrorCategory,
    pub message: String,
    pub code: Option<String>,
    pub line: Option<usize>,
    pub quick_fix: Option<String>,
    pub example: Option<String>,
    pub explanation: Option<String>,
}

impl DiagnosticRecord {
    pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            code: None,
            line: None,
            quick_fix: None,
            example: None,
            explanation: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_quick_fix(mut self, quick_fix: impl Into<String>) -> Self {
        self.quick_fix = Some(quick_fix.into());
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }
}

impl fmt::Display for DiagnosticRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{} (line {}): {}", self.category, line, self.message)?,
            None => write!(f, "{}: {}", self.category, self.message)?,
        }
        if let Some(fix) = &self.quick_fix {
            write!(f, "\n  fix: {}", fix)?;
        }
        if let Some(example) = &self.example {
            write!(f, "\n  example: {}", example)?;
        }
        Ok(())
    }
}
