//! Macro root element
//!
//! The macro owns its lines exclusively. Line numbers are unique and increase
//! monotonically; the parser assigns them, and `push_line` keeps them that way for
//! trees assembled by hand.

use super::super::traits::AstNode;
use super::line::{CommandLine, DirectiveLine, MacroLine};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Macro {
    pub name: String,
    pub icon: Option<String>,
    pub lines: Vec<MacroLine>,
}

impl Macro {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: None,
            lines: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_lines(mut self, lines: Vec<MacroLine>) -> Self {
        self.lines = lines;
        self
    }

    /// Append a line, renumbering it to follow the current last line
    pub fn push_line(&mut self, mut line: MacroLine) {
        let next = self.lines.last().map(|l| l.line_number() + 1).unwrap_or(1);
        match &mut line {
            MacroLine::Directive(d) => d.line_number = next,
            MacroLine::Command(c) => c.line_number = next,
            MacroLine::Comment(c) => c.line_number = next,
        }
        self.lines.push(line);
    }

    pub fn commands(&self) -> impl Iterator<Item = &CommandLine> {
        self.lines.iter().filter_map(MacroLine::as_command)
    }

    pub fn directives(&self) -> impl Iterator<Item = &DirectiveLine> {
        self.lines.iter().filter_map(MacroLine::as_directive)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// True when at least one line is a directive or a command
    pub fn has_content(&self) -> bool {
        self.lines.iter().any(MacroLine::is_content)
    }
}

impl AstNode for Macro {
    fn node_type(&self) -> &'static str {
        "Macro"
    }

    fn display_label(&self) -> String {
        let name = if self.name.is_empty() {
            "(unnamed)"
        } else {
            self.name.as_str()
        };
        format!("{} - {} line(s)", name, self.lines.len())
    }
}
