//! Fluent assertion API for macro trees

use crate::slashmacro::ast::{Clause, CommandLine, CommentLine, DirectiveLine, Macro, MacroLine};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a macro
pub fn assert_macro(m: &Macro) -> MacroAssertion<'_> {
    MacroAssertion { m }
}

fn summarize_lines(lines: &[MacroLine]) -> String {
    lines
        .iter()
        .map(|line| match line {
            MacroLine::Directive(_) => "Directive",
            MacroLine::Command(_) => "Command",
            MacroLine::Comment(_) => "Comment",
        })
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Macro Assertions
// ============================================================================

pub struct MacroAssertion<'a> {
    m: &'a Macro,
}

impl<'a> MacroAssertion<'a> {
    pub fn line_count(self, expected: usize) -> Self {
        let actual = self.m.lines.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} lines, found {} lines: [{}]",
            expected,
            actual,
            summarize_lines(&self.m.lines)
        );
        self
    }

    /// Assert on a specific line by index (not line number)
    pub fn line<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(LineAssertion<'a>),
    {
        assert!(
            index < self.m.lines.len(),
            "Line index {} out of bounds (macro has {} lines)",
            index,
            self.m.lines.len()
        );
        assertion(LineAssertion {
            line: &self.m.lines[index],
            context: format!("lines[{}]", index),
        });
        self
    }

    /// Assert line numbers run 1..=n without gaps
    pub fn numbered_densely(self) -> Self {
        let numbers: Vec<usize> = self.m.lines.iter().map(MacroLine::line_number).collect();
        let expected: Vec<usize> = (1..=self.m.lines.len()).collect();
        assert_eq!(numbers, expected, "Line numbers are not dense");
        self
    }
}

// ============================================================================
// Line Assertions
// ============================================================================

pub struct LineAssertion<'a> {
    line: &'a MacroLine,
    context: String,
}

impl<'a> LineAssertion<'a> {
    pub fn assert_directive(self) -> DirectiveAssertion<'a> {
        match self.line {
            MacroLine::Directive(directive) => DirectiveAssertion {
                directive,
                context: self.context,
            },
            other => panic!("{}: expected directive, found {:?}", self.context, other),
        }
    }

    pub fn assert_command(self) -> CommandAssertion<'a> {
        match self.line {
            MacroLine::Command(command) => CommandAssertion {
                command,
                context: self.context,
            },
            other => panic!("{}: expected command, found {:?}", self.context, other),
        }
    }

    pub fn assert_comment(self) -> CommentAssertion<'a> {
        match self.line {
            MacroLine::Comment(comment) => CommentAssertion {
                comment,
                context: self.context,
            },
            other => panic!("{}: expected comment, found {:?}", self.context, other),
        }
    }
}

pub struct DirectiveAssertion<'a> {
    directive: &'a DirectiveLine,
    context: String,
}

impl DirectiveAssertion<'_> {
    pub fn directive(self, expected: &str) -> Self {
        assert_eq!(
            self.directive.directive, expected,
            "{}: directive mismatch",
            self.context
        );
        self
    }

    pub fn argument(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.directive.argument.as_deref(),
            expected,
            "{}: directive argument mismatch",
            self.context
        );
        self
    }
}

pub struct CommentAssertion<'a> {
    comment: &'a CommentLine,
    context: String,
}

impl CommentAssertion<'_> {
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(self.comment.text, expected, "{}: comment mismatch", self.context);
        self
    }
}

pub struct CommandAssertion<'a> {
    command: &'a CommandLine,
    context: String,
}

impl<'a> CommandAssertion<'a> {
    pub fn verb(self, expected: &str) -> Self {
        assert_eq!(self.command.verb, expected, "{}: verb mismatch", self.context);
        self
    }

    pub fn clause_count(self, expected: usize) -> Self {
        assert_eq!(
            self.command.clauses.len(),
            expected,
            "{}: expected {} clauses, found {:?}",
            self.context,
            expected,
            self.command.clauses
        );
        self
    }

    pub fn clause<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ClauseAssertion<'a>),
    {
        assert!(
            index < self.command.clauses.len(),
            "{}: clause index {} out of bounds ({} clauses)",
            self.context,
            index,
            self.command.clauses.len()
        );
        assertion(ClauseAssertion {
            clause: &self.command.clauses[index],
            context: format!("{}.clauses[{}]", self.context, index),
        });
        self
    }

    /// Assert the non-empty arguments, in order
    pub fn arguments(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.command.arguments(),
            expected,
            "{}: arguments mismatch",
            self.context
        );
        self
    }
}

pub struct ClauseAssertion<'a> {
    clause: &'a Clause,
    context: String,
}

impl ClauseAssertion<'_> {
    pub fn argument(self, expected: &str) -> Self {
        assert_eq!(
            self.clause.argument, expected,
            "{}: argument mismatch",
            self.context
        );
        self
    }

    pub fn unconditional(self) -> Self {
        assert!(
            self.clause.conditional.is_none(),
            "{}: expected no conditional, found {:?}",
            self.context,
            self.clause.conditional
        );
        self
    }

    /// Assert the condition sets by their rendering, e.g. `["[mod:shift]", "[]"]`
    pub fn sets(self, expected: &[&str]) -> Self {
        let actual: Vec<String> = self
            .clause
            .conditional
            .iter()
            .flat_map(|c| c.sets.iter().map(ToString::to_string))
            .collect();
        assert_eq!(actual, expected, "{}: condition sets mismatch", self.context);
        self
    }
}
