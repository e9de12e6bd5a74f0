//! The enhancement pass: validation messages plus detector diagnostics
//!
//! Output order is fixed:
//!     1. Each validation message, lifted into a record.
//!     2. Enabled detectors, in catalogue order.
//!     3. The missing `#showtooltip` suggestion, only when there were no validation
//!        messages.

use super::detectors::{Detector, DETECTORS};
use super::diagnostic::{DiagnosticRecord, ErrorCategory};
use crate::slashmacro::lexing::{classify_line, split_lines, LineKind};
use crate::slashmacro::validation::Limits;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

pub const MISSING_TOOLTIP: &str = "missing_showtooltip";

static LINE_REFERENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"on line (\d+)").unwrap());

#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    disabled: BTreeSet<String>,
    limits: Limits,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip detectors by name; the suggestion is named [`MISSING_TOOLTIP`]
    pub fn with_disabled<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        !self.disabled.contains(name)
    }

    pub fn detectors(&self) -> impl Iterator<Item = &'static Detector> + '_ {
        DETECTORS.iter().filter(|d| self.is_enabled(d.name))
    }

    /// Run the enabled detectors only
    pub fn detect(&self, text: &str) -> Vec<DiagnosticRecord> {
        self.detectors()
            .filter_map(|d| d.detect(text, &self.limits))
            .collect()
    }

    /// Turn a validation message into a record with an inferred category
    pub fn lift(&self, message: &str) -> DiagnosticRecord {
        let category = ErrorCategory::classify(message);
        let record = DiagnosticRecord::new(category, message)
            .with_code("validation")
            .with_explanation(category.explanation(&self.limits));

        match LINE_REFERENCE
            .captures(message)
            .and_then(|caps| caps[1].parse::<usize>().ok())
        {
            Some(line) => record.with_line(line),
            None => record,
        }
    }

    pub fn analyze(&self, basic_errors: &[String], text: &str) -> Vec<DiagnosticRecord> {
        let mut records: Vec<DiagnosticRecord> =
            basic_errors.iter().map(|error| self.lift(error)).collect();

        records.extend(self.detect(text));

        if basic_errors.is_empty() && self.is_enabled(MISSING_TOOLTIP) {
            records.extend(missing_tooltip(text));
        }

        log::debug!(
            "analysis produced {} record(s) from {} validation error(s)",
            records.len(),
            basic_errors.len()
        );
        records
    }
}

/// Turn a validation message into a record, explained against default limits
pub fn lift_error(message: &str) -> DiagnosticRecord {
    Analyzer::new().lift(message)
}

fn missing_tooltip(text: &str) -> Option<DiagnosticRecord> {
    let lines = split_lines(text);
    let has_command = lines
        .iter()
        .any(|line| classify_line(line.text) == LineKind::Command);
    let has_tooltip = lines.iter().any(|line| {
        let directive = line.text.split_whitespace().next().unwrap_or_default();
        matches!(directive.to_lowercase().as_str(), "#showtooltip" | "#show")
    });

    (has_command && !has_tooltip).then(|| {
        DiagnosticRecord::new(
            ErrorCategory::GeneralError,
            "Consider adding #showtooltip so the button shows the right icon and tooltip",
        )
        .with_code(MISSING_TOOLTIP)
        .with_quick_fix("Add '#showtooltip' as the first line")
        .with_example("#showtooltip\n/cast [mod:shift] Polymorph; Frostbolt")
    })
}

/// Lint pass with default settings
pub fn enhance(basic_errors: &[String], text: &str) -> Vec<DiagnosticRecord> {
    Analyzer::new().analyze(basic_errors, text)
}
