//! # slashmacro
//!
//! A parser, validator, formatter and linter for slash-command macros.
//!
//! File Layout
//!
//! The engine is a one-way pipeline. Each stage lives in its own module under
//! src/slashmacro and only consumes the output of the stage before it:
//!
//! src/slashmacro
//!   ├── lexing       Line scanning, logos tokens and line classification
//!   ├── parsing      Conditional and command parsers, tree assembly
//!   ├── ast          The syntax tree (Macro, MacroLine, Conditional, ...)
//!   ├── validation   Reference tables and the structural/semantic checks
//!   ├── formats      Canonical rendering and the format registry
//!   └── analysis     Heuristic detectors producing advisory diagnostics
//!
//! The raw text also flows, independently of the tree, into the analysis
//! stage. The [engine](slashmacro::engine) module wires the stages into the
//! small public surface re-exported here.
//!
//! For shared test corpora and assertion helpers see the
//! [testing module](slashmacro::testing).

pub mod slashmacro;

pub use slashmacro::analysis::{DiagnosticRecord, ErrorCategory};
pub use slashmacro::ast::{
    Clause, CommandLine, CommentLine, CommentStyle, Condition, ConditionSet, Conditional,
    DirectiveLine, Macro, MacroLine,
};
pub use slashmacro::engine::{
    allowed_values_for, enhance, format, known_commands, known_conditional_keys, parse,
    parse_bytes, validate, validate_text,
};
pub use slashmacro::parsing::InputError;
