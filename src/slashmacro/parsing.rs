//! Parsing module for slash-command macros
//!
//!     Parsing turns raw macro text into a [`Macro`](crate::slashmacro::ast::Macro):
//!         1. Scanning: split into numbered, trimmed, non-blank lines. See
//!            [scanner](crate::slashmacro::lexing::scanner).
//!         2. Classification: dispatch each line by its first character. See
//!            [line_classification](crate::slashmacro::lexing::line_classification).
//!         3. Line parsing: directives and comments are split once; command lines go
//!            through the [command](command) parser, which hands everything after the
//!            verb to the [conditionals](conditionals) parser.
//!
//! Totality
//!
//!     The parser never fails on malformed structure. Unterminated or stray brackets are
//!     kept as literal argument text and nested brackets break apart into literal pieces
//!     around the inner group. Judging malformed input is the validator's job, which keeps
//!     half-typed macros parseable while they are being edited.
//!
//!     The only failures are input failures: an empty string, or bytes that are not
//!     UTF-8. See [`InputError`].

pub mod command;
pub mod conditionals;
pub mod error;
pub mod parser;

pub use command::{parse_command, split_verb};
pub use conditionals::{parse_clauses, parse_conditionals_and_arguments, parse_group};
pub use error::InputError;
pub use parser::{decode_input, parse_line, parse_macro};
