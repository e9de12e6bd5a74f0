//! Validation of macros against reference data and structural rules
//!
//!     Validation is read-only over its inputs and reports plain message strings, one
//!     problem per message, in a stable order:
//!         1. Content: the macro has at least one directive or command.
//!         2. Per line, in source order: directive names; bracket structure, verb and
//!            conditions of command lines.
//!         3. Length: the canonical rendering fits the character ceiling.
//!
//!     Reference data (known directives, commands, conditional keys and their allowed
//!     values) lives in [reference](reference) and is passed to the [`Validator`]
//!     explicitly.

pub mod brackets;
pub mod reference;
pub mod validator;

pub use brackets::{check_brackets, check_unbracketed_conditionals, is_balanced};
pub use reference::{CommandCategory, ReferenceTables};
pub use validator::{Limits, Validator, MAX_MACRO_LENGTH, NEAR_LIMIT_LENGTH};
