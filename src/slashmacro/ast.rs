//! Syntax tree for slash-command macros
//!
//!     A macro is a short, flat document: an ordered list of lines, each of which is a
//!     directive (`#showtooltip`), a command (`/cast [mod:shift] Polymorph`) or a comment.
//!     There is no nesting between lines. All the structure lives inside command lines,
//!     where clauses pair an optional bracketed conditional with an argument.
//!
//! Tree Shape
//!
//!     Macro
//!       └── MacroLine (Directive | Command | Comment)
//!             Command
//!               └── Clause (conditional?, argument)
//!                     Conditional
//!                       └── ConditionSet (OR-ed)
//!                             └── Condition (AND-ed, key[:value])
//!
//!     A missing conditional (`None`) and a conditional holding one empty set (`[]`) are
//!     distinct: the first is an unconditional clause, the second an explicit always-true
//!     gate. Both render back exactly as they were written.
//!
//! Equality
//!
//!     Every line keeps the raw source text it was parsed from, for diagnostics and for
//!     rendering passthrough lines. That text is excluded from equality so that two trees
//!     parsed from texts differing only in incidental whitespace compare equal.

pub mod elements;
pub mod snapshot;
pub mod traits;

pub use elements::conditional::{Condition, ConditionSet, Conditional};
pub use elements::line::{
    Clause, CommandLine, CommentLine, CommentStyle, DirectiveLine, MacroLine,
};
pub use elements::macro_doc::Macro;
pub use snapshot::{snapshot_from_macro, AstSnapshot};
pub use traits::AstNode;
