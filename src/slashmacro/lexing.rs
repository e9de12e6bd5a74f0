//! Lexing for slash-command macros
//!
//!     Macros are line oriented and short, so lexing happens in two small layers:
//!
//!     Line Scanning:
//!         The source is split into physical lines. Blank lines are dropped and the
//!         remaining lines are numbered 1..n in the order they are emitted. See
//!         [scanner](scanner).
//!
//!     Line Tokens:
//!         Within a command line, a logos lexer produces raw tokens which are then
//!         folded into bracket-aware tokens. A complete `[...]` span is one token no
//!         matter what spaces, commas or semicolons it holds, which is what lets clause
//!         splitting on `;` ignore semicolons inside brackets. Unpaired brackets stay
//!         single tokens and end up as literal argument text.
//!         See [tokens](tokens).
//!
//!     Classification:
//!         Each scanned line is classified once, by its first character, into a directive,
//!         command or comment line. No state is carried from one line to the next. See
//!         [line_classification](line_classification).

pub mod line_classification;
pub mod scanner;
pub mod tokens;

pub use line_classification::{classify_line, LineKind};
pub use scanner::{split_lines, tokenize_line, ScannedLine};
pub use tokens::{RawToken, Token};
