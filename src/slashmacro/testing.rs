//! Testing utilities for macro trees
//!
//! Two tools, meant to be used together:
//!
//! 1. **[samples](samples)**: a small corpus of verified macro texts, each marked
//!    valid or invalid against the standard reference tables. Prefer these over
//!    ad-hoc strings when a test needs "some valid macro".
//! 2. **[assert_macro](fn@assert_macro)**: a fluent API that checks tree shape and
//!    content in one expression.
//!
//! ```rust-example
//! use slashmacro::slashmacro::testing::assert_macro;
//!
//! let m = slashmacro::parse("/cast [mod:shift] Polymorph; Frostbolt")?;
//! assert_macro(&m)
//!     .line_count(1)
//!     .line(0, |line| {
//!         line.assert_command()
//!             .verb("/cast")
//!             .clause(0, |c| c.sets(&["[mod:shift]"]).argument("Polymorph"))
//!             .clause(1, |c| c.unconditional().argument("Frostbolt"));
//!     });
//! ```

pub mod samples;
mod testing_assertions;

pub use samples::{sample, valid_samples, Sample, SAMPLES};
pub use testing_assertions::{
    assert_macro, ClauseAssertion, CommandAssertion, CommentAssertion, DirectiveAssertion,
    LineAssertion, MacroAssertion,
};
