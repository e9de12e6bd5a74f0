//! Element types of the macro syntax tree

pub mod conditional;
pub mod line;
pub mod macro_doc;
