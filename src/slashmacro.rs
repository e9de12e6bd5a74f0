//! Main module for slashmacro library functionality

pub mod analysis;
pub mod ast;
pub mod config;
pub mod engine;
pub mod formats;
pub mod lexing;
pub mod logging;
pub mod parsing;
pub mod processor;
pub mod testing;
pub mod validation;
