//! Output formats for macro trees
//!
//! This module contains:
//! - The canonical macro text renderer (plain and trimmed)
//! - Inspection formats (treeviz, json, yaml)
//! - The registry that looks formats up by name

pub mod canonical;
pub mod registry;
pub mod serialized;
pub mod treeviz;

pub use canonical::{format_line, format_macro, CanonicalFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, YamlFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
