//! Named output formats for a parsed macro
//!
//! Every way of showing a [`Macro`] (canonical text, trimmed text, the treeviz outline,
//! JSON and YAML) sits behind one name. The CLI's `format` and `inspect` commands and
//! `ProcessingSpec` all resolve those names here, so adding a format means one
//! `register` call in [`FormatRegistry::with_defaults`].

use crate::slashmacro::ast::Macro;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No format is registered under this name
    FormatNotFound(String),
    /// The tree could not be written out (json/yaml only)
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Unknown output format '{name}'"),
            FormatError::SerializationError(msg) => write!(f, "Could not serialize macro: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// One way of rendering a macro
pub trait Formatter: Send + Sync {
    /// Lookup name, e.g. `macro-trim`
    fn name(&self) -> &str;

    fn serialize(&self, m: &Macro) -> Result<String, FormatError>;

    /// Shown by `slashmacro list-formats`
    fn description(&self) -> &str {
        ""
    }
}

/// Formats by name; iteration is alphabetical so `list-formats` output is stable
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// A registry with no formats at all
    pub fn new() -> Self {
        FormatRegistry {
            formatters: BTreeMap::new(),
        }
    }

    /// Add a format; a later registration under the same name wins
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Render `m` in the format called `format`
    pub fn serialize(&self, m: &Macro, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(m)
    }

    pub fn list_formats(&self) -> Vec<String> {
        self.formatters.keys().cloned().collect()
    }

    pub fn descriptions(&self) -> Vec<(&str, &str)> {
        self.formatters
            .iter()
            .map(|(name, formatter)| (name.as_str(), formatter.description()))
            .collect()
    }

    /// `macro`, `macro-trim`, `treeviz`, `json` and `yaml`
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::CanonicalFormatter { trim: false });
        registry.register(super::CanonicalFormatter { trim: true });
        registry.register(super::TreevizFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
