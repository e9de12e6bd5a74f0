//! Configuration loader
//!
//! `defaults/slashmacro.default.toml` is embedded into the library so that the
//! documented defaults and runtime behavior stay in sync. Callers layer their own
//! files and overrides on top through [`Loader`] before deserializing into
//! [`EngineConfig`].

use super::analysis::Analyzer;
use super::logging::LoggingConfig;
use super::validation::Limits;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/slashmacro.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    pub limits: Limits,
    pub formatting: FormattingConfig,
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormattingConfig {
    pub trim: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    pub disabled_detectors: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSection {
    #[serde(default)]
    pub filter: Option<String>,
}

impl EngineConfig {
    /// An analyzer honoring the configured limits and disabled detectors
    pub fn analyzer(&self) -> Analyzer {
        Analyzer::new()
            .with_limits(self.limits)
            .with_disabled(self.analysis.disabled_detectors.iter().cloned())
    }

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig::default().with_filter(self.logging.filter.clone())
    }
}

/// Layers user overrides over the built-in defaults
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file; a missing file is an error at build time
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a configuration file if it exists
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        let config: EngineConfig = self.builder.build()?.try_deserialize()?;
        log::debug!(
            "configuration loaded: max {} / near {} characters, {} detector(s) disabled",
            config.limits.max_characters,
            config.limits.near_limit,
            config.analysis.disabled_detectors.len()
        );
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<EngineConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loads_default_config() {
        let config = load_defaults().unwrap();
        assert_eq!(config.limits, Limits::default());
        assert!(!config.formatting.trim);
        assert!(config.analysis.disabled_detectors.is_empty());
        assert!(config.logging.filter.is_none());
    }

    #[test]
    fn test_supports_overrides() {
        let config = Loader::new()
            .set_override("limits.near_limit", 200_i64)
            .unwrap()
            .set_override("formatting.trim", true)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.limits.near_limit, 200);
        assert_eq!(config.limits.max_characters, 255);
        assert!(config.formatting.trim);
    }

    #[test]
    fn test_user_file_layers_over_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[analysis]\ndisabled_detectors = [\"extra_whitespace\"]\n\n[logging]\nfilter = \"debug\""
        )
        .unwrap();

        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert_eq!(config.analysis.disabled_detectors, vec!["extra_whitespace"]);
        assert_eq!(config.logging.filter.as_deref(), Some("debug"));
        assert!(!config.analyzer().is_enabled("extra_whitespace"));
    }

    #[test]
    fn test_missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/slashmacro.toml")
            .build()
            .unwrap();
        assert_eq!(config.limits.max_characters, 255);
    }

    #[test]
    fn test_missing_required_file_fails() {
        assert!(Loader::new()
            .with_file("/nonexistent/slashmacro.toml")
            .build()
            .is_err());
    }
}
