//! Text processing API behind the command line
//!
//! A [`ProcessingSpec`] names what to do with a macro text (check, lint, format or
//! inspect) and in which output format. [`Processor`] carries the configured limits,
//! analyzer and format registry and turns text into the requested output string.
//!
//! Spec strings:
//!     check, lint, format, format-trim, ast-treeviz, ast-json, ast-yaml

use super::analysis::{Analyzer, DiagnosticRecord};
use super::ast::Macro;
use super::config::EngineConfig;
use super::formats::{FormatError, FormatRegistry};
use super::parsing::{parse_macro, InputError};
use super::validation::{Limits, ReferenceTables, Validator};
use std::fmt;
use std::fs;
use std::path::Path;

/// What to extract from the macro
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Check,
    Lint,
    Format,
    Ast,
}

/// How to render it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Messages,
    Macro,
    MacroTrim,
    Treeviz,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Name of the registry format used for this output, if any
    pub fn registry_name(&self) -> Option<&'static str> {
        match self {
            OutputFormat::Messages => None,
            OutputFormat::Macro => Some("macro"),
            OutputFormat::MacroTrim => Some("macro-trim"),
            OutputFormat::Treeviz => Some("treeviz"),
            OutputFormat::Json => Some("json"),
            OutputFormat::Yaml => Some("yaml"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    pub fn new(stage: ProcessingStage, format: OutputFormat) -> Self {
        Self { stage, format }
    }

    /// Parse a spec string like "lint" or "ast-json"
    pub fn from_string(spec: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = match spec {
            "check" => (ProcessingStage::Check, OutputFormat::Messages),
            "lint" => (ProcessingStage::Lint, OutputFormat::Messages),
            "format" => (ProcessingStage::Format, OutputFormat::Macro),
            "format-trim" => (ProcessingStage::Format, OutputFormat::MacroTrim),
            "ast-treeviz" => (ProcessingStage::Ast, OutputFormat::Treeviz),
            "ast-json" => (ProcessingStage::Ast, OutputFormat::Json),
            "ast-yaml" => (ProcessingStage::Ast, OutputFormat::Yaml),
            _ => return Err(ProcessingError::InvalidFormat(spec.to_string())),
        };
        Ok(Self { stage, format })
    }

    pub fn available_specs() -> Vec<ProcessingSpec> {
        [
            "check",
            "lint",
            "format",
            "format-trim",
            "ast-treeviz",
            "ast-json",
            "ast-yaml",
        ]
        .iter()
        .filter_map(|name| Self::from_string(name).ok())
        .collect()
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match (self.stage, self.format) {
            (ProcessingStage::Check, _) => "check",
            (ProcessingStage::Lint, _) => "lint",
            (ProcessingStage::Format, OutputFormat::MacroTrim) => "format-trim",
            (ProcessingStage::Format, _) => "format",
            (ProcessingStage::Ast, OutputFormat::Json) => "ast-json",
            (ProcessingStage::Ast, OutputFormat::Yaml) => "ast-yaml",
            (ProcessingStage::Ast, _) => "ast-treeviz",
        };
        write!(f, "{}", name)
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    InvalidFormat(String),
    Input(InputError),
    Io(String),
    Format(FormatError),
    Config(String),
    UnknownKey(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::Input(err) => write!(f, "{}", err),
            ProcessingError::Io(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::Format(err) => write!(f, "{}", err),
            ProcessingError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ProcessingError::UnknownKey(key) => write!(f, "Unknown conditional key: {}", key),
        }
    }
}

impl From<InputError> for ProcessingError {
    fn from(err: InputError) -> Self {
        ProcessingError::Input(err)
    }
}

impl From<FormatError> for ProcessingError {
    fn from(err: FormatError) -> Self {
        ProcessingError::Format(err)
    }
}

impl From<config::ConfigError> for ProcessingError {
    fn from(err: config::ConfigError) -> Self {
        ProcessingError::Config(err.to_string())
    }
}

pub struct Processor {
    limits: Limits,
    analyzer: Analyzer,
    registry: FormatRegistry,
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor {
    pub fn new() -> Self {
        Self {
            limits: Limits::default(),
            analyzer: Analyzer::new(),
            registry: FormatRegistry::with_defaults(),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            limits: config.limits,
            analyzer: config.analyzer(),
            registry: FormatRegistry::with_defaults(),
        }
    }

    fn validator(&self) -> Validator<'static> {
        Validator::new(ReferenceTables::standard()).with_limits(self.limits)
    }

    pub fn parse(&self, text: &str) -> Result<Macro, ProcessingError> {
        Ok(parse_macro("", text)?)
    }

    /// Validation messages for the text
    pub fn check(&self, text: &str) -> Result<Vec<String>, ProcessingError> {
        let m = self.parse(text)?;
        Ok(self.validator().validate(&m))
    }

    /// Validation messages lifted into records, followed by detector diagnostics
    pub fn lint(&self, text: &str) -> Result<Vec<DiagnosticRecord>, ProcessingError> {
        let errors = self.check(text)?;
        Ok(self.analyzer.analyze(&errors, text))
    }

    pub fn process(&self, text: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
        log::debug!("processing {} byte(s) as {}", text.len(), spec);
        match spec.stage {
            ProcessingStage::Check => Ok(self.check(text)?.join("\n")),
            ProcessingStage::Lint => Ok(self
                .lint(text)?
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")),
            ProcessingStage::Format | ProcessingStage::Ast => {
                let name = spec
                    .format
                    .registry_name()
                    .ok_or_else(|| ProcessingError::InvalidFormat(spec.to_string()))?;
                let m = self.parse(text)?;
                Ok(self.registry.serialize(&m, name)?)
            }
        }
    }
}

/// Process text with default settings
pub fn process_text(text: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    Processor::new().process(text, spec)
}

/// Read a file and process its contents with default settings
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let content =
        fs::read_to_string(file_path).map_err(|e| ProcessingError::Io(e.to_string()))?;
    process_text(&content, spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_strings() {
        for spec in ProcessingSpec::available_specs() {
            assert_eq!(ProcessingSpec::from_string(&spec.to_string()).unwrap(), spec);
        }
        assert_eq!(ProcessingSpec::available_specs().len(), 7);
        assert_eq!(
            ProcessingSpec::from_string("ast-xml"),
            Err(ProcessingError::InvalidFormat("ast-xml".to_string()))
        );
    }

    #[test]
    fn test_check_reports_messages() {
        let spec = ProcessingSpec::from_string("check").unwrap();
        let output = process_text("/notacommand [badkey] Foo", &spec).unwrap();
        assert_eq!(output, "Invalid command: /notacommand\nInvalid condition: badkey");
    }

    #[test]
    fn test_format_trim() {
        let spec = ProcessingSpec::from_string("format-trim").unwrap();
        let output = process_text("/cast   [mod:shift]   Polymorph", &spec).unwrap();
        assert_eq!(output, "/cast[mod:shift]Polymorph");
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let spec = ProcessingSpec::from_string("format").unwrap();
        assert_eq!(
            process_text("", &spec),
            Err(ProcessingError::Input(InputError::Empty))
        );
    }

    #[test]
    fn test_configured_limits_apply() {
        let config = crate::slashmacro::config::Loader::new()
            .set_override("limits.max_characters", 10_i64)
            .unwrap()
            .build()
            .unwrap();
        let errors = Processor::from_config(&config).check("/cast Fireball").unwrap();
        assert_eq!(errors, vec!["Macro exceeds 10 character limit (14 characters)"]);
    }

    #[test]
    fn test_missing_file() {
        let spec = ProcessingSpec::from_string("format").unwrap();
        assert!(matches!(
            process_file("/nonexistent/macro.txt", &spec),
            Err(ProcessingError::Io(_))
        ));
    }
}
