//! Data serializations of the macro tree (JSON and YAML), through serde

use super::registry::{FormatError, Formatter};
use crate::slashmacro::ast::Macro;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, m: &Macro) -> Result<String, FormatError> {
        serde_json::to_string_pretty(m).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Syntax tree as pretty-printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, m: &Macro) -> Result<String, FormatError> {
        serde_yaml::to_string(m).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Syntax tree as YAML"
    }
}
