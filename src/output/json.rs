//! JSON and YAML output formatters

use super::{Formatter, OutputRow};

/// Formatter for JSON output
pub struct JsonFormatter {
    /// Print the first row as an object instead of an array
    pub single: bool,
}

/// Formatter for YAML output
pub struct YamlFormatter {
    pub single: bool,
}

impl Formatter for JsonFormatter {
    fn render(&self, rows: &[OutputRow]) -> String {
        let result = match (self.single, rows.first()) {
            (true, Some(row)) => serde_json::to_string_pretty(row),
            _ => serde_json::to_string_pretty(rows),
        };

        result.unwrap_or_else(|e| format!("Error serializing to JSON: {}", e))
    }
}

impl Formatter for YamlFormatter {
    fn render(&self, rows: &[OutputRow]) -> String {
        let result = match (self.single, rows.first()) {
            (true, Some(row)) => serde_yml::to_string(row),
            _ => serde_yml::to_string(rows),
        };

        result.unwrap_or_else(|e| format!("Error serializing to YAML: {}", e))
    }
}
