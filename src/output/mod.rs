//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON, YAML

mod common;
mod csv;
mod json;
mod table;

use log::debug;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::defaults;
use crate::hcp::{StateVersionOutput, TfeResource};

pub use self::common::{escape_csv, value_text};
pub use self::csv::CsvFormatter;
pub use self::json::{JsonFormatter, YamlFormatter};
pub use self::table::TableFormatter;

/// Trait for output formatters
pub trait Formatter {
    /// Render the rows into the text that gets printed
    fn render(&self, rows: &[OutputRow]) -> String;
}

/// How outputs should be printed
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// Print sensitive values instead of the mask
    pub show_sensitive: bool,
    /// Omit table and CSV headers
    pub no_header: bool,
    /// Structured formats print a single object instead of a list
    pub single: bool,
}

/// Flattened state version output, with masking already applied
#[derive(Debug, Clone, Serialize)]
pub struct OutputRow {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub output_type: String,
    pub sensitive: bool,
    pub value: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_type: Option<serde_json::Value>,
}

impl OutputRow {
    /// Build a row, replacing sensitive values unless `show_sensitive` is set
    pub fn new(output: &StateVersionOutput, show_sensitive: bool) -> Self {
        let value = if output.is_sensitive() && !show_sensitive {
            serde_json::Value::String(defaults::SENSITIVE_MASK.to_string())
        } else {
            output.value().clone()
        };

        Self {
            id: output.id().to_string(),
            name: output.name().to_string(),
            output_type: output.output_type().to_string(),
            sensitive: output.is_sensitive(),
            value,
            detailed_type: output.detailed_type().cloned(),
        }
    }
}

/// Pick the formatter for the given options
pub fn formatter_for(options: &OutputOptions) -> Box<dyn Formatter> {
    match options.format {
        OutputFormat::Table => Box::new(TableFormatter {
            no_header: options.no_header,
        }),
        OutputFormat::Csv => Box::new(CsvFormatter {
            no_header: options.no_header,
        }),
        OutputFormat::Json => Box::new(JsonFormatter {
            single: options.single,
        }),
        OutputFormat::Yaml => Box::new(YamlFormatter {
            single: options.single,
        }),
    }
}

/// Render state version outputs as text
pub fn render_outputs(outputs: &[StateVersionOutput], options: &OutputOptions) -> String {
    let rows: Vec<OutputRow> = outputs
        .iter()
        .map(|o| OutputRow::new(o, options.show_sensitive))
        .collect();
    debug!("Rendering {} output(s) as {}", rows.len(), options.format);
    formatter_for(options).render(&rows)
}

/// Print state version outputs to stdout
pub fn output_state_version_outputs(outputs: &[StateVersionOutput], options: &OutputOptions) {
    let text = render_outputs(outputs, options);
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(sensitive: bool, value: serde_json::Value) -> StateVersionOutput {
        serde_json::from_value(serde_json::json!({
            "id": "wsout-1",
            "type": "state-version-outputs",
            "attributes": {
                "name": "db_password",
                "sensitive": sensitive,
                "type": "string",
                "value": value
            }
        }))
        .unwrap()
    }

    fn options(format: OutputFormat, show_sensitive: bool) -> OutputOptions {
        OutputOptions {
            format,
            show_sensitive,
            no_header: false,
            single: false,
        }
    }

    #[test]
    fn test_row_masks_sensitive_value() {
        let row = OutputRow::new(&output(true, serde_json::json!("hunter2")), false);
        assert_eq!(row.value, serde_json::json!(defaults::SENSITIVE_MASK));
        assert!(row.sensitive);
    }

    #[test]
    fn test_row_reveals_sensitive_value_on_request() {
        let row = OutputRow::new(&output(true, serde_json::json!("hunter2")), true);
        assert_eq!(row.value, serde_json::json!("hunter2"));
    }

    #[test]
    fn test_row_keeps_non_sensitive_value() {
        let row = OutputRow::new(&output(false, serde_json::json!([1, 2])), false);
        assert_eq!(row.value, serde_json::json!([1, 2]));
        assert!(row.detailed_type.is_none());
    }

    #[test]
    fn test_render_outputs_never_leaks_masked_value() {
        let outputs = [output(true, serde_json::json!("hunter2"))];
        for format in [
            OutputFormat::Table,
            OutputFormat::Csv,
            OutputFormat::Json,
            OutputFormat::Yaml,
        ] {
            let text = render_outputs(&outputs, &options(format, false));
            assert!(!text.contains("hunter2"), "{} leaked the value", format);
            assert!(text.contains(defaults::SENSITIVE_MASK));
        }
    }

    #[test]
    fn test_formatter_for_each_format() {
        let rows = [OutputRow::new(&output(false, serde_json::json!("x")), false)];
        let json = formatter_for(&options(OutputFormat::Json, false)).render(&rows);
        assert!(json.trim_start().starts_with('['));

        let csv = formatter_for(&options(OutputFormat::Csv, false)).render(&rows);
        assert!(csv.starts_with("id,name,type,sensitive,value"));
    }
}
