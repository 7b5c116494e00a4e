//! Table output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::value_text;
use super::{Formatter, OutputRow};

/// Formatter for ASCII table output
pub struct TableFormatter {
    pub no_header: bool,
}

impl Formatter for TableFormatter {
    fn render(&self, rows: &[OutputRow]) -> String {
        let mut table = Table::new();
        table.load_preset(NOTHING);
        if !self.no_header {
            table.set_header(vec!["ID", "Name", "Type", "Sensitive", "Value"]);
        }

        for row in rows {
            let sensitive = if row.sensitive { "Yes" } else { "No" };
            table.add_row(vec![
                row.id.clone(),
                row.name.clone(),
                row.output_type.clone(),
                sensitive.to_string(),
                value_text(&row.value),
            ]);
        }

        let mut text = table.to_string();
        if !self.no_header {
            text.push_str(&format!("\n\nTotal: {} outputs", rows.len()));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, value: serde_json::Value) -> OutputRow {
        OutputRow {
            id: format!("wsout-{}", name),
            name: name.to_string(),
            output_type: "string".to_string(),
            sensitive: false,
            value,
            detailed_type: None,
        }
    }

    #[test]
    fn test_table_formatter_empty() {
        let text = TableFormatter { no_header: false }.render(&[]);
        assert!(text.contains("Total: 0 outputs"));
    }

    #[test]
    fn test_table_formatter_with_data() {
        let rows = vec![
            row("region", serde_json::json!("eu-west-1")),
            row("zones", serde_json::json!(["a", "b"])),
        ];

        let text = TableFormatter { no_header: false }.render(&rows);
        assert!(text.contains("Name"));
        assert!(text.contains("eu-west-1"));
        assert!(text.contains(r#"["a","b"]"#));
        assert!(text.contains("Total: 2 outputs"));
    }

    #[test]
    fn test_table_formatter_no_header() {
        let rows = vec![row("region", serde_json::json!("eu-west-1"))];
        let text = TableFormatter { no_header: true }.render(&rows);
        assert!(!text.contains("Sensitive"));
        assert!(!text.contains("Total"));
        assert!(text.contains("wsout-region"));
    }
}
