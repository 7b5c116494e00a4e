//! CSV output formatter

use super::common::{escape_csv, value_text};
use super::{Formatter, OutputRow};

/// Formatter for CSV output
pub struct CsvFormatter {
    pub no_header: bool,
}

impl Formatter for CsvFormatter {
    fn render(&self, rows: &[OutputRow]) -> String {
        let mut lines = Vec::with_capacity(rows.len() + 1);
        if !self.no_header {
            lines.push("id,name,type,sensitive,value".to_string());
        }

        for row in rows {
            lines.push(format!(
                "{},{},{},{},{}",
                escape_csv(&row.id),
                escape_csv(&row.name),
                escape_csv(&row.output_type),
                row.sensitive,
                escape_csv(&value_text(&row.value))
            ));
        }

        lines.join("\n")
    }
}
