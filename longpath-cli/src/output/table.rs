//! Table output formatting using the `tabled` crate

use tabled::{builder::Builder, settings::Style};

/// Table output formatter
pub struct TableOutput;

impl TableOutput {
    /// Format rows under the given headers as a rounded table.
    pub fn format_rows(headers: &[&str], rows: &[Vec<String>]) -> String {
        if rows.is_empty() {
            return "(no results)".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(headers.iter().copied());
        for row in rows {
            builder.push_record(row.iter().cloned());
        }

        let mut table = builder.build();
        table.with(Style::rounded());
        table.to_string()
    }

    /// Format `(key, value)` pairs as a two-column table.
    pub fn format_key_value(pairs: &[(&str, String)]) -> String {
        let rows: Vec<Vec<String>> = pairs
            .iter()
            .map(|(key, value)| vec![key.to_string(), value.clone()])
            .collect();
        Self::format_rows(&["Field", "Value"], &rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rows() {
        let rows = vec![
            vec!["1".to_string(), "start".to_string()],
            vec!["2".to_string(), "end".to_string()],
        ];
        let table = TableOutput::format_rows(&["Step", "Vertex"], &rows);
        assert!(table.contains("Step"));
        assert!(table.contains("start"));
        assert!(table.contains("end"));
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(TableOutput::format_rows(&["Step"], &[]), "(no results)");
    }

    #[test]
    fn test_format_key_value() {
        let table = TableOutput::format_key_value(&[("vertices", "4".to_string())]);
        assert!(table.contains("vertices"));
        assert!(table.contains('4'));
    }
}
