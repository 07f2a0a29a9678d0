//! Named-column tabular data parsed from CSV or JSON uploads.
//!
//! Every cell is held as a string. Arbitrary column sets are supported; the
//! caller designates which column carries the text to analyze. A file that
//! cannot be parsed surfaces a single error with no partial table.

use crate::error::{MoodMeterError, Result};
use crate::models::InputFormat;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// A table with named columns and string cells.
///
/// Rows are only ever added through [`Table::push_row`], which pads them to
/// header width, so every row is indexable by any column index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given column names
    #[must_use]
    pub const fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Column names, in order
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows; every row has one cell per header
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no data rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by name
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Index of a column by name, as an error if absent
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| MoodMeterError::ColumnNotFound(name.to_string()))
    }

    /// Append a row, padding or rejecting on arity mismatch.
    ///
    /// Rows shorter than the header are padded with empty strings; longer
    /// rows are rejected.
    pub fn push_row(&mut self, mut row: Vec<String>) -> Result<()> {
        if row.len() > self.headers.len() {
            return Err(MoodMeterError::Parse(format!(
                "Row has {} cells but table has {} columns",
                row.len(),
                self.headers.len()
            )));
        }
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
        Ok(())
    }

    /// Load a table from a file, inferring the format from the extension
    /// unless one is given explicitly.
    pub fn from_path(path: &Path, format: Option<InputFormat>) -> Result<Self> {
        let format = match format.or_else(|| InputFormat::from_path(path)) {
            Some(format) => format,
            None => {
                return Err(MoodMeterError::UnsupportedFormat(
                    path.display().to_string(),
                ))
            }
        };

        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let table = match format {
            InputFormat::Csv => Self::from_csv_reader(reader),
            InputFormat::Json => Self::from_json_reader(reader),
        }?;

        debug!(
            path = %path.display(),
            format = format.extension(),
            columns = table.headers.len(),
            rows = table.len(),
            "Loaded table"
        );
        Ok(table)
    }

    /// Parse a CSV document with a header row
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(ToString::to_string)
            .collect();
        if headers.is_empty() {
            return Err(MoodMeterError::Parse("CSV file has no header row".to_string()));
        }

        let mut table = Self::new(headers);
        for record in csv_reader.records() {
            let record = record?;
            table.push_row(record.iter().map(ToString::to_string).collect())?;
        }
        Ok(table)
    }

    /// Parse a JSON array of flat objects.
    ///
    /// Column order follows first appearance across the objects. Missing
    /// keys and nulls become empty strings; non-string scalars keep their
    /// JSON rendering.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        let Value::Array(items) = value else {
            return Err(MoodMeterError::Parse(
                "JSON input must be an array of objects".to_string(),
            ));
        };

        let mut headers: Vec<String> = Vec::new();
        for item in &items {
            let Value::Object(map) = item else {
                return Err(MoodMeterError::Parse(
                    "JSON array elements must be objects".to_string(),
                ));
            };
            for key in map.keys() {
                if !headers.iter().any(|h| h == key) {
                    headers.push(key.clone());
                }
            }
        }

        let mut table = Self::new(headers);
        for item in &items {
            if let Value::Object(map) = item {
                let row = table
                    .headers
                    .iter()
                    .map(|header| map.get(header).map_or_else(String::new, cell_to_string))
                    .collect();
                table.push_row(row)?;
            }
        }
        Ok(table)
    }
}

/// Coerce a JSON value to its cell representation
fn cell_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_parsing() {
        let data = "review,stars\nGreat stuff,5\nAwful,1\n";
        let table = Table::from_csv_reader(data.as_bytes()).expect("parse failed");
        assert_eq!(table.headers(), vec!["review", "stars"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0], vec!["Great stuff", "5"]);
    }

    #[test]
    fn test_csv_short_rows_are_padded() {
        let data = "a,b,c\n1,2\n";
        let table = Table::from_csv_reader(data.as_bytes()).expect("parse failed");
        assert_eq!(table.rows()[0], vec!["1", "2", ""]);
    }

    #[test]
    fn test_rows_are_always_header_width() {
        let data = "a,b,c\n1\n1,2\n1,2,3\n";
        let table = Table::from_csv_reader(data.as_bytes()).expect("parse failed");
        assert!(table
            .rows()
            .iter()
            .all(|row| row.len() == table.headers().len()));
    }

    #[test]
    fn test_json_parsing_preserves_key_order() {
        let data = r#"[{"review": "nice", "stars": 4}, {"stars": 2, "extra": null}]"#;
        let table = Table::from_json_reader(data.as_bytes()).expect("parse failed");
        assert_eq!(table.headers(), vec!["review", "stars", "extra"]);
        assert_eq!(table.rows()[0], vec!["nice", "4", ""]);
        assert_eq!(table.rows()[1], vec!["", "2", ""]);
    }

    #[test]
    fn test_json_must_be_array_of_objects() {
        assert!(Table::from_json_reader(r#"{"a": 1}"#.as_bytes()).is_err());
        assert!(Table::from_json_reader("[1, 2]".as_bytes()).is_err());
    }

    #[test]
    fn test_require_column() {
        let table = Table::new(vec!["review".to_string()]);
        assert_eq!(table.require_column("review").expect("missing"), 0);
        assert!(matches!(
            table.require_column("body"),
            Err(MoodMeterError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_push_row_rejects_extra_cells() {
        let mut table = Table::new(vec!["a".to_string()]);
        assert!(table.push_row(vec!["1".to_string(), "2".to_string()]).is_err());
    }
}
