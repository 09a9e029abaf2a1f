//! Two-column CSV loading for the regression trainer.
//!
//! Supported format:
//! - UTF-8, comma-separated
//! - Mandatory header row; the feature and label columns are located by name
//! - Double-quoted fields with embedded commas are handled correctly
//! - Blank lines are skipped
//!
//! The whole file is read into memory; datasets here are tiny.

use std::fmt;
use std::fs;

/// Equal-length feature and label sequences, immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub features: Vec<f64>,
    pub labels: Vec<f64>,
}

impl Dataset {
    pub fn new(features: Vec<f64>, labels: Vec<f64>) -> Dataset {
        assert_eq!(
            features.len(),
            labels.len(),
            "features and labels must have equal length"
        );
        Dataset { features, labels }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetError(pub String);

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for DatasetError {}

/// Reads a CSV file and extracts the two named numeric columns.
pub fn load_columns(
    path: &str,
    feature_col: &str,
    label_col: &str,
) -> Result<Dataset, DatasetError> {
    let text = fs::read_to_string(path)
        .map_err(|e| DatasetError(format!("cannot read '{}': {}", path, e)))?;
    parse_columns(&text, feature_col, label_col)
}

/// Parses CSV text into a `Dataset` from the two named columns.
pub fn parse_columns(
    text: &str,
    feature_col: &str,
    label_col: &str,
) -> Result<Dataset, DatasetError> {
    let mut lines = text.lines();

    let header = lines
        .next()
        .ok_or_else(|| DatasetError("CSV is empty".into()))?;
    let columns = parse_csv_row(header);

    let feature_idx = find_column(&columns, feature_col)?;
    let label_idx = find_column(&columns, label_col)?;

    let mut features = Vec::new();
    let mut labels = Vec::new();

    for (row_idx, line) in lines.enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let cells = parse_csv_row(line);
        let needed = feature_idx.max(label_idx);
        if cells.len() <= needed {
            return Err(DatasetError(format!(
                "Row {}: expected at least {} columns, got {}",
                row_idx + 1,
                needed + 1,
                cells.len()
            )));
        }

        features.push(parse_float(&cells[feature_idx], row_idx + 1)?);
        labels.push(parse_float(&cells[label_idx], row_idx + 1)?);
    }

    if features.is_empty() {
        return Err(DatasetError("CSV contains no data rows after parsing".into()));
    }

    Ok(Dataset::new(features, labels))
}

fn find_column(columns: &[String], name: &str) -> Result<usize, DatasetError> {
    columns
        .iter()
        .position(|c| c.trim() == name)
        .ok_or_else(|| {
            DatasetError(format!(
                "column '{}' not found in header [{}]",
                name,
                columns.join(", ")
            ))
        })
}

/// Parses a single CSV row, handling double-quoted fields.
fn parse_csv_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '"' => {
                if in_quotes && i + 1 < chars.len() && chars[i + 1] == '"' {
                    // Escaped quote inside quoted field.
                    current.push('"');
                    i += 2;
                    continue;
                }
                in_quotes = !in_quotes;
            }
            ',' if !in_quotes => {
                fields.push(current.clone());
                current.clear();
            }
            c => current.push(c),
        }
        i += 1;
    }
    fields.push(current);
    fields
}

fn parse_float(cell: &str, row_num: usize) -> Result<f64, DatasetError> {
    cell.trim()
        .parse::<f64>()
        .map_err(|_| DatasetError(format!("Row {}: '{}' is not a valid number", row_num, cell)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "dT[C],Qdot[W]\n1.0,95.2\n2.5,240.0\n\n10,930.5\n";

    #[test]
    fn columns_are_found_by_header_name() {
        let ds = parse_columns(SAMPLE, "dT[C]", "Qdot[W]").unwrap();
        assert_eq!(ds.features, vec![1.0, 2.5, 10.0]);
        assert_eq!(ds.labels, vec![95.2, 240.0, 930.5]);
    }

    #[test]
    fn column_order_in_file_does_not_matter() {
        let ds = parse_columns(SAMPLE, "Qdot[W]", "dT[C]").unwrap();
        assert_eq!(ds.features, vec![95.2, 240.0, 930.5]);
        assert_eq!(ds.labels, vec![1.0, 2.5, 10.0]);
    }

    #[test]
    fn quoted_fields_with_commas_parse() {
        let text = "\"name\",x,y\n\"window, north\",2.0,190.0\n";
        let ds = parse_columns(text, "x", "y").unwrap();
        assert_eq!(ds.features, vec![2.0]);
        assert_eq!(ds.labels, vec![190.0]);
    }

    #[test]
    fn missing_column_is_an_error() {
        let err = parse_columns(SAMPLE, "dT[C]", "watts").unwrap_err();
        assert!(err.0.contains("column 'watts' not found"));
    }

    #[test]
    fn non_numeric_cell_reports_its_row() {
        let text = "x,y\n1.0,2.0\nbad,3.0\n";
        let err = parse_columns(text, "x", "y").unwrap_err();
        assert_eq!(err.0, "Row 2: 'bad' is not a valid number");
    }

    #[test]
    fn short_row_is_an_error() {
        let text = "x,y\n1.0\n";
        let err = parse_columns(text, "x", "y").unwrap_err();
        assert!(err.0.contains("Row 1"));
    }

    #[test]
    fn header_only_file_is_an_error() {
        let err = parse_columns("x,y\n", "x", "y").unwrap_err();
        assert!(err.0.contains("no data rows"));
    }
}
