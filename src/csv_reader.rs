// CSV decoding into a column-oriented Dataset

use crate::data::{Cell, Column, Dataset};
use crate::error::PlotError;
use csv::{ReaderBuilder, Trim};
use std::io::Read;
use thiserror::Error;

/// Tokens read as missing values, in addition to the empty field.
/// Any spelling that parses as a NaN float is missing too.
const NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("No columns to parse from file")]
    NoColumns,

    #[error("Failed to read CSV data: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV record on line {line} has {found} fields, expected {expected}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Shape(#[from] PlotError),
}

/// Read CSV data from stdin
pub fn read_csv_from_stdin() -> Result<Dataset, CsvError> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    read_csv_str(&text)
}

/// Decode CSV text into a Dataset.
///
/// The first record is the header. Short records are padded with nulls; long
/// records are rejected. A column becomes numeric only when every non-missing
/// field parses as a number, otherwise its fields are kept as text.
pub fn read_csv_str(text: &str) -> Result<Dataset, CsvError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(CsvError::NoColumns);
    }

    let mut raw: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record?;
        if record.len() > headers.len() {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(CsvError::MalformedRow {
                line,
                expected: headers.len(),
                found: record.len(),
            });
        }
        for (idx, column) in raw.iter_mut().enumerate() {
            let field = record.get(idx).filter(|f| !is_missing(f));
            column.push(field.map(str::to_string));
        }
    }

    let columns = headers
        .into_iter()
        .zip(raw)
        .map(|(name, fields)| Column::new(name, infer_cells(fields)))
        .collect();

    // Columns are built row-aligned above, so this cannot be ragged
    Ok(Dataset::new(columns)?)
}

fn is_missing(field: &str) -> bool {
    field.is_empty() || NA_TOKENS.contains(&field)
}

fn infer_cells(fields: Vec<Option<String>>) -> Vec<Cell> {
    let numeric = fields
        .iter()
        .flatten()
        .all(|f| f.parse::<f64>().is_ok());

    fields
        .into_iter()
        .map(|field| match field {
            None => Cell::Null,
            Some(f) if numeric => match f.parse::<f64>() {
                Ok(n) if !n.is_nan() => Cell::Number(n),
                _ => Cell::Null,
            },
            Some(f) => Cell::Text(f),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_numeric_and_text_columns() {
        let ds = read_csv_str("category,values\nA,30\nB,45\nC,25\n").unwrap();
        assert_eq!(ds.num_columns(), 2);
        assert_eq!(ds.num_rows(), 3);
        assert!(!ds.columns()[0].is_numeric());
        assert_eq!(ds.columns()[1].numbers().unwrap(), vec![30.0, 45.0, 25.0]);
    }

    #[test]
    fn test_mixed_column_keeps_raw_text() {
        let ds = read_csv_str("code\n1.50\nabc\n").unwrap();
        assert_eq!(ds.columns()[0].cells[0], Cell::Text("1.50".into()));
    }

    #[test]
    fn test_missing_fields_become_null() {
        let ds = read_csv_str("x,y\n1,2\n2,\n,6\n3,NaN\n").unwrap();
        let x = &ds.columns()[0];
        let y = &ds.columns()[1];
        assert!(y.cells[1].is_null());
        assert!(x.cells[2].is_null());
        assert!(y.cells[3].is_null());
        assert!(!x.is_numeric());
    }

    #[test]
    fn test_missing_value_spellings() {
        for token in ["-nan", "NAN", "-NaN", "nAn", "#N/A", "#NA", "n/a", "1.#QNAN", "<NA>"] {
            let ds = read_csv_str(&format!("x,y\n1,2\n2,{token}\n3,6\n")).unwrap();
            assert!(ds.columns()[1].cells[1].is_null(), "{token}");
            assert_eq!(ds.columns()[1].cells[2], Cell::Number(6.0), "{token}");
        }
    }

    #[test]
    fn test_infinities_stay_numeric() {
        let ds = read_csv_str("x,y\n1,inf\n2,-infinity\n3,1e400\n").unwrap();
        let y = &ds.columns()[1];
        assert!(y.is_numeric());
        assert!(y.cells.iter().all(|c| c.as_f64().is_some_and(f64::is_infinite)));
    }

    #[test]
    fn test_short_record_is_padded() {
        let ds = read_csv_str("not,valid,csv\ndata").unwrap();
        assert_eq!(ds.num_rows(), 1);
        assert!(ds.columns()[1].cells[0].is_null());
        assert!(ds.columns()[2].cells[0].is_null());
    }

    #[test]
    fn test_long_record_is_rejected() {
        let err = read_csv_str("a,b\n1,2,3\n").unwrap_err();
        assert!(matches!(
            err,
            CsvError::MalformedRow {
                expected: 2,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_input_has_no_columns() {
        let err = read_csv_str("").unwrap_err();
        assert_eq!(err.to_string(), "No columns to parse from file");
    }

    #[test]
    fn test_header_only_has_zero_rows() {
        let ds = read_csv_str("x,y\n").unwrap();
        assert_eq!(ds.num_columns(), 2);
        assert_eq!(ds.num_rows(), 0);
        assert!(ds.is_empty());
    }
}
