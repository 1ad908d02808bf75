use crate::error::{PlotError, Result};
use serde_json::Value;
use std::fmt;

/// A single scalar cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Null,
}

impl Cell {
    /// Missing values: `Null` and NaN numbers
    pub fn is_null(&self) -> bool {
        match self {
            Cell::Null => true,
            Cell::Number(n) => n.is_nan(),
            Cell::Text(_) => false,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text used when the cell becomes a category or wedge label
    pub fn label(&self) -> String {
        match self {
            Cell::Number(n) => format_number(*n),
            Cell::Text(s) => s.clone(),
            Cell::Null => String::new(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Format a number without a trailing `.0` for integral values
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else if n.is_finite() && n.abs() >= 1e15 {
        format!("{:e}", n)
    } else {
        format!("{}", n)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// True when every cell is a number (an empty column counts as numeric)
    pub fn is_numeric(&self) -> bool {
        self.cells.iter().all(|c| matches!(c, Cell::Number(_)))
    }

    /// All cells as finite numbers. Text or null cells give `NonNumericColumn`,
    /// infinities give `NonFiniteValue`.
    pub fn numbers(&self) -> Result<Vec<f64>> {
        self.cells
            .iter()
            .map(|c| match c.as_f64() {
                Some(n) if n.is_infinite() => Err(PlotError::NonFiniteValue(self.name.clone())),
                Some(n) => Ok(n),
                None => Err(PlotError::NonNumericColumn(self.name.clone())),
            })
            .collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.cells.iter().map(Cell::label).collect()
    }
}

/// Column-oriented table: named columns of equal length, rows aligned by position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let expected = first.cells.len();
            if let Some(bad) = columns.iter().find(|c| c.cells.len() != expected) {
                return Err(PlotError::RaggedColumns {
                    column: bad.name.clone(),
                    expected,
                    found: bad.cells.len(),
                });
            }
        }
        Ok(Self { columns })
    }

    /// Decode CSV text (header row first) into a dataset
    pub fn from_csv_str(text: &str) -> std::result::Result<Self, crate::csv_reader::CsvError> {
        crate::csv_reader::read_csv_str(text)
    }

    /// Create a Dataset from a JSON Array of Objects
    pub fn from_json(value: &Value) -> Result<Self> {
        let array = value.as_array().ok_or_else(|| {
            PlotError::invalid_param("data", "input data must be a JSON array of objects")
        })?;

        let Some(first) = array.first() else {
            return Err(PlotError::EmptyDataset);
        };

        // Headers come from the first object
        let first_obj = first
            .as_object()
            .ok_or_else(|| PlotError::invalid_param("data", "items in array must be objects"))?;
        let headers: Vec<String> = first_obj.keys().cloned().collect();

        let mut columns: Vec<Column> = headers
            .iter()
            .map(|h| Column::new(h.clone(), Vec::with_capacity(array.len())))
            .collect();

        for item in array {
            let obj = item
                .as_object()
                .ok_or_else(|| PlotError::invalid_param("data", "items in array must be objects"))?;

            for column in columns.iter_mut() {
                let cell = match obj.get(&column.name) {
                    Some(Value::String(s)) => Cell::Text(s.clone()),
                    Some(Value::Number(n)) => n.as_f64().map(Cell::Number).unwrap_or(Cell::Null),
                    Some(Value::Bool(b)) => Cell::Text(b.to_string()),
                    Some(Value::Null) | None => Cell::Null,
                    _ => {
                        return Err(PlotError::invalid_param(
                            &column.name,
                            "unsupported value type",
                        ))
                    }
                };
                column.cells.push(cell);
            }
        }

        Self::new(columns)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map(|c| c.cells.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.num_columns() == 0 || self.num_rows() == 0
    }

    /// Case-insensitive lookup by column name
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| PlotError::ColumnNotFound(name.to_string()))
    }
}
