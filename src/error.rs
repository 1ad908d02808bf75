//! Error types for plot construction

use thiserror::Error;

/// Errors raised while validating a dataset or building a plot.
///
/// Messages are part of the public contract: the tool layer and the CLI
/// surface them verbatim.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("CSV data is empty")]
    EmptyDataset,

    #[error("CSV data contains NaN/null values")]
    NullValuesPresent,

    #[error("Unsupported plot type: {0}. Supported types: line, bar, pie, worldmap")]
    UnsupportedPlotKind(String),

    #[error(
        "Pie chart requires either one column (value counts) or two columns (labels and values), got {0}"
    )]
    TooManyColumns(usize),

    #[error(
        "Pie chart with two columns does not accept 'labels' parameter; labels come from the first column"
    )]
    LabelsNotAllowed,

    #[error(
        "World map requires latitude and longitude columns (latitude: lat, latitude, y; longitude: lon, lng, long, longitude, x)"
    )]
    MissingCoordinateColumns,

    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    #[error("Column '{0}' must contain only numeric values")]
    NonNumericColumn(String),

    #[error("Column '{0}' contains infinite values")]
    NonFiniteValue(String),

    #[error("Pie chart wedge sizes must be non-negative and sum to a positive total")]
    InvalidWedgeSizes,

    #[error("Invalid value for parameter '{key}': {reason}")]
    InvalidParameter { key: String, reason: String },

    #[error("All columns must have the same length (column '{column}' has {found}, expected {expected})")]
    RaggedColumns {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("Invalid canvas configuration: {0}")]
    InvalidCanvas(String),

    #[error("Rendering error: {0}")]
    Render(String),
}

impl PlotError {
    pub(crate) fn invalid_param(key: &str, reason: impl Into<String>) -> Self {
        PlotError::InvalidParameter {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn render<E: std::fmt::Display>(context: &str, err: E) -> Self {
        PlotError::Render(format!("{context}: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;
