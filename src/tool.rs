//! Text-in, image-out entry point: CSV data plus a JSON parameter blob become
//! a base64-encoded PNG.

use crate::config::CanvasConfig;
use crate::csv_reader::{read_csv_str, CsvError};
use crate::data::Dataset;
use crate::error::PlotError;
use crate::params::RenderParams;
use crate::runtime::{validate, PlotKind, Plotter};
use crate::RenderedImage;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

pub const SUCCESS_MESSAGE: &str = "Plot generated successfully";

#[derive(Debug, Error)]
pub enum ToolError {
    #[error(transparent)]
    Read(#[from] CsvError),

    #[error("Invalid JSON in parameters: {0}")]
    InvalidParams(#[from] serde_json::Error),

    #[error("Parameters must be a JSON object")]
    ParamsNotObject,

    #[error(transparent)]
    Plot(#[from] PlotError),
}

/// Successful tool response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolOutput {
    pub message: String,
    pub mime_type: String,
    /// Base64-encoded image bytes
    pub data: String,
}

impl ToolOutput {
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Decode the parameter blob. Absent, blank, `None` and `null` all mean no parameters.
pub fn parse_params(json_params: Option<&str>) -> Result<RenderParams, ToolError> {
    let text = match json_params.map(str::trim) {
        None | Some("") | Some("None") | Some("null") => return Ok(RenderParams::new()),
        Some(text) => text,
    };
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(RenderParams::from_map(map)),
        _ => Err(ToolError::ParamsNotObject),
    }
}

/// Validate `dataset`, parse the kind and render it with the decoded parameters.
///
/// Data errors are reported before an unknown plot type.
pub fn render_plot(
    dataset: &Dataset,
    plot_type: &str,
    json_params: Option<&str>,
    config: &CanvasConfig,
) -> Result<RenderedImage, ToolError> {
    let params = parse_params(json_params)?;

    validate(dataset)?;
    let kind: PlotKind = plot_type.parse()?;

    let image = Plotter::new(config.clone()).render_validated(dataset, kind, params)?;
    info!(%kind, bytes = image.len(), "tool call completed");
    Ok(image)
}

/// Render `csv_data` as a `plot_type` chart and return it base64-encoded
pub fn generate_plot(
    csv_data: &str,
    plot_type: &str,
    json_params: Option<&str>,
    config: &CanvasConfig,
) -> Result<ToolOutput, ToolError> {
    let dataset = read_csv_str(csv_data)?;
    let image = render_plot(&dataset, plot_type, json_params, config)?;

    Ok(ToolOutput {
        message: SUCCESS_MESSAGE.to_string(),
        mime_type: image.mime_type().to_string(),
        data: image.to_base64(),
    })
}
