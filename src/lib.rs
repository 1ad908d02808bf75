// Library exports for csvplot

pub mod cartesian;
pub mod config;
pub mod csv_reader;
pub mod data;
pub mod error;
pub mod geo;
pub mod graph;
pub mod logging;
pub mod params;
pub mod pie;
pub mod rotation;
pub mod runtime;
pub mod tool;
pub mod worldmap;

pub use config::CanvasConfig;
pub use csv_reader::CsvError;
pub use data::{Cell, Column, Dataset};
pub use error::PlotError;
pub use params::RenderParams;
pub use runtime::{render, PlotKind, Plotter};
pub use tool::{generate_plot, ToolError, ToolOutput};

use base64::Engine;

pub const PNG_MIME_TYPE: &str = "image/png";

/// Encoded PNG produced by a single render call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    bytes: Vec<u8>,
}

impl RenderedImage {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn mime_type(&self) -> &'static str {
        PNG_MIME_TYPE
    }

    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type(), self.to_base64())
    }
}

impl AsRef<[u8]> for RenderedImage {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
