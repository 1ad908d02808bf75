// Plot builder: validate the dataset, pick a canvas for the kind, hand off to a renderer

use crate::cartesian;
use crate::config::CanvasConfig;
use crate::data::Dataset;
use crate::error::{PlotError, Result};
use crate::graph::{Canvas, CanvasSpec, Projection};
use crate::params::{Labels, RenderParams};
use crate::pie;
use crate::worldmap;
use crate::RenderedImage;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Supported plot kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    Line,
    Bar,
    Pie,
    WorldMap,
}

impl PlotKind {
    pub const ALL: [PlotKind; 4] = [PlotKind::Line, PlotKind::Bar, PlotKind::Pie, PlotKind::WorldMap];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlotKind::Line => "line",
            PlotKind::Bar => "bar",
            PlotKind::Pie => "pie",
            PlotKind::WorldMap => "worldmap",
        }
    }
}

impl FromStr for PlotKind {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        PlotKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| PlotError::UnsupportedPlotKind(s.to_string()))
    }
}

impl fmt::Display for PlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reject empty datasets and datasets with any missing cell
pub fn validate(dataset: &Dataset) -> Result<()> {
    if dataset.is_empty() {
        return Err(PlotError::EmptyDataset);
    }
    let has_nulls = dataset
        .columns()
        .iter()
        .any(|c| c.cells.iter().any(|cell| cell.is_null()));
    if has_nulls {
        return Err(PlotError::NullValuesPresent);
    }
    Ok(())
}

/// Canvas for a plot kind; size and resolution come from configuration only
pub fn dispatch(kind: PlotKind, config: &CanvasConfig) -> CanvasSpec {
    let (width, height) = config.pixel_size();
    let projection = match kind {
        PlotKind::WorldMap => Projection::PlateCarree,
        PlotKind::Line | PlotKind::Bar | PlotKind::Pie => Projection::Cartesian,
    };
    debug!(%kind, width, height, ?projection, "dispatching plot");
    CanvasSpec {
        width,
        height,
        px_per_point: config.px_per_point(),
        projection,
    }
}

/// Renders datasets to PNG with a fixed canvas configuration.
///
/// Each call allocates its own canvas, so a single `Plotter` can be shared
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct Plotter {
    config: CanvasConfig,
}

impl Plotter {
    pub fn new(config: CanvasConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn render(
        &self,
        dataset: &Dataset,
        kind: PlotKind,
        params: RenderParams,
    ) -> Result<RenderedImage> {
        validate(dataset)?;
        self.render_validated(dataset, kind, params)
    }

    /// `render` for a dataset that already passed `validate`
    pub(crate) fn render_validated(
        &self,
        dataset: &Dataset,
        kind: PlotKind,
        mut params: RenderParams,
    ) -> Result<RenderedImage> {
        self.config.validate()?;
        let spec = dispatch(kind, &self.config);
        let labels = Labels::take_from(&mut params)?;

        let mut canvas = Canvas::new(spec)?;
        match kind {
            PlotKind::Line | PlotKind::Bar => {
                let chart = cartesian::resolve_cartesian(dataset, kind, &mut params)?;
                cartesian::draw_cartesian(&mut canvas, &chart, &labels)?;
            }
            PlotKind::Pie => {
                let pie = pie::resolve_pie(dataset, &mut params)?;
                pie::draw_pie(&mut canvas, &pie, &labels)?;
            }
            PlotKind::WorldMap => {
                let scatter = worldmap::resolve_worldmap(dataset, &mut params)?;
                worldmap::draw_worldmap(&mut canvas, &scatter, &labels)?;
            }
        }

        let image = canvas.encode_png()?;
        info!(
            %kind,
            rows = dataset.num_rows(),
            columns = dataset.num_columns(),
            bytes = image.len(),
            "plot rendered"
        );
        Ok(image)
    }
}

/// Render with the default canvas configuration
pub fn render(dataset: &Dataset, kind: PlotKind, params: RenderParams) -> Result<RenderedImage> {
    Plotter::default().render(dataset, kind, params)
}
