//! Line and bar charts on a Cartesian grid.
//!
//! Long form names its `x` and `y` columns and is aggregated by mean per x
//! value (and per `hue` group). Wide form plots every numeric column.

use crate::data::{format_number, Cell, Column, Dataset};
use crate::error::{PlotError, Result};
use crate::graph::{
    estimate_text_width_px, format_tick, min_max, nice_ticks, padded_range, palette_color,
    parse_color, Canvas, TickedAxis, FONT_FAMILY,
};
use crate::params::{Labels, RenderParams};
use crate::rotation::{label_rotation, Axis, Rotation};
use crate::runtime::PlotKind;
use plotters::prelude::*;
use std::collections::HashMap;
use std::ops::Range;
use tracing::debug;

pub const X: &str = "x";
pub const Y: &str = "y";
pub const HUE: &str = "hue";
pub const COLOR: &str = "color";
pub const ALPHA: &str = "alpha";
pub const LINEWIDTH: &str = "linewidth";

/// Share of a category slot covered by its bars
const BAR_WIDTH: f64 = 0.8;
const DEFAULT_LINEWIDTH: f64 = 2.0;
const TICK_TARGET: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub enum XAxis {
    /// Continuous axis; points carry their own x value
    Numeric,
    /// One slot per category; points carry the category index
    Categorical(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend entry
    pub name: Option<String>,
    pub points: Vec<(f64, f64)>,
    /// Cycled per point. Wide-form bars get one color per bar.
    pub colors: Vec<RGBColor>,
}

impl Series {
    pub fn color_at(&self, idx: usize) -> RGBColor {
        if self.colors.is_empty() {
            palette_color(idx)
        } else {
            self.colors[idx % self.colors.len()]
        }
    }
}

/// Resolved line or bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct CartesianSpec {
    pub kind: PlotKind,
    pub x_axis: XAxis,
    pub series: Vec<Series>,
    /// Default axis descriptions, replaced by `xlabel`/`ylabel` when given
    pub x_desc: String,
    pub y_desc: String,
    pub alpha: f64,
    pub line_width: u32,
}

impl CartesianSpec {
    fn points(&self) -> impl Iterator<Item = &(f64, f64)> {
        self.series.iter().flat_map(|s| s.points.iter())
    }

    pub fn x_range(&self) -> Range<f64> {
        match &self.x_axis {
            XAxis::Categorical(categories) => -0.5..(categories.len() as f64 - 0.5),
            XAxis::Numeric => {
                let (lo, hi) = min_max(self.points().map(|p| p.0)).unwrap_or((0.0, 1.0));
                padded_range(lo, hi)
            }
        }
    }

    pub fn y_range(&self) -> Range<f64> {
        let ys = self.points().map(|p| p.1);
        match self.kind {
            PlotKind::Bar => {
                // bars grow from zero, so zero is always on the axis
                let (lo, hi) = min_max(ys.chain([0.0])).unwrap_or((0.0, 1.0));
                let padded = padded_range(lo, hi);
                let start = if lo >= 0.0 { 0.0 } else { padded.start };
                let end = if hi <= 0.0 && lo < 0.0 { 0.0 } else { padded.end };
                start..end
            }
            _ => {
                let (lo, hi) = min_max(ys).unwrap_or((0.0, 1.0));
                padded_range(lo, hi)
            }
        }
    }

    /// Positions of the x tick marks
    pub fn x_ticks(&self) -> Vec<f64> {
        match &self.x_axis {
            XAxis::Categorical(categories) => (0..categories.len()).map(|i| i as f64).collect(),
            XAxis::Numeric => nice_ticks(&self.x_range(), TICK_TARGET),
        }
    }

    pub fn x_tick_label(&self, x: f64) -> String {
        match &self.x_axis {
            XAxis::Categorical(categories) if x >= 0.0 => categories
                .get(x.round() as usize)
                .cloned()
                .unwrap_or_default(),
            XAxis::Categorical(_) => String::new(),
            XAxis::Numeric => format_tick(x),
        }
    }

    pub fn x_tick_labels(&self) -> Vec<String> {
        self.x_ticks().into_iter().map(|x| self.x_tick_label(x)).collect()
    }
}

/// Resolve the series of a line or bar chart, taking the keys it understands
pub fn resolve_cartesian(
    dataset: &Dataset,
    kind: PlotKind,
    params: &mut RenderParams,
) -> Result<CartesianSpec> {
    let x = params.take_string(X)?;
    let y = params.take_string(Y)?;
    let hue = params.take_string(HUE)?;
    let color = params
        .take_string(COLOR)?
        .map(|c| parse_color(COLOR, &c))
        .transpose()?;

    let alpha = params.take_f64(ALPHA)?.unwrap_or(1.0);
    if !(0.0..=1.0).contains(&alpha) {
        return Err(PlotError::invalid_param(ALPHA, "must be between 0 and 1"));
    }
    let line_width = params.take_f64(LINEWIDTH)?.unwrap_or(DEFAULT_LINEWIDTH);
    if !line_width.is_finite() || line_width <= 0.0 {
        return Err(PlotError::invalid_param(LINEWIDTH, "must be a positive number"));
    }

    for key in params.keys() {
        debug!(key, %kind, "renderer ignores styling parameter");
    }

    let chart = match (x, y) {
        (Some(x), Some(y)) => long_form(dataset, kind, &x, &y, hue.as_deref(), color)?,
        (None, None) => {
            if let Some(hue) = hue {
                debug!(%hue, "hue has no effect without x and y");
            }
            wide_form(dataset, kind, color)?
        }
        (Some(_), None) => return Err(PlotError::invalid_param(Y, "required when 'x' is given")),
        (None, Some(_)) => return Err(PlotError::invalid_param(X, "required when 'y' is given")),
    };

    debug!(
        %kind,
        series = chart.series.len(),
        categorical = matches!(chart.x_axis, XAxis::Categorical(_)),
        "cartesian chart resolved"
    );
    Ok(CartesianSpec {
        alpha,
        line_width: line_width.round().max(1.0) as u32,
        ..chart
    })
}

fn long_form(
    dataset: &Dataset,
    kind: PlotKind,
    x_name: &str,
    y_name: &str,
    hue_name: Option<&str>,
    color: Option<RGBColor>,
) -> Result<CartesianSpec> {
    let x_col = dataset.column(x_name)?;
    let y_col = dataset.column(y_name)?;
    let ys = y_col.numbers()?;
    let hue_col = hue_name.map(|h| dataset.column(h)).transpose()?;

    // Line charts keep a continuous axis for numeric x; bars are always categorical
    let (x_axis, x_positions) = if kind == PlotKind::Line && x_col.is_numeric() {
        (XAxis::Numeric, x_col.numbers()?)
    } else {
        let (levels, codes) = factorize(x_col);
        (
            XAxis::Categorical(levels),
            codes.into_iter().map(|c| c as f64).collect(),
        )
    };

    let (groups, group_codes) = match hue_col {
        Some(col) => factorize(col),
        None => (Vec::new(), vec![0; ys.len()]),
    };

    // group -> x position bits -> y values
    let mut cells: Vec<HashMap<u64, Vec<f64>>> = vec![HashMap::new(); groups.len().max(1)];
    for ((x, y), group) in x_positions.iter().zip(&ys).zip(&group_codes) {
        cells[*group].entry(x.to_bits()).or_default().push(*y);
    }

    let series = cells
        .into_iter()
        .enumerate()
        .map(|(idx, cells)| {
            let mut points: Vec<(f64, f64)> = cells
                .into_iter()
                .map(|(bits, values)| (f64::from_bits(bits), mean(&values)))
                .collect();
            points.sort_by(|a, b| a.0.total_cmp(&b.0));

            match groups.get(idx) {
                Some(name) => Series {
                    name: Some(name.clone()),
                    points,
                    colors: vec![palette_color(idx)],
                },
                None => Series {
                    name: None,
                    points,
                    colors: vec![color.unwrap_or_else(|| palette_color(0))],
                },
            }
        })
        .collect();

    Ok(CartesianSpec {
        kind,
        x_axis,
        series,
        x_desc: x_col.name.clone(),
        y_desc: y_col.name.clone(),
        alpha: 1.0,
        line_width: 1,
    })
}

fn wide_form(dataset: &Dataset, kind: PlotKind, color: Option<RGBColor>) -> Result<CartesianSpec> {
    let numeric: Vec<&Column> = dataset.columns().iter().filter(|c| c.is_numeric()).collect();
    if numeric.is_empty() {
        let first = dataset
            .columns()
            .first()
            .map(|c| c.name.clone())
            .unwrap_or_default();
        return Err(PlotError::NonNumericColumn(first));
    }
    for skipped in dataset.columns().iter().filter(|c| !c.is_numeric()) {
        debug!(column = %skipped.name, "wide-form chart skips non-numeric column");
    }

    let (x_axis, series) = match kind {
        PlotKind::Bar => {
            let points = numeric
                .iter()
                .enumerate()
                .map(|(idx, column)| Ok((idx as f64, mean(&column.numbers()?))))
                .collect::<Result<Vec<_>>>()?;
            let colors = match color {
                Some(c) => vec![c],
                None => (0..numeric.len()).map(palette_color).collect(),
            };
            let categories = numeric.iter().map(|c| c.name.clone()).collect();
            (
                XAxis::Categorical(categories),
                vec![Series {
                    name: None,
                    points,
                    colors,
                }],
            )
        }
        _ => {
            let series = numeric
                .iter()
                .enumerate()
                .map(|(idx, column)| {
                    let points = column
                        .numbers()?
                        .into_iter()
                        .enumerate()
                        .map(|(row, v)| (row as f64, v))
                        .collect();
                    Ok(Series {
                        name: Some(column.name.clone()),
                        points,
                        colors: vec![color.unwrap_or_else(|| palette_color(idx))],
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            (XAxis::Numeric, series)
        }
    };

    Ok(CartesianSpec {
        kind,
        x_axis,
        series,
        x_desc: String::new(),
        y_desc: String::new(),
        alpha: 1.0,
        line_width: 1,
    })
}

/// Arithmetic mean; dividing first keeps the sum of large values finite
fn mean(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    values.iter().map(|v| v / n).sum()
}

/// Distinct values of a column and each row's index into them.
///
/// Numeric columns are ordered by value, anything else by first appearance.
fn factorize(column: &Column) -> (Vec<String>, Vec<usize>) {
    let levels: Vec<String> = if column.is_numeric() {
        let mut values: Vec<f64> = column.cells.iter().filter_map(Cell::as_f64).collect();
        values.sort_by(|a, b| a.total_cmp(b));
        values.dedup();
        values.into_iter().map(format_number).collect()
    } else {
        let mut seen: Vec<String> = Vec::new();
        for label in column.labels() {
            if !seen.contains(&label) {
                seen.push(label);
            }
        }
        seen
    };

    let index: HashMap<&str, usize> = levels
        .iter()
        .enumerate()
        .map(|(i, l)| (l.as_str(), i))
        .collect();
    let codes = column
        .cells
        .iter()
        .map(|cell| index.get(cell.label().as_str()).copied().unwrap_or(0))
        .collect();
    (levels, codes)
}

/// Draw a resolved line or bar chart with axes, tick labels and legend
pub fn draw_cartesian(canvas: &mut Canvas, chart: &CartesianSpec, labels: &Labels) -> Result<()> {
    let spec = canvas.spec().clone();
    let root = canvas.drawing_area()?;

    let title_px = spec.font_px(12.0);
    let tick_px = spec.font_px(10.0);
    let desc_px = spec.font_px(10.0);

    let x_desc = labels.xlabel.clone().unwrap_or_else(|| chart.x_desc.clone());
    let y_desc = labels.ylabel.clone().unwrap_or_else(|| chart.y_desc.clone());

    let x_range = chart.x_range();
    let y_range = chart.y_range();
    let x_ticks = chart.x_ticks();
    let y_ticks = nice_ticks(&y_range, TICK_TARGET);

    let x_labels = chart.x_tick_labels();
    let rotation = label_rotation(&x_labels, Axis::X);

    // Plotters cannot measure text, so label areas are sized from estimates
    let desc_extent = |desc: &str| {
        if desc.is_empty() {
            0
        } else {
            desc_px + spec.px(4.0)
        }
    };
    let x_label_extent = match rotation {
        Rotation::Vertical => x_labels
            .iter()
            .map(|l| estimate_text_width_px(l, tick_px))
            .max()
            .unwrap_or(tick_px),
        Rotation::Horizontal => tick_px,
    };
    let y_label_extent = y_ticks
        .iter()
        .map(|t| estimate_text_width_px(&format_tick(*t), tick_px))
        .max()
        .unwrap_or(tick_px);

    let mut builder = ChartBuilder::on(&root);
    builder
        .margin(spec.px(10.0))
        .x_label_area_size(x_label_extent + spec.px(8.0) + desc_extent(&x_desc))
        .y_label_area_size(y_label_extent + spec.px(8.0) + desc_extent(&y_desc));
    if let Some(title) = labels.title.as_deref() {
        builder.caption(title, (FONT_FAMILY, title_px));
    }
    let mut ctx = builder
        .build_cartesian_2d(
            TickedAxis::new(x_range, x_ticks),
            TickedAxis::new(y_range, y_ticks),
        )
        .map_err(|e| PlotError::render("Failed to build chart", e))?;

    let x_formatter = |x: &f64| chart.x_tick_label(*x);
    let y_formatter = |y: &f64| format_tick(*y);
    let mut mesh = ctx.configure_mesh();
    mesh.x_desc(x_desc.as_str())
        .y_desc(y_desc.as_str())
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .label_style((FONT_FAMILY, tick_px))
        .x_label_style(
            (FONT_FAMILY, tick_px)
                .into_font()
                .transform(rotation.font_transform()),
        )
        .axis_desc_style((FONT_FAMILY, desc_px))
        .bold_line_style(BLACK.mix(0.1).stroke_width(1));
    if chart.kind == PlotKind::Bar {
        mesh.disable_x_mesh();
    }
    mesh.draw()
        .map_err(|e| PlotError::render("Failed to draw mesh", e))?;

    let with_legend = chart.series.len() > 1;
    let series_count = chart.series.len() as f64;
    let bar_width = BAR_WIDTH / series_count;

    for (series_idx, series) in chart.series.iter().enumerate() {
        let legend_color = series.color_at(0).mix(chart.alpha);
        let anno = match chart.kind {
            PlotKind::Bar => {
                let offset = (series_idx as f64 - (series_count - 1.0) / 2.0) * bar_width;
                ctx.draw_series(series.points.iter().enumerate().map(|(idx, &(x, y))| {
                    let center = x + offset;
                    Rectangle::new(
                        [(center - bar_width / 2.0, 0.0), (center + bar_width / 2.0, y)],
                        series.color_at(idx).mix(chart.alpha).filled(),
                    )
                }))
                .map_err(|e| PlotError::render("Failed to draw bars", e))?
            }
            _ => ctx
                .draw_series(LineSeries::new(
                    series.points.iter().copied(),
                    legend_color.stroke_width(chart.line_width),
                ))
                .map_err(|e| PlotError::render("Failed to draw line series", e))?,
        };

        if let Some(name) = series.name.as_deref().filter(|_| with_legend) {
            let line_width = chart.line_width;
            match chart.kind {
                PlotKind::Bar => anno.label(name).legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 10, y + 5)], legend_color.filled())
                }),
                _ => anno.label(name).legend(move |(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + 20, y)],
                        legend_color.stroke_width(line_width),
                    )
                }),
            };
        }
    }

    if with_legend && chart.series.iter().any(|s| s.name.is_some()) {
        ctx.configure_series_labels()
            .label_font((FONT_FAMILY, tick_px))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|e| PlotError::render("Failed to draw legend", e))?;
    }

    root.present()
        .map_err(|e| PlotError::render("Failed to present drawing", e))?;
    debug!(kind = %chart.kind, ?rotation, "cartesian chart drawn");
    Ok(())
}
