//! Pie charts: one column (value counts) or two columns (labels and values).

use crate::data::{Column, Dataset};
use crate::error::{PlotError, Result};
use crate::graph::{palette_color, parse_color, Canvas, FONT_FAMILY};
use crate::params::{Labels, RenderParams};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;
use std::f64::consts::PI;
use tracing::debug;

pub const LABELS: &str = "labels";
pub const COLORS: &str = "colors";
pub const START_ANGLE: &str = "startangle";

/// Distance of the percentage text from the center, as a fraction of the radius
const PCT_DISTANCE: f64 = 0.6;
const LABEL_DISTANCE: f64 = 1.1;

/// Resolved pie: one wedge per value
#[derive(Debug, Clone, PartialEq)]
pub struct PieSpec {
    /// Wedge labels; may be shorter or longer than `values` when supplied explicitly
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<RGBColor>,
    /// Degrees, counter-clockwise from the positive x axis
    pub start_angle: f64,
}

impl PieSpec {
    pub fn wedge_count(&self) -> usize {
        self.values.len()
    }

    pub fn wedge_label(&self, idx: usize) -> Option<&str> {
        self.labels.get(idx).map(String::as_str)
    }

    pub fn wedge_color(&self, idx: usize) -> RGBColor {
        if self.colors.is_empty() {
            palette_color(idx)
        } else {
            self.colors[idx % self.colors.len()]
        }
    }

    /// Share of each wedge in percent
    pub fn percentages(&self) -> Vec<f64> {
        // scale by the largest wedge so the total stays finite
        let largest = self.values.iter().copied().fold(0.0, f64::max);
        if largest <= 0.0 {
            return vec![0.0; self.values.len()];
        }
        let scaled: Vec<f64> = self.values.iter().map(|v| v / largest).collect();
        let total: f64 = scaled.iter().sum();
        scaled.iter().map(|v| v / total * 100.0).collect()
    }
}

/// Resolve labels and values for a pie chart.
///
/// A one-column dataset is grouped and counted (largest group first); an
/// explicit `labels` list then replaces the group names as-is. A two-column
/// dataset takes labels from the first column and values from the second and
/// refuses an explicit `labels` list.
pub fn resolve_pie(dataset: &Dataset, params: &mut RenderParams) -> Result<PieSpec> {
    let (labels, values) = match dataset.columns() {
        [] => return Err(PlotError::EmptyDataset),
        [single] => {
            let (groups, counts) = value_counts(single);
            let labels = params.take_string_list(LABELS)?.unwrap_or(groups);
            (labels, counts)
        }
        [label_col, value_col] => {
            if params.contains(LABELS) {
                return Err(PlotError::LabelsNotAllowed);
            }
            (label_col.labels(), value_col.numbers()?)
        }
        columns => return Err(PlotError::TooManyColumns(columns.len())),
    };

    if values.iter().any(|v| *v < 0.0 || !v.is_finite()) || values.iter().sum::<f64>() <= 0.0 {
        return Err(PlotError::InvalidWedgeSizes);
    }

    let colors = params
        .take_string_list(COLORS)?
        .unwrap_or_default()
        .iter()
        .map(|c| parse_color(COLORS, c))
        .collect::<Result<Vec<_>>>()?;
    let start_angle = params.take_f64(START_ANGLE)?.unwrap_or(0.0);

    for key in params.keys() {
        debug!(key, "pie renderer ignores styling parameter");
    }

    Ok(PieSpec {
        labels,
        values,
        colors,
        start_angle,
    })
}

/// Group identical cells and count them, most frequent first (ties keep first appearance)
fn value_counts(column: &Column) -> (Vec<String>, Vec<f64>) {
    let mut groups: Vec<(String, usize)> = Vec::new();
    for label in column.labels() {
        match groups.iter_mut().find(|(g, _)| *g == label) {
            Some((_, count)) => *count += 1,
            None => groups.push((label, 1)),
        }
    }
    groups.sort_by(|a, b| b.1.cmp(&a.1));
    groups
        .into_iter()
        .map(|(label, count)| (label, count as f64))
        .unzip()
}

/// Draw the pie with a percentage on every wedge
pub fn draw_pie(canvas: &mut Canvas, pie: &PieSpec, labels: &Labels) -> Result<()> {
    let spec = canvas.spec().clone();
    let root = canvas.drawing_area()?;

    let title_px = spec.font_px(12.0);
    let text_px = spec.font_px(10.0);

    let area = match labels.title.as_deref() {
        Some(title) => root
            .titled(title, (FONT_FAMILY, title_px).into_font())
            .map_err(|e| PlotError::render("Failed to draw title", e))?,
        None => root.clone(),
    };
    let (w, h) = area.dim_in_pixel();
    let (w, h) = (w as f64, h as f64);

    let (cx, cy) = (w / 2.0, h / 2.0);
    // leave room for outside labels and the axis descriptions
    let radius = ((w.min(h) / 2.0) - 2.5 * text_px as f64).max(10.0) * 0.9;

    let percentages = pie.percentages();
    let mut angle = pie.start_angle.to_radians();
    for (idx, pct) in percentages.iter().enumerate() {
        let sweep = pct / 100.0 * 2.0 * PI;
        let end = angle + sweep;

        if sweep > 0.0 {
            let wedge = wedge_polygon((cx, cy), radius, angle, end);
            area.draw(&Polygon::new(wedge, pie.wedge_color(idx).filled()))
                .map_err(|e| PlotError::render("Failed to draw wedge", e))?;
        }

        let mid = angle + sweep / 2.0;
        let pct_pos = polar((cx, cy), radius * PCT_DISTANCE, mid);
        let pct_style = (FONT_FAMILY, text_px)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        area.draw(&Text::new(format!("{pct:.1}%"), pct_pos, pct_style))
            .map_err(|e| PlotError::render("Failed to draw percentage", e))?;

        if let Some(label) = pie.wedge_label(idx).filter(|l| !l.is_empty()) {
            let hpos = if mid.cos() >= 0.0 { HPos::Left } else { HPos::Right };
            let label_style = (FONT_FAMILY, text_px)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(hpos, VPos::Center));
            let label_pos = polar((cx, cy), radius * LABEL_DISTANCE, mid);
            area.draw(&Text::new(label.to_string(), label_pos, label_style))
                .map_err(|e| PlotError::render("Failed to draw wedge label", e))?;
        }

        angle = end;
    }

    if let Some(xlabel) = labels.xlabel.as_deref() {
        let style = (FONT_FAMILY, text_px)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        area.draw(&Text::new(xlabel.to_string(), (cx as i32, h as i32 - 2), style))
            .map_err(|e| PlotError::render("Failed to draw x label", e))?;
    }
    if let Some(ylabel) = labels.ylabel.as_deref() {
        let style = (FONT_FAMILY, text_px)
            .into_font()
            .transform(FontTransform::Rotate270)
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        area.draw(&Text::new(ylabel.to_string(), (text_px as i32, cy as i32), style))
            .map_err(|e| PlotError::render("Failed to draw y label", e))?;
    }

    root.present()
        .map_err(|e| PlotError::render("Failed to present drawing", e))?;
    debug!(wedges = pie.wedge_count(), "pie drawn");
    Ok(())
}

/// Screen position at `radius` and `angle` (counter-clockwise, y axis pointing down)
fn polar(center: (f64, f64), radius: f64, angle: f64) -> (i32, i32) {
    (
        (center.0 + radius * angle.cos()).round() as i32,
        (center.1 - radius * angle.sin()).round() as i32,
    )
}

/// Wedge outline: the center followed by arc points at most one degree apart
fn wedge_polygon(center: (f64, f64), radius: f64, start: f64, end: f64) -> Vec<(i32, i32)> {
    let steps = (((end - start).to_degrees()).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(steps + 2);
    points.push(polar(center, 0.0, 0.0));
    for step in 0..=steps {
        let a = start + (end - start) * step as f64 / steps as f64;
        points.push(polar(center, radius, a));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Cell;
    use serde_json::json;

    fn text_column(name: &str, values: &[&str]) -> Column {
        Column::new(name, values.iter().map(|v| Cell::Text(v.to_string())).collect())
    }

    fn number_column(name: &str, values: &[f64]) -> Column {
        Column::new(name, values.iter().map(|v| Cell::Number(*v)).collect())
    }

    #[test]
    fn test_single_column_value_counts() {
        let ds = Dataset::new(vec![text_column("category", &["A", "B", "A", "C", "B", "A"])]).unwrap();
        let pie = resolve_pie(&ds, &mut RenderParams::new()).unwrap();
        assert_eq!(pie.wedge_count(), 3);
        assert_eq!(pie.labels, vec!["A", "B", "C"]);
        assert_eq!(pie.values, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_single_column_counts_ties_keep_first_appearance() {
        let ds = Dataset::new(vec![text_column("c", &["x", "y", "y", "x", "z"])]).unwrap();
        let pie = resolve_pie(&ds, &mut RenderParams::new()).unwrap();
        assert_eq!(pie.labels, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_single_column_labels_override_used_verbatim() {
        let ds = Dataset::new(vec![text_column("c", &["A", "B", "A"])]).unwrap();
        let mut params = RenderParams::new().with(LABELS, json!(["First", "Second", "Third"]));
        let pie = resolve_pie(&ds, &mut params).unwrap();
        assert_eq!(pie.wedge_count(), 2);
        assert_eq!(pie.labels.len(), 3);
        assert_eq!(pie.wedge_label(1), Some("Second"));
    }

    #[test]
    fn test_two_columns() {
        let ds = Dataset::new(vec![
            text_column("category", &["A", "B", "C"]),
            number_column("values", &[30.0, 45.0, 25.0]),
        ])
        .unwrap();
        let pie = resolve_pie(&ds, &mut RenderParams::new()).unwrap();
        assert_eq!(pie.wedge_count(), 3);
        assert_eq!(pie.values, vec![30.0, 45.0, 25.0]);
        let pct = pie.percentages();
        assert!((pct[1] - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_two_columns_rejects_labels_param() {
        let ds = Dataset::new(vec![
            text_column("category", &["A", "B", "C"]),
            number_column("values", &[30.0, 45.0, 25.0]),
        ])
        .unwrap();
        let mut params = RenderParams::new().with(LABELS, json!(["X", "Y", "Z"]));
        let err = resolve_pie(&ds, &mut params).unwrap_err();
        assert!(matches!(err, PlotError::LabelsNotAllowed));
        assert!(err.to_string().contains("does not accept 'labels' parameter"));
    }

    #[test]
    fn test_too_many_columns() {
        let ds = Dataset::new(vec![
            number_column("col1", &[1.0, 2.0, 3.0]),
            number_column("col2", &[4.0, 5.0, 6.0]),
            number_column("col3", &[7.0, 8.0, 9.0]),
        ])
        .unwrap();
        let err = resolve_pie(&ds, &mut RenderParams::new()).unwrap_err();
        assert!(matches!(err, PlotError::TooManyColumns(3)));
        assert!(err.to_string().starts_with("Pie chart requires either one column"));
    }

    #[test]
    fn test_two_columns_non_numeric_values() {
        let ds = Dataset::new(vec![
            text_column("a", &["A", "B"]),
            text_column("b", &["x", "y"]),
        ])
        .unwrap();
        assert!(matches!(
            resolve_pie(&ds, &mut RenderParams::new()),
            Err(PlotError::NonNumericColumn(name)) if name == "b"
        ));
    }

    #[test]
    fn test_percentages_of_huge_wedges() {
        let ds = Dataset::new(vec![
            text_column("a", &["A", "B"]),
            number_column("b", &[f64::MAX, f64::MAX]),
        ])
        .unwrap();
        let pie = resolve_pie(&ds, &mut RenderParams::new()).unwrap();
        assert_eq!(pie.percentages(), vec![50.0, 50.0]);
    }

    #[test]
    fn test_negative_or_zero_total_wedges() {
        let negative = Dataset::new(vec![
            text_column("a", &["A", "B"]),
            number_column("b", &[1.0, -1.0]),
        ])
        .unwrap();
        assert!(matches!(
            resolve_pie(&negative, &mut RenderParams::new()),
            Err(PlotError::InvalidWedgeSizes)
        ));
        let zeros = Dataset::new(vec![
            text_column("a", &["A", "B"]),
            number_column("b", &[0.0, 0.0]),
        ])
        .unwrap();
        assert!(resolve_pie(&zeros, &mut RenderParams::new()).is_err());
    }

    #[test]
    fn test_styling_params() {
        let ds = Dataset::new(vec![text_column("c", &["A", "B", "C"])]).unwrap();
        let mut params = RenderParams::new()
            .with(COLORS, json!(["red", "#00ff00"]))
            .with(START_ANGLE, 90)
            .with("shadow", true);
        let pie = resolve_pie(&ds, &mut params).unwrap();
        assert_eq!(pie.start_angle, 90.0);
        assert_eq!(pie.wedge_color(0), RGBColor(255, 0, 0));
        assert_eq!(pie.wedge_color(2), RGBColor(255, 0, 0));
        assert!(params.contains("shadow"));
    }

    #[test]
    fn test_wedge_polygon_spans_arc() {
        let points = wedge_polygon((100.0, 100.0), 50.0, 0.0, PI / 2.0);
        assert_eq!(points[0], (100, 100));
        assert_eq!(points[1], (150, 100));
        assert_eq!(*points.last().unwrap(), (100, 50));
    }
}
