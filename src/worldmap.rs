//! World map scatter in plate carrée: x is longitude, y is latitude.

use crate::data::{Column, Dataset};
use crate::error::{PlotError, Result};
use crate::geo;
use crate::graph::{
    estimate_text_width_px, format_tick, parse_color, Canvas, TickedAxis, FONT_FAMILY,
};
use crate::params::{Labels, RenderParams};
use plotters::prelude::*;
use std::str::FromStr;
use tracing::debug;

pub const LAT_ALIASES: [&str; 3] = ["lat", "latitude", "y"];
pub const LON_ALIASES: [&str; 5] = ["lon", "lng", "long", "longitude", "x"];

pub const SIZE: &str = "s";
pub const COLOR: &str = "c";
pub const ALPHA: &str = "alpha";
pub const MARKER: &str = "marker";

const DEFAULT_SIZE: f64 = 50.0;
const DEFAULT_COLOR: &str = "red";
const DEFAULT_ALPHA: f64 = 0.7;
const GRID_ALPHA: f64 = 0.5;

const OCEAN_COLOR: RGBColor = RGBColor(173, 216, 230);
const LAND_COLOR: RGBColor = RGBColor(211, 211, 211);
const COASTLINE_COLOR: RGBColor = RGBColor(40, 40, 40);
const BORDER_COLOR: RGBColor = RGBColor(128, 128, 128);

const LON_TICKS: [f64; 7] = [-180.0, -120.0, -60.0, 0.0, 60.0, 120.0, 180.0];
const LAT_TICKS: [f64; 7] = [-90.0, -60.0, -30.0, 0.0, 30.0, 60.0, 90.0];

/// Scatter marker glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    Triangle,
    Diamond,
    Cross,
}

impl FromStr for Marker {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "circle" | "o" => Ok(Marker::Circle),
            "square" | "s" => Ok(Marker::Square),
            "triangle" | "^" => Ok(Marker::Triangle),
            "diamond" | "D" | "d" => Ok(Marker::Diamond),
            "cross" | "x" | "+" => Ok(Marker::Cross),
            other => Err(PlotError::invalid_param(
                MARKER,
                format!("unknown marker '{other}', expected one of circle, square, triangle, diamond, cross"),
            )),
        }
    }
}

/// Background layers, in drawing order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapLayer {
    Ocean,
    Land,
    Coastline,
    Borders,
}

impl MapLayer {
    pub const ALL: [MapLayer; 4] = [
        MapLayer::Ocean,
        MapLayer::Land,
        MapLayer::Coastline,
        MapLayer::Borders,
    ];
}

/// Resolved world map: points plus the layers and grid drawn beneath them
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSpec {
    pub lat_column: String,
    pub lon_column: String,
    /// (longitude, latitude)
    pub points: Vec<(f64, f64)>,
    /// Marker area in points squared
    pub size: f64,
    pub color: RGBColor,
    pub alpha: f64,
    pub marker: Marker,
    pub layers: Vec<MapLayer>,
    pub grid_alpha: f64,
}

impl ScatterSpec {
    /// Marker radius in pixels for a canvas with `px_per_point` pixels per point
    pub fn marker_radius(&self, px_per_point: f64) -> i32 {
        ((self.size.sqrt() / 2.0) * px_per_point).round().max(1.0) as i32
    }
}

/// First column, in dataset order, whose name is one of `aliases` (ignoring case)
fn find_column<'a>(dataset: &'a Dataset, aliases: &[&str]) -> Option<&'a Column> {
    dataset
        .columns()
        .iter()
        .find(|c| aliases.iter().any(|a| c.name.eq_ignore_ascii_case(a)))
}

pub fn resolve_worldmap(dataset: &Dataset, params: &mut RenderParams) -> Result<ScatterSpec> {
    let (Some(lat), Some(lon)) = (
        find_column(dataset, &LAT_ALIASES),
        find_column(dataset, &LON_ALIASES),
    ) else {
        return Err(PlotError::MissingCoordinateColumns);
    };

    let size = params.take_f64(SIZE)?.unwrap_or(DEFAULT_SIZE);
    if !size.is_finite() || size < 0.0 {
        return Err(PlotError::invalid_param(SIZE, "must be a non-negative number"));
    }
    let color = parse_color(
        COLOR,
        params.take_string(COLOR)?.as_deref().unwrap_or(DEFAULT_COLOR),
    )?;
    let alpha = params.take_f64(ALPHA)?.unwrap_or(DEFAULT_ALPHA);
    if !(0.0..=1.0).contains(&alpha) {
        return Err(PlotError::invalid_param(ALPHA, "must be between 0 and 1"));
    }
    let marker = match params.take_string(MARKER)? {
        Some(m) => m.parse()?,
        None => Marker::Circle,
    };

    for key in params.keys() {
        debug!(key, "world map ignores styling parameter");
    }

    let points: Vec<(f64, f64)> = lon.numbers()?.into_iter().zip(lat.numbers()?).collect();
    let outside = points
        .iter()
        .filter(|(x, y)| x.abs() > 180.0 || y.abs() > 90.0)
        .count();
    if outside > 0 {
        debug!(outside, "points fall outside the global extent");
    }
    debug!(lat = %lat.name, lon = %lon.name, points = points.len(), "world map resolved");

    Ok(ScatterSpec {
        lat_column: lat.name.clone(),
        lon_column: lon.name.clone(),
        points,
        size,
        color,
        alpha,
        marker,
        layers: MapLayer::ALL.to_vec(),
        grid_alpha: GRID_ALPHA,
    })
}

fn lon_label(lon: f64) -> String {
    match lon {
        v if v < 0.0 => format!("{}°W", format_tick(-v)),
        v if v > 0.0 => format!("{}°E", format_tick(v)),
        _ => "0°".to_string(),
    }
}

fn lat_label(lat: f64) -> String {
    match lat {
        v if v < 0.0 => format!("{}°S", format_tick(-v)),
        v if v > 0.0 => format!("{}°N", format_tick(v)),
        _ => "0°".to_string(),
    }
}

/// Draw the map layers, a labelled graticule and the scatter on top
pub fn draw_worldmap(canvas: &mut Canvas, scatter: &ScatterSpec, labels: &Labels) -> Result<()> {
    let spec = canvas.spec().clone();
    let root = canvas.drawing_area()?;

    let title_px = spec.font_px(12.0);
    let tick_px = spec.font_px(9.0);
    let desc_px = spec.font_px(10.0);
    let margin = spec.px(10.0);

    let desc_extent = |desc: &Option<String>| match desc {
        Some(_) => desc_px + spec.px(4.0),
        None => 0,
    };
    let x_area = tick_px + spec.px(8.0) + desc_extent(&labels.xlabel);
    let y_area = estimate_text_width_px("180°W", tick_px) + spec.px(8.0) + desc_extent(&labels.ylabel);
    let title_area = if labels.title.is_some() { title_px * 2 } else { 0 };

    // keep degrees square: the globe is twice as wide as it is tall
    let plot_h = spec.height.saturating_sub(x_area + title_area + 2 * margin);
    let plot_w = spec.width.saturating_sub(y_area + 2 * margin);
    let side_pad = plot_w.saturating_sub(plot_h * 2) / 2;

    let mut builder = ChartBuilder::on(&root);
    builder
        .margin(margin)
        .margin_left(margin + side_pad)
        .margin_right(margin + side_pad)
        .x_label_area_size(x_area)
        .y_label_area_size(y_area);
    if let Some(title) = labels.title.as_deref() {
        builder.caption(title, (FONT_FAMILY, title_px));
    }
    let (lon_range, lat_range) = spec
        .projection
        .extent()
        .unwrap_or((-180.0..180.0, -90.0..90.0));
    let mut ctx = builder
        .build_cartesian_2d(
            TickedAxis::new(lon_range, LON_TICKS.to_vec()),
            TickedAxis::new(lat_range, LAT_TICKS.to_vec()),
        )
        .map_err(|e| PlotError::render("Failed to build map", e))?;

    for layer in &scatter.layers {
        match layer {
            MapLayer::Ocean => {
                ctx.plotting_area()
                    .fill(&OCEAN_COLOR)
                    .map_err(|e| PlotError::render("Failed to fill ocean", e))?;
            }
            MapLayer::Land => {
                ctx.draw_series(
                    geo::LAND
                        .iter()
                        .map(|ring| Polygon::new(ring.to_vec(), LAND_COLOR.filled())),
                )
                .map_err(|e| PlotError::render("Failed to draw land", e))?;
                ctx.draw_series(
                    geo::INLAND_SEAS
                        .iter()
                        .map(|ring| Polygon::new(ring.to_vec(), OCEAN_COLOR.filled())),
                )
                .map_err(|e| PlotError::render("Failed to draw inland seas", e))?;
            }
            MapLayer::Coastline => {
                ctx.draw_series(geo::LAND.iter().chain(geo::INLAND_SEAS).map(|ring| {
                    PathElement::new(ring.to_vec(), COASTLINE_COLOR.stroke_width(1))
                }))
                .map_err(|e| PlotError::render("Failed to draw coastline", e))?;
            }
            MapLayer::Borders => {
                ctx.draw_series(geo::BORDERS.iter().map(|line| {
                    PathElement::new(line.to_vec(), BORDER_COLOR.stroke_width(1))
                }))
                .map_err(|e| PlotError::render("Failed to draw borders", e))?;
            }
        }
    }

    let lon_formatter = |v: &f64| lon_label(*v);
    let lat_formatter = |v: &f64| lat_label(*v);
    let mut mesh = ctx.configure_mesh();
    mesh.x_label_formatter(&lon_formatter)
        .y_label_formatter(&lat_formatter)
        .label_style((FONT_FAMILY, tick_px))
        .axis_desc_style((FONT_FAMILY, desc_px))
        .bold_line_style(BORDER_COLOR.mix(scatter.grid_alpha).stroke_width(1))
        .axis_style(COASTLINE_COLOR.stroke_width(1));
    if let Some(xlabel) = labels.xlabel.as_deref() {
        mesh.x_desc(xlabel);
    }
    if let Some(ylabel) = labels.ylabel.as_deref() {
        mesh.y_desc(ylabel);
    }
    mesh.draw()
        .map_err(|e| PlotError::render("Failed to draw graticule", e))?;

    let radius = scatter.marker_radius(spec.px_per_point);
    let fill = scatter.color.mix(scatter.alpha).filled();
    let points = scatter.points.iter().copied();
    let drawn = match scatter.marker {
        Marker::Circle => ctx.draw_series(
            points.map(|p| EmptyElement::at(p) + Circle::new((0, 0), radius, fill)),
        ),
        Marker::Square => ctx.draw_series(points.map(|p| {
            EmptyElement::at(p) + Rectangle::new([(-radius, -radius), (radius, radius)], fill)
        })),
        Marker::Triangle => ctx.draw_series(points.map(|p| {
            EmptyElement::at(p)
                + Polygon::new(vec![(0, -radius), (radius, radius), (-radius, radius)], fill)
        })),
        Marker::Diamond => ctx.draw_series(points.map(|p| {
            EmptyElement::at(p)
                + Polygon::new(
                    vec![(0, -radius), (radius, 0), (0, radius), (-radius, 0)],
                    fill,
                )
        })),
        Marker::Cross => {
            let stroke = scatter
                .color
                .mix(scatter.alpha)
                .stroke_width(spec.px(1.5));
            ctx.draw_series(points.map(|p| {
                EmptyElement::at(p)
                    + PathElement::new(vec![(-radius, -radius), (radius, radius)], stroke)
                    + PathElement::new(vec![(-radius, radius), (radius, -radius)], stroke)
            }))
        }
    };
    drawn.map_err(|e| PlotError::render("Failed to draw markers", e))?;

    root.present()
        .map_err(|e| PlotError::render("Failed to present drawing", e))?;
    debug!(points = scatter.points.len(), marker = ?scatter.marker, radius, "world map drawn");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Cell;
    use crate::graph::{CanvasSpec, Projection};

    fn numbers(name: &str, values: &[f64]) -> Column {
        Column::new(name, values.iter().map(|v| Cell::Number(*v)).collect())
    }

    fn cities() -> Dataset {
        Dataset::new(vec![
            Column::new(
                "city",
                vec![Cell::Text("Oslo".into()), Cell::Text("Lima".into())],
            ),
            numbers("Latitude", &[59.9, -12.0]),
            numbers("LNG", &[10.7, -77.0]),
        ])
        .unwrap()
    }

    #[test]
    fn test_aliases_match_case_insensitively() {
        let scatter = resolve_worldmap(&cities(), &mut RenderParams::new()).unwrap();
        assert_eq!(scatter.lat_column, "Latitude");
        assert_eq!(scatter.lon_column, "LNG");
        assert_eq!(scatter.points, vec![(10.7, 59.9), (-77.0, -12.0)]);
    }

    #[test]
    fn test_first_matching_column_wins() {
        let ds = Dataset::new(vec![
            numbers("x", &[1.0]),
            numbers("lat", &[2.0]),
            numbers("lon", &[3.0]),
            numbers("y", &[4.0]),
        ])
        .unwrap();
        let scatter = resolve_worldmap(&ds, &mut RenderParams::new()).unwrap();
        assert_eq!(scatter.lon_column, "x");
        assert_eq!(scatter.lat_column, "lat");
    }

    #[test]
    fn test_missing_coordinates_names_aliases() {
        let ds = Dataset::new(vec![numbers("lat", &[1.0]), numbers("value", &[2.0])]).unwrap();
        let err = resolve_worldmap(&ds, &mut RenderParams::new()).unwrap_err();
        assert!(matches!(err, PlotError::MissingCoordinateColumns));
        let message = err.to_string();
        for alias in LAT_ALIASES.iter().chain(LON_ALIASES.iter()) {
            assert!(message.contains(alias), "missing {alias}");
        }
    }

    #[test]
    fn test_defaults() {
        let scatter = resolve_worldmap(&cities(), &mut RenderParams::new()).unwrap();
        assert_eq!(scatter.size, 50.0);
        assert_eq!(scatter.color, RGBColor(255, 0, 0));
        assert_eq!(scatter.alpha, 0.7);
        assert_eq!(scatter.marker, Marker::Circle);
        assert_eq!(scatter.layers, MapLayer::ALL.to_vec());
        assert_eq!(scatter.grid_alpha, 0.5);
    }

    #[test]
    fn test_styling_params_are_taken() {
        let mut params = RenderParams::new()
            .with(SIZE, 100)
            .with(COLOR, "blue")
            .with(ALPHA, 0.3)
            .with(MARKER, "^")
            .with("edgecolor", "black");
        let scatter = resolve_worldmap(&cities(), &mut params).unwrap();
        assert_eq!(scatter.size, 100.0);
        assert_eq!(scatter.color, RGBColor(0, 0, 255));
        assert_eq!(scatter.marker, Marker::Triangle);
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["edgecolor"]);
    }

    #[test]
    fn test_unknown_marker() {
        let mut params = RenderParams::new().with(MARKER, "star");
        let err = resolve_worldmap(&cities(), &mut params).unwrap_err();
        assert!(matches!(err, PlotError::InvalidParameter { ref key, .. } if key == "marker"));
    }

    #[test]
    fn test_non_numeric_coordinates() {
        let ds = Dataset::new(vec![
            Column::new("lat", vec![Cell::Text("north".into())]),
            numbers("lon", &[1.0]),
        ])
        .unwrap();
        assert!(matches!(
            resolve_worldmap(&ds, &mut RenderParams::new()),
            Err(PlotError::NonNumericColumn(name)) if name == "lat"
        ));
    }

    #[test]
    fn test_marker_radius_from_area() {
        let scatter = resolve_worldmap(&cities(), &mut RenderParams::new().with(SIZE, 64)).unwrap();
        assert_eq!(scatter.marker_radius(1.0), 4);
        assert_eq!(scatter.marker_radius(2.0), 8);
    }

    #[test]
    fn test_degree_labels() {
        assert_eq!(lon_label(-120.0), "120°W");
        assert_eq!(lon_label(60.0), "60°E");
        assert_eq!(lon_label(0.0), "0°");
        assert_eq!(lat_label(-30.0), "30°S");
        assert_eq!(lat_label(90.0), "90°N");
    }

    #[test]
    fn test_non_finite_coordinates() {
        let ds = Dataset::new(vec![
            numbers("lat", &[10.0, f64::NEG_INFINITY]),
            numbers("lon", &[1.0, 2.0]),
        ])
        .unwrap();
        assert!(matches!(
            resolve_worldmap(&ds, &mut RenderParams::new()),
            Err(PlotError::NonFiniteValue(name)) if name == "lat"
        ));
    }

    #[test]
    fn test_draw_every_marker() {
        let labels = Labels {
            title: Some("Cities".into()),
            xlabel: Some("Longitude".into()),
            ylabel: Some("Latitude".into()),
        };
        for marker in ["o", "s", "^", "D", "x"] {
            let mut params = RenderParams::new().with(MARKER, marker);
            let scatter = resolve_worldmap(&cities(), &mut params).unwrap();
            let mut canvas = Canvas::new(CanvasSpec {
                width: 400,
                height: 240,
                px_per_point: 1.0,
                projection: Projection::PlateCarree,
            })
            .unwrap();
            draw_worldmap(&mut canvas, &scatter, &labels).unwrap();
            let png = canvas.encode_png().unwrap();
            assert!(png.as_bytes().starts_with(&[137, 80, 78, 71]), "{marker}");
        }
    }
}
