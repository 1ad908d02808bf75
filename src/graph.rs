// Drawing surface, colors, fonts and axis helpers shared by every renderer

use crate::error::{PlotError, Result};
use crate::RenderedImage;
use image::ImageEncoder;
use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::sync::Once;
use tracing::warn;

/// One-time registration of the bundled "sans-serif" font for the `ab_glyph` text path,
/// which does not discover OS fonts.
static INIT_FONTS: Once = Once::new();

pub const FONT_FAMILY: &str = "sans-serif";

pub fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        let registered = plotters::style::register_font(
            FONT_FAMILY,
            plotters::style::FontStyle::Normal,
            include_bytes!("../assets/DejaVuSans.ttf"),
        );
        if registered.is_err() {
            warn!(family = FONT_FAMILY, "bundled font could not be registered, text will not render");
        }
    });
}

/// How chart coordinates map onto the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Standard x/y axes
    Cartesian,
    /// Equirectangular: x = longitude, y = latitude, global extent
    PlateCarree,
}

impl Projection {
    /// Coordinate extent requested by the projection, if it fixes one
    pub fn extent(&self) -> Option<(Range<f64>, Range<f64>)> {
        match self {
            Projection::Cartesian => None,
            Projection::PlateCarree => Some((-180.0..180.0, -90.0..90.0)),
        }
    }
}

/// Canvas configuration chosen by the kind dispatcher
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
    pub px_per_point: f64,
    pub projection: Projection,
}

impl CanvasSpec {
    /// Font size in pixels for a size given in points
    pub fn font_px(&self, points: f64) -> u32 {
        ((points * self.px_per_point).round() as u32).max(6)
    }

    pub fn px(&self, points: f64) -> u32 {
        (points * self.px_per_point).round().max(1.0) as u32
    }
}

/// In-memory RGB drawing surface owned by a single render call
pub struct Canvas {
    buffer: Vec<u8>,
    spec: CanvasSpec,
}

impl Canvas {
    pub fn new(spec: CanvasSpec) -> Result<Self> {
        ensure_fonts_registered();
        let len = (spec.width as usize)
            .checked_mul(spec.height as usize)
            .and_then(|px| px.checked_mul(3))
            .ok_or_else(|| {
                PlotError::InvalidCanvas(format!(
                    "{}x{} pixels does not fit in memory",
                    spec.width, spec.height
                ))
            })?;
        Ok(Canvas {
            buffer: vec![0u8; len],
            spec,
        })
    }

    pub fn spec(&self) -> &CanvasSpec {
        &self.spec
    }

    /// Root drawing area, filled white. Drop it before encoding.
    pub fn drawing_area(&mut self) -> Result<DrawingArea<BitMapBackend<'_>, Shift>> {
        let root =
            BitMapBackend::with_buffer(&mut self.buffer, (self.spec.width, self.spec.height))
                .into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| PlotError::render("Failed to fill background", e))?;
        Ok(root)
    }

    /// Finalize and encode the canvas as PNG
    pub fn encode_png(self) -> Result<RenderedImage> {
        let mut png_bytes = Vec::new();
        image::codecs::png::PngEncoder::new(&mut png_bytes)
            .write_image(
                &self.buffer,
                self.spec.width,
                self.spec.height,
                image::ColorType::Rgb8,
            )
            .map_err(|e| PlotError::render("Failed to encode PNG", e))?;
        Ok(RenderedImage::new(png_bytes))
    }
}

/// Categorical palette (matplotlib "tab10")
pub const PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

pub fn palette_color(idx: usize) -> RGBColor {
    PALETTE[idx % PALETTE.len()]
}

/// Parse a color name, single-letter shorthand or `#rgb`/`#rrggbb` hex string
pub fn parse_color(key: &str, value: &str) -> Result<RGBColor> {
    let name = value.trim().to_ascii_lowercase();
    if let Some(hex) = name.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| {
            PlotError::invalid_param(key, format!("'{value}' is not a valid hex color"))
        });
    }
    let color = match name.as_str() {
        "red" | "r" => RGBColor(255, 0, 0),
        "green" | "g" => RGBColor(0, 128, 0),
        "blue" | "b" => RGBColor(0, 0, 255),
        "black" | "k" => BLACK,
        "white" | "w" => WHITE,
        "yellow" | "y" => RGBColor(255, 255, 0),
        "cyan" | "c" => CYAN,
        "magenta" | "m" => MAGENTA,
        "orange" => RGBColor(255, 165, 0),
        "purple" => RGBColor(128, 0, 128),
        "pink" => RGBColor(255, 192, 203),
        "brown" => RGBColor(165, 42, 42),
        "gray" | "grey" => RGBColor(128, 128, 128),
        "lightgray" | "lightgrey" => RGBColor(211, 211, 211),
        "darkgray" | "darkgrey" => RGBColor(169, 169, 169),
        "lightblue" => RGBColor(173, 216, 230),
        "navy" => RGBColor(0, 0, 128),
        "teal" => RGBColor(0, 128, 128),
        "olive" => RGBColor(128, 128, 0),
        "gold" => RGBColor(255, 215, 0),
        other => {
            if let Some(idx) = other
                .strip_prefix("tab:")
                .and_then(|n| TAB_NAMES.iter().position(|t| *t == n))
            {
                PALETTE[idx]
            } else if let Some(idx) = other
                .strip_prefix('c')
                .and_then(|n| n.parse::<usize>().ok())
                .filter(|n| *n < PALETTE.len())
            {
                PALETTE[idx]
            } else {
                return Err(PlotError::invalid_param(
                    key,
                    format!("unknown color '{value}'"),
                ));
            }
        }
    };
    Ok(color)
}

const TAB_NAMES: [&str; 10] = [
    "blue", "orange", "green", "red", "purple", "brown", "pink", "gray", "olive", "cyan",
];

fn parse_hex(hex: &str) -> Option<RGBColor> {
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(RGBColor(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let expand = |c: &str| channel(&c.repeat(2));
            Some(RGBColor(
                expand(&hex[0..1])?,
                expand(&hex[1..2])?,
                expand(&hex[2..3])?,
            ))
        }
        _ => None,
    }
}

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Data range padded by 5% on each side; a degenerate range widens by 1.
/// The result saturates at the largest finite values.
pub fn padded_range(min: f64, max: f64) -> Range<f64> {
    if (max - min).abs() < f64::EPSILON {
        (min - 1.0)..(max + 1.0)
    } else {
        // scale before subtracting: `max - min` overflows for opposite extremes
        let padding = max * 0.05 - min * 0.05;
        (min - padding).max(f64::MIN)..(max + padding).min(f64::MAX)
    }
}

pub fn min_max(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// "Nice" tick positions (steps of 1, 2, 2.5 or 5 times a power of ten) inside `range`
pub fn nice_ticks(range: &Range<f64>, target: usize) -> Vec<f64> {
    if !(range.start.is_finite() && range.end.is_finite()) || range.end <= range.start || target == 0
    {
        return vec![range.start];
    }
    let raw_step = range.end / target as f64 - range.start / target as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw_step)
        .unwrap_or(10.0 * magnitude);

    let first = (range.start / step).ceil() as i64;
    let last = (range.end / step).floor() as i64;
    (first..=last)
        .map(|i| {
            let v = i as f64 * step;
            let snapped = (v * 1e9).round() / 1e9;
            if snapped.is_finite() {
                snapped
            } else {
                v
            }
        })
        // avoid "-0"
        .map(|v| if v == 0.0 { 0.0 } else { v })
        .collect()
}

/// Format a tick value compactly, trimming trailing zeros
pub fn format_tick(value: f64) -> String {
    if value != 0.0 && (value.abs() >= 1e15 || value.abs() < 1e-4) {
        let s = format!("{:.3e}", value);
        if let Some((mantissa, exp)) = s.split_once('e') {
            let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
            return format!("{mantissa}e{exp}");
        }
    }
    if value.fract().abs() < 1e-9 && value.abs() < 1e15 {
        return format!("{}", value.round() as i64);
    }
    let s = format!("{:.4}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// `f64` axis with fixed tick positions.
///
/// Only bold key points are reported, so the mesh draws one grid line and
/// one label per tick and no light lines.
#[derive(Debug, Clone)]
pub struct TickedAxis {
    range: Range<f64>,
    ticks: Vec<f64>,
}

impl TickedAxis {
    /// Ticks outside `range` are dropped
    pub fn new(range: Range<f64>, ticks: Vec<f64>) -> Self {
        let ticks = ticks
            .into_iter()
            .filter(|t| (range.start..=range.end).contains(t))
            .collect();
        TickedAxis { range, ticks }
    }

    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }
}

impl Ranged for TickedAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        // halved operands keep the span finite for extreme ranges
        let span = self.range.end / 2.0 - self.range.start / 2.0;
        let fraction = if span > 0.0 {
            (value / 2.0 - self.range.start / 2.0) / span
        } else {
            0.5
        };
        let pixels = f64::from(limit.1) - f64::from(limit.0);
        limit.0.saturating_add((pixels * fraction + 1e-3).floor() as i32)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        if hint.weight().allow_light_points() {
            Vec::new()
        } else {
            self.ticks.clone()
        }
    }

    fn range(&self) -> Range<f64> {
        self.range.clone()
    }
}
