//! Canvas configuration: figure size in inches and resolution in dots per inch.

use crate::error::{PlotError, Result};
use serde::Deserialize;
use tracing::warn;

pub const ENV_WIDTH: &str = "PLOT_FIGURE_WIDTH";
pub const ENV_HEIGHT: &str = "PLOT_FIGURE_HEIGHT";
pub const ENV_DPI: &str = "PLOT_DPI";

/// Largest canvas a render will allocate (an 8000x8000 image)
pub const MAX_PIXELS: u64 = 64_000_000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CanvasConfig {
    /// Figure width in inches
    #[serde(default = "default_width")]
    pub width: f64,
    /// Figure height in inches
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_dpi")]
    pub dpi: u32,
}

fn default_width() -> f64 { 10.0 }
fn default_height() -> f64 { 6.0 }
fn default_dpi() -> u32 { 100 }

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            dpi: default_dpi(),
        }
    }
}

impl CanvasConfig {
    /// Read overrides from `PLOT_FIGURE_WIDTH`, `PLOT_FIGURE_HEIGHT` and `PLOT_DPI`.
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            width: parse_positive(ENV_WIDTH, lookup(ENV_WIDTH)).unwrap_or(defaults.width),
            height: parse_positive(ENV_HEIGHT, lookup(ENV_HEIGHT)).unwrap_or(defaults.height),
            dpi: parse_positive(ENV_DPI, lookup(ENV_DPI))
                .map(|d| d.round().max(1.0) as u32)
                .unwrap_or(defaults.dpi),
        }
    }

    /// Reject non-positive or non-finite sizes, a zero dpi and canvases over `MAX_PIXELS`
    pub fn validate(&self) -> Result<()> {
        for (name, inches) in [("width", self.width), ("height", self.height)] {
            if !inches.is_finite() || inches <= 0.0 {
                return Err(PlotError::InvalidCanvas(format!(
                    "{name} must be a positive number of inches, got {inches}"
                )));
            }
        }
        if self.dpi == 0 {
            return Err(PlotError::InvalidCanvas("dpi must be positive".to_string()));
        }
        let (width, height) = self.pixel_size();
        if u64::from(width) * u64::from(height) > MAX_PIXELS {
            return Err(PlotError::InvalidCanvas(format!(
                "{width}x{height} pixels exceeds the limit of {MAX_PIXELS}"
            )));
        }
        Ok(())
    }

    /// Canvas size in pixels; never smaller than 1x1
    pub fn pixel_size(&self) -> (u32, u32) {
        let px = |inches: f64| ((inches * self.dpi as f64).round() as u32).max(1);
        (px(self.width), px(self.height))
    }

    /// Pixels per typographic point
    pub fn px_per_point(&self) -> f64 {
        self.dpi as f64 / 72.0
    }
}

fn parse_positive(key: &str, value: Option<String>) -> Option<f64> {
    let raw = value?;
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Some(v),
        _ => {
            warn!(key, value = %raw, "ignoring invalid canvas setting");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = CanvasConfig::default();
        assert_eq!(config.width, 10.0);
        assert_eq!(config.height, 6.0);
        assert_eq!(config.dpi, 100);
        assert_eq!(config.pixel_size(), (1000, 600));
    }

    #[test]
    fn test_lookup_overrides_and_fallbacks() {
        let vars: HashMap<&str, &str> =
            [(ENV_WIDTH, "8"), (ENV_HEIGHT, "oops"), (ENV_DPI, "-3")].into();
        let config = CanvasConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.width, 8.0);
        assert_eq!(config.height, 6.0);
        assert_eq!(config.dpi, 100);
    }

    #[test]
    fn test_validate_bounds() {
        assert!(CanvasConfig::default().validate().is_ok());

        let cases = [
            CanvasConfig { width: 0.0, ..CanvasConfig::default() },
            CanvasConfig { height: -2.0, ..CanvasConfig::default() },
            CanvasConfig { width: f64::INFINITY, ..CanvasConfig::default() },
            CanvasConfig { height: f64::NAN, ..CanvasConfig::default() },
            CanvasConfig { dpi: 0, ..CanvasConfig::default() },
            CanvasConfig { width: 1e9, height: 1e9, dpi: u32::MAX },
            CanvasConfig { width: 100.0, height: 100.0, dpi: 100 },
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(PlotError::InvalidCanvas(_))),
                "{config:?}"
            );
        }
        let edge = CanvasConfig { width: 80.0, height: 80.0, dpi: 100 };
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn test_fractional_dpi_rounds_to_at_least_one() {
        let vars: HashMap<&str, &str> = [(ENV_DPI, "0.2")].into();
        let config = CanvasConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.dpi, 1);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: CanvasConfig = serde_json::from_str(r#"{"dpi": 50}"#).unwrap();
        assert_eq!(config.pixel_size(), (500, 300));
    }
}
