//! Tick-label rotation heuristic for crowded or long category axes.

use plotters::style::FontTransform;

/// Labels per axis above which they are turned vertical
pub const MAX_HORIZONTAL_LABELS: usize = 8;
/// Longest label (in characters) that still fits horizontally
pub const MAX_LABEL_LEN: usize = 15;
/// Mean label length (in characters) that still fits horizontally
pub const MAX_MEAN_LABEL_LEN: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    Horizontal,
    Vertical,
}

impl Rotation {
    pub fn degrees(&self) -> u32 {
        match self {
            Rotation::Horizontal => 0,
            Rotation::Vertical => 90,
        }
    }

    pub fn font_transform(&self) -> FontTransform {
        match self {
            Rotation::Horizontal => FontTransform::None,
            Rotation::Vertical => FontTransform::Rotate90,
        }
    }
}

/// Decide whether tick labels on `axis` should be drawn vertically.
///
/// Empty labels are ignored. Rotation kicks in when there are more than eight
/// labels, when any label is longer than fifteen characters, or when the mean
/// length exceeds ten.
pub fn label_rotation<S: AsRef<str>>(labels: &[S], axis: Axis) -> Rotation {
    let lengths: Vec<usize> = labels
        .iter()
        .map(|l| l.as_ref().chars().count())
        .filter(|len| *len > 0)
        .collect();

    if lengths.is_empty() {
        return Rotation::Horizontal;
    }

    let n = lengths.len();
    let max_len = lengths.iter().copied().max().unwrap_or(0);
    let avg_len = lengths.iter().sum::<usize>() as f64 / n as f64;

    let rotation = if n > MAX_HORIZONTAL_LABELS || max_len > MAX_LABEL_LEN || avg_len > MAX_MEAN_LABEL_LEN
    {
        Rotation::Vertical
    } else {
        Rotation::Horizontal
    };

    tracing::debug!(?axis, n, max_len, avg_len, degrees = rotation.degrees(), "label rotation");
    rotation
}
