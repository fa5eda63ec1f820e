//! Step-waveform geometry for a signal.
//!
//! A signal is drawn as a step trace: one horizontal segment per sample at
//! the sample's level, joined by vertical segments at sample boundaries.

use crate::level::Level;

/// Horizontal padding as a fraction of the viewport width.
pub const PADDING_X: f64 = 0.05;
/// Vertical padding as a fraction of the viewport height.
pub const PADDING_Y: f64 = 0.15;

/// Drawing area, origin at the bottom-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Left edge.
    pub x: f64,
    /// Bottom edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Viewport {
    /// Viewport anchored at the origin.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// Vertical coordinate for a level.
    pub fn level_y(&self, level: Level) -> f64 {
        let pad_y = self.height * PADDING_Y;
        match level {
            Level::Low => self.y + pad_y,
            Level::Zero => self.y + self.height / 2.0,
            Level::High => self.y + self.height - pad_y,
        }
    }
}

/// Polyline vertices of the step trace for `levels` inside `viewport`.
///
/// Every boundary contributes a vertical segment, even a zero-length one
/// between equal levels. An empty signal has no vertices.
pub fn step_points(levels: &[Level], viewport: &Viewport) -> Vec<(f64, f64)> {
    if levels.is_empty() {
        return Vec::new();
    }
    let pad_x = viewport.width * PADDING_X;
    let step = (viewport.width - 2.0 * pad_x) / levels.len() as f64;

    let mut points = Vec::with_capacity(levels.len() * 3);
    let mut x = viewport.x + pad_x;
    for &level in levels {
        let y = viewport.level_y(level);
        match points.last() {
            None => points.push((x, y)),
            Some(&(_, prev_y)) => {
                points.push((x, prev_y));
                points.push((x, y));
            }
        }
        x += step;
        points.push((x, y));
    }
    points
}

fn row(level: Level) -> usize {
    match level {
        Level::High => 0,
        Level::Zero => 1,
        Level::Low => 2,
    }
}

/// Plot a signal as three text rows (high, zero, low).
///
/// Each sample is `columns_per_sample` characters wide (at least one); a
/// level change adds a `│` column. Trailing blanks are trimmed.
pub fn render_text(levels: &[Level], columns_per_sample: usize) -> String {
    if levels.is_empty() {
        return String::new();
    }
    let cols = columns_per_sample.max(1);
    let mut rows: [String; 3] = Default::default();

    let mut prev: Option<Level> = None;
    for &level in levels {
        if let Some(p) = prev.filter(|&p| p != level) {
            let (lo, hi) = (row(p).min(row(level)), row(p).max(row(level)));
            for (r, line) in rows.iter_mut().enumerate() {
                line.push(if (lo..=hi).contains(&r) { '│' } else { ' ' });
            }
        }
        for (r, line) in rows.iter_mut().enumerate() {
            let ch = if r == row(level) { '─' } else { ' ' };
            line.extend(std::iter::repeat(ch).take(cols));
        }
        prev = Some(level);
    }

    rows.iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}
