// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use ratatui::style::Color;

use crate::matrix::DissimilarityMatrix;

/// Three-stop diverging palette: `low` at the minimum, `mid` halfway, `high` at the maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStops {
    pub low: (u8, u8, u8),
    pub mid: (u8, u8, u8),
    pub high: (u8, u8, u8),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    stops: ColorStops,
    min: f64,
    max: f64,
}

impl ColorScale {
    pub fn new(stops: ColorStops, min: f64, max: f64) -> Self {
        ColorScale { stops, min, max }
    }

    // The scale spans the matrix's values, like an auto-scaled heatmap; an empty matrix gets the
    // full percentage range.
    pub fn for_matrix(stops: ColorStops, matrix: &DissimilarityMatrix) -> Self {
        let (min, max) = matrix.value_range().unwrap_or((0.0, 100.0));
        ColorScale::new(stops, min, max)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn stops(&self) -> ColorStops {
        self.stops
    }

    /// Position of `value` within the scale, clamped to [0, 1]. A degenerate scale maps
    /// everything to the middle.
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.5;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    pub fn rgb(&self, value: f64) -> (u8, u8, u8) {
        let t = self.fraction(value);
        if t < 0.5 {
            lerp(self.stops.low, self.stops.mid, t * 2.0)
        } else {
            lerp(self.stops.mid, self.stops.high, (t - 0.5) * 2.0)
        }
    }

    pub fn color(&self, value: f64) -> Color {
        let (r, g, b) = self.rgb(value);
        Color::Rgb(r, g, b)
    }
}

fn lerp(from: (u8, u8, u8), to: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    (mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

/// Black or white, whichever reads better on `bg`.
pub fn contrasting_text(bg: (u8, u8, u8)) -> (u8, u8, u8) {
    let (r, g, b) = bg;
    let luminance = 0.2126 * r as f64 + 0.7152 * g as f64 + 0.0722 * b as f64;
    if luminance > 140.0 {
        (0, 0, 0)
    } else {
        (255, 255, 255)
    }
}

pub fn to_hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
