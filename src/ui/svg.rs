// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{fs, path::Path};

use log::info;

use crate::{
    config::PlotLabels,
    errors::DissimError,
    matrix::DissimilarityMatrix,
    ui::color_scale::{contrasting_text, to_hex, ColorScale},
};

const CELL_SIZE: u32 = 48;
const MARGIN: u32 = 16;
const TITLE_FONT_SIZE: u32 = 16;
const AXIS_FONT_SIZE: u32 = 14;
const TICK_FONT_SIZE: u32 = 12;
const ANNOT_FONT_SIZE: u32 = 8;
// Rough advance of a character, as a fraction of the font size.
const CHAR_WIDTH_RATIO: f64 = 0.6;
const X_TICK_ROTATION: f64 = 30.0;
const CELL_SEPARATOR_WIDTH: f64 = 0.9;
const COLORBAR_GAP: u32 = 24;
const COLORBAR_WIDTH: u32 = 16;
const COLORBAR_TICKS: usize = 5;
const COLORBAR_LABEL: &str = "Difference (%)";

pub fn export_heatmap(
    matrix: &DissimilarityMatrix,
    labels: &PlotLabels,
    scale: &ColorScale,
    path: &Path,
) -> Result<(), DissimError> {
    let svg = heatmap_to_svg(matrix, labels, scale);
    fs::write(path, svg)?;
    info!("Wrote heatmap to {}", path.display());
    Ok(())
}

fn text_width(text: &str, font_size: u32) -> f64 {
    text.chars().count() as f64 * font_size as f64 * CHAR_WIDTH_RATIO
}

fn max_text_width(texts: &[String], font_size: u32) -> f64 {
    texts
        .iter()
        .map(|t| text_width(t, font_size))
        .fold(0.0, f64::max)
}

pub fn heatmap_to_svg(
    matrix: &DissimilarityMatrix,
    labels: &PlotLabels,
    scale: &ColorScale,
) -> String {
    let title_lines: Vec<&str> = labels.title.lines().collect();
    let title_height = title_lines.len() as u32 * (TITLE_FONT_SIZE + 4);

    let row_label_width = max_text_width(matrix.rows(), TICK_FONT_SIZE).ceil() as u32;
    // Rotated gene labels hang below the grid.
    let (sin, cos) = X_TICK_ROTATION.to_radians().sin_cos();
    let col_label_extent = max_text_width(matrix.columns(), TICK_FONT_SIZE);
    let col_label_height = (col_label_extent * sin + TICK_FONT_SIZE as f64 * cos).ceil() as u32;

    let grid_x = MARGIN + AXIS_FONT_SIZE + 8 + row_label_width + 8;
    let grid_y = MARGIN + title_height + 12;
    let grid_w = matrix.num_cols() as u32 * CELL_SIZE;
    let grid_h = matrix.num_rows() as u32 * CELL_SIZE;

    let colorbar_x = grid_x + grid_w + COLORBAR_GAP;
    let colorbar_h = grid_h.max(CELL_SIZE);
    let tick_label_width = text_width("100.0", TICK_FONT_SIZE).ceil() as u32;
    let title_width = title_lines
        .iter()
        .map(|l| text_width(l, TITLE_FONT_SIZE))
        .fold(0.0, f64::max)
        .ceil() as u32;

    let content_w = colorbar_x + COLORBAR_WIDTH + 6 + tick_label_width + 8 + AXIS_FONT_SIZE;
    let width_px = (content_w + MARGIN).max(title_width + 2 * MARGIN);
    let x_label_y = grid_y + grid_h + 8 + col_label_height + AXIS_FONT_SIZE + 8;
    let height_px = (x_label_y + MARGIN).max(grid_y + colorbar_h + MARGIN);

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        width_px, height_px, width_px, height_px
    ));
    out.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
    out.push_str("<g font-family=\"sans-serif\" fill=\"black\">\n");

    // Title, centered over the grid
    let title_center = if grid_w > 0 {
        grid_x + grid_w / 2
    } else {
        width_px / 2
    };
    out.push_str(&format!(
        "<text class=\"title\" x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"middle\">",
        title_center,
        MARGIN + TITLE_FONT_SIZE,
        TITLE_FONT_SIZE
    ));
    for (k, line) in title_lines.iter().enumerate() {
        let dy = if k == 0 { 0 } else { TITLE_FONT_SIZE + 4 };
        out.push_str(&format!(
            "<tspan x=\"{}\" dy=\"{}\">{}</tspan>",
            title_center,
            dy,
            escape_svg(line)
        ));
    }
    out.push_str("</text>\n");

    // Cells
    out.push_str(&format!(
        "<g stroke=\"white\" stroke-width=\"{}\">\n",
        CELL_SEPARATOR_WIDTH
    ));
    for i in 0..matrix.num_rows() {
        for j in 0..matrix.num_cols() {
            if let Some(value) = matrix.cell(i, j) {
                out.push_str(&format!(
                    "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
                    grid_x + j as u32 * CELL_SIZE,
                    grid_y + i as u32 * CELL_SIZE,
                    CELL_SIZE,
                    CELL_SIZE,
                    to_hex(scale.rgb(value))
                ));
            }
        }
    }
    out.push_str("</g>\n");

    // Annotations
    out.push_str(&format!(
        "<g font-size=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\">\n",
        ANNOT_FONT_SIZE
    ));
    for i in 0..matrix.num_rows() {
        for j in 0..matrix.num_cols() {
            if let Some(value) = matrix.cell(i, j) {
                out.push_str(&format!(
                    "<text x=\"{}\" y=\"{}\" fill=\"{}\">{:.1}</text>\n",
                    grid_x + j as u32 * CELL_SIZE + CELL_SIZE / 2,
                    grid_y + i as u32 * CELL_SIZE + CELL_SIZE / 2,
                    to_hex(contrasting_text(scale.rgb(value))),
                    value
                ));
            }
        }
    }
    out.push_str("</g>\n");

    // Row (accession) labels, horizontal
    out.push_str(&format!(
        "<g font-size=\"{}\" text-anchor=\"end\" dominant-baseline=\"central\">\n",
        TICK_FONT_SIZE
    ));
    for (i, row) in matrix.rows().iter().enumerate() {
        out.push_str(&format!(
            "<text x=\"{}\" y=\"{}\">{}</text>\n",
            grid_x - 6,
            grid_y + i as u32 * CELL_SIZE + CELL_SIZE / 2,
            escape_svg(row)
        ));
    }
    out.push_str("</g>\n");

    // Column (gene) labels, rotated
    out.push_str(&format!(
        "<g font-size=\"{}\" text-anchor=\"end\">\n",
        TICK_FONT_SIZE
    ));
    for (j, col) in matrix.columns().iter().enumerate() {
        let x = grid_x + j as u32 * CELL_SIZE + CELL_SIZE / 2;
        let y = grid_y + grid_h + TICK_FONT_SIZE;
        out.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" transform=\"rotate(-{} {} {})\">{}</text>\n",
            x,
            y,
            X_TICK_ROTATION,
            x,
            y,
            escape_svg(col)
        ));
    }
    out.push_str("</g>\n");

    // Axis labels
    out.push_str(&format!(
        "<text class=\"x-label\" x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"middle\">{}</text>\n",
        grid_x + grid_w / 2,
        x_label_y,
        AXIS_FONT_SIZE,
        escape_svg(&labels.x_label)
    ));
    let y_label_x = MARGIN + AXIS_FONT_SIZE;
    let y_label_y = grid_y + grid_h / 2;
    out.push_str(&format!(
        "<text class=\"y-label\" x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"middle\" transform=\"rotate(-90 {} {})\">{}</text>\n",
        y_label_x,
        y_label_y,
        AXIS_FONT_SIZE,
        y_label_x,
        y_label_y,
        escape_svg(&labels.y_label)
    ));

    out.push_str(&colorbar_svg(scale, colorbar_x, grid_y, colorbar_h));

    out.push_str("</g>\n</svg>\n");
    out
}

fn colorbar_svg(scale: &ColorScale, x: u32, y: u32, height: u32) -> String {
    let stops = scale.stops();
    let mut out = String::new();
    // Top of the bar is the maximum.
    out.push_str("<defs><linearGradient id=\"colorbar\" x1=\"0\" y1=\"1\" x2=\"0\" y2=\"0\">");
    out.push_str(&format!(
        "<stop offset=\"0\" stop-color=\"{}\"/><stop offset=\"0.5\" stop-color=\"{}\"/><stop offset=\"1\" stop-color=\"{}\"/>",
        to_hex(stops.low),
        to_hex(stops.mid),
        to_hex(stops.high)
    ));
    out.push_str("</linearGradient></defs>\n");
    out.push_str(&format!(
        "<rect class=\"colorbar\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"url(#colorbar)\"/>\n",
        x, y, COLORBAR_WIDTH, height
    ));

    out.push_str(&format!(
        "<g font-size=\"{}\" dominant-baseline=\"central\">\n",
        TICK_FONT_SIZE
    ));
    for k in 0..COLORBAR_TICKS {
        let t = k as f64 / (COLORBAR_TICKS - 1) as f64;
        let value = scale.min() + (scale.max() - scale.min()) * t;
        let ty = y as f64 + height as f64 * (1.0 - t);
        out.push_str(&format!(
            "<line x1=\"{}\" y1=\"{:.1}\" x2=\"{}\" y2=\"{:.1}\" stroke=\"black\"/>",
            x + COLORBAR_WIDTH,
            ty,
            x + COLORBAR_WIDTH + 3,
            ty
        ));
        out.push_str(&format!(
            "<text x=\"{}\" y=\"{:.1}\">{:.1}</text>\n",
            x + COLORBAR_WIDTH + 6,
            ty,
            value
        ));
    }
    out.push_str("</g>\n");

    let tick_label_width = text_width("100.0", TICK_FONT_SIZE).ceil() as u32;
    let label_x = x + COLORBAR_WIDTH + 6 + tick_label_width + 8 + AXIS_FONT_SIZE / 2;
    let label_y = y + height / 2;
    out.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"middle\" transform=\"rotate(90 {} {})\">{}</text>\n",
        label_x, label_y, AXIS_FONT_SIZE, label_x, label_y, COLORBAR_LABEL
    ));
    out
}

fn escape_svg(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
