// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use ratatui::{
    prelude::{Buffer, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::{
    config::PlotLabels,
    matrix::DissimilarityMatrix,
    ui::color_scale::{contrasting_text, ColorScale},
};

// Wide enough for "100.0" plus a space on each side.
pub const CELL_WIDTH: u16 = 7;
const COLORBAR_STEPS: u16 = 20;

/// Terminal rendition of the heatmap: title, gene header, one line per accession, then the x
/// label and a color bar. Cells that don't fit are clipped.
pub struct HeatmapPane<'a> {
    pub matrix: &'a DissimilarityMatrix,
    pub labels: &'a PlotLabels,
    pub scale: &'a ColorScale,
    pub base_style: Style,
}

impl<'a> HeatmapPane<'a> {
    fn label_width(&self) -> u16 {
        (self
            .matrix
            .rows()
            .iter()
            .map(|r| r.chars().count())
            .chain(std::iter::once(self.labels.y_label.chars().count()))
            .max()
            .unwrap_or(0)
            .min(u16::MAX as usize) as u16)
            .saturating_add(1)
    }
}

impl<'a> Widget for HeatmapPane<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear the pane so “extra space” doesn’t show stale cells.
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut(Position::from((x, y))) {
                    cell.set_char(' ').set_style(self.base_style);
                }
            }
        }
        if area.width == 0 || area.height == 0 {
            return;
        }

        let bold = self.base_style.add_modifier(Modifier::BOLD);
        let mut y = area.y;
        for line in self.labels.title.lines() {
            if y >= area.bottom() {
                return;
            }
            buf.set_stringn(area.x, y, line, area.width as usize, bold);
            y += 1;
        }
        y += 1;

        let label_w = self.label_width();
        let grid_x = area.x.saturating_add(label_w);
        let right = area.right();

        // Header: y label over the accessions, gene names over the cells
        if y < area.bottom() {
            buf.set_stringn(area.x, y, &self.labels.y_label, label_w as usize, bold);
            for (j, gene) in self.matrix.columns().iter().enumerate() {
                let x = grid_x.saturating_add(j as u16 * CELL_WIDTH);
                if x >= right {
                    break;
                }
                let text = format!("{:^w$}", gene, w = CELL_WIDTH as usize);
                let avail = (right - x).min(CELL_WIDTH) as usize;
                buf.set_stringn(x, y, text, avail, self.base_style);
            }
            y += 1;
        }

        for (i, acc) in self.matrix.rows().iter().enumerate() {
            if y >= area.bottom() {
                return;
            }
            buf.set_stringn(area.x, y, acc, label_w as usize, self.base_style);
            for j in 0..self.matrix.num_cols() {
                let x = grid_x.saturating_add(j as u16 * CELL_WIDTH);
                if x >= right {
                    break;
                }
                let avail = (right - x).min(CELL_WIDTH) as usize;
                match self.matrix.cell(i, j) {
                    Some(value) => {
                        let bg = self.scale.rgb(value);
                        let (r, g, b) = contrasting_text(bg);
                        let style = Style::default()
                            .bg(Color::Rgb(bg.0, bg.1, bg.2))
                            .fg(Color::Rgb(r, g, b));
                        let text = format!("{:^w$.1}", value, w = CELL_WIDTH as usize);
                        buf.set_stringn(x, y, text, avail, style);
                    }
                    None => {
                        let text = format!("{:^w$}", "", w = CELL_WIDTH as usize);
                        buf.set_stringn(x, y, text, avail, self.base_style);
                    }
                }
            }
            y += 1;
        }

        y += 1;
        if y < area.bottom() && grid_x < right {
            buf.set_stringn(grid_x, y, &self.labels.x_label, (right - grid_x) as usize, bold);
            y += 1;
        }

        // Color bar: min, gradient, max
        if y < area.bottom() {
            let min_txt = format!("{:.1} ", self.scale.min());
            let (mut x, _) =
                buf.set_stringn(area.x, y, &min_txt, area.width as usize, self.base_style);
            for k in 0..COLORBAR_STEPS {
                if x >= right {
                    return;
                }
                let t = k as f64 / (COLORBAR_STEPS - 1) as f64;
                let value = self.scale.min() + (self.scale.max() - self.scale.min()) * t;
                if let Some(cell) = buf.cell_mut(Position::from((x, y))) {
                    cell.set_char(' ').set_bg(self.scale.color(value));
                }
                x += 1;
            }
            if x < right {
                let max_txt = format!(" {:.1}", self.scale.max());
                buf.set_stringn(x, y, max_txt, (right - x) as usize, self.base_style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::DissimilarityResult;
    use crate::ui::color_scale::ColorStops;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                let cell = buf.cell(Position::from((x, y))).expect("buffer position");
                out.push(cell.symbol().chars().next().unwrap_or(' '));
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_cells_with_scale_colors() {
        let results = vec![
            DissimilarityResult {
                control_accession: String::from("NC_1"),
                other_accession: String::from("NC_2"),
                gene: String::from("COX1"),
                dissimilarity_percent: 25.0,
            },
            DissimilarityResult {
                control_accession: String::from("NC_1"),
                other_accession: String::from("NC_3"),
                gene: String::from("ND1"),
                dissimilarity_percent: 5.0,
            },
        ];
        let matrix = DissimilarityMatrix::from_results(&results);
        let stops = ColorStops {
            low: (0, 0, 255),
            mid: (255, 255, 255),
            high: (255, 0, 0),
        };
        let scale = ColorScale::for_matrix(stops, &matrix);
        let labels = PlotLabels {
            title: String::from("Title"),
            x_label: String::from("Genes"),
            y_label: String::from("Species"),
        };
        let pane = HeatmapPane {
            matrix: &matrix,
            labels: &labels,
            scale: &scale,
            base_style: Style::default(),
        };
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        pane.render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.starts_with("Title"));
        assert!(text.contains("Species"));
        assert!(text.contains("COX1"));
        assert!(text.contains("NC_2"));
        assert!(text.contains("25.0"));
        assert!(text.contains("5.0"));
        assert!(text.contains("Genes"));

        // Label column is "Species" + 1 wide; NC_2 is the first data row (line 3).
        let grid_x = "Species".len() as u16 + 1;
        let cell = buf.cell(Position::from((grid_x, 3))).expect("buffer position");
        assert_eq!(cell.bg, Color::Rgb(255, 0, 0));
        let cell = buf
            .cell(Position::from((grid_x + CELL_WIDTH, 4)))
            .expect("buffer position");
        assert_eq!(cell.bg, Color::Rgb(0, 0, 255));
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let matrix = DissimilarityMatrix::from_results(&[]);
        let stops = ColorStops {
            low: (0, 0, 0),
            mid: (1, 1, 1),
            high: (2, 2, 2),
        };
        let scale = ColorScale::for_matrix(stops, &matrix);
        let labels = PlotLabels::default();
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        HeatmapPane {
            matrix: &matrix,
            labels: &labels,
            scale: &scale,
            base_style: Style::default(),
        }
        .render(area, &mut buf);
    }
}
