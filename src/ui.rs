// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton
pub mod color_scale;
pub mod heatmap_widget;
pub mod svg;
pub mod table;

use std::{
    io::{stdout, Stdout},
    time::Duration,
};

use log::debug;

use crossterm::{
    event::{self, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};

use ratatui::{
    prelude::{CrosstermBackend, Terminal},
    style::Style,
};

use crate::{
    config::PlotLabels,
    errors::DissimError,
    matrix::DissimilarityMatrix,
    ui::{color_scale::ColorScale, heatmap_widget::HeatmapPane},
};

const POLL_WAIT: Duration = Duration::from_millis(50);

/// Shows the heatmap full-screen until any key is pressed.
pub fn show_heatmap(
    matrix: &DissimilarityMatrix,
    labels: &PlotLabels,
    scale: &ColorScale,
) -> Result<(), DissimError> {
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;

    let result = heatmap_loop(matrix, labels, scale);

    // Restore the terminal even if drawing failed.
    let left = stdout().execute(LeaveAlternateScreen).map(|_| ());
    let raw = disable_raw_mode();
    first_error(result, left, raw)
}

// The drawing error wins over the restore errors, which are reported in the order they happened.
fn first_error(
    result: Result<(), DissimError>,
    left: std::io::Result<()>,
    raw: std::io::Result<()>,
) -> Result<(), DissimError> {
    result?;
    left?;
    raw?;
    Ok(())
}

fn heatmap_loop(
    matrix: &DissimilarityMatrix,
    labels: &PlotLabels,
    scale: &ColorScale,
) -> Result<(), DissimError> {
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    draw_heatmap(&mut terminal, matrix, labels, scale)?;

    loop {
        if event::poll(POLL_WAIT)? {
            match event::read()? {
                event::Event::Key(key) if key.kind == KeyEventKind::Press => break,
                event::Event::Resize(w, h) => {
                    debug!("terminal resized to {}x{}", w, h);
                    draw_heatmap(&mut terminal, matrix, labels, scale)?;
                }
                _ => {}
            }
        }
    }
    Ok(())
}

fn draw_heatmap(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    matrix: &DissimilarityMatrix,
    labels: &PlotLabels,
    scale: &ColorScale,
) -> Result<(), DissimError> {
    terminal.draw(|f| {
        let pane = HeatmapPane {
            matrix,
            labels,
            scale,
            base_style: Style::default(),
        };
        f.render_widget(pane, f.area());
    })?;
    Ok(())
}
