// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

//! Run configuration: command-line values take precedence over the config file, which takes
//! precedence over the built-in defaults.

use std::path::{Path, PathBuf};

use hex_color::HexColor;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::DissimError;
use crate::pipeline::PipelineConfig;
use crate::ui::color_scale::ColorStops;

pub const CONFIG_FILENAME: &str = ".genedissimconfig";

pub const DEFAULT_OUTPUT: &str = "dissimilarity.svg";
pub const DEFAULT_TITLE: &str = "Genetic difference in the mitochondrial genome of related species";
pub const DEFAULT_X_LABEL: &str = "Genes";
pub const DEFAULT_Y_LABEL: &str = "Species";
// Cool-warm diverging palette.
pub const DEFAULT_LOW_COLOR: &str = "#3b4cc0";
pub const DEFAULT_MID_COLOR: &str = "#dddddd";
pub const DEFAULT_HIGH_COLOR: &str = "#b40426";

/// Optional settings, as found in a config file or on the command line.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub output: Option<PathBuf>,
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub low_color: Option<String>,
    pub mid_color: Option<String>,
    pub high_color: Option<String>,
}

impl Settings {
    pub fn from_value(value: &Value) -> Result<Settings, DissimError> {
        Ok(Settings::deserialize(value)?)
    }

    pub fn from_file(path: &Path) -> Result<Settings, DissimError> {
        let text = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&text).map_err(|e| {
            DissimError::Config(format!("Error reading {}: {}", path.display(), e))
        })?;
        Settings::from_value(&value)
    }

    /// Field-wise: keep own value, else take `fallback`'s.
    pub fn or(self, fallback: Settings) -> Settings {
        Settings {
            output: self.output.or(fallback.output),
            title: self.title.or(fallback.title),
            x_label: self.x_label.or(fallback.x_label),
            y_label: self.y_label.or(fallback.y_label),
            low_color: self.low_color.or(fallback.low_color),
            mid_color: self.mid_color.or(fallback.mid_color),
            high_color: self.high_color.or(fallback.high_color),
        }
    }
}

pub fn find_config() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        let path = PathBuf::from(home).join(CONFIG_FILENAME);
        if path.exists() {
            return Some(path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILENAME);
        if path.exists() {
            return Some(path);
        }
    }
    None
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Default for PlotLabels {
    fn default() -> Self {
        PlotLabels {
            title: String::from(DEFAULT_TITLE),
            x_label: String::from(DEFAULT_X_LABEL),
            y_label: String::from(DEFAULT_Y_LABEL),
        }
    }
}

/// Everything a run needs, fully resolved.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub pipeline: PipelineConfig,
    pub output_path: PathBuf,
    pub labels: PlotLabels,
    pub colors: ColorStops,
}

impl RunConfig {
    pub fn new(pipeline: PipelineConfig, settings: Settings) -> Result<RunConfig, DissimError> {
        let colors = ColorStops {
            low: parse_color(settings.low_color.as_deref().unwrap_or(DEFAULT_LOW_COLOR))?,
            mid: parse_color(settings.mid_color.as_deref().unwrap_or(DEFAULT_MID_COLOR))?,
            high: parse_color(settings.high_color.as_deref().unwrap_or(DEFAULT_HIGH_COLOR))?,
        };
        Ok(RunConfig {
            pipeline,
            output_path: settings
                .output
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            labels: PlotLabels {
                title: settings.title.unwrap_or_else(|| String::from(DEFAULT_TITLE)),
                x_label: settings
                    .x_label
                    .unwrap_or_else(|| String::from(DEFAULT_X_LABEL)),
                y_label: settings
                    .y_label
                    .unwrap_or_else(|| String::from(DEFAULT_Y_LABEL)),
            },
            colors,
        })
    }
}

pub fn parse_color(s: &str) -> Result<(u8, u8, u8), DissimError> {
    let color = HexColor::parse_rgb(s)
        .map_err(|e| DissimError::Config(format!("Bad color '{}': {}", s, e)))?;
    Ok((color.r, color.g, color.b))
}
