// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use log::info;

use crate::config::{find_config, RunConfig, Settings};
use crate::errors::DissimError;
use crate::pipeline::{run_pipeline, PipelineConfig, PipelineOutput};
use crate::ui::{color_scale::ColorScale, show_heatmap, svg::export_heatmap, table::matrix_table};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Control (reference) FastA file
    control: PathBuf,

    /// Comparison FastA file
    comparison: PathBuf,

    /// Output SVG file [default: dissimilarity.svg]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Plot title
    #[arg(long)]
    title: Option<String>,

    /// X axis label
    #[arg(long = "x-label")]
    x_label: Option<String>,

    /// Y axis label
    #[arg(long = "y-label")]
    y_label: Option<String>,

    /// Config file (JSON); default: .genedissimconfig in $HOME, then in the current directory
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write the pairwise results and the matrix as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print the matrix as a table on stdout
    #[arg(short, long)]
    info: bool,

    /// Show the heatmap in the terminal once written
    #[arg(short, long)]
    show: bool,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            output: self.output.clone(),
            title: self.title.clone(),
            x_label: self.x_label.clone(),
            y_label: self.y_label.clone(),
            ..Default::default()
        }
    }
}

fn resolve_config(cli: &Cli) -> Result<RunConfig, DissimError> {
    let file_settings = match &cli.config {
        Some(path) => {
            if !path.is_file() {
                return Err(DissimError::InputNotFound(path.clone()));
            }
            Settings::from_file(path)?
        }
        None => match find_config() {
            Some(path) => {
                info!("Using config file {}", path.display());
                Settings::from_file(&path)?
            }
            None => Settings::default(),
        },
    };
    let pipeline = PipelineConfig {
        control_source: cli.control.clone(),
        comparison_source: cli.comparison.clone(),
    };
    RunConfig::new(pipeline, cli.settings().or(file_settings))
}

fn write_json_report(output: &PipelineOutput, path: &Path) -> Result<(), DissimError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, output).map_err(io::Error::from)?;
    writer.flush()?;
    info!("Wrote JSON report to {}", path.display());
    Ok(())
}

pub fn run() -> Result<(), DissimError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    let output = run_pipeline(&config.pipeline)?;
    let scale = ColorScale::for_matrix(config.colors, &output.matrix);

    export_heatmap(&output.matrix, &config.labels, &scale, &config.output_path)?;
    if let Some(path) = &cli.json {
        write_json_report(&output, path)?;
    }

    if cli.info {
        print!("{}", matrix_table(&output.matrix));
    }

    if cli.show {
        show_heatmap(&output.matrix, &config.labels, &scale)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_and_config_file() {
        let cli = Cli::parse_from([
            "genedissim",
            "tests/data/control.fasta",
            "tests/data/comparison.fasta",
            "--config",
            "tests/data/config.json",
            "--x-label",
            "Gene",
        ]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(
            config.pipeline.control_source,
            PathBuf::from("tests/data/control.fasta")
        );
        // from the config file
        assert_eq!(config.labels.title, "Mitochondrial gene divergence");
        assert_eq!(config.labels.y_label, "Accession");
        assert_eq!(config.colors.high, (255, 0, 0));
        // from the command line
        assert_eq!(config.labels.x_label, "Gene");
        // default
        assert_eq!(config.output_path, PathBuf::from("dissimilarity.svg"));
    }

    #[test]
    fn test_cli_title_overrides_config_file() {
        let cli = Cli::parse_from([
            "genedissim",
            "a.fasta",
            "b.fasta",
            "-c",
            "tests/data/config.json",
            "--title",
            "Mus",
            "-o",
            "mus.svg",
        ]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.labels.title, "Mus");
        assert_eq!(config.output_path, PathBuf::from("mus.svg"));
    }

    #[test]
    fn test_missing_config_file() {
        let cli = Cli::parse_from([
            "genedissim",
            "a.fasta",
            "b.fasta",
            "--config",
            "tests/data/no-such-config.json",
        ]);
        assert!(matches!(
            resolve_config(&cli),
            Err(DissimError::InputNotFound(_))
        ));
    }

    #[test]
    fn test_json_report() {
        let config = PipelineConfig {
            control_source: PathBuf::from("tests/data/control.fasta"),
            comparison_source: PathBuf::from("tests/data/comparison.fasta"),
        };
        let output = run_pipeline(&config).unwrap();
        let path = std::env::temp_dir().join(format!("genedissim-{}.json", std::process::id()));
        write_json_report(&output, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["results"].as_array().unwrap().len(), 6);
        assert_eq!(value["matrix"]["rows"][0], "NC_010339.1");
        assert_eq!(value["matrix"]["columns"][1], "CYTB");
        assert!(value["matrix"]["cells"][0][1].is_null());
    }
}
