// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::path::PathBuf;

use genedissim::{
    config::PlotLabels,
    pipeline::{run_pipeline, PipelineConfig},
    ui::{
        color_scale::{ColorScale, ColorStops},
        svg::export_heatmap,
    },
};

#[test]
fn writes_heatmap_svg_file() {
    let config = PipelineConfig {
        control_source: PathBuf::from("tests/data/control.fasta"),
        comparison_source: PathBuf::from("tests/data/comparison.fasta"),
    };
    let output = run_pipeline(&config).expect("pipeline");
    let stops = ColorStops {
        low: (0x3b, 0x4c, 0xc0),
        mid: (0xdd, 0xdd, 0xdd),
        high: (0xb4, 0x04, 0x26),
    };
    let scale = ColorScale::for_matrix(stops, &output.matrix);
    let labels = PlotLabels {
        title: String::from("Mus mitochondrial genes"),
        x_label: String::from("Genes"),
        y_label: String::from("Species"),
    };

    let path = std::env::temp_dir().join(format!("genedissim-export-{}.svg", std::process::id()));
    export_heatmap(&output.matrix, &labels, &scale, &path).expect("export");
    let svg = std::fs::read_to_string(&path).expect("read back");
    std::fs::remove_file(&path).ok();

    assert!(svg.starts_with("<?xml"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains(">Mus mitochondrial genes</tspan>"));
    for label in ["NC_010339.1", "NC_012387.1", "COX1", "CYTB", "ND1"] {
        assert!(svg.contains(&format!(">{}</text>", label)), "missing {}", label);
    }
    // NC_012387.1 COX1 is the mean of 0 and 10; NC_010339.1 has no CYTB cell.
    assert!(svg.contains(">5.0</text>"));
    assert!(svg.contains(">15.0</text>"));
    assert!(svg.contains(">20.0</text>"));
    assert!(svg.contains(">7.1</text>"));
    // 5 of the 6 cells are defined; max is the high color, min the low one.
    assert_eq!(svg.matches("<rect x=").count(), 5);
    assert!(svg.contains("fill=\"#b40426\""));
    assert!(svg.contains("fill=\"#3b4cc0\""));
}

#[test]
fn export_into_missing_directory_fails() {
    let config = PipelineConfig {
        control_source: PathBuf::from("tests/data/control.fasta"),
        comparison_source: PathBuf::from("tests/data/comparison.fasta"),
    };
    let output = run_pipeline(&config).expect("pipeline");
    let stops = ColorStops {
        low: (0, 0, 255),
        mid: (255, 255, 255),
        high: (255, 0, 0),
    };
    let scale = ColorScale::for_matrix(stops, &output.matrix);
    let path = PathBuf::from("tests/data/no-such-dir/out.svg");
    let err = export_heatmap(&output.matrix, &PlotLabels::default(), &scale, &path).unwrap_err();
    assert!(matches!(err, genedissim::errors::DissimError::Io(_)));
}
