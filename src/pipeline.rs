// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

//! FastA files in, dissimilarity matrix out.

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Serialize;

use crate::compare::{compare_records, DissimilarityResult};
use crate::errors::DissimError;
use crate::matrix::DissimilarityMatrix;
use crate::seq::fasta::read_fasta_file;
use crate::seq::file::GeneSet;
use crate::seq::record::{gene_records, GeneRecord};

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub control_source: PathBuf,
    pub comparison_source: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct PipelineOutput {
    pub results: Vec<DissimilarityResult>,
    pub matrix: DissimilarityMatrix,
}

pub fn load_gene_set(path: &Path) -> Result<GeneSet, DissimError> {
    let seq_file = read_fasta_file(path)?;
    let genes = gene_records(seq_file, &path.display().to_string())?;
    info!("{}: {} gene records", path.display(), genes.len());
    Ok(genes)
}

pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineOutput, DissimError> {
    let control = load_gene_set(&config.control_source)?;
    let other = load_gene_set(&config.comparison_source)?;
    compare_gene_sets(&control, &other)
}

pub fn compare_gene_sets(
    control: &[GeneRecord],
    other: &[GeneRecord],
) -> Result<PipelineOutput, DissimError> {
    let results = compare_records(control, other)?;
    info!("{} pairwise comparisons", results.len());
    let matrix = DissimilarityMatrix::from_results(&results);
    if matrix.is_empty() {
        warn!("No gene is shared between the control and comparison sets");
    } else {
        info!(
            "Matrix: {} accessions x {} genes",
            matrix.num_rows(),
            matrix.num_cols()
        );
    }
    Ok(PipelineOutput { results, matrix })
}
