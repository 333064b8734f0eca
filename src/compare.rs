// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::collections::HashMap;

use itertools::Itertools;
use log::debug;
use serde::Serialize;

use crate::errors::DissimError;
use crate::score::dissimilarity;
use crate::seq::record::GeneRecord;

/// One scored (control, comparison) pairing for a shared gene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DissimilarityResult {
    pub control_accession: String,
    pub other_accession: String,
    pub gene: String,
    pub dissimilarity_percent: f64,
}

/// Inner join of the two record sets on gene name (exact, case-sensitive), scoring every matching
/// pair. Results follow control order, then comparison order within each gene. Duplicate entries
/// are kept.
pub fn compare_records(
    control: &[GeneRecord],
    other: &[GeneRecord],
) -> Result<Vec<DissimilarityResult>, DissimError> {
    // Grouping keeps the comparison set's order within each gene.
    let by_gene: HashMap<&str, Vec<&GeneRecord>> = other
        .iter()
        .map(|rec| (rec.gene.as_str(), rec))
        .into_group_map();

    let mut results: Vec<DissimilarityResult> = Vec::new();
    for ctrl in control {
        let Some(matches) = by_gene.get(ctrl.gene.as_str()) else {
            debug!(
                "{}: no comparison record for gene {}",
                ctrl.accession, ctrl.gene
            );
            continue;
        };
        for oth in matches {
            let pct = dissimilarity(&ctrl.sequence, &oth.sequence).map_err(|_| {
                DissimError::EmptySequenceComparison(format!(
                    "{} vs {} (gene {})",
                    ctrl.accession, oth.accession, ctrl.gene
                ))
            })?;
            debug!(
                "{} vs {} [{}]: {:.2}%",
                ctrl.accession, oth.accession, ctrl.gene, pct
            );
            results.push(DissimilarityResult {
                control_accession: ctrl.accession.clone(),
                other_accession: oth.accession.clone(),
                gene: ctrl.gene.clone(),
                dissimilarity_percent: pct,
            });
        }
    }
    Ok(results)
}
