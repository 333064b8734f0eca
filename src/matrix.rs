// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::collections::HashMap;

use itertools::Itertools;
use serde::Serialize;

use crate::compare::DissimilarityResult;

/// Mean dissimilarity per (comparison accession, gene). Rows and columns are sorted
/// lexicographically; a cell is `None` when no result contributed to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DissimilarityMatrix {
    rows: Vec<String>,
    columns: Vec<String>,
    cells: Vec<Vec<Option<f64>>>,
}

impl DissimilarityMatrix {
    pub fn from_results(results: &[DissimilarityResult]) -> Self {
        let rows: Vec<String> = results
            .iter()
            .map(|r| r.other_accession.clone())
            .sorted()
            .dedup()
            .collect();
        let columns: Vec<String> = results
            .iter()
            .map(|r| r.gene.clone())
            .sorted()
            .dedup()
            .collect();
        let row_index: HashMap<&str, usize> = rows
            .iter()
            .enumerate()
            .map(|(i, r)| (r.as_str(), i))
            .collect();
        let col_index: HashMap<&str, usize> = columns
            .iter()
            .enumerate()
            .map(|(j, c)| (c.as_str(), j))
            .collect();

        // (sum, count) per cell; duplicates are averaged, not overwritten.
        let mut acc: Vec<Vec<(f64, usize)>> = vec![vec![(0.0, 0); columns.len()]; rows.len()];
        for res in results {
            let i = row_index[res.other_accession.as_str()];
            let j = col_index[res.gene.as_str()];
            acc[i][j].0 += res.dissimilarity_percent;
            acc[i][j].1 += 1;
        }
        let cells = acc
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|(sum, n)| if n == 0 { None } else { Some(sum / n as f64) })
                    .collect()
            })
            .collect();

        DissimilarityMatrix {
            rows,
            columns,
            cells,
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell by position.
    pub fn cell(&self, i: usize, j: usize) -> Option<f64> {
        self.cells.get(i).and_then(|row| row.get(j)).copied().flatten()
    }

    /// Cell by labels.
    pub fn get(&self, accession: &str, gene: &str) -> Option<f64> {
        let i = self.rows.iter().position(|r| r == accession)?;
        let j = self.columns.iter().position(|c| c == gene)?;
        self.cell(i, j)
    }

    /// Smallest and largest defined cell values, if any.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .copied()
            .minmax_by(|a, b| a.total_cmp(b))
            .into_option()
    }
}
