// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use crate::matrix::DissimilarityMatrix;

const MIN_COL_WIDTH: usize = 6;
const ROW_HEADER: &str = "accession";

/// Plain-text rendition of the matrix, one line per accession; missing cells are shown as '-'.
pub fn matrix_table(matrix: &DissimilarityMatrix) -> String {
    let acc_w = matrix
        .rows()
        .iter()
        .map(|r| r.chars().count())
        .chain(std::iter::once(ROW_HEADER.len()))
        .max()
        .unwrap_or(0);
    let col_widths: Vec<usize> = matrix
        .columns()
        .iter()
        .map(|c| c.chars().count().max(MIN_COL_WIDTH))
        .collect();

    let mut out = format!("{:<w$}", ROW_HEADER, w = acc_w);
    for (col, w) in matrix.columns().iter().zip(&col_widths) {
        out.push_str(&format!("  {:>w$}", col, w = w));
    }
    out.push('\n');

    for (i, row) in matrix.rows().iter().enumerate() {
        out.push_str(&format!("{:<w$}", row, w = acc_w));
        for (j, w) in col_widths.iter().enumerate() {
            let value = match matrix.cell(i, j) {
                Some(v) => format!("{:.1}", v),
                None => String::from("-"),
            };
            out.push_str(&format!("  {:>w$}", value, w = w));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::DissimilarityResult;

    fn result(other: &str, gene: &str, pct: f64) -> DissimilarityResult {
        DissimilarityResult {
            control_accession: String::from("NC_1"),
            other_accession: String::from(other),
            gene: String::from(gene),
            dissimilarity_percent: pct,
        }
    }

    #[test]
    fn test_matrix_table() {
        let results = vec![
            result("NC_2", "COX1", 25.0),
            result("NC_3", "ND1", 12.5),
            result("NC_3", "COX1", 100.0),
        ];
        let matrix = DissimilarityMatrix::from_results(&results);
        insta::assert_snapshot!(matrix_table(&matrix), @r###"
        accession    COX1     ND1
        NC_2         25.0       -
        NC_3        100.0    12.5
        "###);
    }

    #[test]
    fn test_empty_matrix_table() {
        let matrix = DissimilarityMatrix::from_results(&[]);
        assert_eq!(matrix_table(&matrix), "accession\n");
    }
}
