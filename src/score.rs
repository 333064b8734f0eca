// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

//! Alignment-free dissimilarity between two sequences.
//!
//! Symbols are compared position by position over the overlapping prefix only; positions past the
//! end of the shorter sequence are not mismatches, but the longer length is the denominator.

use crate::errors::DissimError;

/// Number of positions, within the common prefix, where the two sequences differ.
pub fn mismatches(seq1: &str, seq2: &str) -> usize {
    seq1.chars()
        .zip(seq2.chars())
        .filter(|(a, b)| a != b)
        .count()
}

/// Percentage of mismatched positions relative to the longer sequence, in [0, 100].
pub fn dissimilarity(seq1: &str, seq2: &str) -> Result<f64, DissimError> {
    let max_length = seq1.chars().count().max(seq2.chars().count());
    if max_length == 0 {
        return Err(DissimError::EmptySequenceComparison(String::from(
            "both sequences are empty",
        )));
    }
    Ok(mismatches(seq1, seq2) as f64 / max_length as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_all_different() {
        assert_relative_eq!(dissimilarity("AAAA", "TTTT").unwrap(), 100.0);
    }

    #[test]
    fn test_one_mismatch_in_four() {
        assert_relative_eq!(dissimilarity("AAAA", "AATA").unwrap(), 25.0);
    }

    #[test]
    fn test_identity() {
        for s in ["A", "ATGC", "ATGCATGCNNNN-"] {
            assert_eq!(dissimilarity(s, s).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            ("ATGCATGC", "ATGGATCC"),
            ("AAAA", "TTTT"),
            ("ACGT", "ACGA"),
            ("ATG", "ATGCCC"),
        ];
        for (a, b) in pairs {
            assert_eq!(dissimilarity(a, b).unwrap(), dissimilarity(b, a).unwrap());
        }
    }

    #[test]
    fn test_overhang_is_not_a_mismatch() {
        // Identical prefix, longer second sequence: 0 mismatches over 8 positions.
        assert_eq!(mismatches("ATGC", "ATGCATGC"), 0);
        assert_relative_eq!(dissimilarity("ATGC", "ATGCATGC").unwrap(), 0.0);
        // One mismatch in the overlap, still divided by the longer length.
        assert_relative_eq!(dissimilarity("ATGA", "ATGCATGC").unwrap(), 12.5);
    }

    #[test]
    fn test_one_empty_sequence() {
        assert_relative_eq!(dissimilarity("", "ATGC").unwrap(), 0.0);
    }

    #[test]
    fn test_case_sensitive() {
        assert_relative_eq!(dissimilarity("acgt", "ACGT").unwrap(), 100.0);
    }

    #[test]
    fn test_both_empty_is_an_error() {
        let err = dissimilarity("", "").unwrap_err();
        assert!(matches!(err, DissimError::EmptySequenceComparison(_)));
    }

    #[test]
    fn test_monotonic_in_mismatches() {
        let reference = "AAAAAAAA";
        let mut previous = 0.0;
        for n in 0..=8 {
            let other = "T".repeat(n) + &"A".repeat(8 - n);
            let d = dissimilarity(reference, &other).unwrap();
            assert!(d >= previous);
            assert!((0.0..=100.0).contains(&d));
            previous = d;
        }
        assert_relative_eq!(previous, 100.0);
    }
}
