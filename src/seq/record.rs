// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::errors::DissimError;
use crate::seq::file::{GeneSet, SeqFile};

// A record for sequences, consisting of some description and a raw sequence. Meant to be
// format-agnostic; the header is kept verbatim (without the leading '>').

#[derive(Debug, Clone)]
pub struct SeqRecord {
    pub header: String,
    pub sequence: String,
}

/// One gene's sequence from one organism, as extracted from a CDS-style FastA header such as
/// `lcl|NC_005089.1_cds_YP_220550.1_1 [gene=ND1] [protein=...]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneRecord {
    pub accession: String,
    pub gene: String,
    pub sequence: String,
}

const ACCESSION_DELIM: char = '|';
const CDS_SUFFIX: &str = "_cds";

fn gene_tag_re() -> &'static Regex {
    static GENE_TAG: OnceLock<Regex> = OnceLock::new();
    GENE_TAG.get_or_init(|| Regex::new(r"\[gene=([^\]]*)\]").expect("valid gene tag regex"))
}

/// Extracts the accession: the token between the first and second '|' (or up to the first
/// whitespace, if there is no second '|'), cut at the first "_cds".
pub fn extract_accession(header: &str) -> Result<&str, String> {
    let mut fields = header.splitn(3, ACCESSION_DELIM);
    let token = fields
        .nth(1)
        .ok_or_else(|| String::from("missing '|'-delimited accession"))?;
    let token = match fields.next() {
        Some(_) => token,
        // No closing '|': the rest of the line is free text.
        None => token.split_whitespace().next().unwrap_or(""),
    };
    let accession = token.split(CDS_SUFFIX).next().unwrap_or("");
    if accession.is_empty() {
        return Err(String::from("empty accession"));
    }
    Ok(accession)
}

/// Extracts the gene name, i.e. whatever lies between `[gene=` and the next `]`.
pub fn extract_gene(header: &str) -> Result<&str, String> {
    let caps = gene_tag_re()
        .captures(header)
        .ok_or_else(|| String::from("missing '[gene=...]' tag"))?;
    let gene = caps.get(1).map(|m| m.as_str()).unwrap_or("");
    if gene.is_empty() {
        return Err(String::from("empty gene name"));
    }
    Ok(gene)
}

impl GeneRecord {
    // `index` is 0-based; error messages report it 1-based.
    pub fn from_seq_record(
        record: SeqRecord,
        source: &str,
        index: usize,
    ) -> Result<GeneRecord, DissimError> {
        let malformed = |reason: String| DissimError::MalformedRecord {
            source: source.to_string(),
            record: index + 1,
            header: record.header.clone(),
            reason,
        };
        let accession = extract_accession(&record.header).map_err(malformed)?.to_string();
        let gene = extract_gene(&record.header).map_err(malformed)?.to_string();
        Ok(GeneRecord {
            accession,
            gene,
            sequence: record.sequence,
        })
    }
}

/// Turns raw FastA records into gene records. Fails on the first malformed header: a skipped
/// record would silently drop a row or column from the final matrix.
pub fn gene_records(seq_file: SeqFile, source: &str) -> Result<GeneSet, DissimError> {
    seq_file
        .into_iter()
        .enumerate()
        .map(|(i, rec)| GeneRecord::from_seq_record(rec, source, i))
        .collect()
}
