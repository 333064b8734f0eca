// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::errors::DissimError;
use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<SeqFile, DissimError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(DissimError::InputNotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    let records = parse_fasta(BufReader::new(file))?;
    debug!("{}: {} FastA records", path.display(), records.len());
    Ok(records)
}

pub fn parse_fasta<R: BufRead>(reader: R) -> Result<SeqFile, DissimError> {
    let mut result: SeqFile = Vec::new();
    let mut current_record: Option<SeqRecord> = None;

    for (linenum, line) in reader.lines().enumerate() {
        let l = line?;
        let l = l.trim_end();
        if l.is_empty() {
            continue;
        }
        if let Some(hdr) = l.strip_prefix('>') {
            // push existing record
            if let Some(record) = current_record.take() {
                result.push(record);
            }
            current_record = Some(SeqRecord {
                header: hdr.to_string(),
                sequence: String::new(),
            });
        } else {
            // append line to current record's sequence
            match current_record.as_mut() {
                Some(record) => record.sequence.push_str(l),
                None => {
                    return Err(DissimError::Format(format!(
                        "Sequence data before first header (line {})",
                        linenum + 1
                    )))
                }
            }
        }
    }
    if let Some(record) = current_record {
        result.push(record);
    }
    Ok(result)
}
