// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use crate::seq::record::{GeneRecord, SeqRecord};

// For our purposes, a sequence file is just a Vec of sequence records.
//

pub type SeqFile = Vec<SeqRecord>;

// Once headers are parsed, a gene set is a Vec of gene records, in file order.

pub type GeneSet = Vec<GeneRecord>;
