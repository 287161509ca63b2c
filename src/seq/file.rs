// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use log::info;

use crate::errors::AlignError;
use crate::seq::record::SeqRecord;

// For our purposes, a sequence file is just a Vec of sequence records, in file order.
//

pub type SeqFile = Vec<SeqRecord>;

/// Returns the first two records of `seq_file`, which are the ones that get aligned. Any further
/// records are ignored.
pub fn first_pair(seq_file: &SeqFile) -> Result<(&SeqRecord, &SeqRecord), AlignError> {
    match seq_file.as_slice() {
        [first, second, rest @ ..] => {
            if !rest.is_empty() {
                info!("Ignoring {} record(s) after the first two", rest.len());
            }
            Ok((first, second))
        }
        _ => Err(AlignError::InsufficientSequences(seq_file.len())),
    }
}
