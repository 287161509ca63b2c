// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use log::debug;

use crate::errors::AlignError;
use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;

/// Parses FastA text into records, in input order. Blank lines are skipped, sequence lines are
/// trimmed and concatenated. Lines before the first header belong to no record and are dropped.
/// A header with no sequence lines gives a record with an empty sequence.
pub fn parse_fasta(text: &str) -> Result<SeqFile, AlignError> {
    let mut result: SeqFile = Vec::new();
    let mut current_record: Option<SeqRecord> = None;

    for (lineno, line) in text.split('\n').enumerate() {
        let l = line.trim();
        if l.is_empty() {
            continue;
        }
        if let Some(hdr) = l.strip_prefix('>') {
            // push existing record
            if let Some(record) = current_record.take() {
                result.push(record);
            }
            current_record = Some(SeqRecord::new(hdr, String::new()));
        } else {
            match current_record.as_mut() {
                // append line to current record's sequence
                Some(record) => record.sequence.push_str(l),
                None => debug!("Line {} precedes any header; skipped", lineno + 1),
            }
        }
    }
    if let Some(record) = current_record {
        result.push(record);
    }

    if result.is_empty() {
        return Err(AlignError::InvalidFormat(String::from(
            "no '>' header line found",
        )));
    }
    Ok(result)
}

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<SeqFile, AlignError> {
    let text = fs::read_to_string(path)?;
    parse_fasta(&text)
}

pub fn read_fasta_stdin() -> Result<SeqFile, AlignError> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    parse_fasta(&text)
}
