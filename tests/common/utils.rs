// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::io::Write;

use tempfile::NamedTempFile;

use nwalign::alignment::{column_score, PairwiseAlignment};

#[allow(dead_code)]
pub fn column_sum(aln: &PairwiseAlignment) -> i32 {
    aln.aligned_a
        .chars()
        .zip(aln.aligned_b.chars())
        .map(|(x, y)| column_score(x, y))
        .sum()
}

#[allow(dead_code)]
pub fn temp_file_with(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("creating temp file");
    file.write_all(contents.as_bytes()).expect("writing temp file");
    file
}
