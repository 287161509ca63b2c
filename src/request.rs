// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::PathBuf;
use std::sync::LazyLock;

use log::info;
use regex::Regex;
use serde::Deserialize;

use crate::alignment::align;
use crate::config::AlignerConfig;
use crate::errors::AlignError;
use crate::report::AlignmentReport;
use crate::seq::fasta::{parse_fasta, read_fasta_file};
use crate::seq::file::{first_pair, SeqFile};

// RFC 3986 scheme followed by "://"
static URL_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://").expect("valid URL scheme regex"));

/// `{"fileUrl": ..., "userId": ...}`, as posted by front-ends.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentRequest {
    #[serde(default)]
    pub file_url: String,
    #[serde(default)]
    pub user_id: String,
}

impl AlignmentRequest {
    pub fn from_json(text: &str) -> Result<Self, AlignError> {
        let request: AlignmentRequest = serde_json::from_str(text)?;
        if request.file_url.is_empty() {
            return Err(AlignError::MissingParameter("fileUrl"));
        }
        if request.user_id.is_empty() {
            return Err(AlignError::MissingParameter("userId"));
        }
        Ok(request)
    }

    /// Local path the FastA content is read from. Only plain paths and `file://` URLs are
    /// resolved here; anything else has to be fetched by the caller.
    pub fn source_path(&self) -> Result<PathBuf, AlignError> {
        if let Some(path) = self.file_url.strip_prefix("file://") {
            return Ok(PathBuf::from(path));
        }
        if URL_SCHEME.is_match(&self.file_url) {
            return Err(AlignError::UnsupportedUrl(self.file_url.clone()));
        }
        Ok(PathBuf::from(&self.file_url))
    }
}

/// Aligns the first two records of `seq_file`.
pub fn align_seq_file(
    seq_file: &SeqFile,
    config: &AlignerConfig,
) -> Result<AlignmentReport, AlignError> {
    let (a, b) = first_pair(seq_file)?;
    let len_a = a.sequence.chars().count();
    let len_b = b.sequence.chars().count();
    config.check_size(len_a, len_b)?;
    info!(
        "Aligning '{}' ({} residues) with '{}' ({} residues)",
        a.header, len_a, b.header, len_b
    );
    let aln = align(&a.sequence, &b.sequence);
    info!("Alignment score: {}", aln.score);
    Ok(AlignmentReport::new(a, b, &aln))
}

/// Parses FastA `text` and aligns its first two records.
pub fn align_fasta_text(text: &str, config: &AlignerConfig) -> Result<AlignmentReport, AlignError> {
    let seq_file = parse_fasta(text)?;
    align_seq_file(&seq_file, config)
}

pub fn handle_request(
    request: &AlignmentRequest,
    config: &AlignerConfig,
) -> Result<AlignmentReport, AlignError> {
    info!("Alignment request from user {}", request.user_id);
    let path = request.source_path()?;
    let seq_file = read_fasta_file(&path)?;
    align_seq_file(&seq_file, config)
}
