// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

//! Documents handed back to callers: the alignment report on success, an error report on
//! failure. Both serialize to the JSON shapes front-ends already consume (camelCase keys).

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::alignment::PairwiseAlignment;
use crate::errors::AlignError;
use crate::seq::record::SeqRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignedSequence {
    pub id: Uuid,
    pub name: String,
    // Gapped
    pub sequence: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentReport {
    pub id: Uuid,
    pub sequences: Vec<AlignedSequence>,
    pub alignment_result: String,
    pub score: i32,
    // RFC 3339, UTC, millisecond precision
    pub created_at: String,
}

impl AlignmentReport {
    pub fn new(a: &SeqRecord, b: &SeqRecord, aln: &PairwiseAlignment) -> Self {
        AlignmentReport {
            id: Uuid::new_v4(),
            sequences: vec![
                AlignedSequence {
                    id: Uuid::new_v4(),
                    name: a.header.clone(),
                    sequence: aln.aligned_a.clone(),
                },
                AlignedSequence {
                    id: Uuid::new_v4(),
                    name: b.header.clone(),
                    sequence: aln.aligned_b.clone(),
                },
            ],
            alignment_result: alignment_text(&a.header, &b.header, aln),
            score: aln.score,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn to_json(&self) -> Result<String, AlignError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The alignment this report was built from.
    pub fn to_alignment(&self) -> PairwiseAlignment {
        let aligned = |idx: usize| {
            self.sequences
                .get(idx)
                .map(|s| s.sequence.clone())
                .unwrap_or_default()
        };
        PairwiseAlignment {
            aligned_a: aligned(0),
            aligned_b: aligned(1),
            score: self.score,
        }
    }
}

/// Human-readable block: each name followed by its aligned sequence, then the score.
pub fn alignment_text(name_a: &str, name_b: &str, aln: &PairwiseAlignment) -> String {
    format!(
        "Sequence 1: {}\n{}\nSequence 2: {}\n{}\nScore: {}",
        name_a, aln.aligned_a, name_b, aln.aligned_b, aln.score
    )
}

/// Extra lines for `--stats`.
pub fn stats_text(aln: &PairwiseAlignment) -> String {
    format!(
        "Length: {}\nMatches: {}\nGaps: {}\nIdentity: {:.1}%",
        aln.len(),
        aln.num_matches(),
        aln.num_gaps(),
        aln.identity() * 100.0
    )
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorReport {
    pub error: String,
}

impl From<&AlignError> for ErrorReport {
    fn from(e: &AlignError) -> Self {
        ErrorReport {
            error: e.to_string(),
        }
    }
}

impl ErrorReport {
    pub fn to_json(&self) -> Result<String, AlignError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::align;
    use chrono::DateTime;
    use serde_json::Value;

    fn pair_report() -> AlignmentReport {
        let a = SeqRecord::new("seq1", "ACGT");
        let b = SeqRecord::new("seq2", "AGT");
        AlignmentReport::new(&a, &b, &align(&a.sequence, &b.sequence))
    }

    #[test]
    fn test_alignment_text() {
        let aln = align("ACGT", "AGT");
        insta::assert_snapshot!(alignment_text("seq1", "seq2", &aln), @r"
        Sequence 1: seq1
        ACGT
        Sequence 2: seq2
        A-GT
        Score: 1
        ");
    }

    #[test]
    fn test_stats_text() {
        let aln = align("ACGT", "AGT");
        insta::assert_snapshot!(stats_text(&aln), @r"
        Length: 4
        Matches: 3
        Gaps: 1
        Identity: 75.0%
        ");
    }

    #[test]
    fn test_report_sequences() {
        let report = pair_report();
        assert_eq!(report.sequences.len(), 2);
        assert_eq!(report.sequences[0].name, "seq1");
        assert_eq!(report.sequences[0].sequence, "ACGT");
        assert_eq!(report.sequences[1].name, "seq2");
        assert_eq!(report.sequences[1].sequence, "A-GT");
        assert_eq!(report.score, 1);
        assert_ne!(report.sequences[0].id, report.sequences[1].id);
        assert_ne!(report.id, report.sequences[0].id);
    }

    #[test]
    fn test_report_to_alignment() {
        let aln = pair_report().to_alignment();
        assert_eq!(aln, align("ACGT", "AGT"));
    }

    #[test]
    fn test_report_json_keys() {
        let json = pair_report().to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["alignmentResult", "createdAt", "id", "score", "sequences"]
        );
        assert_eq!(value["score"], 1);
        assert_eq!(value["sequences"][1]["sequence"], "A-GT");
        assert!(value["alignmentResult"]
            .as_str()
            .unwrap()
            .contains("Score: 1"));
        assert!(Uuid::parse_str(value["id"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn test_report_json_round_trip() {
        let report = pair_report();
        let back: AlignmentReport = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(back.id, report.id);
        assert_eq!(back.score, report.score);
        assert_eq!(back.alignment_result, report.alignment_result);
        assert_eq!(back.created_at, report.created_at);
        assert_eq!(back.sequences.len(), 2);
        assert_eq!(back.sequences[1].id, report.sequences[1].id);
        assert_eq!(back.sequences[1].sequence, "A-GT");
        assert_eq!(back.to_alignment(), report.to_alignment());
    }

    #[test]
    fn test_report_created_at_is_rfc3339() {
        let report = pair_report();
        assert!(DateTime::parse_from_rfc3339(&report.created_at).is_ok());
        assert!(report.created_at.ends_with('Z'));
    }

    #[test]
    fn test_error_report() {
        let err = AlignError::InsufficientSequences(1);
        let report = ErrorReport::from(&err);
        let value: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(
            value["error"],
            "At least two sequences are required for alignment (found 1)"
        );
        let back: ErrorReport = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(back, report);
    }
}
