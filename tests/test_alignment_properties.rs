// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

mod common;

use proptest::{prop_assert, prop_assert_eq, proptest};

use crate::common::utils;

use nwalign::alignment::{align, GAP, GAP_PENALTY, MATCH_SCORE};

proptest! {
    #[test]
    fn aligned_lengths_are_equal(a in "[ACGT]{0,40}", b in "[ACGT]{0,40}") {
        let aln = align(&a, &b);
        prop_assert_eq!(aln.aligned_a.len(), aln.aligned_b.len());
    }

    #[test]
    fn residues_are_preserved(a in "[ACGT]{0,40}", b in "[ACGT]{0,40}") {
        let aln = align(&a, &b);
        prop_assert_eq!(aln.aligned_a.replace(GAP, ""), a);
        prop_assert_eq!(aln.aligned_b.replace(GAP, ""), b);
    }

    #[test]
    fn no_column_is_gap_against_gap(a in "[ACGT]{0,40}", b in "[ACGT]{0,40}") {
        let aln = align(&a, &b);
        prop_assert!(aln
            .aligned_a
            .chars()
            .zip(aln.aligned_b.chars())
            .all(|(x, y)| !(x == GAP && y == GAP)));
    }

    #[test]
    fn score_is_sum_of_columns(a in "[ACGT]{0,40}", b in "[ACGT]{0,40}") {
        let aln = align(&a, &b);
        prop_assert_eq!(utils::column_sum(&aln), aln.score);
        prop_assert_eq!(aln.rescore(), aln.score);
    }

    #[test]
    fn score_is_bounded(a in "[ACGT]{0,40}", b in "[ACGT]{0,40}") {
        let aln = align(&a, &b);
        prop_assert!(aln.score <= MATCH_SCORE * a.len().max(b.len()) as i32);
        // Gapping out both sequences entirely is always a valid alignment.
        prop_assert!(aln.score >= GAP_PENALTY * (a.len() + b.len()) as i32);
    }

    #[test]
    fn score_is_symmetric(a in "[ACGT]{0,40}", b in "[ACGT]{0,40}") {
        prop_assert_eq!(align(&a, &b).score, align(&b, &a).score);
    }

    #[test]
    fn alignment_is_deterministic(a in "[ACGT]{0,40}", b in "[ACGT]{0,40}") {
        prop_assert_eq!(align(&a, &b), align(&a, &b));
    }

    #[test]
    fn self_alignment_has_no_gaps(s in "[ACGT]{1,60}") {
        let aln = align(&s, &s);
        prop_assert_eq!(&aln.aligned_a, &s);
        prop_assert_eq!(&aln.aligned_b, &s);
        prop_assert_eq!(aln.score, s.len() as i32 * MATCH_SCORE);
    }

    #[test]
    fn empty_against_sequence_is_all_gaps(s in "[ACGT]{0,40}") {
        let aln = align("", &s);
        prop_assert_eq!(aln.aligned_a, "-".repeat(s.len()));
        prop_assert_eq!(&aln.aligned_b, &s);
        prop_assert_eq!(aln.score, GAP_PENALTY * s.len() as i32);
    }

    #[test]
    fn protein_residues_are_preserved(a in "[ACDEFGHIKLMNPQRSTVWY]{0,30}", b in "[ACDEFGHIKLMNPQRSTVWY]{0,30}") {
        let aln = align(&a, &b);
        prop_assert_eq!(aln.ungapped_a(), a);
        prop_assert_eq!(aln.ungapped_b(), b);
        prop_assert_eq!(aln.rescore(), aln.score);
    }
}

#[test]
fn empty_against_acgt() {
    let aln = align("", "ACGT");
    assert_eq!(aln.aligned_a, "----");
    assert_eq!(aln.aligned_b, "ACGT");
    assert_eq!(aln.score, -8);
}

#[test]
fn gattaca_scores_minus_one() {
    let aln = align("GATTACA", "GCATGCU");
    assert_eq!(aln.score, -1);
    assert_eq!(utils::column_sum(&aln), -1);
}
