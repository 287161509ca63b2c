// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

//! Needleman-Wunsch global alignment of two sequences, with a fixed linear scoring scheme.
//!
//! The score matrix has one row per residue of A (plus one) and one column per residue of B
//! (plus one). Each cell also records which neighbour its score came from, so the traceback just
//! follows those directions back to the origin.

use itertools::Itertools;
use log::debug;

pub const MATCH_SCORE: i32 = 1;
pub const MISMATCH_SCORE: i32 = -1;
pub const GAP_PENALTY: i32 = -2;
pub const GAP: char = '-';

/// Where a cell's score came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    // A[i-1] aligned with B[j-1]
    Diagonal,
    // A[i-1] aligned with a gap
    Up,
    // B[j-1] aligned with a gap
    Left,
}

/// Score of a single alignment column.
pub fn column_score(x: char, y: char) -> i32 {
    if x == GAP || y == GAP {
        GAP_PENALTY
    } else if x == y {
        MATCH_SCORE
    } else {
        MISMATCH_SCORE
    }
}

/// Scores and directions for all prefix pairs of A and B, stored row-major.
#[derive(Debug)]
pub struct ScoreMatrix {
    nrows: usize,
    ncols: usize,
    scores: Vec<i32>,
    directions: Vec<Direction>,
}

impl ScoreMatrix {
    pub fn fill(a: &[char], b: &[char]) -> Self {
        let nrows = a.len() + 1;
        let ncols = b.len() + 1;
        let mut m = ScoreMatrix {
            nrows,
            ncols,
            scores: vec![0; nrows * ncols],
            directions: vec![Direction::Diagonal; nrows * ncols],
        };

        // First column, then first row; (0, 0) ends up as Left, which the traceback never reads.
        for i in 0..nrows {
            m.set(i, 0, i as i32 * GAP_PENALTY, Direction::Up);
        }
        for j in 0..ncols {
            m.set(0, j, j as i32 * GAP_PENALTY, Direction::Left);
        }

        for i in 1..nrows {
            for j in 1..ncols {
                let diagonal = m.score_at(i - 1, j - 1)
                    + if a[i - 1] == b[j - 1] {
                        MATCH_SCORE
                    } else {
                        MISMATCH_SCORE
                    };
                let up = m.score_at(i - 1, j) + GAP_PENALTY;
                let left = m.score_at(i, j - 1) + GAP_PENALTY;

                // Ties: Diagonal, then Up, then Left.
                let (best, dir) = if diagonal >= up && diagonal >= left {
                    (diagonal, Direction::Diagonal)
                } else if up >= left {
                    (up, Direction::Up)
                } else {
                    (left, Direction::Left)
                };
                m.set(i, j, best, dir);
            }
        }
        debug!("Filled {}x{} score matrix", nrows, ncols);
        m
    }

    fn index(&self, i: usize, j: usize) -> usize {
        i * self.ncols + j
    }

    fn set(&mut self, i: usize, j: usize, score: i32, dir: Direction) {
        let idx = self.index(i, j);
        self.scores[idx] = score;
        self.directions[idx] = dir;
    }

    pub fn score_at(&self, i: usize, j: usize) -> i32 {
        self.scores[self.index(i, j)]
    }

    pub fn direction_at(&self, i: usize, j: usize) -> Direction {
        self.directions[self.index(i, j)]
    }

    /// Optimal score of the whole alignment, i.e. the bottom-right cell.
    pub fn score(&self) -> i32 {
        self.score_at(self.nrows - 1, self.ncols - 1)
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Follows the recorded directions from the bottom-right cell back to (0, 0). `a` and `b`
    /// must be the sequences the matrix was filled from.
    pub fn traceback(&self, a: &[char], b: &[char]) -> PairwiseAlignment {
        let mut i = a.len();
        let mut j = b.len();
        // Built back to front, reversed at the end.
        let mut rev_a: Vec<char> = Vec::with_capacity(i + j);
        let mut rev_b: Vec<char> = Vec::with_capacity(i + j);

        while i > 0 || j > 0 {
            match self.direction_at(i, j) {
                Direction::Diagonal if i > 0 && j > 0 => {
                    rev_a.push(a[i - 1]);
                    rev_b.push(b[j - 1]);
                    i -= 1;
                    j -= 1;
                }
                Direction::Up if i > 0 => {
                    rev_a.push(a[i - 1]);
                    rev_b.push(GAP);
                    i -= 1;
                }
                _ => {
                    rev_a.push(GAP);
                    rev_b.push(b[j - 1]);
                    j -= 1;
                }
            }
        }

        PairwiseAlignment {
            aligned_a: rev_a.into_iter().rev().collect(),
            aligned_b: rev_b.into_iter().rev().collect(),
            score: self.score(),
        }
    }
}

/// Two gapped sequences of equal length, and the score of their alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairwiseAlignment {
    pub aligned_a: String,
    pub aligned_b: String,
    pub score: i32,
}

impl PairwiseAlignment {
    /// Number of columns.
    pub fn len(&self) -> usize {
        self.aligned_a.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_a.is_empty()
    }

    fn columns(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.aligned_a.chars().zip_eq(self.aligned_b.chars())
    }

    /// Recomputes the score from the columns alone.
    pub fn rescore(&self) -> i32 {
        self.columns().map(|(x, y)| column_score(x, y)).sum()
    }

    pub fn num_matches(&self) -> usize {
        self.columns().filter(|&(x, y)| x != GAP && x == y).count()
    }

    pub fn num_gaps(&self) -> usize {
        self.columns().filter(|&(x, y)| x == GAP || y == GAP).count()
    }

    /// Fraction of columns that are matches; 0 for an empty alignment.
    pub fn identity(&self) -> f64 {
        let len = self.len();
        if len == 0 {
            0.0
        } else {
            self.num_matches() as f64 / len as f64
        }
    }

    pub fn ungapped_a(&self) -> String {
        self.aligned_a.chars().filter(|&c| c != GAP).collect()
    }

    pub fn ungapped_b(&self) -> String {
        self.aligned_b.chars().filter(|&c| c != GAP).collect()
    }

    pub fn swapped(&self) -> PairwiseAlignment {
        PairwiseAlignment {
            aligned_a: self.aligned_b.clone(),
            aligned_b: self.aligned_a.clone(),
            score: self.score,
        }
    }
}

/// Optimal global alignment of `a` and `b`. Defined for all inputs, including empty ones.
pub fn align(a: &str, b: &str) -> PairwiseAlignment {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let matrix = ScoreMatrix::fill(&a, &b);
    matrix.traceback(&a, &b)
}
