// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

pub mod alignment;
pub mod config;
pub mod errors;
pub mod report;
pub mod request;
mod runner;
pub mod seq;

use crate::errors::AlignError;

pub use crate::alignment::{align, PairwiseAlignment};
pub use crate::seq::fasta::parse_fasta;

pub fn run() -> Result<(), AlignError> {
    runner::run()
}
