// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use nwalign::errors::AlignError;

fn main() -> Result<(), AlignError> {
    nwalign::run()
}
