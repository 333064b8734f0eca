// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::process::ExitCode;

fn main() -> ExitCode {
    match genedissim::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("genedissim: {}", e);
            ExitCode::FAILURE
        }
    }
}
