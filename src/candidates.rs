// SPDX-License-Identifier: AGPL-3.0-only

//! Restoration benchmark: scale invariance and candidate-constant comparison.
//!
//! Extends the verification report with two tables:
//!   - closure error with 2/π at each scale, marked against
//!     [`tolerances::CLOSURE_STATUS_MAX`]
//!   - error and ratio-to-control for the control, golden and BOA constants
//!     at a fixed scale
//!
//! Every candidate's ratio equals its own value, 2/π included.

use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{scale_for, SweepConfig};
use crate::constants::{CONTROL, GOLDEN, PSI};
use crate::error::BoaError;
use crate::observer::closure_error;
use crate::report::format_sci;
use crate::tolerances;

/// A named restoration constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub name: &'static str,
    pub value: f64,
}

/// Constants compared in the uniqueness table, control first.
pub const CANDIDATES: [Candidate; 3] = [
    Candidate {
        name: "Control (1.0)",
        value: CONTROL,
    },
    Candidate {
        name: "Golden (0.618)",
        value: GOLDEN,
    },
    Candidate {
        name: "BOA (0.6366..)",
        value: PSI,
    },
];

/// Closure result for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateResult {
    pub name: String,
    pub constant: f64,
    pub error: f64,
    /// `error / control_error` at the same scale
    pub ratio_to_control: f64,
}

/// Closure error at one scale with its status mark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvarianceRow {
    pub power: u32,
    pub error: f64,
    /// `error < CLOSURE_STATUS_MAX`
    pub closed: bool,
}

/// Evaluate every entry of [`CANDIDATES`] at scale `n`.
#[must_use]
pub fn compare_candidates(n: u64) -> Vec<CandidateResult> {
    let control_error = closure_error(n, CONTROL);
    CANDIDATES
        .iter()
        .map(|c| {
            let error = closure_error(n, c.value);
            debug!(candidate = c.name, error, "candidate");
            CandidateResult {
                name: c.name.to_string(),
                constant: c.value,
                error,
                ratio_to_control: error / control_error,
            }
        })
        .collect()
}

/// Closure error with 2/π across the configured sweep.
///
/// # Errors
///
/// Propagates [`SweepConfig::scales`] failures.
pub fn scale_invariance(config: &SweepConfig) -> Result<Vec<InvarianceRow>, BoaError> {
    Ok(config
        .scales()?
        .into_iter()
        .map(|(power, n)| {
            let error = closure_error(n, config.constant);
            InvarianceRow {
                power,
                error,
                closed: error < tolerances::CLOSURE_STATUS_MAX,
            }
        })
        .collect())
}

/// Write both benchmark tables.
///
/// # Errors
///
/// Returns `Err` on an invalid sweep or a failed write.
pub fn write_benchmark<W: Write>(config: &SweepConfig, out: &mut W) -> Result<(), BoaError> {
    writeln!(out, "=== BOA RESTORATION BENCHMARK ===")?;
    writeln!(out)?;

    writeln!(out, "1. SCALE INVARIANCE (Checking for error accumulation)")?;
    writeln!(out, "{:<14} | Error (Gap)", "N (Scale)")?;
    writeln!(out, "{}", "-".repeat(32))?;
    for row in scale_invariance(config)? {
        let status = if row.closed { "✅" } else { "❌" };
        writeln!(
            out,
            "10^{:<2}          | {} {status}",
            row.power,
            format_sci(row.error, 4)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "2. CONSTANT UNIQUENESS (Is 2/π special?)")?;
    writeln!(
        out,
        "{:<14} | {:<18} | Relative to Control",
        "Constant", "Error (Gap)"
    )?;
    writeln!(out, "{}", "-".repeat(57))?;
    let n = scale_for(config.control_power)?;
    for r in compare_candidates(n) {
        writeln!(
            out,
            "{:<14} | {:<18} | {:.4}x",
            r.name,
            format_sci(r.error, 4),
            r.ratio_to_control
        )?;
    }
    Ok(())
}
