// SPDX-License-Identifier: AGPL-3.0-only

//! Verification driver: scale sweep, uniqueness check, and the text report.
//!
//! Phase A evaluates the closure error at each swept scale with the
//! configured constant. Phase B divides the constant's error by the control
//! error (constant 1.0) at the control scale. By linearity the ratio is the
//! constant itself; the check is a demonstration, not an independent proof.

use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::SweepConfig;
use crate::constants::{CONTROL, PSI};
use crate::error::BoaError;
use crate::observer::closure_error;

/// Width of the separator under the column header.
const RULE_WIDTH: usize = 30;

/// One phase-A row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleRow {
    /// Power of ten
    pub power: u32,
    /// Scale, 10^power
    pub n: u64,
    pub error: f64,
}

/// Phase-B result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniquenessCheck {
    /// Error with the control constant (1.0)
    pub base_error: f64,
    /// Error with the configured constant
    pub psi_error: f64,
    /// `psi_error / base_error`
    pub ratio: f64,
    /// Value the ratio is compared against (2/π)
    pub target: f64,
}

/// Both phases of one verification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub rows: Vec<ScaleRow>,
    pub uniqueness: UniquenessCheck,
}

/// Run the scale sweep and the uniqueness check.
///
/// # Errors
///
/// Propagates [`SweepConfig::scales`] and [`SweepConfig::control_scale`]
/// failures.
pub fn run(config: &SweepConfig) -> Result<VerificationReport, BoaError> {
    let scales = config.scales()?;
    info!(rows = scales.len(), constant = config.constant, "scale sweep");

    let rows: Vec<ScaleRow> = scales
        .into_iter()
        .map(|(power, n)| {
            let error = closure_error(n, config.constant);
            debug!(power, n, error, "closure");
            ScaleRow { power, n, error }
        })
        .collect();

    let control_n = config.control_scale()?;
    let base_error = closure_error(control_n, CONTROL);
    let psi_error = closure_error(control_n, config.constant);
    let ratio = psi_error / base_error;
    info!(n = control_n, base_error, psi_error, ratio, "uniqueness check");

    Ok(VerificationReport {
        rows,
        uniqueness: UniquenessCheck {
            base_error,
            psi_error,
            ratio,
            target: PSI,
        },
    })
}

impl VerificationReport {
    /// Write the fixed-format text report.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the writer fails.
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "=== BOA VERIFICATION ===")?;
        writeln!(out, "{:<12} | {}", "Scale (N)", "Error")?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        for row in &self.rows {
            writeln!(out, "10^{:<9} | {}", row.power, format_sci(row.error, 4))?;
        }

        writeln!(out)?;
        writeln!(out, "=== UNIQUENESS CHECK ===")?;
        writeln!(out, "Ratio (BOA / Control): {:.5}", self.uniqueness.ratio)?;
        writeln!(out, "Target (2 / pi):       {:.5}", self.uniqueness.target)?;
        Ok(())
    }

    /// Render the text report into a `String`.
    ///
    /// # Errors
    ///
    /// Only fails if formatting into the buffer fails.
    pub fn render(&self) -> Result<String, BoaError> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Pretty-printed JSON form of the report.
    ///
    /// # Errors
    ///
    /// Returns [`BoaError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, BoaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Scientific notation with `digits` decimals and a signed, at least
/// two-digit exponent: `1.2345e-07`, `0.0000e+00`.
///
/// Non-finite values pass through as Rust formats them (`inf`, `NaN`).
#[must_use]
pub fn format_sci(value: f64, digits: usize) -> String {
    let raw = format!("{value:.digits$e}");
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    match exponent.parse::<i32>() {
        Ok(exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
        }
        Err(_) => raw,
    }
}
