// SPDX-License-Identifier: AGPL-3.0-only

//! Typed errors for sweep setup and report output.
//!
//! The closure arithmetic itself never fails; NaN/Inf propagate as values.
//! These variants cover the driver around it.

use thiserror::Error;

/// Errors arising from sweep configuration or report output.
#[derive(Debug, Error)]
pub enum BoaError {
    /// Sweep range yields no scales (zero step or empty power range).
    #[error("Sweep is empty: powers {first}..{end} step {step}")]
    EmptySweep {
        /// First power of ten (inclusive)
        first: u32,
        /// Upper bound (exclusive)
        end: u32,
        /// Power increment
        step: u32,
    },

    /// 10^power does not fit in a u64 scale.
    #[error("Scale 10^{power} overflows u64")]
    ScaleOverflow {
        /// Offending power of ten
        power: u32,
    },

    /// Writing the report failed.
    #[error("Report output failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization of a report failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
