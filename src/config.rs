// SPDX-License-Identifier: AGPL-3.0-only

//! Sweep parameters.
//!
//! Fixed in code; nothing is read from files, flags or the environment.
//! `SweepConfig::default()` is the reference experiment.

use serde::{Deserialize, Serialize};

use crate::constants::PSI;
use crate::error::BoaError;

/// Powers of ten swept in phase A and the control scale for phase B.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct SweepConfig {
    /// First power of ten (inclusive)
    pub first_power: u32,
    /// Upper bound on the power (exclusive)
    pub end_power: u32,
    /// Power increment between rows
    pub step: u32,
    /// Power of ten used for the uniqueness check
    pub control_power: u32,
    /// Restoration constant applied in the sweep and as the ratio numerator
    pub constant: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            first_power: 3,
            end_power: 16,
            step: 3,
            control_power: 9,
            constant: PSI,
        }
    }
}

impl SweepConfig {
    /// Expand into `(power, 10^power)` pairs.
    ///
    /// # Errors
    ///
    /// [`BoaError::EmptySweep`] for a zero step or empty range,
    /// [`BoaError::ScaleOverflow`] if any `10^p` exceeds `u64::MAX`.
    pub fn scales(&self) -> Result<Vec<(u32, u64)>, BoaError> {
        if self.step == 0 || self.first_power >= self.end_power {
            return Err(BoaError::EmptySweep {
                first: self.first_power,
                end: self.end_power,
                step: self.step,
            });
        }
        (self.first_power..self.end_power)
            .step_by(self.step as usize)
            .map(|p| scale_for(p).map(|n| (p, n)))
            .collect()
    }

    /// Scale of the uniqueness check, `10^control_power`.
    ///
    /// # Errors
    ///
    /// [`BoaError::ScaleOverflow`] if the power is too large for `u64`.
    pub fn control_scale(&self) -> Result<u64, BoaError> {
        scale_for(self.control_power)
    }
}

/// `10^power` as a u64 scale.
///
/// # Errors
///
/// [`BoaError::ScaleOverflow`] when the result exceeds `u64::MAX` (power ≥ 20).
pub fn scale_for(power: u32) -> Result<u64, BoaError> {
    10u64
        .checked_pow(power)
        .ok_or(BoaError::ScaleOverflow { power })
}
