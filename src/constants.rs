// SPDX-License-Identifier: AGPL-3.0-only

//! Geometric constants for the observer projection.

use std::f64::consts::PI;

/// Restoration factor applied to the tangent projection: 2/π ≈ 0.6366198.
pub const PSI: f64 = 2.0 / PI;

/// One full angular cycle, 2π.
pub const UNIVERSE_CYCLE: f64 = 2.0 * PI;

/// Control multiplier; the baseline divisor of the uniqueness ratio.
pub const CONTROL: f64 = 1.0;

/// Golden-ratio conjugate as quoted by the reference benchmark (10 digits).
pub const GOLDEN: f64 = 0.618_033_988_7;
