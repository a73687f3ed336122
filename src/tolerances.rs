// SPDX-License-Identifier: AGPL-3.0-only

//! Acceptance thresholds for the closure experiment.
//!
//! Every threshold used by `validate_boa`, the benchmark table and the test
//! suite lives here. No ad-hoc magic numbers.
//!
//! | Category | Basis | Example |
//! |----------|-------|---------|
//! | Machine precision | IEEE 754 f64 | ratio, linearity |
//! | Closure bound | tan near ±π | per-scale error ceiling |
//! | Reference script | hardcoded threshold | closure status mark |

// ═══════════════════════════════════════════════════════════════════
// Machine-precision tolerances (IEEE 754 f64)
// ═══════════════════════════════════════════════════════════════════

/// Uniqueness ratio vs 2/π.
///
/// Both errors are 2·|tan θ|·c computed from the same θ, so the ratio is
/// off from c by one rounding of the multiply (~1e-16 relative).
pub const RATIO_TOLERANCE: f64 = 1e-9;

/// Relative tolerance for `error(n, c) = |c| · error(n, 1)`.
pub const LINEARITY_REL: f64 = 1e-12;

/// Absolute tolerance on `theta_end - theta_start = 2π`.
///
/// Each endpoint is within a few ulps of ±π (ulp(π) ≈ 4.4e-16).
pub const CYCLE_SPAN_ABS: f64 = 1e-12;

// ═══════════════════════════════════════════════════════════════════
// Closure bounds
// ═══════════════════════════════════════════════════════════════════

/// Ceiling on the closure error for any swept scale with |c| ≤ 1.
///
/// θ lands within a few ulps of π, where tan(θ) ≈ θ − π, so the gap is
/// O(1e-15). 1e-12 leaves three orders of headroom.
pub const SWEEP_CLOSURE_MAX: f64 = 1e-12;

/// Closure at small scale (n = 4): endpoints a full period apart.
pub const SMALL_SCALE_CLOSURE_MAX: f64 = 1e-14;

/// Loose end-to-end bound for `error(1000, 2/π)`.
pub const END_TO_END_CLOSURE_MAX: f64 = 1e-3;

/// Closure status mark in the benchmark table.
///
/// Taken from the reference benchmark script. Cosmetic only; rows may
/// legitimately exceed it by a few ulps.
pub const CLOSURE_STATUS_MAX: f64 = 5e-16;

/// Printed ratio and target must agree at this many decimals.
pub const PRINTED_RATIO_DECIMALS: usize = 5;
