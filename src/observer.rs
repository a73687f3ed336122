// SPDX-License-Identifier: AGPL-3.0-only

//! Closure error of a bounded observer projecting through a tangent.
//!
//! An observer with `n` discrete steps spans one full cycle, from
//! `theta_start = -n/2 · (2π/n)` to `theta_end = (n - n/2) · (2π/n)`.
//! Both endpoints are projected through `tan` and scaled by a restoration
//! constant. In exact arithmetic the two projections coincide (the angles
//! are a whole period apart), so the returned gap is pure f64 rounding.
//!
//! Nothing here guards against singular angles or `n = 0`; such inputs
//! produce NaN/Inf rather than errors.

use serde::{Deserialize, Serialize};

use crate::constants::UNIVERSE_CYCLE;

/// Start and end angles of the observer's viewport for a given scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverGeometry {
    /// Scale (number of discrete steps around the cycle)
    pub n: u64,
    /// Angle of the first step (radians)
    pub theta_start: f64,
    /// Angle one full cycle later (radians)
    pub theta_end: f64,
}

impl ObserverGeometry {
    /// Lay out the viewport for scale `n`.
    ///
    /// `n/2` is real division, so odd scales are centred exactly.
    #[must_use]
    pub fn new(n: u64) -> Self {
        let n_f = n as f64;
        let half = n_f / 2.0;
        let step = UNIVERSE_CYCLE / n_f;
        Self {
            n,
            theta_start: (0.0 - half) * step,
            theta_end: (n_f - half) * step,
        }
    }

    /// Angular distance covered by the viewport; 2π up to rounding.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.theta_end - self.theta_start
    }

    /// Project an angle through the tangent and apply the restoration factor.
    #[must_use]
    pub fn project(theta: f64, constant: f64) -> f64 {
        theta.tan() * constant
    }
}

/// Full record of one closure measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosureMeasurement {
    pub n: u64,
    pub constant: f64,
    pub y_start: f64,
    pub y_end: f64,
    /// |`y_start` - `y_end`|
    pub error: f64,
}

/// Measure the closure gap at scale `n`, keeping both projections.
#[must_use]
pub fn measure(n: u64, constant: f64) -> ClosureMeasurement {
    let geometry = ObserverGeometry::new(n);
    let y_start = ObserverGeometry::project(geometry.theta_start, constant);
    let y_end = ObserverGeometry::project(geometry.theta_end, constant);
    ClosureMeasurement {
        n,
        constant,
        y_start,
        y_end,
        error: (y_start - y_end).abs(),
    }
}

/// Closure error |tan(θ_start)·c − tan(θ_end)·c| at scale `n`.
#[must_use]
pub fn closure_error(n: u64, constant: f64) -> f64 {
    measure(n, constant).error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PSI;
    use crate::tolerances;

    #[test]
    fn geometry_spans_one_cycle() {
        for n in [1, 2, 3, 4, 7, 1_000, 1_000_000_000] {
            let g = ObserverGeometry::new(n);
            assert!(
                (g.span() - UNIVERSE_CYCLE).abs() < tolerances::CYCLE_SPAN_ABS,
                "n={n}: span {} != 2π",
                g.span()
            );
        }
    }

    #[test]
    fn geometry_is_symmetric() {
        // n - n/2 == n/2 exactly in f64, so the endpoints mirror each other
        let g = ObserverGeometry::new(1_000_000);
        assert_eq!(g.theta_start, -g.theta_end);
    }

    #[test]
    fn unit_scale_is_finite() {
        let g = ObserverGeometry::new(1);
        assert!(g.theta_start.is_finite());
        assert!(g.theta_end.is_finite());
        assert!(closure_error(1, PSI).is_finite());
    }

    #[test]
    fn small_scale_closes() {
        let err = closure_error(4, 1.0);
        assert!(err < tolerances::SMALL_SCALE_CLOSURE_MAX, "n=4 error {err:e}");
    }

    #[test]
    fn measurement_matches_closure_error() {
        let m = measure(1_000, PSI);
        assert_eq!(m.error, closure_error(1_000, PSI));
        assert_eq!(m.error, (m.y_start - m.y_end).abs());
        assert_eq!(m.constant, PSI);
    }

    #[test]
    fn zero_constant_zero_error() {
        assert_eq!(closure_error(1_000_000, 0.0), 0.0);
    }

    #[test]
    fn zero_scale_is_nan() {
        assert!(closure_error(0, 1.0).is_nan());
    }
}
