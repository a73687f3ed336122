// SPDX-License-Identifier: AGPL-3.0-only

//! Integration tests: closure error properties through the public API.

use boa_verification::constants::{PSI, UNIVERSE_CYCLE};
use boa_verification::tolerances;
use boa_verification::{closure_error, measure, ObserverGeometry};

const SWEPT_SCALES: [u64; 5] = [
    1_000,
    1_000_000,
    1_000_000_000,
    1_000_000_000_000,
    1_000_000_000_000_000,
];

#[test]
fn swept_errors_non_negative_and_bounded() {
    for n in SWEPT_SCALES {
        let err = closure_error(n, PSI);
        assert!(err >= 0.0, "n={n}: negative error {err:e}");
        assert!(
            err < tolerances::SWEEP_CLOSURE_MAX,
            "n={n}: error {err:e} above bound"
        );
    }
}

#[test]
fn error_scales_linearly_with_constant() {
    for n in [1_000_u64, 1_000_000_000] {
        let control = closure_error(n, 1.0);
        assert!(control > 0.0, "n={n}: control error should be nonzero");
        for c in [PSI, 2.5, -0.75] {
            let err = closure_error(n, c);
            let expected = c.abs() * control;
            assert!(
                ((err - expected) / expected).abs() < tolerances::LINEARITY_REL,
                "n={n} c={c}: {err:e} vs |c|·control {expected:e}"
            );
        }
    }
}

#[test]
fn uniqueness_ratio_is_psi() {
    let n = 1_000_000_000;
    let ratio = closure_error(n, PSI) / closure_error(n, 1.0);
    assert!(
        (ratio - PSI).abs() < tolerances::RATIO_TOLERANCE,
        "ratio {ratio} vs 2/π {PSI}"
    );
}

#[test]
fn unit_scale_stays_finite() {
    let g = ObserverGeometry::new(1);
    assert!(g.theta_start.is_finite() && g.theta_end.is_finite());
    let m = measure(1, PSI);
    assert!(m.y_start.is_finite() && m.y_end.is_finite());
    assert!(m.error.is_finite());
}

#[test]
fn endpoints_one_cycle_apart() {
    for n in [1_u64, 2, 4, 10, 999, 1_000_000_000_000_000] {
        let span = ObserverGeometry::new(n).span();
        assert!(
            (span - UNIVERSE_CYCLE).abs() < tolerances::CYCLE_SPAN_ABS,
            "n={n}: span {span} vs 2π"
        );
    }
}

#[test]
fn small_scale_tangents_agree() {
    let m = measure(4, 1.0);
    assert!(
        (m.y_start - m.y_end).abs() < tolerances::SMALL_SCALE_CLOSURE_MAX,
        "tan(θ_start)={} tan(θ_end)={}",
        m.y_start,
        m.y_end
    );
}

#[test]
fn end_to_end_thousand() {
    let err = closure_error(1_000, PSI);
    assert!(err.is_finite());
    assert!(err >= 0.0);
    assert!(err < tolerances::END_TO_END_CLOSURE_MAX, "error {err:e}");
}

#[test]
fn closure_is_deterministic() {
    for n in SWEPT_SCALES {
        assert_eq!(
            closure_error(n, PSI).to_bits(),
            closure_error(n, PSI).to_bits()
        );
    }
}
