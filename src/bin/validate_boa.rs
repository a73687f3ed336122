// SPDX-License-Identifier: AGPL-3.0-only

//! Validate closure-error properties of the tangent projection.
//!
//! Tests: per-scale bound, linearity in the constant, uniqueness ratio,
//! cycle span, small-scale closure, end-to-end report shape.

use boa_verification::constants::{PSI, UNIVERSE_CYCLE};
use boa_verification::observer::{closure_error, ObserverGeometry};
use boa_verification::report;
use boa_verification::tolerances;
use boa_verification::validation::ValidationHarness;
use boa_verification::{logging, SweepConfig};

fn main() {
    logging::init();

    println!("═══════════════════════════════════════════════════════════");
    println!("  BOA Closure Validation");
    println!("  Reference: tan(θ) one full cycle apart, f64");
    println!("═══════════════════════════════════════════════════════════\n");

    let mut harness = ValidationHarness::new("boa_closure");
    let config = SweepConfig::default();

    // ─── Scale sweep ──────────────────────────────────────────────
    println!("── Scale sweep (c = 2/π) ──");
    match config.scales() {
        Ok(scales) => {
            for (p, n) in scales {
                let err = closure_error(n, PSI);
                let icon = if err < tolerances::SWEEP_CLOSURE_MAX { "✅" } else { "❌" };
                println!("  {icon} 10^{p:<2} error = {err:.4e}");
                harness.check_lower(&format!("10^{p} error >= 0"), err, -f64::MIN_POSITIVE);
                harness.check_upper(
                    &format!("10^{p} error bound"),
                    err,
                    tolerances::SWEEP_CLOSURE_MAX,
                );
            }
        }
        Err(e) => {
            println!("  ❌ sweep setup failed: {e}");
            harness.check_bool("sweep setup", false);
        }
    }
    println!();

    // ─── Linearity ────────────────────────────────────────────────
    println!("── Linearity: error(n, c) = |c| · error(n, 1) ──");
    for n in [1_000_u64, 1_000_000_000] {
        let control = closure_error(n, 1.0);
        for c in [PSI, -3.5] {
            let err = closure_error(n, c);
            let expected = c.abs() * control;
            println!("  n={n:<10} c={c:<+10.6} error={err:.4e} expected={expected:.4e}");
            harness.check_rel(
                &format!("linearity n={n} c={c:.4}"),
                err,
                expected,
                tolerances::LINEARITY_REL,
            );
        }
    }
    println!();

    // ─── Uniqueness ratio ─────────────────────────────────────────
    println!("── Uniqueness ratio ──");
    let giga = 1_000_000_000;
    let ratio = closure_error(giga, PSI) / closure_error(giga, 1.0);
    println!("  ratio = {ratio:.12}, 2/π = {PSI:.12}");
    harness.check_abs("ratio = 2/π", ratio, PSI, tolerances::RATIO_TOLERANCE);
    println!();

    // ─── Geometry ─────────────────────────────────────────────────
    println!("── Geometry ──");
    let unit = ObserverGeometry::new(1);
    harness.check_bool(
        "n=1 thetas finite",
        unit.theta_start.is_finite() && unit.theta_end.is_finite(),
    );
    for n in [1_u64, 4, 1_000] {
        let span = ObserverGeometry::new(n).span();
        println!("  n={n:<5} span - 2π = {:.3e}", span - UNIVERSE_CYCLE);
        harness.check_abs(
            &format!("n={n} span = 2π"),
            span,
            UNIVERSE_CYCLE,
            tolerances::CYCLE_SPAN_ABS,
        );
    }
    harness.check_upper(
        "n=4 closure",
        closure_error(4, 1.0),
        tolerances::SMALL_SCALE_CLOSURE_MAX,
    );
    harness.check_upper(
        "n=1000 closure (2/π)",
        closure_error(1_000, PSI),
        tolerances::END_TO_END_CLOSURE_MAX,
    );
    println!();

    // ─── End-to-end report ────────────────────────────────────────
    println!("── End-to-end report ──");
    match report::run(&config) {
        Ok(r) => {
            harness.check_bool("5 sweep rows", r.rows.len() == 5);
            let printed = |v: f64| format!("{:.*}", tolerances::PRINTED_RATIO_DECIMALS, v);
            let same = printed(r.uniqueness.ratio) == printed(r.uniqueness.target);
            println!(
                "  ratio {} vs target {}",
                printed(r.uniqueness.ratio),
                printed(r.uniqueness.target)
            );
            harness.check_bool("printed ratio = printed target", same);
        }
        Err(e) => {
            println!("  ❌ report failed: {e}");
            harness.check_bool("report run", false);
        }
    }

    harness.finish();
}
