// SPDX-License-Identifier: AGPL-3.0-only

//! Integration tests: driver end-to-end, text report and benchmark tables.

use boa_verification::candidates::{compare_candidates, write_benchmark};
use boa_verification::constants::PSI;
use boa_verification::report::format_sci;
use boa_verification::tolerances;
use boa_verification::{run, BoaError, SweepConfig};

#[test]
fn driver_produces_five_rows() {
    let report = run(&SweepConfig::default()).expect("default run");
    let powers: Vec<u32> = report.rows.iter().map(|r| r.power).collect();
    assert_eq!(powers, vec![3, 6, 9, 12, 15]);
}

#[test]
fn printed_ratio_matches_printed_target() {
    let report = run(&SweepConfig::default()).expect("default run");
    let d = tolerances::PRINTED_RATIO_DECIMALS;
    assert_eq!(
        format!("{:.d$}", report.uniqueness.ratio),
        format!("{:.d$}", PSI)
    );
    assert_eq!(format!("{:.d$}", PSI), "0.63662");
}

#[test]
fn text_report_rows_use_report_errors() {
    let report = run(&SweepConfig::default()).expect("default run");
    let text = report.render().expect("render");
    for row in &report.rows {
        let expected = format!("10^{:<9} | {}", row.power, format_sci(row.error, 4));
        assert!(
            text.lines().any(|l| l == expected),
            "missing row {expected:?} in\n{text}"
        );
    }
}

#[test]
fn row_errors_in_python_exponent_style() {
    let report = run(&SweepConfig::default()).expect("default run");
    let text = report.render().expect("render");
    for line in text.lines().filter(|l| l.starts_with("10^")) {
        let value = line.rsplit(" | ").next().expect("value column");
        let (_, exp) = value.split_once('e').expect("scientific notation");
        assert!(exp.starts_with('-') || exp.starts_with('+'), "{value}");
        assert!(exp.len() >= 3, "two-digit exponent expected: {value}");
    }
}

#[test]
fn custom_sweep_reuses_driver() {
    let cfg = SweepConfig {
        first_power: 1,
        end_power: 5,
        step: 2,
        control_power: 6,
        constant: 1.0,
    };
    let report = run(&cfg).expect("custom run");
    assert_eq!(report.rows.len(), 2);
    assert!((report.uniqueness.ratio - 1.0).abs() < tolerances::RATIO_TOLERANCE);
}

#[test]
fn bad_sweep_is_an_error() {
    let cfg = SweepConfig {
        step: 0,
        ..SweepConfig::default()
    };
    let err = run(&cfg).expect_err("zero step");
    assert!(matches!(err, BoaError::EmptySweep { step: 0, .. }));
}

#[test]
fn candidate_ratios_track_constants() {
    let results = compare_candidates(1_000_000_000);
    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Control (1.0)", "Golden (0.618)", "BOA (0.6366..)"]);
    let boa = &results[2];
    assert!((boa.ratio_to_control - PSI).abs() < tolerances::RATIO_TOLERANCE);
}

#[test]
fn benchmark_writes_both_tables() {
    let mut buf = Vec::new();
    write_benchmark(&SweepConfig::default(), &mut buf).expect("benchmark");
    let text = String::from_utf8(buf).expect("utf8");
    assert!(text.contains("1. SCALE INVARIANCE"));
    assert!(text.contains("2. CONSTANT UNIQUENESS"));
    assert_eq!(text.lines().filter(|l| l.ends_with('x')).count(), 3);
}
