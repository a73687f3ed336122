// SPDX-License-Identifier: AGPL-3.0-only

//! Pass/fail harness for `validate_boa`.
//!
//! Each closure property is registered as a named check against a threshold
//! from [`crate::tolerances`]. `finish` prints a summary, a one-line JSON
//! record, and exits 0 only if every check passed.

use std::fmt::Write as _;
use std::process;

use serde::Serialize;

/// How a check's threshold is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ToleranceMode {
    /// |observed - expected| < tolerance
    Absolute,
    /// |observed - expected| / |expected| < tolerance
    Relative,
    /// observed < threshold
    UpperBound,
    /// observed > threshold
    LowerBound,
    /// boolean property
    Exact,
}

impl std::fmt::Display for ToleranceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absolute => write!(f, "abs"),
            Self::Relative => write!(f, "rel"),
            Self::UpperBound => write!(f, "<"),
            Self::LowerBound => write!(f, ">"),
            Self::Exact => write!(f, "bool"),
        }
    }
}

/// One recorded check.
#[derive(Debug, Clone, Serialize)]
pub struct Check {
    pub label: String,
    pub passed: bool,
    pub observed: f64,
    /// Expected value, or the bound for one-sided checks
    pub expected: f64,
    pub tolerance: f64,
    pub mode: ToleranceMode,
}

/// Accumulates checks for one validation run.
#[derive(Debug, Default, Serialize)]
#[must_use]
pub struct ValidationHarness {
    pub name: String,
    pub checks: Vec<Check>,
}

impl ValidationHarness {
    #[must_use = "validation harness must be used to run checks"]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            checks: Vec::new(),
        }
    }

    fn record(
        &mut self,
        label: &str,
        passed: bool,
        observed: f64,
        expected: f64,
        tolerance: f64,
        mode: ToleranceMode,
    ) -> bool {
        self.checks.push(Check {
            label: label.to_string(),
            passed,
            observed,
            expected,
            tolerance,
            mode,
        });
        passed
    }

    /// |observed - expected| < tolerance. Returns whether it passed.
    pub fn check_abs(
        &mut self,
        label: &str,
        observed: f64,
        expected: f64,
        tolerance: f64,
    ) -> bool {
        let passed = (observed - expected).abs() < tolerance;
        self.record(label, passed, observed, expected, tolerance, ToleranceMode::Absolute)
    }

    /// Relative error below `tolerance`; falls back to absolute when
    /// `expected` is zero.
    pub fn check_rel(
        &mut self,
        label: &str,
        observed: f64,
        expected: f64,
        tolerance: f64,
    ) -> bool {
        let passed = if expected.abs() > f64::MIN_POSITIVE {
            ((observed - expected) / expected).abs() < tolerance
        } else {
            observed.abs() < tolerance
        };
        self.record(label, passed, observed, expected, tolerance, ToleranceMode::Relative)
    }

    /// observed < threshold. NaN fails.
    pub fn check_upper(&mut self, label: &str, observed: f64, threshold: f64) -> bool {
        let passed = observed < threshold;
        self.record(label, passed, observed, threshold, threshold, ToleranceMode::UpperBound)
    }

    /// observed > threshold. NaN fails.
    pub fn check_lower(&mut self, label: &str, observed: f64, threshold: f64) -> bool {
        let passed = observed > threshold;
        self.record(label, passed, observed, threshold, threshold, ToleranceMode::LowerBound)
    }

    pub fn check_bool(&mut self, label: &str, passed: bool) -> bool {
        self.record(
            label,
            passed,
            f64::from(u8::from(passed)),
            1.0,
            0.0,
            ToleranceMode::Exact,
        )
    }

    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    #[must_use]
    pub const fn total_count(&self) -> usize {
        self.checks.len()
    }

    /// Vacuously true with no checks.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Labels of failed checks, in registration order.
    #[must_use]
    pub fn failed_labels(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.label.as_str())
            .collect()
    }

    /// Human-readable summary block.
    #[must_use]
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        let _ = writeln!(
            s,
            "═══ {} validation: {}/{} checks passed ═══",
            self.name,
            self.passed_count(),
            self.total_count()
        );
        for check in &self.checks {
            let icon = if check.passed { "✓" } else { "✗" };
            let _ = writeln!(
                s,
                "  {icon} {}: observed={:.6e}, expected={:.6e}, tol={:.2e} ({})",
                check.label, check.observed, check.expected, check.tolerance, check.mode
            );
        }
        s
    }

    /// Single-line JSON record of the run.
    ///
    /// # Errors
    ///
    /// Returns `Err` if serialization fails.
    pub fn summary_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Print summary and exit: 0 if all checks pass, 1 otherwise.
    pub fn finish(&self) -> ! {
        println!();
        print!("{}", self.format_summary());
        match self.summary_json() {
            Ok(json) => println!("summary: {json}"),
            Err(e) => tracing::warn!("summary serialization failed: {e}"),
        }

        if self.all_passed() {
            println!("ALL CHECKS PASSED");
            process::exit(0);
        }
        println!("FAILED CHECKS: {}", self.failed_labels().join(", "));
        process::exit(1);
    }
}
