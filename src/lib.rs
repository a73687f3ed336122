// SPDX-License-Identifier: AGPL-3.0-only

//! BOA closure verification
//!
//! Measures the f64 gap between two tangent projections one full cycle
//! apart, `|tan(θ_start)·c − tan(θ_end)·c|`, as the scale `n` grows through
//! powers of ten, and compares the restored (c = 2/π) error against a
//! control run (c = 1.0).
//!
//! ## Modules
//!   - `observer` — viewport geometry and the closure error function
//!   - `report` — scale sweep, uniqueness check, fixed-format text report
//!   - `candidates` — scale-invariance status and candidate-constant table
//!   - `config` — sweep parameters (in code, no runtime loading)
//!   - `tolerances` — every acceptance threshold
//!   - `validation` — pass/fail harness with exit code
//!
//! ## Binaries
//!   - `verify_boa` — sweep + uniqueness check (default)
//!   - `validate_boa` — closure properties as checks, exit 0/1
//!   - `boa_benchmark` — restoration benchmark tables

pub mod candidates;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod observer;
pub mod report;
pub mod tolerances;
pub mod validation;

pub use config::SweepConfig;
pub use constants::PSI;
pub use error::BoaError;
pub use observer::{closure_error, measure, ClosureMeasurement, ObserverGeometry};
pub use report::{run, VerificationReport};
