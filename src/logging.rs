// SPDX-License-Identifier: AGPL-3.0-only

//! Diagnostic logging for the binaries.
//!
//! Logs go to stderr so the stdout report stays byte-exact. Verbosity
//! follows `RUST_LOG`, defaulting to `warn`.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Install the global `tracing` subscriber. Safe to call more than once.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
