// SPDX-License-Identifier: AGPL-3.0-only

//! BOA verification: closure error across scale, then the uniqueness ratio.
//!
//! Output is fixed-format text on stdout; diagnostics go to stderr.

use std::io::{self, Write};

use boa_verification::{logging, report, BoaError, SweepConfig};

fn main() -> Result<(), BoaError> {
    logging::init();

    let verification = report::run(&SweepConfig::default())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    verification.write_to(&mut out)?;
    out.flush()?;
    Ok(())
}
