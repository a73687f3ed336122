// SPDX-License-Identifier: AGPL-3.0-only

//! Restoration benchmark: closure status per scale and the candidate
//! constant comparison (control, golden, 2/π).

use std::io::{self, Write};

use boa_verification::{candidates, logging, BoaError, SweepConfig};

fn main() -> Result<(), BoaError> {
    logging::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    candidates::write_benchmark(&SweepConfig::default(), &mut out)?;

    writeln!(out)?;
    writeln!(out, "CONCLUSION:")?;
    writeln!(
        out,
        "Every candidate's error relative to control equals its own value."
    )?;
    writeln!(out, "2/π reduces the gap by exactly 2/π (0.6366), as linearity predicts.")?;
    out.flush()?;
    Ok(())
}
