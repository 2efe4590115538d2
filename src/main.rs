//! conv: Unit Conversion CLI Tool
//!
//! Invoked as `conv -<category> -<unit> <value>`, or through a link named
//! after a single conversion (`c2f 100`, `k2l 10`, ...).

use std::env;
use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};

use conv::cli;
use conv::utils::{write_error, write_result};

fn main() -> Result<ExitCode> {
    match cli::run(env::args_os()) {
        Ok(line) => {
            write_result(&mut io::stdout().lock(), &line)
                .context("Failed to write conversion result")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            write_error(&mut io::stderr().lock(), &err)
                .context("Failed to write diagnostics")?;
            Ok(ExitCode::FAILURE)
        }
    }
}
