//! Terminal output: plain result lines on stdout, styled diagnostics on stderr
//!
//! Styles are computed against stderr's terminal capabilities, so redirected
//! or captured output is plain text.

use std::io::{self, Write};

use console::style;

use crate::cli::CliError;

/// Write a conversion result line. Never styled, so it stays script-friendly.
pub fn write_result<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    writeln!(out, "{}", line)
}

/// Write a usage block with a bold `Usage:` header
pub fn write_usage<W: Write>(err: &mut W, usage: &str) -> io::Result<()> {
    match usage.strip_prefix("Usage:") {
        Some(rest) => writeln!(err, "{}{}", style("Usage:").for_stderr().bold(), rest),
        None => writeln!(err, "{}", usage),
    }
}

/// Write an `Error: ...` line for a value that failed to parse
pub fn write_parse_error<W: Write>(err: &mut W, message: &str) -> io::Result<()> {
    writeln!(
        err,
        "{} {}",
        style("Error:").for_stderr().red().bold(),
        message
    )
}

/// Report any CLI failure the way the user should see it
pub fn write_error<W: Write>(err: &mut W, error: &CliError) -> io::Result<()> {
    match error {
        CliError::Usage(usage) => write_usage(err, &usage.to_string()),
        CliError::Parse(parse) => write_parse_error(err, &parse.to_string()),
    }
}
