//! conv: Unit Conversion Library
//!
//! Converts a single value between paired units (temperature, weight and
//! distance), and resolves the two command-line styles used to request a
//! conversion: sub-command program names such as `c2f`, or `conv -t -c <value>`.

pub mod cli;
pub mod convert;
pub mod utils;
