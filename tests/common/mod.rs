//! Shared test utilities

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use conv::convert::ConversionKind;
use rand::prelude::*;
use rand::SeedableRng;
use tempfile::TempDir;

/// Closed-form reference for each conversion, written out independently of
/// the library's formula table
pub fn reference(kind: ConversionKind, x: f64) -> f64 {
    match kind {
        ConversionKind::CelsiusToFahrenheit => x * 9.0 / 5.0 + 32.0,
        ConversionKind::FahrenheitToCelsius => (x - 32.0) * 5.0 / 9.0,
        ConversionKind::KilogramToPound => x * 2.20462262185,
        ConversionKind::PoundToKilogram => x / 2.20462262185,
        ConversionKind::MetreToInch => x * 39.3700787402,
        ConversionKind::InchToMetre => x / 39.3700787402,
        ConversionKind::MetreToFoot => x * 3.28083989501,
        ConversionKind::FootToMetre => x / 3.28083989501,
    }
}

/// Split a result line into its input and output value strings
///
/// `"10.000 kg = 22.046226 lbs"` becomes `("10.000", "22.046226")`.
pub fn split_values(line: &str) -> (String, String) {
    let (left, right) = line.split_once(" = ").expect("result line has ' = '");
    (leading_number(left), leading_number(right))
}

fn leading_number(side: &str) -> String {
    side.chars()
        .take_while(|c| c.is_ascii_digit() || matches!(c, '-' | '.' | 'i' | 'n' | 'f'))
        .collect()
}

/// Deterministic sample of values spanning several magnitudes
pub fn random_values(seed: u64, count: usize) -> Vec<f64> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let magnitude = 10f64.powi((i % 7) as i32 - 2);
            (rng.gen::<f64>() * 2.0 - 1.0) * magnitude
        })
        .collect()
}

/// Command for the compiled `conv` binary
pub fn conv_cmd() -> Command {
    Command::cargo_bin("conv").unwrap()
}

/// Copy the compiled binary into a temporary directory under `name`, the
/// way an installer would link sub-command names to it
pub fn linked_binary(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let source = assert_cmd::cargo::cargo_bin("conv");
    let target = temp_dir
        .path()
        .join(format!("{}{}", name, std::env::consts::EXE_SUFFIX));
    std::fs::copy(&source, &target).unwrap();
    (temp_dir, target)
}
