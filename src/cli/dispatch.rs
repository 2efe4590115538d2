//! Invocation resolution: program-name lookup and flag dispatch

use std::ffi::{OsStr, OsString};
use std::path::Path;

use thiserror::Error;

use super::args::ConvArgs;
use super::usage::UsageError;
use crate::convert::{convert, ConversionKind, ParseError};

/// Program names that select a conversion directly
pub const PROGRAM_NAMES: [(&str, ConversionKind); 12] = [
    ("c2f", ConversionKind::CelsiusToFahrenheit),
    ("f2c", ConversionKind::FahrenheitToCelsius),
    ("kg2lb", ConversionKind::KilogramToPound),
    ("k2l", ConversionKind::KilogramToPound),
    ("lb2kg", ConversionKind::PoundToKilogram),
    ("l2k", ConversionKind::PoundToKilogram),
    ("m2in", ConversionKind::MetreToInch),
    ("m2i", ConversionKind::MetreToInch),
    ("in2m", ConversionKind::InchToMetre),
    ("i2m", ConversionKind::InchToMetre),
    ("m2f", ConversionKind::MetreToFoot),
    ("f2m", ConversionKind::FootToMetre),
];

/// Anything that stops a conversion from being printed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Basename of `argv[0]`, without the platform executable suffix
pub fn program_name(argv0: &OsStr) -> String {
    let name = Path::new(argv0)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let suffix = std::env::consts::EXE_SUFFIX;
    match name.strip_suffix(suffix) {
        Some(stem) if !suffix.is_empty() => stem.to_string(),
        _ => name,
    }
}

/// Conversion selected by a sub-command program name
pub fn lookup_program(name: &str) -> Option<ConversionKind> {
    PROGRAM_NAMES
        .iter()
        .find(|(program, _)| *program == name)
        .map(|&(_, kind)| kind)
}

/// A resolved command line: which conversion to run on which raw value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub kind: ConversionKind,
    pub value: String,
}

impl Invocation {
    /// Resolve the full argument list, program name included.
    ///
    /// A recognised program name requires exactly one value argument;
    /// any other name goes through the `-<category> -<unit> <value>` grammar.
    pub fn from_args<I, T>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let program = args
            .first()
            .map(|argv0| program_name(argv0))
            .unwrap_or_default();

        if let Some(kind) = lookup_program(&program) {
            return match args.as_slice() {
                [_, value] => Ok(Invocation {
                    value: value.to_string_lossy().into_owned(),
                    program,
                    kind,
                }),
                _ => Err(UsageError::Direct { program, kind }),
            };
        }

        let parsed = ConvArgs::parse_tokens(&args).ok_or(UsageError::Conv)?;
        let kind = parsed.kind().ok_or(UsageError::Conv)?;

        Ok(Invocation {
            program,
            kind,
            value: parsed.value.to_string_lossy().into_owned(),
        })
    }
}

/// Resolve the command line and run the conversion, returning the result line
pub fn run<I, T>(args: I) -> Result<String, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let invocation = Invocation::from_args(args)?;
    Ok(convert(invocation.kind, &invocation.value)?)
}
