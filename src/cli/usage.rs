//! Usage text for both invocation styles

use thiserror::Error;

use super::args::FLAG_TABLE;
use crate::convert::ConversionKind;

/// Name shown in the flag-dispatch usage block
pub const CONV_PROGRAM: &str = "conv";

/// The command line did not match either invocation style.
///
/// Display renders the usage text to show the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// Invoked under a sub-command name with the wrong number of arguments
    #[error("{}", direct_usage(.program, *.kind))]
    Direct {
        program: String,
        kind: ConversionKind,
    },

    /// Flag dispatch with a bad argument count or an unrecognised flag
    #[error("{}", conv_usage())]
    Conv,
}

/// Usage for a sub-command name, e.g. `Usage: c2f <celsius_value>`
pub fn direct_usage(program: &str, kind: ConversionKind) -> String {
    format!(
        "Usage: {} <{}_value>\nConvert {}",
        program,
        kind.from_unit().noun(),
        kind
    )
}

/// Full usage block listing every flag combination
pub fn conv_usage() -> String {
    FLAG_TABLE
        .iter()
        .enumerate()
        .map(|(i, (category, unit, kind))| {
            let prefix = if i == 0 { "Usage: " } else { "       " };
            format!(
                "{}{} -{} -{} <value>   ({}: {})",
                prefix,
                CONV_PROGRAM,
                category.flag(),
                unit,
                category.label(),
                kind
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
