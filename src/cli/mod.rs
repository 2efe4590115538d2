//! CLI module - invocation styles, argument parsing and usage text

mod args;
mod dispatch;
mod usage;

pub use args::{Category, ConvArgs, FLAG_TABLE};
pub use dispatch::*;
pub use usage::*;
