//! Converter - parses a raw value, applies a conversion and formats the result

mod error;
mod kind;
mod number;

pub use error::ParseError;
pub use kind::*;
pub use number::parse_number;

/// Decimal places shown for the input value
pub const INPUT_PRECISION: usize = 3;

/// Decimal places shown for the converted value
pub const OUTPUT_PRECISION: usize = 6;

/// Convert `raw` with `kind` and render `"<input> <unit> = <output> <unit>"`.
///
/// # Examples
/// ```
/// use conv::convert::{convert, ConversionKind};
///
/// let line = convert(ConversionKind::CelsiusToFahrenheit, "100").unwrap();
/// assert_eq!(line, "100.000°C = 212.000000°F");
/// ```
pub fn convert(kind: ConversionKind, raw: &str) -> Result<String, ParseError> {
    let input = parse_number(raw)?;
    let output = kind.apply(input);
    let spec = kind.spec();

    Ok(format!(
        "{} = {}",
        spec.from.format_value(input, INPUT_PRECISION),
        spec.to.format_value(output, OUTPUT_PRECISION)
    ))
}
