//! Strict decimal parsing
//!
//! Accepts `[+-]? (digits ("." digits?)? | "." digits) ([eE] [+-]? digits)?`
//! surrounded by optional ASCII whitespace. Everything else, including the
//! textual specials `inf` and `nan`, is rejected.

use super::error::ParseError;

/// Parse `raw` as an `f64`, requiring the whole token to be a decimal number.
///
/// Magnitudes beyond `f64` range overflow to infinity rather than failing.
pub fn parse_number(raw: &str) -> Result<f64, ParseError> {
    let token = raw.trim_matches(|c: char| c.is_ascii_whitespace());

    if !is_decimal(token.as_bytes()) {
        return Err(ParseError::new(raw));
    }

    token.parse::<f64>().map_err(|_| ParseError::new(raw))
}

/// Check the decimal grammar byte by byte
fn is_decimal(bytes: &[u8]) -> bool {
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    // A mantissa needs at least one digit on either side of the point
    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }

    pos == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_integers_and_decimals() {
        assert_eq!(parse_number("100").unwrap(), 100.0);
        assert_eq!(parse_number("-40").unwrap(), -40.0);
        assert_eq!(parse_number("+7").unwrap(), 7.0);
        assert_eq!(parse_number("36.6").unwrap(), 36.6);
        assert_eq!(parse_number(".5").unwrap(), 0.5);
        assert_eq!(parse_number("5.").unwrap(), 5.0);
    }

    #[test]
    fn test_accepts_exponents() {
        assert_eq!(parse_number("1e3").unwrap(), 1000.0);
        assert_eq!(parse_number("2.5E-2").unwrap(), 0.025);
        assert_eq!(parse_number("-1e+2").unwrap(), -100.0);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(parse_number("  12.5").unwrap(), 12.5);
        assert_eq!(parse_number("12.5\t").unwrap(), 12.5);
    }

    #[test]
    fn test_overflow_becomes_infinity() {
        let value = parse_number("1e400").unwrap();
        assert!(value.is_infinite() && value.is_sign_positive());
        let value = parse_number("-1e400").unwrap();
        assert!(value.is_infinite() && value.is_sign_negative());
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        for raw in [
            "", " ", "\t\n", "-", "+", ".", "-.", "12abc", "abc", "1e", "1e+", "1.2.3", "--1",
            "1 2", "0x10", "inf", "-inf", "NaN", "infinity", "1_000", "١٢",
        ] {
            let err = parse_number(raw).unwrap_err();
            assert_eq!(err.raw, raw, "error should carry the raw token");
        }
    }
}
