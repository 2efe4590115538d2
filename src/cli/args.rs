//! Flag-dispatch argument definitions using clap
//!
//! The grammar is strictly positional: `conv -<category> -<unit> <value>`.
//! Every token may start with `-` (negative values included), and clap's
//! built-in help and version flags are disabled so that no token is ever
//! swallowed as an option. Callers parse through [`ConvArgs::parse_tokens`],
//! which also stops clap from reading `--` as its end-of-options marker.

use std::ffi::OsString;
use std::iter;

use clap::Parser;

use crate::convert::ConversionKind;

/// conv - convert a value between paired units
#[derive(Parser, Debug)]
#[command(name = "conv")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct ConvArgs {
    /// Conversion category: -t (temperature), -w (weight) or -d (distance)
    #[arg(allow_hyphen_values = true, value_parser = parse_category_flag)]
    pub category: Category,

    /// Unit flag within the category, e.g. -c or -M
    #[arg(allow_hyphen_values = true, value_parser = parse_unit_flag)]
    pub unit: char,

    /// Value to convert; kept as raw OS text so the number parser reports it
    #[arg(allow_hyphen_values = true, value_parser = clap::value_parser!(OsString))]
    pub value: OsString,
}

impl ConvArgs {
    /// Parse exactly `<prog> <category> <unit> <value>`.
    ///
    /// Any other token count is rejected before clap sees it. A leading `--`
    /// is inserted so every token is taken literally, including a `--` value.
    pub fn parse_tokens(args: &[OsString]) -> Option<ConvArgs> {
        let [program, tokens @ ..] = args else {
            return None;
        };
        if tokens.len() != 3 {
            return None;
        }

        let escaped = iter::once(program.clone())
            .chain(iter::once(OsString::from("--")))
            .chain(tokens.iter().cloned());
        ConvArgs::try_parse_from(escaped).ok()
    }

    /// Resolve the category/unit pair, or `None` if the unit does not belong
    /// to the category.
    pub fn kind(&self) -> Option<ConversionKind> {
        self.category.select(self.unit)
    }
}

/// Conversion category selected by the first flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Temperature,
    Weight,
    Distance,
}

/// Every `(category, unit flag, kind)` combination, in usage order
pub const FLAG_TABLE: [(Category, char, ConversionKind); 8] = [
    (Category::Temperature, 'c', ConversionKind::CelsiusToFahrenheit),
    (Category::Temperature, 'f', ConversionKind::FahrenheitToCelsius),
    (Category::Weight, 'k', ConversionKind::KilogramToPound),
    (Category::Weight, 'l', ConversionKind::PoundToKilogram),
    (Category::Distance, 'm', ConversionKind::MetreToInch),
    (Category::Distance, 'i', ConversionKind::InchToMetre),
    (Category::Distance, 'M', ConversionKind::MetreToFoot),
    (Category::Distance, 'F', ConversionKind::FootToMetre),
];

impl Category {
    pub const ALL: [Category; 3] = [Category::Temperature, Category::Weight, Category::Distance];

    pub fn flag(self) -> char {
        match self {
            Category::Temperature => 't',
            Category::Weight => 'w',
            Category::Distance => 'd',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Temperature => "Temperature",
            Category::Weight => "Weight",
            Category::Distance => "Distance",
        }
    }

    pub fn from_flag(flag: char) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.flag() == flag)
    }

    /// Look up the conversion for a unit flag within this category
    pub fn select(self, unit: char) -> Option<ConversionKind> {
        FLAG_TABLE
            .iter()
            .find(|(category, flag, _)| *category == self && *flag == unit)
            .map(|&(_, _, kind)| kind)
    }
}

/// Strip the leading `-` of a single-letter flag such as `-t`
fn single_flag(s: &str) -> Option<char> {
    let mut chars = s.strip_prefix('-')?.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Validator for the category flag
fn parse_category_flag(s: &str) -> Result<Category, String> {
    single_flag(s)
        .and_then(Category::from_flag)
        .ok_or_else(|| format!("'{}' is not a conversion category", s))
}

/// Validator for the unit flag; category membership is checked after parsing
fn parse_unit_flag(s: &str) -> Result<char, String> {
    single_flag(s)
        .filter(|c| FLAG_TABLE.iter().any(|(_, flag, _)| flag == c))
        .ok_or_else(|| format!("'{}' is not a unit flag", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_flag() {
        assert_eq!(single_flag("-t"), Some('t'));
        assert_eq!(single_flag("-M"), Some('M'));
        assert_eq!(single_flag("t"), None);
        assert_eq!(single_flag("-"), None);
        assert_eq!(single_flag("-tc"), None);
        assert_eq!(single_flag("--t"), None);
    }

    fn tokens(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_parse_tokens_takes_every_token_literally() {
        let parsed = ConvArgs::parse_tokens(&tokens(&["conv", "-d", "-M", "--"])).unwrap();
        assert_eq!(parsed.kind(), Some(ConversionKind::MetreToFoot));
        assert_eq!(parsed.value, OsString::from("--"));

        let parsed = ConvArgs::parse_tokens(&tokens(&["conv", "-w", "-l", "-0.5"])).unwrap();
        assert_eq!(parsed.value, OsString::from("-0.5"));
    }

    #[test]
    fn test_parse_tokens_requires_three_tokens() {
        assert!(ConvArgs::parse_tokens(&[]).is_none());
        assert!(ConvArgs::parse_tokens(&tokens(&["conv", "-t", "-c"])).is_none());
        assert!(ConvArgs::parse_tokens(&tokens(&["conv", "-t", "-c", "--", "1"])).is_none());
    }

    #[test]
    fn test_every_kind_has_exactly_one_flag_pair() {
        for kind in ConversionKind::ALL {
            let count = FLAG_TABLE.iter().filter(|(_, _, k)| *k == kind).count();
            assert_eq!(count, 1, "{:?}", kind);
        }
    }

    #[test]
    fn test_unit_flags_are_case_sensitive() {
        assert_eq!(
            Category::Distance.select('m'),
            Some(ConversionKind::MetreToInch)
        );
        assert_eq!(
            Category::Distance.select('M'),
            Some(ConversionKind::MetreToFoot)
        );
        assert_eq!(
            Category::Distance.select('F'),
            Some(ConversionKind::FootToMetre)
        );
        assert_eq!(Category::Temperature.select('F'), None);
    }

    #[test]
    fn test_unit_outside_category_is_rejected() {
        assert_eq!(Category::Weight.select('c'), None);
        assert_eq!(Category::Temperature.select('k'), None);
    }
}
