//! Conversion directions, display units and the static formula table

use std::fmt;

/// Pounds per kilogram
pub const POUNDS_PER_KILOGRAM: f64 = 2.20462262185;

/// Inches per metre
pub const INCHES_PER_METRE: f64 = 39.3700787402;

/// Feet per metre
pub const FEET_PER_METRE: f64 = 3.28083989501;

/// A unit of measure as it appears in results and usage text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Celsius,
    Fahrenheit,
    Kilogram,
    Pound,
    Metre,
    Inch,
    Foot,
}

impl Unit {
    /// Symbol printed after a formatted value
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
            Unit::Kilogram => "kg",
            Unit::Pound => "lbs",
            Unit::Metre => "m",
            Unit::Inch => "in",
            Unit::Foot => "ft",
        }
    }

    /// Lowercase singular noun, used for `<noun>_value` placeholders
    pub fn noun(self) -> &'static str {
        match self {
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
            Unit::Kilogram => "kilogram",
            Unit::Pound => "pound",
            Unit::Metre => "metre",
            Unit::Inch => "inch",
            Unit::Foot => "foot",
        }
    }

    /// Capitalised plural, used in usage descriptions
    pub fn plural(self) -> &'static str {
        match self {
            Unit::Celsius => "Celsius",
            Unit::Fahrenheit => "Fahrenheit",
            Unit::Kilogram => "Kilograms",
            Unit::Pound => "Pounds",
            Unit::Metre => "Metres",
            Unit::Inch => "Inches",
            Unit::Foot => "Feet",
        }
    }

    /// Degree symbols attach directly to the number; everything else is spaced
    fn attaches_to_value(self) -> bool {
        matches!(self, Unit::Celsius | Unit::Fahrenheit)
    }

    /// Format `value` with `precision` decimals followed by this unit's symbol
    pub fn format_value(self, value: f64, precision: usize) -> String {
        if self.attaches_to_value() {
            format!("{:.*}{}", precision, value, self)
        } else {
            format!("{:.*} {}", precision, value, self)
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Arithmetic of a conversion, kept in the exact evaluation order so results
/// are reproducible bit for bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Formula {
    /// `x * factor`
    Scale(f64),
    /// `x / divisor`
    InverseScale(f64),
    /// `(x * numerator / denominator) + offset`
    ScaleThenOffset {
        numerator: f64,
        denominator: f64,
        offset: f64,
    },
    /// `(x + offset) * numerator / denominator`
    OffsetThenScale {
        offset: f64,
        numerator: f64,
        denominator: f64,
    },
}

impl Formula {
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Formula::Scale(factor) => x * factor,
            Formula::InverseScale(divisor) => x / divisor,
            Formula::ScaleThenOffset {
                numerator,
                denominator,
                offset,
            } => (x * numerator / denominator) + offset,
            Formula::OffsetThenScale {
                offset,
                numerator,
                denominator,
            } => (x + offset) * numerator / denominator,
        }
    }
}

/// Formula plus the units shown on either side of the `=`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionSpec {
    pub from: Unit,
    pub to: Unit,
    pub formula: Formula,
}

/// A fixed direction of unit conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionKind {
    CelsiusToFahrenheit,
    FahrenheitToCelsius,
    KilogramToPound,
    PoundToKilogram,
    MetreToInch,
    InchToMetre,
    MetreToFoot,
    FootToMetre,
}

static CONVERSIONS: [ConversionSpec; 8] = [
    ConversionSpec {
        from: Unit::Celsius,
        to: Unit::Fahrenheit,
        formula: Formula::ScaleThenOffset {
            numerator: 9.0,
            denominator: 5.0,
            offset: 32.0,
        },
    },
    ConversionSpec {
        from: Unit::Fahrenheit,
        to: Unit::Celsius,
        formula: Formula::OffsetThenScale {
            offset: -32.0,
            numerator: 5.0,
            denominator: 9.0,
        },
    },
    ConversionSpec {
        from: Unit::Kilogram,
        to: Unit::Pound,
        formula: Formula::Scale(POUNDS_PER_KILOGRAM),
    },
    ConversionSpec {
        from: Unit::Pound,
        to: Unit::Kilogram,
        formula: Formula::InverseScale(POUNDS_PER_KILOGRAM),
    },
    ConversionSpec {
        from: Unit::Metre,
        to: Unit::Inch,
        formula: Formula::Scale(INCHES_PER_METRE),
    },
    ConversionSpec {
        from: Unit::Inch,
        to: Unit::Metre,
        formula: Formula::InverseScale(INCHES_PER_METRE),
    },
    ConversionSpec {
        from: Unit::Metre,
        to: Unit::Foot,
        formula: Formula::Scale(FEET_PER_METRE),
    },
    ConversionSpec {
        from: Unit::Foot,
        to: Unit::Metre,
        formula: Formula::InverseScale(FEET_PER_METRE),
    },
];

impl ConversionKind {
    pub const ALL: [ConversionKind; 8] = [
        ConversionKind::CelsiusToFahrenheit,
        ConversionKind::FahrenheitToCelsius,
        ConversionKind::KilogramToPound,
        ConversionKind::PoundToKilogram,
        ConversionKind::MetreToInch,
        ConversionKind::InchToMetre,
        ConversionKind::MetreToFoot,
        ConversionKind::FootToMetre,
    ];

    /// Formula and units for this direction
    pub fn spec(self) -> &'static ConversionSpec {
        &CONVERSIONS[self as usize]
    }

    /// The conversion that undoes this one
    pub fn inverse(self) -> ConversionKind {
        match self {
            ConversionKind::CelsiusToFahrenheit => ConversionKind::FahrenheitToCelsius,
            ConversionKind::FahrenheitToCelsius => ConversionKind::CelsiusToFahrenheit,
            ConversionKind::KilogramToPound => ConversionKind::PoundToKilogram,
            ConversionKind::PoundToKilogram => ConversionKind::KilogramToPound,
            ConversionKind::MetreToInch => ConversionKind::InchToMetre,
            ConversionKind::InchToMetre => ConversionKind::MetreToInch,
            ConversionKind::MetreToFoot => ConversionKind::FootToMetre,
            ConversionKind::FootToMetre => ConversionKind::MetreToFoot,
        }
    }

    pub fn apply(self, value: f64) -> f64 {
        self.spec().formula.apply(value)
    }

    pub fn from_unit(self) -> Unit {
        self.spec().from
    }

    pub fn to_unit(self) -> Unit {
        self.spec().to
    }
}

impl fmt::Display for ConversionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.from_unit().plural(),
            self.to_unit().plural()
        )
    }
}
