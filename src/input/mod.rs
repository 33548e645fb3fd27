//! Parsing and display of user-entered coefficient values.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::InputError;
use crate::geometry::{Coefficients, SurfaceFamily};

/// A named starting point for the visualizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Sphere,
    Ellipsoid,
    OneSheet,
    TwoSheet,
    Cone,
    Cylinder,
}

impl Preset {
    /// All presets, in menu order.
    pub const ALL: [Self; 6] = [
        Self::Sphere,
        Self::Ellipsoid,
        Self::OneSheet,
        Self::TwoSheet,
        Self::Cone,
        Self::Cylinder,
    ];

    /// The coefficients loaded by this preset.
    #[must_use]
    pub fn coefficients(self) -> Coefficients {
        match self {
            Self::Sphere => Coefficients::new(1.0, 1.0, 1.0, -1.0),
            Self::Ellipsoid => Coefficients::new(1.0, 2.0, 0.5, -1.0),
            Self::OneSheet => Coefficients::new(1.0, 1.0, -1.0, -1.0),
            Self::TwoSheet => Coefficients::new(1.0, 1.0, -1.0, 1.0),
            Self::Cone => Coefficients::new(1.0, 1.0, -1.0, 0.0),
            Self::Cylinder => Coefficients::new(1.0, 1.0, 0.0, -1.0),
        }
    }

    /// The family this preset demonstrates.
    #[must_use]
    pub fn family(self) -> SurfaceFamily {
        match self {
            Self::Sphere => SurfaceFamily::Sphere,
            Self::Ellipsoid => SurfaceFamily::Ellipsoid,
            Self::OneSheet => SurfaceFamily::OneSheetHyperboloid,
            Self::TwoSheet => SurfaceFamily::TwoSheetHyperboloid,
            Self::Cone => SurfaceFamily::Cone,
            Self::Cylinder => SurfaceFamily::Cylinder,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.family().key())
    }
}

impl FromStr for Preset {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|preset| preset.family().key() == key)
            .ok_or_else(|| InputError::UnknownPreset(s.to_owned()))
    }
}

/// Parses a plain decimal number. Non-finite results are rejected.
fn parse_number(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::InvalidNumber(text.to_owned()))
}

/// Parses `numerator/denominator`, with an optional leading `-` negating
/// the whole fraction.
///
/// ```
/// use quadrics::input::parse_fraction;
///
/// assert_eq!(parse_fraction("3/4"), Ok(0.75));
/// assert_eq!(parse_fraction("-3/4"), Ok(-0.75));
/// assert!(parse_fraction("3/0").is_err());
/// assert!(parse_fraction("3/4/5").is_err());
/// ```
///
/// # Errors
///
/// Returns an error unless the text splits into exactly two numeric parts
/// on `/` with a non-zero denominator and a finite quotient.
#[allow(clippy::float_cmp)]
pub fn parse_fraction(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let mut parts = body.split('/');
    let (Some(numerator), Some(denominator), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(InputError::InvalidFraction(text.to_owned()));
    };

    let numerator =
        parse_number(numerator).map_err(|_| InputError::InvalidFraction(text.to_owned()))?;
    let denominator =
        parse_number(denominator).map_err(|_| InputError::InvalidFraction(text.to_owned()))?;
    if denominator == 0.0 {
        return Err(InputError::ZeroDenominator(text.to_owned()));
    }

    let value = numerator / denominator;
    if !value.is_finite() {
        return Err(InputError::InvalidFraction(text.to_owned()));
    }
    Ok(if negative { -value } else { value })
}

/// Parses a coefficient entered as a decimal or a fraction.
///
/// # Errors
///
/// Returns an error if the text is neither a finite number nor a valid
/// fraction.
pub fn try_parse_coefficient(text: &str) -> Result<f64, InputError> {
    if text.contains('/') {
        parse_fraction(text)
    } else {
        parse_number(text)
    }
}

/// Parses a coefficient, falling back to `0` on any error.
#[must_use]
pub fn parse_coefficient(text: &str) -> f64 {
    try_parse_coefficient(text).unwrap_or_else(|err| {
        debug!(%err, "coefficient input rejected, using 0");
        0.0
    })
}

/// Rounds `value` to at most four decimal places for display.
///
/// Halves round towards positive infinity and negative zero becomes zero.
/// Values too large to scale are returned unchanged.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn round_display_value(value: f64) -> f64 {
    let scaled = value * 10_000.0;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = (scaled + 0.5).floor() / 10_000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Formats `value` for display: four decimal places at most, trailing
/// zeros stripped (`0.123456` -> `"0.1235"`, `2.0` -> `"2"`).
#[must_use]
pub fn format_display_value(value: f64) -> String {
    round_display_value(value).to_string()
}
