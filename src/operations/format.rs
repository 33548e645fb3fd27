use std::fmt;

use crate::geometry::{Axis, Coefficients};

/// Renders `Ax² + By² + Cz² + D = 0` with conventional simplification.
///
/// - a coefficient of exactly `1` is omitted and `-1` becomes a bare `-`;
/// - zero terms are dropped, unless the term is disabled, in which case it
///   renders literally as `0x²` so the toggle stays visible;
/// - after the first item, signs are spaced out: `x² - 2y² + z² - 1 = 0`.
///   Negative terms and a negative constant both get ` - |v|` rather than a
///   single space before a signed value (` -2y²`, ` -1`), so the readout
///   stays uniform with the constant.
///
/// ```
/// use quadrics::geometry::Coefficients;
/// use quadrics::operations::Equation;
///
/// let eq = Equation::new(Coefficients::new(1.0, 1.0, 1.0, -1.0));
/// assert_eq!(eq.to_string(), "x² + y² + z² - 1 = 0");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Equation {
    coefficients: Coefficients,
    disabled: [bool; 3],
}

impl Equation {
    /// Creates an equation with every term enabled.
    #[must_use]
    pub fn new(coefficients: Coefficients) -> Self {
        Self {
            coefficients,
            disabled: [false; 3],
        }
    }

    /// Marks the term along `axis` as disabled, forcing it to render as `0x²`.
    #[must_use]
    pub fn with_disabled(mut self, axis: Axis) -> Self {
        self.disabled[axis.index()] = true;
        self
    }

    /// Sets the disabled flags for all three terms at once.
    #[must_use]
    pub fn with_disabled_terms(mut self, disabled: [bool; 3]) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Writes `value` the way a coefficient is shown: integers without a
/// fractional part, everything else in shortest round-trip form.
fn number(value: f64) -> String {
    format!("{value}")
}

impl fmt::Display for Equation {
    #[allow(clippy::float_cmp)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut empty = true;

        for axis in Axis::ALL {
            let var = axis.variable();
            if self.disabled[axis.index()] {
                if !empty {
                    f.write_str(" + ")?;
                }
                write!(f, "0{var}²")?;
                empty = false;
                continue;
            }

            let coeff = self.coefficients.along(axis);
            if coeff == 0.0 {
                continue;
            }
            if empty {
                if coeff == 1.0 {
                    write!(f, "{var}²")?;
                } else if coeff == -1.0 {
                    write!(f, "-{var}²")?;
                } else {
                    write!(f, "{}{var}²", number(coeff))?;
                }
            } else {
                f.write_str(if coeff > 0.0 { " + " } else { " - " })?;
                let magnitude = coeff.abs();
                if magnitude == 1.0 {
                    write!(f, "{var}²")?;
                } else {
                    write!(f, "{}{var}²", number(magnitude))?;
                }
            }
            empty = false;
        }

        let d = self.coefficients.d;
        if d != 0.0 {
            if empty {
                f.write_str(&number(d))?;
            } else if d > 0.0 {
                write!(f, " + {}", number(d))?;
            } else {
                write!(f, " - {}", number(d.abs()))?;
            }
            empty = false;
        }

        if empty {
            f.write_str("0")?;
        }
        f.write_str(" = 0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(a: f64, b: f64, c: f64, d: f64) -> String {
        Equation::new(Coefficients::new(a, b, c, d)).to_string()
    }

    #[test]
    fn unit_sphere() {
        assert_eq!(render(1.0, 1.0, 1.0, -1.0), "x² + y² + z² - 1 = 0");
    }

    #[test]
    fn leading_minus_one_is_bare_sign_and_zero_term_dropped() {
        assert_eq!(render(-1.0, 1.0, 0.0, 0.0), "-x² + y² = 0");
    }

    #[test]
    fn general_coefficients() {
        assert_eq!(render(1.0, 2.0, 0.5, -1.0), "x² + 2y² + 0.5z² - 1 = 0");
        assert_eq!(render(2.0, -1.0, -3.0, 4.0), "2x² - y² - 3z² + 4 = 0");
        assert_eq!(render(1.0, -2.0, 1.0, -1.0), "x² - 2y² + z² - 1 = 0");
        assert_eq!(render(-2.5, 1.0, -1.0, 1.0), "-2.5x² + y² - z² + 1 = 0");
    }

    #[test]
    fn leading_term_may_be_y_or_z() {
        assert_eq!(render(0.0, -1.0, 1.0, -2.0), "-y² + z² - 2 = 0");
        assert_eq!(render(0.0, 0.0, 3.0, 0.0), "3z² = 0");
    }

    #[test]
    fn constant_only() {
        assert_eq!(render(0.0, 0.0, 0.0, -1.0), "-1 = 0");
        assert_eq!(render(0.0, 0.0, 0.0, 0.0), "0 = 0");
    }

    #[test]
    fn disabled_terms_render_as_zero() {
        let eq = Equation::new(Coefficients::new(0.0, 1.0, 0.0, -1.0))
            .with_disabled(Axis::X)
            .with_disabled(Axis::Z);
        assert_eq!(eq.to_string(), "0x² + y² + 0z² - 1 = 0");
    }

    #[test]
    fn disabled_flags_in_bulk() {
        let eq = Equation::new(Coefficients::new(1.0, 0.0, -1.0, 0.0))
            .with_disabled_terms([false, true, false]);
        assert_eq!(eq.to_string(), "x² + 0y² - z² = 0");
    }
}
