/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// Dense matrix type used for mesh coordinate grids.
pub type Grid = nalgebra::DMatrix<f64>;

/// Tolerance below which the constant term counts as zero (cone test).
pub const CONSTANT_TOLERANCE: f64 = 0.1;

/// Tolerance for treating two quadratic coefficients as equal (sphere test).
pub const EQUALITY_TOLERANCE: f64 = 0.1;

/// `C` at or below this magnitude is treated as vanishing when solving the
/// implicit equation for `z`.
pub const DIVISOR_TOLERANCE: f64 = 1e-3;

/// Returns `sqrt(value)`, or an error naming `quantity` when `value` is
/// negative or not finite.
///
/// # Errors
///
/// Returns [`GeometryError::NegativeRadicand`](crate::error::GeometryError::NegativeRadicand)
/// if `value` is negative or NaN, and
/// [`GeometryError::Degenerate`](crate::error::GeometryError::Degenerate) if it is infinite.
pub fn checked_sqrt(value: f64, quantity: &'static str) -> crate::Result<f64> {
    if value.is_nan() || value < 0.0 {
        return Err(crate::error::GeometryError::NegativeRadicand { quantity, value }.into());
    }
    if value.is_infinite() {
        return Err(crate::error::GeometryError::Degenerate(format!("{quantity} is unbounded")).into());
    }
    Ok(value.sqrt())
}

/// Returns `numerator / denominator`, or an error when the quotient is not
/// finite (zero denominator or overflow).
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`](crate::error::GeometryError::Degenerate)
/// if the quotient is infinite or NaN.
pub fn checked_div(numerator: f64, denominator: f64, quantity: &'static str) -> crate::Result<f64> {
    let quotient = numerator / denominator;
    if !quotient.is_finite() {
        return Err(crate::error::GeometryError::Degenerate(format!(
            "{quantity} divides {numerator} by {denominator}"
        ))
        .into());
    }
    Ok(quotient)
}

/// Semi-axis length `sqrt(numerator / denominator)` with both checks applied.
///
/// # Errors
///
/// Propagates the errors of [`checked_div`] and [`checked_sqrt`].
pub fn semi_axis(numerator: f64, denominator: f64, quantity: &'static str) -> crate::Result<f64> {
    checked_sqrt(checked_div(numerator, denominator, quantity)?, quantity)
}
