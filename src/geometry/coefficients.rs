use std::fmt;

use crate::math::Point3;

use super::{classify, SurfaceFamily};

/// One of the four coefficients of `Ax² + By² + Cz² + D = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coefficient {
    A,
    B,
    C,
    D,
}

impl Coefficient {
    /// All coefficients in equation order.
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        };
        f.write_str(s)
    }
}

/// A coordinate axis, identifying one of the three quadratic terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in equation order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Index of this axis into `[x, y, z]`.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// The coefficient multiplying this axis' squared term.
    #[must_use]
    pub fn coefficient(self) -> Coefficient {
        match self {
            Self::X => Coefficient::A,
            Self::Y => Coefficient::B,
            Self::Z => Coefficient::C,
        }
    }

    /// Variable name used in equations.
    #[must_use]
    pub fn variable(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }

    /// The two remaining axes, in equation order.
    #[must_use]
    pub fn others(self) -> (Self, Self) {
        match self {
            Self::X => (Self::Y, Self::Z),
            Self::Y => (Self::X, Self::Z),
            Self::Z => (Self::X, Self::Y),
        }
    }
}

/// Counts of strictly positive and strictly negative quadratic coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignCounts {
    pub positive: usize,
    pub negative: usize,
}

/// The coefficients `(A, B, C, D)` of `Ax² + By² + Cz² + D = 0`.
///
/// No invariant is enforced: any real values are accepted and their
/// meaning comes entirely from sign pattern and magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Coefficients {
    /// Creates a new coefficient set.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Returns the value of a single coefficient.
    #[must_use]
    pub fn get(&self, coefficient: Coefficient) -> f64 {
        match coefficient {
            Coefficient::A => self.a,
            Coefficient::B => self.b,
            Coefficient::C => self.c,
            Coefficient::D => self.d,
        }
    }

    /// Returns a copy with one coefficient replaced.
    #[must_use]
    pub fn with(mut self, coefficient: Coefficient, value: f64) -> Self {
        match coefficient {
            Coefficient::A => self.a = value,
            Coefficient::B => self.b = value,
            Coefficient::C => self.c = value,
            Coefficient::D => self.d = value,
        }
        self
    }

    /// The quadratic coefficients `[A, B, C]`.
    #[must_use]
    pub fn quadratic(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// The coefficient of the squared term along `axis`.
    #[must_use]
    pub fn along(&self, axis: Axis) -> f64 {
        self.quadratic()[axis.index()]
    }

    /// `(-A, -B, -C, -D)`, which describes the same surface.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::new(-self.a, -self.b, -self.c, -self.d)
    }

    /// Counts positive and negative values among `A`, `B`, `C`.
    #[must_use]
    pub fn sign_counts(&self) -> SignCounts {
        let q = self.quadratic();
        SignCounts {
            positive: q.iter().filter(|v| **v > 0.0).count(),
            negative: q.iter().filter(|v| **v < 0.0).count(),
        }
    }

    /// The axis whose quadratic coefficient has the opposite sign of the
    /// other two, if there is exactly one such axis.
    ///
    /// Returns `None` when any quadratic coefficient is zero or all three
    /// share a sign.
    #[must_use]
    pub fn odd_axis(&self) -> Option<Axis> {
        let SignCounts { positive, negative } = self.sign_counts();
        let odd_positive = match (positive, negative) {
            (1, 2) => true,
            (2, 1) => false,
            _ => return None,
        };
        Axis::ALL
            .into_iter()
            .find(|axis| (self.along(*axis) > 0.0) == odd_positive)
    }

    /// Evaluates `Ax² + By² + Cz² + D` at `point`.
    #[must_use]
    pub fn evaluate(&self, point: &Point3) -> f64 {
        self.a * point.x * point.x + self.b * point.y * point.y + self.c * point.z * point.z + self.d
    }

    /// Classifies these coefficients. See [`classify`].
    #[must_use]
    pub fn classify(&self) -> SurfaceFamily {
        classify(*self)
    }
}

impl Default for Coefficients {
    /// The unit sphere `x² + y² + z² - 1 = 0`.
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0, -1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_replaces_single_coefficient() {
        let c = Coefficients::default().with(Coefficient::C, -2.0);
        assert_eq!(c, Coefficients::new(1.0, 1.0, -2.0, -1.0));
        assert!((c.get(Coefficient::C) + 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sign_counts_ignore_zero() {
        let c = Coefficients::new(1.0, 0.0, -3.0, 0.0);
        assert_eq!(c.sign_counts(), SignCounts { positive: 1, negative: 1 });
    }

    #[test]
    fn odd_axis_finds_the_negative_one() {
        assert_eq!(Coefficients::new(1.0, 1.0, -1.0, -1.0).odd_axis(), Some(Axis::Z));
        assert_eq!(Coefficients::new(-1.0, 2.0, 3.0, -1.0).odd_axis(), Some(Axis::X));
    }

    #[test]
    fn odd_axis_finds_the_positive_one() {
        assert_eq!(Coefficients::new(-1.0, 1.0, -1.0, -1.0).odd_axis(), Some(Axis::Y));
    }

    #[test]
    fn odd_axis_none_for_uniform_or_zero_signs() {
        assert_eq!(Coefficients::new(1.0, 1.0, 1.0, -1.0).odd_axis(), None);
        assert_eq!(Coefficients::new(1.0, 1.0, 0.0, -1.0).odd_axis(), None);
    }

    #[test]
    fn evaluate_on_unit_sphere() {
        let c = Coefficients::default();
        assert!(c.evaluate(&Point3::new(0.0, 1.0, 0.0)).abs() < 1e-12);
        assert!(c.evaluate(&Point3::origin()) < 0.0);
    }
}
