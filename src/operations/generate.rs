use rand::Rng;

use crate::error::{GeometryError, Result};
use crate::geometry::{Coefficients, SurfaceFamily};

/// Draws random integer coefficients that classify as a target family.
///
/// Every rule keeps its draws inside the region the classifier assigns to
/// that family, so `classify(execute(family)) == family` always holds.
pub struct GenerateCoefficients {
    family: SurfaceFamily,
}

impl GenerateCoefficients {
    /// Creates a generator for `family`.
    #[must_use]
    pub fn new(family: SurfaceFamily) -> Self {
        Self { family }
    }

    /// Creates a generator for a family picked uniformly from the six
    /// named families.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let family = SurfaceFamily::ALL[rng.random_range(0..SurfaceFamily::ALL.len())];
        Self::new(family)
    }

    /// Returns the target family.
    #[must_use]
    pub fn family(&self) -> SurfaceFamily {
        self.family
    }

    /// Draws one coefficient set.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is [`SurfaceFamily::Unknown`].
    pub fn execute<R: Rng>(&self, rng: &mut R) -> Result<Coefficients> {
        let mut int = |lo: i32, hi: i32| f64::from(rng.random_range(lo..=hi));

        let coefficients = match self.family {
            SurfaceFamily::Sphere => {
                let k = int(1, 3);
                Coefficients::new(k, k, k, -int(1, 5))
            }
            SurfaceFamily::Ellipsoid => {
                let a = int(1, 4);
                let mut b = int(1, 4);
                let c = int(1, 4);
                #[allow(clippy::float_cmp)]
                while a == b && b == c {
                    b = int(1, 4);
                }
                Coefficients::new(a, b, c, -int(1, 5))
            }
            SurfaceFamily::OneSheetHyperboloid => {
                Coefficients::new(int(1, 3), int(1, 3), -int(1, 3), -int(1, 3))
            }
            SurfaceFamily::TwoSheetHyperboloid => {
                if int(0, 1) < 0.5 {
                    Coefficients::new(int(1, 3), int(1, 3), int(1, 3), int(1, 3))
                } else {
                    Coefficients::new(-int(1, 3), -int(1, 3), int(1, 3), -int(1, 3))
                }
            }
            SurfaceFamily::Cone => Coefficients::new(int(1, 3), int(1, 3), -int(1, 3), 0.0),
            SurfaceFamily::Cylinder => Coefficients::new(int(1, 3), int(1, 3), 0.0, -int(1, 3)),
            SurfaceFamily::Unknown => {
                return Err(GeometryError::NoSamplingRule(self.family).into());
            }
        };
        Ok(coefficients)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn generated_coefficients_classify_as_target() {
        let mut rng = StdRng::seed_from_u64(42);
        for family in SurfaceFamily::ALL {
            let op = GenerateCoefficients::new(family);
            for _ in 0..500 {
                let c = op.execute(&mut rng).unwrap();
                assert_eq!(c.classify(), family, "{c:?}");
            }
        }
    }

    #[test]
    fn random_target_covers_every_family() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = HashSet::new();
        for _ in 0..300 {
            let op = GenerateCoefficients::random(&mut rng);
            let c = op.execute(&mut rng).unwrap();
            assert_eq!(c.classify(), op.family());
            seen.insert(op.family());
        }
        assert_eq!(seen.len(), SurfaceFamily::ALL.len());
    }

    #[test]
    fn draws_stay_in_inclusive_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        let sphere = GenerateCoefficients::new(SurfaceFamily::Sphere);
        let mut constants = HashSet::new();
        for _ in 0..400 {
            let c = sphere.execute(&mut rng).unwrap();
            assert!((1.0..=3.0).contains(&c.a));
            assert!((-5.0..=-1.0).contains(&c.d));
            #[allow(clippy::cast_possible_truncation)]
            constants.insert(c.d as i32);
        }
        assert_eq!(constants.len(), 5);
    }

    #[test]
    fn ellipsoid_is_never_uniform() {
        let mut rng = StdRng::seed_from_u64(9);
        let op = GenerateCoefficients::new(SurfaceFamily::Ellipsoid);
        for _ in 0..400 {
            let c = op.execute(&mut rng).unwrap();
            assert!(!(c.a == c.b && c.b == c.c), "{c:?}");
        }
    }

    #[test]
    fn cone_and_cylinder_use_exact_zero() {
        let mut rng = StdRng::seed_from_u64(5);
        let cone = GenerateCoefficients::new(SurfaceFamily::Cone).execute(&mut rng).unwrap();
        assert!(cone.d == 0.0);
        let cylinder = GenerateCoefficients::new(SurfaceFamily::Cylinder)
            .execute(&mut rng)
            .unwrap();
        assert!(cylinder.c == 0.0);
    }

    #[test]
    fn unknown_has_no_rule() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(GenerateCoefficients::new(SurfaceFamily::Unknown)
            .execute(&mut rng)
            .is_err());
    }
}
