use super::Bracket;

/// Coefficients of the interpolant `c1·x² + c2·x + c3`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quadratic {
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
}

impl Quadratic {
    /// Fits the unique quadratic through the three bracket points.
    ///
    /// Coinciding or colinear points give infinite or NaN coefficients.
    #[must_use]
    pub fn fit(bracket: &Bracket) -> Self {
        let Bracket { a, b, c, ya, yb, yc } = *bracket;

        let c1 = ((yc - ya) * (b - a) - (yb - ya) * (c - a)) / ((c - b) * (b - a) * (c - a));
        let c2 = (yb - ya) / (b - a) - c1 * (a + b);
        let c3 = ya - c1 * a * a - c2 * a;

        Self { c1, c2, c3 }
    }

    /// Evaluates the interpolant at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        (self.c1 * x + self.c2) * x + self.c3
    }

    /// Returns `true` if all three coefficients are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.c1.is_finite() && self.c2.is_finite() && self.c3.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn fit_recovers_a_parabola() {
        let p = |x: f64| 2.0 * x * x - 3.0 * x + 1.0;
        let bracket = Bracket::new([(-1.0, p(-1.0)), (0.5, p(0.5)), (4.0, p(4.0))]);

        let q = Quadratic::fit(&bracket);

        assert_relative_eq!(q.c1, 2.0, epsilon = 1e-12);
        assert_relative_eq!(q.c2, -3.0, epsilon = 1e-12);
        assert_relative_eq!(q.c3, 1.0, epsilon = 1e-12);
        assert_relative_eq!(q.eval(2.0), p(2.0), epsilon = 1e-12);
    }

    #[test]
    fn fit_interpolates_all_three_points() {
        let bracket = Bracket::new([(0.0, 1.0), (1.0, 0.2), (3.0, 2.5)]);

        let q = Quadratic::fit(&bracket);

        assert_relative_eq!(q.eval(0.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(q.eval(1.0), 0.2, epsilon = 1e-12);
        assert_relative_eq!(q.eval(3.0), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn coinciding_points_are_not_finite() {
        let bracket = Bracket::new([(1.0, 1.0), (1.0, 1.0), (2.0, 4.0)]);

        assert!(!Quadratic::fit(&bracket).is_finite());
    }
}
