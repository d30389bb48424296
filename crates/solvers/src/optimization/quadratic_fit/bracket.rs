use std::cmp::Ordering;

use super::Quadratic;

/// Three points `a ≤ c` with `b` between them, and their function values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bracket {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub ya: f64,
    pub yb: f64,
    pub yc: f64,
}

impl Bracket {
    /// Creates a bracket from `(x, y)` pairs for `a`, `b` and `c`.
    ///
    /// If `a > c`, the outer points are swapped.
    #[must_use]
    pub fn new(points: [(f64, f64); 3]) -> Self {
        let [(a, ya), (b, yb), (c, yc)] = points;
        if a > c {
            Self { a: c, b, c: a, ya: yc, yb, yc: ya }
        } else {
            Self { a, b, c, ya, yb, yc }
        }
    }

    /// Returns the quadratic through the three points.
    #[must_use]
    pub fn quadratic(&self) -> Quadratic {
        Quadratic::fit(self)
    }

    /// Returns the vertex of the interpolating quadratic.
    ///
    /// Uses the three-point closed form directly; a degenerate bracket gives
    /// an infinite or NaN candidate.
    #[must_use]
    pub fn candidate(&self) -> f64 {
        let Self { a, b, c, ya, yb, yc } = *self;
        let (a2, b2, c2) = (a * a, b * b, c * c);

        let num = ya * (b2 - c2) + yb * (c2 - a2) + yc * (a2 - b2);
        let den = ya * (b - c) + yb * (c - a) + yc * (a - b);

        0.5 * num / den
    }

    /// Returns the bracket after folding in the candidate `(x, yx)`.
    ///
    /// A candidate equal to `b`, or one that does not compare (NaN), leaves
    /// the bracket unchanged.
    pub(super) fn update(&self, x: f64, yx: f64) -> Self {
        let rises = match yx.partial_cmp(&self.yb) {
            Some(Ordering::Greater) => true,
            Some(Ordering::Less | Ordering::Equal) => false,
            None => return *self,
        };

        match (x.partial_cmp(&self.b), rises) {
            (Some(Ordering::Greater), true) => Self { c: x, yc: yx, ..*self },
            (Some(Ordering::Greater), false) => Self {
                a: self.b,
                ya: self.yb,
                b: x,
                yb: yx,
                ..*self
            },
            (Some(Ordering::Less), true) => Self { a: x, ya: yx, ..*self },
            (Some(Ordering::Less), false) => Self {
                c: self.b,
                yc: self.yb,
                b: x,
                yb: yx,
                ..*self
            },
            (Some(Ordering::Equal) | None, _) => *self,
        }
    }

    /// Returns `true` if all points and values are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [self.a, self.b, self.c, self.ya, self.yb, self.yc]
            .iter()
            .all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn square_around_three() -> Bracket {
        let f = |x: f64| (x - 3.0).powi(2);
        Bracket::new([(0.0, f(0.0)), (2.0, f(2.0)), (5.0, f(5.0))])
    }

    #[test]
    fn reversed_outer_points_are_swapped() {
        let bracket = Bracket::new([(5.0, 4.0), (2.0, 1.0), (0.0, 9.0)]);

        assert_eq!((bracket.a, bracket.ya), (0.0, 9.0));
        assert_eq!((bracket.b, bracket.yb), (2.0, 1.0));
        assert_eq!((bracket.c, bracket.yc), (5.0, 4.0));
    }

    #[test]
    fn candidate_is_the_parabola_vertex() {
        assert_relative_eq!(square_around_three().candidate(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn candidate_of_coinciding_points_is_nan() {
        let bracket = Bracket::new([(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]);

        assert!(bracket.candidate().is_nan());
    }

    #[test]
    fn right_and_higher_replaces_c() {
        let next = square_around_three().update(4.0, 2.0);

        assert_eq!((next.a, next.b, next.c), (0.0, 2.0, 4.0));
        assert_eq!(next.yc, 2.0);
    }

    #[test]
    fn right_and_lower_shifts_left() {
        let next = square_around_three().update(3.0, 0.0);

        assert_eq!((next.a, next.b, next.c), (2.0, 3.0, 5.0));
        assert_eq!((next.ya, next.yb, next.yc), (1.0, 0.0, 4.0));
    }

    #[test]
    fn left_and_higher_replaces_a() {
        let next = square_around_three().update(1.0, 4.0);

        assert_eq!((next.a, next.b, next.c), (1.0, 2.0, 5.0));
        assert_eq!(next.ya, 4.0);
    }

    #[test]
    fn left_and_lower_shifts_right() {
        let bracket = Bracket::new([(0.0, 4.0), (3.0, 1.0), (5.0, 9.0)]);

        let next = bracket.update(2.0, 0.5);

        assert_eq!((next.a, next.b, next.c), (0.0, 2.0, 3.0));
        assert_eq!((next.ya, next.yb, next.yc), (4.0, 0.5, 1.0));
    }

    #[test]
    fn equal_value_counts_as_lower() {
        let next = square_around_three().update(4.0, 1.0);

        assert_eq!((next.a, next.b, next.c), (2.0, 4.0, 5.0));
    }

    #[test]
    fn candidate_at_b_or_nan_leaves_bracket_unchanged() {
        let bracket = square_around_three();

        assert_eq!(bracket.update(2.0, 0.0), bracket);
        assert_eq!(bracket.update(f64::NAN, f64::NAN), bracket);
    }
}
