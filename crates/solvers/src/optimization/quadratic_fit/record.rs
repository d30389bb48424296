use super::{Bracket, Quadratic};

/// State of the search after one step.
///
/// Record 0 holds the seed bracket with `x = 0` since no candidate exists yet.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationRecord {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub x: f64,
    pub ya: f64,
    pub yb: f64,
    pub yc: f64,

    /// Interpolant fitted to the bracket in this record.
    pub coefficients: Quadratic,
}

impl IterationRecord {
    pub(super) fn seed(bracket: &Bracket) -> Self {
        Self::new(bracket, 0.0)
    }

    pub(super) fn new(bracket: &Bracket, x: f64) -> Self {
        let Bracket { a, b, c, ya, yb, yc } = *bracket;
        Self {
            a,
            b,
            c,
            x,
            ya,
            yb,
            yc,
            coefficients: bracket.quadratic(),
        }
    }

    /// Returns the bracket held by this record.
    #[must_use]
    pub fn bracket(&self) -> Bracket {
        Bracket {
            a: self.a,
            b: self.b,
            c: self.c,
            ya: self.ya,
            yb: self.yb,
            yc: self.yc,
        }
    }

    /// Returns `true` if the bracket, candidate and coefficients are all finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.bracket().is_finite() && self.x.is_finite() && self.coefficients.is_finite()
    }
}
