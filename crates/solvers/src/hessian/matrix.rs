use std::ops::Index;

use ndarray::Array2;

/// An n×n matrix of second partial derivative estimates.
///
/// Element `(i, j)` approximates `∂²f / ∂xᵢ∂xⱼ`. The matrix is symmetric only
/// up to finite-difference error; symmetry is not enforced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hessian(Array2<f64>);

impl Hessian {
    pub(super) fn new(values: Array2<f64>) -> Self {
        debug_assert!(values.is_square());
        Self(values)
    }

    /// Returns the number of variables `n`.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.0.nrows()
    }

    /// Returns element `(i, j)`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.0.get((i, j)).copied()
    }

    /// Returns the underlying array.
    #[must_use]
    pub fn as_array(&self) -> &Array2<f64> {
        &self.0
    }

    /// Consumes the matrix, returning the underlying array.
    #[must_use]
    pub fn into_array(self) -> Array2<f64> {
        self.0
    }

    /// Returns the matrix as a sequence of rows.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.0.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Returns the largest `|H[i][j] − H[j][i]|` over all pairs.
    #[must_use]
    pub fn max_asymmetry(&self) -> f64 {
        let n = self.dim();
        (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .map(|(i, j)| (self.0[(i, j)] - self.0[(j, i)]).abs())
            .fold(0.0, f64::max)
    }

    /// Returns `true` if `H[i][j]` and `H[j][i]` agree within `tol` for all pairs.
    #[must_use]
    pub fn is_symmetric(&self, tol: f64) -> bool {
        self.max_asymmetry() <= tol
    }
}

impl Index<(usize, usize)> for Hessian {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;

    #[test]
    fn rows_preserve_order() {
        let hessian = Hessian::new(array![[1.0, 2.0], [3.0, 4.0]]);

        assert_eq!(hessian.dim(), 2);
        assert_eq!(hessian.rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(hessian[(1, 0)], 3.0);
        assert_eq!(hessian.get(2, 0), None);
    }

    #[test]
    fn asymmetry_is_the_largest_mirrored_gap() {
        let hessian = Hessian::new(array![[1.0, 2.0, 0.0], [2.5, 4.0, 1.0], [0.0, 1.1, 0.0]]);

        assert!((hessian.max_asymmetry() - 0.5).abs() < 1e-12);
        assert!(hessian.is_symmetric(0.5));
        assert!(!hessian.is_symmetric(0.4));
    }
}
