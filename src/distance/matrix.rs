//! Dense distance matrix.

use super::DistanceError;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once, then only read. Symmetry is assumed by the 2-opt engine but
/// never enforced here; use [`DistanceMatrix::is_symmetric`] to check.
///
/// # Examples
///
/// ```
/// use u_twoopt::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)]);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix from an explicit n×n grid in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::DimensionMismatch`] if the data length isn't
    /// `size * size`, and [`DistanceError::InvalidDistance`] for the first
    /// negative or non-finite entry.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self, DistanceError> {
        if size.checked_mul(size) != Some(data.len()) {
            return Err(DistanceError::DimensionMismatch {
                size,
                len: data.len(),
            });
        }
        if let Some(pos) = data.iter().position(|d| !d.is_finite() || *d < 0.0) {
            return Err(DistanceError::InvalidDistance {
                row: pos / size,
                col: pos % size,
                value: data[pos],
            });
        }
        Ok(Self { data, size })
    }

    /// Computes a Euclidean distance matrix from planar coordinates.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let n = points.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
                let d = dx.hypot(dy);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        debug_assert!(from < self.size && to < self.size);
        self.data[from * self.size + to]
    }

    /// Bounds-checked variant of [`get`](Self::get).
    pub fn try_get(&self, from: usize, to: usize) -> Result<f64, DistanceError> {
        if from >= self.size || to >= self.size {
            return Err(DistanceError::IndexOutOfBounds {
                from,
                to,
                size: self.size,
            });
        }
        Ok(self.data[from * self.size + to])
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix has no locations.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Row `from` of the matrix.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Length of the closed cycle `order[0] → … → order[n-1] → order[0]`.
    ///
    /// Zero for fewer than two nodes.
    pub fn tour_length(&self, order: &[usize]) -> f64 {
        if order.len() < 2 {
            return 0.0;
        }
        let closing = self.get(order[order.len() - 1], order[0]);
        order
            .windows(2)
            .map(|w| self.get(w[0], w[1]))
            .sum::<f64>()
            + closing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<(f64, f64)> {
        vec![(0.0, 0.0), (3.0, 4.0), (0.0, 8.0)]
    }

    #[test]
    fn test_from_points() {
        let dm = DistanceMatrix::from_points(&sample_points());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_points(&sample_points());
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
        assert_eq!(dm.row(1), &[5.0, 0.0]);
    }

    #[test]
    fn test_from_data_invalid_size() {
        let err = DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).unwrap_err();
        assert_eq!(err, DistanceError::DimensionMismatch { size: 2, len: 3 });
    }

    #[test]
    fn test_from_data_rejects_negative() {
        let err = DistanceMatrix::from_data(2, vec![0.0, 1.0, -2.0, 0.0]).unwrap_err();
        assert!(matches!(
            err,
            DistanceError::InvalidDistance { row: 1, col: 0, .. }
        ));
    }

    #[test]
    fn test_from_data_rejects_nan() {
        let err = DistanceMatrix::from_data(1, vec![f64::NAN]).unwrap_err();
        assert!(matches!(
            err,
            DistanceError::InvalidDistance { row: 0, col: 0, .. }
        ));
    }

    #[test]
    fn test_empty_matrix() {
        let dm = DistanceMatrix::from_data(0, Vec::new()).expect("valid");
        assert!(dm.is_empty());
        assert_eq!(dm.tour_length(&[]), 0.0);
    }

    #[test]
    fn test_try_get_out_of_bounds() {
        let dm = DistanceMatrix::from_points(&sample_points());
        assert_eq!(dm.try_get(2, 1), Ok(dm.get(2, 1)));
        assert_eq!(
            dm.try_get(3, 0),
            Err(DistanceError::IndexOutOfBounds {
                from: 3,
                to: 0,
                size: 3
            })
        );
    }

    #[test]
    fn test_asymmetric_matrix() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 10.0, 15.0, 0.0]).expect("valid");
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_tour_length() {
        let dm = DistanceMatrix::from_points(&sample_points());
        // 0→1 = 5, 1→2 = 5, 2→0 = 8
        assert!((dm.tour_length(&[0, 1, 2]) - 18.0).abs() < 1e-10);
        assert_eq!(dm.tour_length(&[1]), 0.0);
    }
}
