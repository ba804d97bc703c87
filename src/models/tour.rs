//! Tour type.

use std::fmt;

use serde::Serialize;

use crate::distance::DistanceMatrix;

/// A closed route visiting every node exactly once.
///
/// Always holds a permutation of `0..n`; the edge set is
/// `(tour[i], tour[(i + 1) % n])` for every position `i`.
///
/// # Examples
///
/// ```
/// use u_twoopt::models::Tour;
///
/// let tour = Tour::identity(4);
/// assert_eq!(tour.as_slice(), &[0, 1, 2, 3]);
/// assert_eq!(tour.to_string(), "0 1 2 3");
///
/// assert!(Tour::from_order(vec![2, 0, 1]).is_some());
/// assert!(Tour::from_order(vec![0, 0, 1]).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// The identity tour `[0, 1, ..., n-1]`.
    pub fn identity(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
        }
    }

    /// Wraps a visiting order, or `None` if it isn't a permutation of `0..len`.
    pub fn from_order(order: Vec<usize>) -> Option<Self> {
        if is_permutation(&order) {
            Some(Self { order })
        } else {
            None
        }
    }

    /// Node indices in visiting order.
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Consumes the tour, returning the visiting order.
    pub fn into_vec(self) -> Vec<usize> {
        self.order
    }

    /// Number of nodes in the tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits no nodes.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Node at position `pos`.
    #[inline]
    pub fn node(&self, pos: usize) -> usize {
        self.order[pos]
    }

    /// Re-checks the permutation invariant.
    pub fn is_permutation(&self) -> bool {
        is_permutation(&self.order)
    }

    /// Closed-cycle length of this tour under `distances`.
    pub fn length(&self, distances: &DistanceMatrix) -> f64 {
        distances.tour_length(&self.order)
    }

    /// Reverses the positions `from..=to` in place.
    pub(crate) fn reverse_segment(&mut self, from: usize, to: usize) {
        self.order[from..=to].reverse();
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for node in &self.order {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{node}")?;
            first = false;
        }
        Ok(())
    }
}

fn is_permutation(order: &[usize]) -> bool {
    let n = order.len();
    let mut seen = vec![false; n];
    for &node in order {
        if node >= n || seen[node] {
            return false;
        }
        seen[node] = true;
    }
    true
}
