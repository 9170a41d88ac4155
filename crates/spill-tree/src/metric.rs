//! Distance functions between dataset points.

use nalgebra::Dyn;
use nalgebra::storage::Storage;

use crate::Point;

/// A distance function over D-dimensional points.
///
/// Implementations must return a non-negative value and be symmetric.
pub trait Metric {
    /// Computes the distance between two points.
    fn distance<SA, SB>(&self, a: &Point<SA>, b: &Point<SB>) -> f64
    where
        SA: Storage<f64, Dyn>,
        SB: Storage<f64, Dyn>;
}

/// The L2 (Euclidean) distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Metric for Euclidean {
    #[inline]
    fn distance<SA, SB>(&self, a: &Point<SA>, b: &Point<SB>) -> f64
    where
        SA: Storage<f64, Dyn>,
        SB: Storage<f64, Dyn>,
    {
        a.metric_distance(b)
    }
}

/// The L1 (taxicab) distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Metric for Manhattan {
    #[inline]
    fn distance<SA, SB>(&self, a: &Point<SA>, b: &Point<SB>) -> f64
    where
        SA: Storage<f64, Dyn>,
        SB: Storage<f64, Dyn>,
    {
        a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{DMatrix, DVector};

    #[test]
    fn euclidean_distance() {
        let a = DVector::from_vec(vec![0.0, 0.0]);
        let b = DVector::from_vec(vec![3.0, 4.0]);
        assert_relative_eq!(Euclidean.distance(&a, &b), 5.0);
        assert_relative_eq!(Euclidean.distance(&b, &a), 5.0);
    }

    #[test]
    fn manhattan_distance() {
        let a = DVector::from_vec(vec![1.0, -1.0, 2.0]);
        let b = DVector::from_vec(vec![3.0, 4.0, 2.0]);
        assert_relative_eq!(Manhattan.distance(&a, &b), 7.0);
    }

    #[test]
    fn works_on_dataset_columns() {
        let data = DMatrix::from_column_slice(2, 2, &[0.0, 0.0, 6.0, 8.0]);
        assert_relative_eq!(Euclidean.distance(&data.column(0), &data.column(1)), 10.0);
        assert_relative_eq!(Manhattan.distance(&data.column(0), &data.column(1)), 14.0);
    }
}
