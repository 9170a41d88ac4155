//! Splitting hyperplane construction for spill tree nodes.
//!
//! A tree builder hands a node's bound and point indices to a
//! [`SpaceSplitter`] and gets back either a [`Hyperplane`] or the reason the
//! node cannot be split (in which case it should become a leaf).
//!
//! # Example
//!
//! ```
//! use nalgebra::DMatrix;
//! use spill_tree::{HRectBound, MeanSpaceSplit, MidpointSpaceSplit, SpaceSplitter};
//!
//! // Six 1-D points, one per column.
//! let data = DMatrix::from_row_slice(1, 6, &[0.0, 1.0, 1.0, 1.0, 1.0, 9.0]);
//! let points: Vec<usize> = (0..6).collect();
//! let bound = HRectBound::from_points(&data, &points);
//!
//! let midpoint = MidpointSpaceSplit::new().split_space(&bound, &data, &points).unwrap();
//! let mean = MeanSpaceSplit::new().split_space(&bound, &data, &points).unwrap();
//! assert_eq!(midpoint.split_value(), 4.5);
//! assert!(mean.split_value() < 2.2);
//! ```
//!
//! # Architecture
//!
//! - [`SplitBound`]: per-bound-shape direction selection (widest axis for
//!   boxes, approximate diameter for everything else)
//! - [`MidpointSpaceSplit`]: threshold at the midpoint of the extent
//! - [`MeanSpaceSplit`]: threshold at the mean of the projected points

mod direction;
mod mean;
mod midpoint;

use nalgebra::DMatrix;

use crate::{Hyperplane, SplitError};

pub use direction::{
    FarthestPair, SplitBound, SplitDirection, approximate_diameter, axis_parallel_direction,
    farthest_pair_direction,
};
pub use mean::MeanSpaceSplit;
pub use midpoint::MidpointSpaceSplit;

/// Strategy for computing the splitting hyperplane of a node.
///
/// Implementations are stateless between calls, so one splitter can serve
/// any number of nodes, including from several threads at once.
pub trait SpaceSplitter {
    /// Computes a hyperplane that splits `points` into two non-empty sides.
    ///
    /// On success at least one point lies on each side of the hyperplane,
    /// provided `bound` encloses `points` tightly. Splitters that never look
    /// at the points (midpoint over a box) cannot check this for a looser
    /// bound.
    ///
    /// # Panics
    /// Panics if a point index is out of range for `data`.
    fn split_space<B: SplitBound>(
        &self,
        bound: &B,
        data: &DMatrix<f64>,
        points: &[usize],
    ) -> Result<Hyperplane, SplitError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BallBound, Euclidean, HRectBound, ProjectionVector, SpillConfig, SplitConfig};
    use approx::assert_abs_diff_eq;

    fn make_data(columns: &[[f64; 2]]) -> DMatrix<f64> {
        let flat: Vec<f64> = columns.iter().flatten().copied().collect();
        DMatrix::from_column_slice(2, columns.len(), &flat)
    }

    fn rectangle_points() -> DMatrix<f64> {
        make_data(&[
            [0.0, 0.0],
            [10.0, 1.0],
            [2.5, 0.0],
            [5.0, 0.0],
            [7.5, 0.0],
            [0.0, 0.5],
            [10.0, 0.25],
            [3.0, 1.0],
            [6.0, 0.75],
        ])
    }

    fn both_splitters<B: SplitBound>(
        bound: &B,
        data: &DMatrix<f64>,
        points: &[usize],
    ) -> [Result<Hyperplane, SplitError>; 2] {
        [
            MidpointSpaceSplit::new().split_space(bound, data, points),
            MeanSpaceSplit::new().split_space(bound, data, points),
        ]
    }

    #[test]
    fn rectangle_splits_along_x() {
        let data = rectangle_points();
        let points: Vec<usize> = (0..data.ncols()).collect();
        let bound = HRectBound::from_points(&data, &points);
        assert_eq!(bound.width(0), 10.0);
        assert_eq!(bound.width(1), 1.0);

        for plane in both_splitters(&bound, &data, &points) {
            let plane = plane.unwrap();
            assert_eq!(plane.projection(), &ProjectionVector::axis(0));
        }
    }

    #[test]
    fn successful_splits_are_non_trivial() {
        let data = rectangle_points();
        let points: Vec<usize> = (0..data.ncols()).collect();
        let boxed = HRectBound::from_points(&data, &points);
        let ball = BallBound::from_points(&data, &points, &Euclidean);

        let planes = both_splitters(&boxed, &data, &points)
            .into_iter()
            .chain(both_splitters(&ball, &data, &points));
        for plane in planes {
            let plane = plane.unwrap();
            let partition = plane.partition(&data, &points, &SpillConfig::new());
            assert!(!partition.left.is_empty());
            assert!(!partition.right.is_empty());
            assert_eq!(partition.left.len() + partition.right.len(), points.len());
        }
    }

    #[test]
    fn identical_points_never_split() {
        let data = make_data(&[[4.0, 4.0]; 5]);
        let points: Vec<usize> = (0..5).collect();
        let boxed = HRectBound::from_points(&data, &points);
        let ball = BallBound::from_points(&data, &points, &Euclidean);

        for result in both_splitters(&boxed, &data, &points) {
            let err = result.unwrap_err();
            assert_eq!(err, SplitError::ZeroWidth);
            assert!(err.is_degenerate());
        }
        for result in both_splitters(&ball, &data, &points) {
            assert_eq!(result.unwrap_err(), SplitError::CoincidentPoints);
        }
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let data = make_data(&[[0.3, 1.7], [2.2, -0.4], [-1.1, 0.9], [0.0, 3.3], [1.4, 1.4]]);
        let points: Vec<usize> = (0..data.ncols()).collect();
        let ball = BallBound::from_points(&data, &points, &Euclidean);
        let splitter = MeanSpaceSplit::new().with_config(SplitConfig::new());

        let first = splitter.split_space(&ball, &data, &points).unwrap();
        let second = splitter.split_space(&ball, &data, &points).unwrap();
        assert_eq!(first.split_value().to_bits(), second.split_value().to_bits());
        assert_eq!(first.projection(), second.projection());
    }

    #[test]
    fn more_rounds_never_shorten_the_pair() {
        let data = make_data(&[
            [0.0, 0.0],
            [1.0, 5.0],
            [-3.0, 2.0],
            [4.0, -1.0],
            [6.0, 3.0],
            [-1.0, -4.0],
        ]);
        let points: Vec<usize> = (0..data.ncols()).collect();
        let one = approximate_diameter(&data, &points, &Euclidean, 1).unwrap();
        let three = approximate_diameter(&data, &points, &Euclidean, 3).unwrap();
        assert!(three.distance >= one.distance);
    }

    #[test]
    fn sibling_splits_run_in_parallel() {
        let data = rectangle_points();
        let left: Vec<usize> = (0..4).collect();
        let right: Vec<usize> = (4..data.ncols()).collect();
        let splitter = MidpointSpaceSplit::new();

        let (a, b) = std::thread::scope(|scope| {
            let a = scope.spawn(|| {
                let bound = HRectBound::from_points(&data, &left);
                splitter.split_space(&bound, &data, &left)
            });
            let b = scope.spawn(|| {
                let bound = HRectBound::from_points(&data, &right);
                splitter.split_space(&bound, &data, &right)
            });
            (a.join().unwrap(), b.join().unwrap())
        });

        let expected_left = HRectBound::from_points(&data, &left);
        assert_abs_diff_eq!(
            a.unwrap().split_value(),
            expected_left.mid(0),
            epsilon = 1e-9
        );
        assert!(b.is_ok());
    }
}
