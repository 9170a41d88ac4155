//! Splitting hyperplanes and the partition of a node's points.

use nalgebra::storage::Storage;
use nalgebra::{DMatrix, Dyn};

use crate::{Point, ProjectionVector, SpillConfig};

/// Which child (or children) a point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The point projects at or below the threshold.
    Left,
    /// The point projects above the threshold.
    Right,
    /// The point lies within the overlap buffer and goes to both children.
    Both,
}

/// A decision boundary `{ x : projection(x) = split_value }`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Hyperplane {
    projection: ProjectionVector,
    split_value: f64,
}

impl Hyperplane {
    /// Creates a hyperplane from a projection vector and a threshold.
    pub fn new(projection: ProjectionVector, split_value: f64) -> Self {
        Self {
            projection,
            split_value,
        }
    }

    /// Returns the projection vector (the hyperplane normal).
    #[inline]
    pub fn projection(&self) -> &ProjectionVector {
        &self.projection
    }

    /// Returns the threshold along the projection vector.
    #[inline]
    pub fn split_value(&self) -> f64 {
        self.split_value
    }

    /// Signed offset of a point from the hyperplane along the projection.
    #[inline]
    pub fn offset<S: Storage<f64, Dyn>>(&self, point: &Point<S>) -> f64 {
        self.projection.project(point) - self.split_value
    }

    /// Returns `true` if the point is on the left side (at or below the threshold).
    #[inline]
    pub fn left<S: Storage<f64, Dyn>>(&self, point: &Point<S>) -> bool {
        self.offset(point) <= 0.0
    }

    /// Returns `true` if the point is on the right side (above the threshold).
    #[inline]
    pub fn right<S: Storage<f64, Dyn>>(&self, point: &Point<S>) -> bool {
        self.offset(point) > 0.0
    }

    /// Classifies a point, sending it to both sides if it lies strictly
    /// within `tau` of the threshold.
    pub fn classify<S: Storage<f64, Dyn>>(&self, point: &Point<S>, tau: f64) -> Side {
        let offset = self.offset(point);
        if offset.abs() < tau {
            Side::Both
        } else if offset <= 0.0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Distributes `points` among the two children.
    ///
    /// With a positive `tau` the children overlap. If the overlap leaves
    /// either child with more than `rho` times the node's points, the
    /// overlap is dropped and every point goes to exactly one side.
    ///
    /// # Panics
    /// Panics if a point index is out of range for `data`.
    pub fn partition(&self, data: &DMatrix<f64>, points: &[usize], spill: &SpillConfig) -> Partition {
        if spill.tau() > 0.0 {
            let overlapping = self.partition_with_tau(data, points, spill.tau());
            let limit = spill.rho() * points.len() as f64;
            if overlapping.left.len() as f64 <= limit && overlapping.right.len() as f64 <= limit {
                return overlapping;
            }
            log::debug!(
                "overlap split too unbalanced ({} / {} of {}), falling back to plain split",
                overlapping.left.len(),
                overlapping.right.len(),
                points.len()
            );
        }
        self.partition_with_tau(data, points, 0.0)
    }

    fn partition_with_tau(&self, data: &DMatrix<f64>, points: &[usize], tau: f64) -> Partition {
        let mut partition = Partition {
            left: Vec::new(),
            right: Vec::new(),
            overlapping: tau > 0.0,
        };
        for &index in points {
            match self.classify(&data.column(index), tau) {
                Side::Left => partition.left.push(index),
                Side::Right => partition.right.push(index),
                Side::Both => {
                    partition.left.push(index);
                    partition.right.push(index);
                }
            }
        }
        partition
    }
}

/// Point indices assigned to the children of a split node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Indices assigned to the left child.
    pub left: Vec<usize>,
    /// Indices assigned to the right child.
    pub right: Vec<usize>,
    /// Whether some indices were assigned to both children.
    pub overlapping: bool,
}

impl Partition {
    /// Number of indices assigned to both children.
    pub fn shared_count(&self, total: usize) -> usize {
        (self.left.len() + self.right.len()).saturating_sub(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DVector;

    fn line_data(xs: &[f64]) -> DMatrix<f64> {
        DMatrix::from_row_slice(1, xs.len(), xs)
    }

    #[test]
    fn left_and_right_are_complementary() {
        let plane = Hyperplane::new(ProjectionVector::axis(0), 2.0);
        let at = DVector::from_vec(vec![2.0]);
        let above = DVector::from_vec(vec![2.5]);

        assert!(plane.left(&at));
        assert!(!plane.right(&at));
        assert!(plane.right(&above));
        assert!(!plane.left(&above));
    }

    #[test]
    fn classify_with_buffer() {
        let plane = Hyperplane::new(ProjectionVector::axis(0), 0.0);
        let near = DVector::from_vec(vec![0.4]);
        let far = DVector::from_vec(vec![-3.0]);

        assert_eq!(plane.classify(&near, 0.5), Side::Both);
        assert_eq!(plane.classify(&near, 0.0), Side::Right);
        assert_eq!(plane.classify(&far, 0.5), Side::Left);
    }

    #[test]
    fn partition_without_overlap() {
        let data = line_data(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        let plane = Hyperplane::new(ProjectionVector::axis(0), 2.0);
        let partition = plane.partition(&data, &[0, 1, 2, 3, 4], &SpillConfig::new());

        assert_eq!(partition.left, vec![0, 1, 2]);
        assert_eq!(partition.right, vec![3, 4]);
        assert!(!partition.overlapping);
        assert_eq!(partition.shared_count(5), 0);
    }

    #[test]
    fn partition_with_overlap() {
        let data = line_data(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let plane = Hyperplane::new(ProjectionVector::axis(0), 4.5);
        let spill = SpillConfig::new().with_tau(1.0).with_rho(0.7);
        let points: Vec<usize> = (0..10).collect();
        let partition = plane.partition(&data, &points, &spill);

        assert!(partition.overlapping);
        assert_eq!(partition.left, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(partition.right, vec![4, 5, 6, 7, 8, 9]);
        assert_eq!(partition.shared_count(10), 2);
    }

    #[test]
    fn unbalanced_overlap_falls_back() {
        let data = line_data(&[0.0, 1.0, 2.0, 3.0]);
        let plane = Hyperplane::new(ProjectionVector::axis(0), 1.5);
        let spill = SpillConfig::new().with_tau(10.0).with_rho(0.7);
        let partition = plane.partition(&data, &[0, 1, 2, 3], &spill);

        assert!(!partition.overlapping);
        assert_eq!(partition.left, vec![0, 1]);
        assert_eq!(partition.right, vec![2, 3]);
    }

    #[test]
    fn dense_hyperplane_offsets() {
        let projection = ProjectionVector::dense(DVector::from_vec(vec![1.0, 1.0])).unwrap();
        let plane = Hyperplane::new(projection, 0.0);
        let point = DVector::from_vec(vec![1.0, -1.0]);
        assert!(plane.offset(&point).abs() < 1e-12);
        assert!(plane.left(&point));
    }
}
