//! Projection vectors: directions used to reduce a point to a scalar.

use nalgebra::storage::Storage;
use nalgebra::{DVector, Dyn};

use crate::Point;

/// A direction in point space along which points are compared.
///
/// Axis-parallel vectors are produced for box bounds, dense vectors for every
/// other bound shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum ProjectionVector {
    /// The unit vector of a single coordinate axis.
    AxisParallel {
        /// Index of the axis.
        dim: usize,
    },
    /// An arbitrary direction, stored with unit length.
    Dense(DVector<f64>),
}

impl ProjectionVector {
    /// Creates a projection onto the coordinate axis `dim`.
    #[inline]
    pub fn axis(dim: usize) -> Self {
        Self::AxisParallel { dim }
    }

    /// Creates a dense projection along `direction`, normalized to unit length.
    ///
    /// Returns `None` if the direction has zero or non-finite length.
    pub fn dense(direction: DVector<f64>) -> Option<Self> {
        let norm = direction.norm();
        if norm.is_finite() && norm > 0.0 {
            Some(Self::Dense(direction / norm))
        } else {
            None
        }
    }

    /// Projects a point onto this direction.
    ///
    /// # Panics
    /// Panics if the point has fewer dimensions than the projection expects.
    #[inline]
    pub fn project<S: Storage<f64, Dyn>>(&self, point: &Point<S>) -> f64 {
        match self {
            Self::AxisParallel { dim } => point[*dim],
            Self::Dense(direction) => direction.dot(point),
        }
    }

    /// Returns the axis index for axis-parallel projections.
    #[inline]
    pub fn axis_dim(&self) -> Option<usize> {
        match self {
            Self::AxisParallel { dim } => Some(*dim),
            Self::Dense(_) => None,
        }
    }

    /// Returns `true` if every point would project to the same value.
    pub fn is_degenerate(&self) -> bool {
        match self {
            Self::AxisParallel { .. } => false,
            Self::Dense(direction) => {
                let norm = direction.norm();
                !(norm.is_finite() && norm > 0.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::DMatrix;

    #[test]
    fn axis_projection_reads_coordinate() {
        let projection = ProjectionVector::axis(1);
        let point = DVector::from_vec(vec![3.0, -2.0, 7.0]);
        assert_eq!(projection.project(&point), -2.0);
        assert_eq!(projection.axis_dim(), Some(1));
        assert!(!projection.is_degenerate());
    }

    #[test]
    fn dense_projection_is_normalized() {
        let projection = ProjectionVector::dense(DVector::from_vec(vec![3.0, 4.0])).unwrap();
        match &projection {
            ProjectionVector::Dense(direction) => assert_relative_eq!(direction.norm(), 1.0),
            other => panic!("expected dense projection, got {other:?}"),
        }

        let point = DVector::from_vec(vec![3.0, 4.0]);
        assert_relative_eq!(projection.project(&point), 5.0);
        assert_eq!(projection.axis_dim(), None);
    }

    #[test]
    fn dense_rejects_zero_direction() {
        assert!(ProjectionVector::dense(DVector::zeros(3)).is_none());
        assert!(ProjectionVector::dense(DVector::from_vec(vec![f64::NAN, 1.0])).is_none());
    }

    #[test]
    fn zero_dense_vector_is_degenerate() {
        let projection = ProjectionVector::Dense(DVector::zeros(2));
        assert!(projection.is_degenerate());
    }

    #[test]
    fn projects_dataset_columns() {
        let data = DMatrix::from_column_slice(2, 2, &[1.0, 2.0, -1.0, 5.0]);
        let projection = ProjectionVector::dense(DVector::from_vec(vec![0.0, 2.0])).unwrap();
        assert_relative_eq!(projection.project(&data.column(0)), 2.0);
        assert_relative_eq!(projection.project(&data.column(1)), 5.0);
    }
}
