//! Bounding regions of a node's point set.

use nalgebra::storage::Storage;
use nalgebra::{DMatrix, DVector, Dyn};

use crate::{Metric, Point};

/// An axis-aligned hyper-rectangle, stored as per-dimension `[min, max]`
/// ranges.
///
/// An empty range (`min > max`) has zero width.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct HRectBound {
    mins: Vec<f64>,
    maxs: Vec<f64>,
}

impl HRectBound {
    /// Creates a bound from per-dimension minima and maxima.
    ///
    /// # Panics
    /// Panics if `mins` and `maxs` have different lengths.
    pub fn new(mins: Vec<f64>, maxs: Vec<f64>) -> Self {
        assert_eq!(
            mins.len(),
            maxs.len(),
            "HRectBound needs one min and one max per dimension"
        );
        Self { mins, maxs }
    }

    /// Creates an empty bound of the given dimensionality.
    pub fn empty(dim: usize) -> Self {
        Self {
            mins: vec![f64::INFINITY; dim],
            maxs: vec![f64::NEG_INFINITY; dim],
        }
    }

    /// Computes the tightest bound around the given dataset columns.
    ///
    /// # Panics
    /// Panics if a point index is out of range for `data`.
    pub fn from_points(data: &DMatrix<f64>, points: &[usize]) -> Self {
        let mut bound = Self::empty(data.nrows());
        for &index in points {
            bound.expand(&data.column(index));
        }
        bound
    }

    /// Grows the bound to include `point`.
    pub fn expand<S: Storage<f64, Dyn>>(&mut self, point: &Point<S>) {
        for (d, &x) in point.iter().enumerate().take(self.dim()) {
            self.mins[d] = self.mins[d].min(x);
            self.maxs[d] = self.maxs[d].max(x);
        }
    }

    /// Returns the number of dimensions.
    #[inline]
    pub fn dim(&self) -> usize {
        self.mins.len()
    }

    /// Returns the lower edge along dimension `d`.
    #[inline]
    pub fn min(&self, d: usize) -> f64 {
        self.mins[d]
    }

    /// Returns the upper edge along dimension `d`.
    #[inline]
    pub fn max(&self, d: usize) -> f64 {
        self.maxs[d]
    }

    /// Returns the extent along dimension `d` (zero for an empty range).
    #[inline]
    pub fn width(&self, d: usize) -> f64 {
        if self.maxs[d] >= self.mins[d] {
            self.maxs[d] - self.mins[d]
        } else {
            0.0
        }
    }

    /// Returns the center of the range along dimension `d`.
    #[inline]
    pub fn mid(&self, d: usize) -> f64 {
        (self.mins[d] + self.maxs[d]) / 2.0
    }

    /// Checks whether `point` lies inside the bound (edges included).
    pub fn contains<S: Storage<f64, Dyn>>(&self, point: &Point<S>) -> bool {
        point.nrows() == self.dim()
            && point
                .iter()
                .enumerate()
                .all(|(d, &x)| self.mins[d] <= x && x <= self.maxs[d])
    }
}

/// A ball: every point lies within `radius` of `center` under some metric.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct BallBound {
    center: DVector<f64>,
    radius: f64,
}

impl BallBound {
    /// Creates a ball from its center and radius.
    pub fn new(center: DVector<f64>, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    /// Builds the ball centered on the centroid of the given dataset columns
    /// that just reaches the farthest of them.
    ///
    /// An empty point set gives a zero-radius ball at the origin.
    ///
    /// # Panics
    /// Panics if a point index is out of range for `data`.
    pub fn from_points<M: Metric>(data: &DMatrix<f64>, points: &[usize], metric: &M) -> Self {
        let mut center = DVector::zeros(data.nrows());
        if points.is_empty() {
            return Self::new(center, 0.0);
        }

        for &index in points {
            center += data.column(index);
        }
        center /= points.len() as f64;

        let radius = points
            .iter()
            .map(|&index| metric.distance(&center, &data.column(index)))
            .fold(0.0, f64::max);

        Self::new(center, radius)
    }

    /// Returns the center of the ball.
    #[inline]
    pub fn center(&self) -> &DVector<f64> {
        &self.center
    }

    /// Returns the radius of the ball.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Checks whether `point` lies inside the ball under `metric`.
    pub fn contains<S, M>(&self, point: &Point<S>, metric: &M) -> bool
    where
        S: Storage<f64, Dyn>,
        M: Metric,
    {
        metric.distance(&self.center, point) <= self.radius
    }
}
