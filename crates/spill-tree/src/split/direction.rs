//! Split direction selection.
//!
//! Box bounds already know their extent along every axis, so the widest axis
//! is picked in `O(D)` without touching the points. Every other bound shape
//! falls back to an approximate diameter search over the points and splits
//! along the line joining the two farthest points found.

use nalgebra::DMatrix;

use crate::{BallBound, HRectBound, Metric, ProjectionVector, SplitConfig, SplitError};

/// A chosen split direction together with the midpoint of the node's extent
/// along it.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitDirection {
    /// Direction along which the points are compared.
    pub projection: ProjectionVector,
    /// Center of the node's extent along `projection`.
    pub mid_value: f64,
}

/// A bound shape that knows how to pick a split direction for its points.
///
/// The provided method runs the general farthest-pair search, which only
/// needs the points and a metric. Bounds that can do better override it;
/// [`HRectBound`] uses its per-dimension widths instead.
pub trait SplitBound {
    /// Chooses a projection vector and midpoint for splitting `points`.
    ///
    /// # Panics
    /// Panics if a point index is out of range for `data`.
    fn projection_vector<M: Metric>(
        &self,
        data: &DMatrix<f64>,
        points: &[usize],
        metric: &M,
        config: &SplitConfig,
    ) -> Result<SplitDirection, SplitError> {
        farthest_pair_direction(data, points, metric, config)
    }
}

/// Splits along the widest axis of the box without looking at the points.
///
/// The box must be the tight bound of `points` (as built by
/// [`HRectBound::from_points`]); a looser box can put every point on one side.
impl SplitBound for HRectBound {
    fn projection_vector<M: Metric>(
        &self,
        data: &DMatrix<f64>,
        points: &[usize],
        _metric: &M,
        _config: &SplitConfig,
    ) -> Result<SplitDirection, SplitError> {
        if self.dim() != data.nrows() {
            return Err(SplitError::DimensionMismatch {
                expected: self.dim(),
                found: data.nrows(),
            });
        }
        axis_parallel_direction(self, points)
    }
}

impl SplitBound for BallBound {}

/// Picks the widest dimension of `bound`, ties going to the lowest index.
///
/// The midpoint is the center of the bound along that dimension.
pub fn axis_parallel_direction(
    bound: &HRectBound,
    points: &[usize],
) -> Result<SplitDirection, SplitError> {
    if points.len() < 2 {
        log::debug!("axis-parallel split rejected: {} point(s)", points.len());
        return Err(SplitError::TooFewPoints {
            count: points.len(),
        });
    }

    let mut split_dim = 0;
    let mut max_width = 0.0;
    for d in 0..bound.dim() {
        let width = bound.width(d);
        if width > max_width {
            max_width = width;
            split_dim = d;
        }
    }

    if max_width <= 0.0 {
        log::debug!(
            "axis-parallel split rejected: zero-width bound over {} points",
            points.len()
        );
        return Err(SplitError::ZeroWidth);
    }

    // Averaging two adjacent floats can round up onto the upper edge.
    let mid_value = bound.mid(split_dim);
    if !(mid_value < bound.max(split_dim)) {
        log::debug!(
            "axis-parallel split rejected: extent {max_width} too narrow to halve in dimension {split_dim}"
        );
        return Err(SplitError::ZeroWidth);
    }

    Ok(SplitDirection {
        projection: ProjectionVector::axis(split_dim),
        mid_value,
    })
}

/// The endpoints of an approximate diameter of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FarthestPair {
    /// Dataset index of the pivot the pair was measured from.
    pub first: usize,
    /// Dataset index of the point farthest from `first`.
    pub second: usize,
    /// Distance between `first` and `second`.
    pub distance: f64,
    /// Probing round (starting at 1) in which this pair was found.
    pub round: usize,
}

/// Estimates the farthest pair of `points` by repeated farthest-point probing.
///
/// Probing starts from `points[0]`. Each round finds the point farthest from
/// the current pivot (the earliest one on ties) and pivots on it. The best
/// pair only ever improves: a round that ties the best distance keeps the
/// current pair but still moves the pivot. Probing runs for `rounds` rounds
/// unless a round comes back strictly shorter. Returns `None` for fewer than
/// two points.
///
/// # Panics
/// Panics if a point index is out of range for `data`.
pub fn approximate_diameter<M: Metric>(
    data: &DMatrix<f64>,
    points: &[usize],
    metric: &M,
    rounds: usize,
) -> Option<FarthestPair> {
    if points.len() < 2 {
        return None;
    }

    let mut pivot = points[0];
    let mut best: Option<FarthestPair> = None;
    for round in 1..=rounds.max(1) {
        let (farthest, distance) = farthest_from(data, points, pivot, metric);
        log::trace!("farthest-pair round {round}: {pivot} -> {farthest} at {distance}");

        match best {
            Some(pair) if distance < pair.distance => break,
            Some(pair) if distance == pair.distance => {}
            _ => {
                best = Some(FarthestPair {
                    first: pivot,
                    second: farthest,
                    distance,
                    round,
                });
            }
        }
        pivot = farthest;
    }
    best
}

/// Returns the point of `points` farthest from `pivot`, and its distance.
fn farthest_from<M: Metric>(
    data: &DMatrix<f64>,
    points: &[usize],
    pivot: usize,
    metric: &M,
) -> (usize, f64) {
    let origin = data.column(pivot);
    let mut farthest = pivot;
    let mut max_distance = 0.0;
    for &index in points {
        let distance = metric.distance(&origin, &data.column(index));
        if distance > max_distance {
            max_distance = distance;
            farthest = index;
        }
    }
    (farthest, max_distance)
}

/// Splits along the line through an approximate farthest pair `(p, q)`.
///
/// The projection vector is the normalized `q - p`; the midpoint is the mean
/// of the projections of `p` and `q`.
///
/// # Panics
/// Panics if a point index is out of range for `data`.
pub fn farthest_pair_direction<M: Metric>(
    data: &DMatrix<f64>,
    points: &[usize],
    metric: &M,
    config: &SplitConfig,
) -> Result<SplitDirection, SplitError> {
    let Some(pair) = approximate_diameter(data, points, metric, config.farthest_pair_rounds())
    else {
        log::debug!("farthest-pair split rejected: {} point(s)", points.len());
        return Err(SplitError::TooFewPoints {
            count: points.len(),
        });
    };

    if !(pair.distance > 0.0) {
        log::debug!(
            "farthest-pair split rejected: {} coincident points",
            points.len()
        );
        return Err(SplitError::CoincidentPoints);
    }

    let p = data.column(pair.first);
    let q = data.column(pair.second);
    let projection = ProjectionVector::dense(&q - &p).ok_or(SplitError::CoincidentPoints)?;
    let (low, high) = (projection.project(&p), projection.project(&q));
    let mid_value = (low + high) / 2.0;
    if !(low <= mid_value && mid_value < high) {
        log::debug!("farthest-pair split rejected: pair {low}..{high} too close to halve");
        return Err(SplitError::CoincidentPoints);
    }

    Ok(SplitDirection {
        projection,
        mid_value,
    })
}
