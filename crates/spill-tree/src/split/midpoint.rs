//! Splits at the midpoint of the node's extent.

use nalgebra::DMatrix;

use super::{SpaceSplitter, SplitBound};
use crate::{Euclidean, Hyperplane, Metric, SplitConfig, SplitError};

/// Splits at the center of the bound's extent along the chosen direction.
///
/// Cheap and purely geometric: for box bounds no pass over the points is
/// needed at all. That also means a box bound must be the tight bound of the
/// points being split. Given a looser box the split still succeeds, but every
/// point can land on the same side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MidpointSpaceSplit<M = Euclidean> {
    metric: M,
    config: SplitConfig,
}

impl MidpointSpaceSplit {
    /// Creates a midpoint splitter using the Euclidean metric.
    pub fn new() -> Self {
        Self::with_metric(Euclidean)
    }
}

impl<M: Metric> MidpointSpaceSplit<M> {
    /// Creates a midpoint splitter using `metric` for farthest-pair searches.
    pub fn with_metric(metric: M) -> Self {
        Self {
            metric,
            config: SplitConfig::default(),
        }
    }

    /// Replaces the direction-selection parameters.
    pub fn with_config(mut self, config: SplitConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the metric.
    #[inline]
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Returns the direction-selection parameters.
    #[inline]
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }
}

impl<M: Metric + Default> Default for MidpointSpaceSplit<M> {
    fn default() -> Self {
        Self::with_metric(M::default())
    }
}

impl<M: Metric> SpaceSplitter for MidpointSpaceSplit<M> {
    fn split_space<B: SplitBound>(
        &self,
        bound: &B,
        data: &DMatrix<f64>,
        points: &[usize],
    ) -> Result<Hyperplane, SplitError> {
        let direction = bound.projection_vector(data, points, &self.metric, &self.config)?;
        Ok(Hyperplane::new(direction.projection, direction.mid_value))
    }
}
