//! Splits at the mean of the projected points.

use nalgebra::DMatrix;

use super::{SpaceSplitter, SplitBound};
use crate::{Euclidean, Hyperplane, Metric, SplitConfig, SplitError};

/// Splits at the arithmetic mean of the points projected onto the chosen
/// direction.
///
/// Costs one extra pass over the points compared to
/// [`MidpointSpaceSplit`](super::MidpointSpaceSplit), but follows the data:
/// on skewed sets the children come out more balanced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanSpaceSplit<M = Euclidean> {
    metric: M,
    config: SplitConfig,
}

impl MeanSpaceSplit {
    /// Creates a mean splitter using the Euclidean metric.
    pub fn new() -> Self {
        Self::with_metric(Euclidean)
    }
}

impl<M: Metric> MeanSpaceSplit<M> {
    /// Creates a mean splitter using `metric` for farthest-pair searches.
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

impl<M: Metric + Default> Default for MeanSpaceSplit<M> {
    fn default() -> Self {
        Self::with_metric(M::default())
    }
}

impl<M: Metric> SpaceSplitter for MeanSpaceSplit<M> {
    fn split_space<B: SplitBound>(
        &self,
        bound: &B,
        data: &DMatrix<f64>,
        points: &[usize],
    ) -> Result<Hyperplane, SplitError> {
        let projection = bound
            .projection_vector(data, points, &self.metric, &self.config)?
            .projection;

        let mut sum = 0.0;
        let mut lowest = f64::INFINITY;
        let mut highest = f64::NEG_INFINITY;
        for &index in points {
            let value = projection.project(&data.column(index));
            sum += value;
            lowest = lowest.min(value);
            highest = highest.max(value);
        }

        // A loose bound can report width where the points have none, and a
        // mean of near-equal values can round onto either end.
        let mean = sum / points.len() as f64;
        if !(lowest <= mean && mean < highest) {
            log::debug!(
                "mean split rejected: {} points spread over {lowest}..{highest}, mean {mean}",
                points.len()
            );
            return Err(SplitError::ZeroSpread);
        }

        Ok(Hyperplane::new(projection, mean))
    }
}
