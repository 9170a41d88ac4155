//! Splitting hyperplanes for spill tree construction.
//!
//! Points live in a [`nalgebra::DMatrix`], one point per column; a node's
//! point set is a slice of column indices. See the [`split`] module for the
//! splitters themselves.

mod bound;
mod config;
mod error;
mod hyperplane;
mod metric;
mod projection;
pub mod split;

use nalgebra::{Dyn, Matrix, U1};

pub use bound::{BallBound, HRectBound};
pub use config::{
    DEFAULT_FARTHEST_PAIR_ROUNDS, DEFAULT_RHO, DEFAULT_TAU, SpillConfig, SplitConfig,
};
pub use error::SplitError;
pub use hyperplane::{Hyperplane, Partition, Side};
pub use metric::{Euclidean, Manhattan, Metric};
pub use projection::ProjectionVector;
pub use split::{MeanSpaceSplit, MidpointSpaceSplit, SpaceSplitter, SplitBound, SplitDirection};

/// A D-dimensional point backed by any nalgebra column storage, such as a
/// [`nalgebra::DVector`] or a column view of the dataset.
pub type Point<S> = Matrix<f64, Dyn, U1, S>;
