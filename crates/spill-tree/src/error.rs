//! Failure reasons reported by the split operations.

/// Why a node's point set could not be split.
///
/// Every variant except [`SplitError::DimensionMismatch`] describes a
/// degenerate point set: retrying will not help, and the tree builder should
/// turn the node into a leaf.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// Fewer than two points were handed to the splitter.
    #[error("cannot split a set of {count} point(s), at least two are required")]
    TooFewPoints {
        /// Number of points in the rejected set.
        count: usize,
    },
    /// The bound has zero width along every dimension.
    #[error("the bound has zero width in every dimension")]
    ZeroWidth,
    /// The approximate farthest pair has zero separation.
    #[error("all points coincide under the metric")]
    CoincidentPoints,
    /// Every point projects onto the same value along the chosen direction.
    #[error("the points have no spread along the chosen projection")]
    ZeroSpread,
    /// The bound and the dataset disagree on the dimensionality of points.
    #[error("bound has {expected} dimensions but the dataset has {found}")]
    DimensionMismatch {
        /// Dimensionality of the bound.
        expected: usize,
        /// Dimensionality of the dataset.
        found: usize,
    },
}

impl SplitError {
    /// Returns `true` if the error stems from the shape of the point set
    /// rather than from inconsistent inputs.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !matches!(self, SplitError::DimensionMismatch { .. })
    }
}
