//! Tunable parameters for split construction and point partitioning.

/// Default number of farthest-point probing rounds.
pub const DEFAULT_FARTHEST_PAIR_ROUNDS: usize = 3;

/// Default overlap buffer: no spill.
pub const DEFAULT_TAU: f64 = 0.0;

/// Default maximum share of a node's points a child may receive before the
/// overlapping split is abandoned.
pub const DEFAULT_RHO: f64 = 0.7;

/// Parameters for choosing a split direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct SplitConfig {
    farthest_pair_rounds: usize,
}

impl SplitConfig {
    /// Creates a configuration with the default number of probing rounds.
    pub fn new() -> Self {
        Self {
            farthest_pair_rounds: DEFAULT_FARTHEST_PAIR_ROUNDS,
        }
    }

    /// Sets the number of farthest-point probing rounds used for bounds
    /// without per-dimension extents. Zero is raised to one.
    pub fn with_farthest_pair_rounds(mut self, rounds: usize) -> Self {
        self.farthest_pair_rounds = rounds.max(1);
        self
    }

    /// Returns the number of farthest-point probing rounds.
    #[inline]
    pub fn farthest_pair_rounds(&self) -> usize {
        self.farthest_pair_rounds
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters controlling how much sibling nodes may overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct SpillConfig {
    tau: f64,
    rho: f64,
}

impl SpillConfig {
    /// Creates a configuration without overlap.
    pub fn new() -> Self {
        Self {
            tau: DEFAULT_TAU,
            rho: DEFAULT_RHO,
        }
    }

    /// Sets the overlap buffer. Points whose projection lies closer than
    /// `tau` to the threshold are sent to both children. Negative values
    /// are treated as zero.
    pub fn with_tau(mut self, tau: f64) -> Self {
        self.tau = tau.max(0.0);
        self
    }

    /// Sets the balance limit: if either child of an overlapping split
    /// would hold more than `rho` times the node's points, the split falls
    /// back to a plain partition. Clamped to `[0, 1]`.
    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho.clamp(0.0, 1.0);
        self
    }

    /// Returns the overlap buffer.
    #[inline]
    pub fn tau(&self) -> f64 {
        self.tau
    }

    /// Returns the balance limit.
    #[inline]
    pub fn rho(&self) -> f64 {
        self.rho
    }
}

impl Default for SpillConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_config_defaults() {
        let config = SplitConfig::default();
        assert_eq!(config.farthest_pair_rounds(), DEFAULT_FARTHEST_PAIR_ROUNDS);
    }

    #[test]
    fn zero_rounds_is_raised_to_one() {
        let config = SplitConfig::new().with_farthest_pair_rounds(0);
        assert_eq!(config.farthest_pair_rounds(), 1);
    }

    #[test]
    fn spill_config_clamps() {
        let config = SpillConfig::new().with_tau(-1.0).with_rho(1.5);
        assert_eq!(config.tau(), 0.0);
        assert_eq!(config.rho(), 1.0);

        let config = SpillConfig::default().with_tau(0.25).with_rho(0.6);
        assert_eq!(config.tau(), 0.25);
        assert_eq!(config.rho(), 0.6);
    }
}
