//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Minimax search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Seed for the random-move RNG.
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Enable alpha-beta cutoffs.
    /// Only affects speed; scores and chosen moves are identical either way.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            seed: None,
            pruning: true,
        }
    }
}

impl SearchConfig {
    /// Use a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Turn alpha-beta pruning on or off.
    #[must_use]
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }
}
