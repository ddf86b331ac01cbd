use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::MotifProbabilities;

/// Shape and density of a single synthesized graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Cardinality of each tier, in tier order. At least three tiers.
    pub tier_sizes: Vec<usize>,
    pub motif_probabilities: MotifProbabilities,
    /// Full sweeps over every node of every tier.
    pub iterations: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            tier_sizes: defaults::DEFAULT_TIER_SIZES.to_vec(),
            motif_probabilities: MotifProbabilities::new(
                defaults::DEFAULT_CHAIN_PROBABILITY,
                defaults::DEFAULT_FORK_PROBABILITY,
                defaults::DEFAULT_COLLIDER_PROBABILITY,
            ),
            iterations: defaults::DEFAULT_ITERATIONS,
        }
    }
}
