use serde::{Deserialize, Serialize};

use super::defaults;

/// Parameters for the queries derived from a graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Relative treatment/outcome tier span, in (0, 1].
    pub causal_distance: f64,
    /// Requested number of intervened nodes. Clamped to the candidate pool.
    pub whatif_count: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            causal_distance: defaults::DEFAULT_CAUSAL_DISTANCE,
            whatif_count: defaults::DEFAULT_WHATIF_COUNT,
        }
    }
}
