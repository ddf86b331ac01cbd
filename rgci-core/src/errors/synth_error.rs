/// Graph synthesis and ground-truth evaluation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SynthError {
    #[error("graph shape needs at least {min} tiers, got {count}")]
    TooFewTiers { count: usize, min: usize },

    #[error("tier {tier} is empty")]
    EmptyTier { tier: usize },

    #[error("{motif} probability must be within [0, 1], got {value}")]
    InvalidProbability { motif: &'static str, value: f64 },

    #[error("motif probabilities sum to {total}, must not exceed 1")]
    ProbabilityMassExceeded { total: f64 },

    #[error("causal distance must be within (0, 1], got {value}")]
    InvalidCausalDistance { value: f64 },

    #[error("node {node} out of range for a graph of {node_count} nodes")]
    NodeOutOfRange { node: usize, node_count: usize },

    #[error("tier {tier} out of range for a layout of {tier_count} tiers")]
    TierOutOfRange { tier: usize, tier_count: usize },

    #[error("node {node} is not in tier {tier}")]
    NodeNotInTier { node: usize, tier: usize },

    #[error("{what} dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("operator program for node {node} has {actual} steps, node has {expected} parents")]
    ProgramMismatch {
        node: usize,
        expected: usize,
        actual: usize,
    },

    #[error("operator program for node {node} is malformed: every step but the last needs a combinator")]
    MalformedProgram { node: usize },

    #[error("cycle detected in causal graph through node {node}")]
    CycleDetected { node: usize },
}
