//! Structural motifs and the probabilities that select them.

use serde::{Deserialize, Serialize};

use super::AdjacencyMatrix;
use crate::errors::SynthError;

/// Per-node probability of growing each motif in one sweep.
/// Whatever mass remains below 1 is the "do nothing" outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotifProbabilities {
    pub chain: f64,
    pub fork: f64,
    pub collider: f64,
}

impl MotifProbabilities {
    pub fn new(chain: f64, fork: f64, collider: f64) -> Self {
        Self {
            chain,
            fork,
            collider,
        }
    }

    /// Each probability must be in [0, 1] and their sum must not exceed 1.
    pub fn validate(&self) -> Result<(), SynthError> {
        for (motif, value) in [
            ("chain", self.chain),
            ("fork", self.fork),
            ("collider", self.collider),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SynthError::InvalidProbability { motif, value });
            }
        }
        let total = self.chain + self.fork + self.collider;
        // Allow float noise from configs such as 0.7 + 0.2 + 0.1.
        if total > 1.0 + 1e-9 {
            return Err(SynthError::ProbabilityMassExceeded { total });
        }
        Ok(())
    }

    /// Cumulative thresholds `[chain, chain + fork, chain + fork + collider]`.
    pub fn thresholds(&self) -> [f64; 3] {
        [
            self.chain,
            self.chain + self.fork,
            self.chain + self.fork + self.collider,
        ]
    }
}

impl Default for MotifProbabilities {
    fn default() -> Self {
        Self::new(0.1, 0.1, 0.1)
    }
}

/// A concrete motif wired between specific nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Motif {
    /// `a → b → c`
    Chain { nodes: [usize; 3] },
    /// `source → x`, `source → y`
    Fork { source: usize, targets: [usize; 2] },
    /// `x → sink`, `y → sink`
    Collider { sources: [usize; 2], sink: usize },
}

impl Motif {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Chain { .. } => "chain",
            Self::Fork { .. } => "fork",
            Self::Collider { .. } => "collider",
        }
    }

    /// The two edges this motif contributes. They may coincide when a fork
    /// or collider picks the same node twice.
    pub fn edges(&self) -> [(usize, usize); 2] {
        match *self {
            Self::Chain { nodes: [a, b, c] } => [(a, b), (b, c)],
            Self::Fork {
                source,
                targets: [x, y],
            } => [(source, x), (source, y)],
            Self::Collider {
                sources: [x, y],
                sink,
            } => [(x, sink), (y, sink)],
        }
    }

    /// Add the motif's edges. Existing edges are left as they are.
    pub fn apply(&self, matrix: &mut AdjacencyMatrix) -> Result<(), SynthError> {
        for (from, to) in self.edges() {
            matrix.add_edge(from, to)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_cumulative() {
        let probs = MotifProbabilities::new(0.2, 0.3, 0.1);
        let [chain, fork, collider] = probs.thresholds();
        assert_eq!(chain, 0.2);
        assert_eq!(fork, 0.5);
        assert!((collider - 0.6).abs() < 1e-12);
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let err = MotifProbabilities::new(1.5, 0.0, 0.0).validate().unwrap_err();
        assert!(matches!(
            err,
            SynthError::InvalidProbability { motif: "chain", .. }
        ));
    }

    #[test]
    fn validate_rejects_excess_mass() {
        let err = MotifProbabilities::new(0.5, 0.4, 0.3).validate().unwrap_err();
        assert!(matches!(err, SynthError::ProbabilityMassExceeded { .. }));
        assert!(MotifProbabilities::new(0.7, 0.2, 0.1).validate().is_ok());
    }

    #[test]
    fn duplicate_fork_target_adds_one_edge() {
        let mut matrix = AdjacencyMatrix::new(3);
        Motif::Fork {
            source: 0,
            targets: [2, 2],
        }
        .apply(&mut matrix)
        .unwrap();
        assert_eq!(matrix.edge_count(), 1);
    }
}
