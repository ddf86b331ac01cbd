//! Confounding-control query: treatment/outcome sets with their path sets.

use serde::{Deserialize, Serialize};

/// A simple path, endpoints included.
pub type Path = Vec<usize>;

/// Treatment and outcome node sets plus, for every (treatment, outcome)
/// pair, the directed causal paths and the remaining undirected
/// ("backdoor") paths.
///
/// Pair lists are flattened treatment-major: the pair `(treatment[i],
/// outcome[j])` lives at `i * outcome.len() + j`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfoundQuery {
    pub causal_distance: f64,
    pub treatment: Vec<usize>,
    pub outcome: Vec<usize>,
    pub causal_paths: Vec<Vec<Path>>,
    pub backdoor_paths: Vec<Vec<Path>>,
}

/// Borrowed view of one (treatment, outcome) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairPaths<'a> {
    pub treatment: usize,
    pub outcome: usize,
    pub causal: &'a [Path],
    pub backdoor: &'a [Path],
}

impl ConfoundQuery {
    pub fn pair_count(&self) -> usize {
        self.treatment.len() * self.outcome.len()
    }

    /// Paths for `(treatment[t], outcome[o])`.
    pub fn pair(&self, t: usize, o: usize) -> Option<PairPaths<'_>> {
        if t >= self.treatment.len() || o >= self.outcome.len() {
            return None;
        }
        let idx = t * self.outcome.len() + o;
        Some(PairPaths {
            treatment: self.treatment[t],
            outcome: self.outcome[o],
            causal: self.causal_paths.get(idx)?,
            backdoor: self.backdoor_paths.get(idx)?,
        })
    }

    /// Every pair in treatment-major order.
    pub fn pairs(&self) -> impl Iterator<Item = PairPaths<'_>> + '_ {
        (0..self.treatment.len())
            .flat_map(move |t| (0..self.outcome.len()).filter_map(move |o| self.pair(t, o)))
    }

    /// Causal and backdoor path lists for one treatment node, one entry per
    /// outcome node.
    pub fn for_treatment(&self, t: usize) -> Option<(&[Vec<Path>], &[Vec<Path>])> {
        if t >= self.treatment.len() {
            return None;
        }
        let start = t * self.outcome.len();
        let end = start + self.outcome.len();
        Some((
            self.causal_paths.get(start..end)?,
            self.backdoor_paths.get(start..end)?,
        ))
    }

    /// True when no pair has a backdoor path, so no adjustment is needed.
    pub fn is_unconfounded(&self) -> bool {
        self.backdoor_paths.iter().all(Vec::is_empty)
    }
}
