//! Counterfactual query: factual and intervened ground-truth assignments.

use serde::{Deserialize, Serialize};

use super::OperatorProgram;

/// Boolean value per node, indexed by node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment(pub Vec<bool>);

impl Assignment {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, node: usize) -> Option<bool> {
        self.0.get(node).copied()
    }

    pub fn values(&self) -> &[bool] {
        &self.0
    }

    /// Nodes whose value differs between `self` and `other`.
    pub fn differing_nodes(&self, other: &Assignment) -> Vec<usize> {
        self.0
            .iter()
            .zip(&other.0)
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(node, _)| node)
            .collect()
    }
}

/// Ground truth for one "what if" question over a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterfactualQuery {
    /// Intervention count the caller asked for.
    pub whatif_requested: usize,
    pub program: OperatorProgram,
    /// Observed root nodes (in-degree 0).
    pub clue: Vec<usize>,
    /// Intervened nodes, in sampling order. May be shorter than requested.
    pub intervened: Vec<usize>,
    /// Last-tier nodes with at least one parent.
    pub outcome: Vec<usize>,
    pub factual: Assignment,
    pub counterfactual: Assignment,
    /// One `v3 = not v1 and v2` line per node, factual world.
    pub factual_equations: String,
    /// Same listing over the intervened graph.
    pub counterfactual_equations: String,
}

impl CounterfactualQuery {
    /// Number of interventions actually sampled.
    pub fn sampled_count(&self) -> usize {
        self.intervened.len()
    }

    /// The candidate pool was smaller than the requested count.
    pub fn is_under_fulfilled(&self) -> bool {
        self.sampled_count() < self.whatif_requested
    }

    /// `(node, value)` for every outcome node in the factual world.
    pub fn factual_outcomes(&self) -> Vec<(usize, bool)> {
        outcome_values(&self.outcome, &self.factual)
    }

    /// `(node, value)` for every outcome node after intervention.
    pub fn counterfactual_outcomes(&self) -> Vec<(usize, bool)> {
        outcome_values(&self.outcome, &self.counterfactual)
    }
}

fn outcome_values(outcome: &[usize], assignment: &Assignment) -> Vec<(usize, bool)> {
    outcome
        .iter()
        .filter_map(|&node| assignment.get(node).map(|value| (node, value)))
        .collect()
}
