//! The generated causal graph and its structural complexity.

use serde::{Deserialize, Serialize};

use super::{AdjacencyMatrix, Tiering};

/// Structural complexity of a graph, computed once after synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ComplexityMetrics {
    pub node_count: usize,
    /// Total in-degree divided by node count.
    pub avg_in_degree: f64,
    /// Σ indegree · outdegree.
    pub chain_count: u64,
    /// Σ C(outdegree, 2).
    pub fork_count: u64,
    /// Σ C(indegree, 2).
    pub collider_count: u64,
}

/// A synthesized DAG with its tier layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalGraph {
    pub nodes: Vec<usize>,
    pub tiering: Tiering,
    pub adjacency: AdjacencyMatrix,
    pub complexity: ComplexityMetrics,
}

impl CausalGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }
}
