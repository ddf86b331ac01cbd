//! petgraph views of an adjacency matrix: topological order and cycle search.
//!
//! Synthesis is acyclic by construction and never consults these checks;
//! they order structural-equation evaluation and back the test suite.

use petgraph::algo::{tarjan_scc, toposort};
use petgraph::graph::{DiGraph, NodeIndex};

use rgci_core::errors::{RgciResult, SynthError};
use rgci_core::models::AdjacencyMatrix;

/// Directed petgraph copy. Node weights are the matrix indices.
pub fn to_digraph(adjacency: &AdjacencyMatrix) -> DiGraph<usize, ()> {
    let mut graph = DiGraph::with_capacity(adjacency.size(), adjacency.edge_count());
    for node in 0..adjacency.size() {
        graph.add_node(node);
    }
    for (from, to) in adjacency.edges() {
        graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
    }
    graph
}

/// A topological order of the nodes, or `CycleDetected` naming a node on a cycle.
pub fn topological_order(adjacency: &AdjacencyMatrix) -> RgciResult<Vec<usize>> {
    let graph = to_digraph(adjacency);
    toposort(&graph, None)
        .map(|order| order.into_iter().map(NodeIndex::index).collect())
        .map_err(|cycle| {
            SynthError::CycleDetected {
                node: cycle.node_id().index(),
            }
            .into()
        })
}

/// Strongly connected components that form cycles, including self-loops.
pub fn find_cycles(adjacency: &AdjacencyMatrix) -> Vec<Vec<usize>> {
    let graph = to_digraph(adjacency);
    tarjan_scc(&graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
        .map(|scc| {
            let mut nodes: Vec<usize> = scc.into_iter().map(NodeIndex::index).collect();
            nodes.sort_unstable();
            nodes
        })
        .collect()
}
