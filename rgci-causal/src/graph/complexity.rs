//! Structural complexity of a finished graph.

use rgci_core::models::{AdjacencyMatrix, ComplexityMetrics};

/// Count motif-shaped substructures: every node contributes
/// `in·out` chains, `C(out, 2)` forks, and `C(in, 2)` colliders.
pub fn measure(adjacency: &AdjacencyMatrix) -> ComplexityMetrics {
    let node_count = adjacency.size();
    if node_count == 0 {
        return ComplexityMetrics::default();
    }

    let in_degrees = adjacency.in_degrees();
    let out_degrees = adjacency.out_degrees();

    let mut metrics = ComplexityMetrics {
        node_count,
        avg_in_degree: in_degrees.iter().sum::<usize>() as f64 / node_count as f64,
        ..ComplexityMetrics::default()
    };
    for (&indeg, &outdeg) in in_degrees.iter().zip(&out_degrees) {
        let (indeg, outdeg) = (indeg as u64, outdeg as u64);
        metrics.chain_count += indeg * outdeg;
        metrics.fork_count += choose_two(outdeg);
        metrics.collider_count += choose_two(indeg);
    }
    metrics
}

fn choose_two(n: u64) -> u64 {
    n * n.saturating_sub(1) / 2
}
