//! Integration tests for confounding-control queries.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use rgci_causal::{build_confound_query, find_all_paths, generate_dag};
use rgci_core::models::{AdjacencyMatrix, MotifProbabilities, Tiering};

#[test]
fn backdoor_through_common_cause() {
    // 0 -> 1 -> 3, 0 -> 2 -> 3, 1 -> 4 ; tiers [[0], [1, 2], [3, 4]]
    let tiering = Tiering::from_sizes(&[1, 2, 2]).unwrap();
    let adjacency =
        AdjacencyMatrix::from_edges(5, &[(0, 1), (0, 2), (1, 3), (2, 3), (1, 4)]).unwrap();

    let query = build_confound_query(&tiering, &adjacency, 1.0).unwrap();
    assert_eq!(query.treatment, vec![1, 2]);
    assert_eq!(query.outcome, vec![1, 2]);

    let pair = query.pair(0, 1).unwrap();
    assert_eq!((pair.treatment, pair.outcome), (1, 2));
    assert!(pair.causal.is_empty());
    assert_eq!(pair.backdoor, &[vec![1, 0, 2], vec![1, 3, 2]]);
    assert!(!query.is_unconfounded());
}

#[test]
fn causal_paths_are_directed() {
    let tiering = Tiering::from_sizes(&[1, 1, 1, 1, 1]).unwrap();
    let adjacency = AdjacencyMatrix::from_edges(5, &[(1, 2), (2, 3), (0, 3)]).unwrap();

    // five tiers at full distance: tiers 1 and 3
    let query = build_confound_query(&tiering, &adjacency, 1.0).unwrap();
    assert_eq!(query.treatment, vec![1]);
    assert_eq!(query.outcome, vec![3]);
    assert_eq!(query.causal_paths, vec![vec![vec![1, 2, 3]]]);
    assert!(query.backdoor_paths[0].is_empty());
    assert!(query.is_unconfounded());
}

#[test]
fn path_sets_partition_undirected_paths() {
    let mut rng = StdRng::seed_from_u64(21);
    let probabilities = MotifProbabilities::new(0.2, 0.2, 0.2);
    for distance in [1.0, 0.5, 0.75] {
        let graph = generate_dag(&[2, 2, 2, 2, 2, 2], probabilities, 2, &mut rng).unwrap();
        let query = build_confound_query(&graph.tiering, &graph.adjacency, distance).unwrap();
        let undirected = graph.adjacency.symmetrized();

        assert_eq!(query.causal_paths.len(), query.pair_count());
        for pair in query.pairs() {
            let causal: BTreeSet<_> = pair.causal.iter().cloned().collect();
            let backdoor: BTreeSet<_> = pair.backdoor.iter().cloned().collect();
            let all: BTreeSet<_> = find_all_paths(&undirected, pair.treatment, pair.outcome)
                .unwrap()
                .into_iter()
                .collect();

            assert!(causal.is_disjoint(&backdoor));
            assert_eq!(&causal | &backdoor, all);
        }
    }
}

#[test]
fn mismatched_tiering_is_rejected() {
    let tiering = Tiering::from_sizes(&[1, 1, 1]).unwrap();
    let adjacency = AdjacencyMatrix::new(4);
    assert!(build_confound_query(&tiering, &adjacency, 1.0).is_err());
}
