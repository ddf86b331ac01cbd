//! Confounding-control queries: treatment/outcome tier selection and
//! causal vs. backdoor path sets.

use rgci_core::errors::{RgciResult, SynthError};
use rgci_core::models::{AdjacencyMatrix, ConfoundQuery, Tiering};

use crate::paths::find_all_paths;

/// Treatment and outcome tier indices for `causal_distance` over `tier_count` tiers.
///
/// With `max_d` intermediate tiers, `offset = round(max_d / 2 · (1 - d))`
/// (ties to even). Treatment is tier `1 + offset`; outcome is tier
/// `2 + offset` when `offset > max_d / 2`, otherwise the mirrored tier
/// `tier_count - 2 - offset`. `d = 1` gives the widest span.
pub fn tier_pair(tier_count: usize, causal_distance: f64) -> RgciResult<(usize, usize)> {
    if tier_count < rgci_core::constants::MIN_TIERS {
        return Err(SynthError::TooFewTiers {
            count: tier_count,
            min: rgci_core::constants::MIN_TIERS,
        }
        .into());
    }
    if !(causal_distance > 0.0 && causal_distance <= 1.0) {
        return Err(SynthError::InvalidCausalDistance {
            value: causal_distance,
        }
        .into());
    }

    let max_d = (tier_count - 2) as f64;
    let offset = (max_d / 2.0 * (1.0 - causal_distance)).round_ties_even() as usize;
    let treatment = 1 + offset;
    let outcome = if offset as f64 > max_d / 2.0 {
        treatment + 1
    } else {
        tier_count - 2 - offset
    };
    Ok((treatment, outcome))
}

/// Build the confounding query for `causal_distance`.
///
/// For every (treatment, outcome) pair, causal paths are the directed simple
/// paths; backdoor paths are the simple paths of the undirected graph that
/// are not causal paths.
pub fn build_confound_query(
    tiering: &Tiering,
    adjacency: &AdjacencyMatrix,
    causal_distance: f64,
) -> RgciResult<ConfoundQuery> {
    if tiering.node_count() != adjacency.size() {
        return Err(SynthError::DimensionMismatch {
            what: "tiering node count",
            expected: adjacency.size(),
            actual: tiering.node_count(),
        }
        .into());
    }

    let (treatment_tier, outcome_tier) = tier_pair(tiering.len(), causal_distance)?;
    let treatment = tiering.tiers()[treatment_tier].clone();
    let outcome = tiering.tiers()[outcome_tier].clone();
    let undirected = adjacency.symmetrized();

    let pair_count = treatment.len() * outcome.len();
    let mut causal_paths = Vec::with_capacity(pair_count);
    let mut backdoor_paths = Vec::with_capacity(pair_count);
    for &t in &treatment {
        for &o in &outcome {
            let causal = find_all_paths(adjacency, t, o)?;
            let backdoor = find_all_paths(&undirected, t, o)?
                .into_iter()
                .filter(|path| !causal.contains(path))
                .collect();
            causal_paths.push(causal);
            backdoor_paths.push(backdoor);
        }
    }

    tracing::debug!(
        causal_distance,
        treatment_tier,
        outcome_tier,
        pairs = pair_count,
        "built confounding query"
    );

    Ok(ConfoundQuery {
        causal_distance,
        treatment,
        outcome,
        causal_paths,
        backdoor_paths,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_distance_spans_inner_boundary_tiers() {
        assert_eq!(tier_pair(5, 1.0).unwrap(), (1, 3));
        assert_eq!(tier_pair(6, 1.0).unwrap(), (1, 4));
        assert_eq!(tier_pair(8, 1.0).unwrap(), (1, 6));
    }

    #[test]
    fn smaller_distance_pulls_toward_middle() {
        // 8 tiers: max_d = 6, offset = round(3 · 0.5) = 2 (tie to even).
        assert_eq!(tier_pair(8, 0.5).unwrap(), (3, 4));
        // offset = round(3 · 0.25) = round(0.75) = 1.
        assert_eq!(tier_pair(8, 0.75).unwrap(), (2, 5));
        // 6 tiers: max_d = 4, offset = round(2 · 0.5) = 1.
        assert_eq!(tier_pair(6, 0.5).unwrap(), (2, 3));
    }

    #[test]
    fn three_tiers_collapse_onto_middle() {
        assert_eq!(tier_pair(3, 1.0).unwrap(), (1, 1));
        assert_eq!(tier_pair(3, 0.01).unwrap(), (1, 1));
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(tier_pair(2, 1.0).is_err());
        assert!(tier_pair(5, 0.0).is_err());
        assert!(tier_pair(5, 1.5).is_err());
        assert!(tier_pair(5, f64::NAN).is_err());
    }

    #[test]
    fn backdoor_excludes_causal_paths() {
        // Tiers [[0], [1], [2], [3], [4]]: 0→1, 0→3, 1→3.
        let tiering = Tiering::from_sizes(&[1, 1, 1, 1, 1]).unwrap();
        let adj = AdjacencyMatrix::from_edges(5, &[(0, 1), (0, 3), (1, 3)]).unwrap();
        let query = build_confound_query(&tiering, &adj, 1.0).unwrap();

        assert_eq!(query.treatment, vec![1]);
        assert_eq!(query.outcome, vec![3]);
        assert_eq!(query.causal_paths, vec![vec![vec![1, 3]]]);
        assert_eq!(query.backdoor_paths, vec![vec![vec![1, 0, 3]]]);
    }

    #[test]
    fn mismatched_tiering_is_rejected() {
        let tiering = Tiering::from_sizes(&[1, 1, 1]).unwrap();
        let adj = AdjacencyMatrix::new(4);
        assert!(build_confound_query(&tiering, &adj, 1.0).is_err());
    }
}
