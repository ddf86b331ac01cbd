//! Tiered random DAG synthesis from chain, fork, and collider motifs.
//!
//! Every motif wires nodes from strictly lower tiers to strictly higher
//! tiers, so the graph is acyclic by construction and never needs a cycle
//! check while it grows.

use std::ops::Range;

use rand::seq::index;
use rand::Rng;

use rgci_core::config::GraphConfig;
use rgci_core::errors::{RgciResult, SynthError};
use rgci_core::models::{AdjacencyMatrix, CausalGraph, Motif, MotifProbabilities, Tiering};

use super::complexity;

/// Validated generator for one graph shape.
#[derive(Debug, Clone, PartialEq)]
pub struct DagSynthesizer {
    tiering: Tiering,
    probabilities: MotifProbabilities,
    iterations: usize,
}

impl DagSynthesizer {
    /// Rejects fewer than three tiers, empty tiers, and invalid probabilities.
    pub fn new(
        tier_sizes: &[usize],
        probabilities: MotifProbabilities,
        iterations: usize,
    ) -> RgciResult<Self> {
        let tiering = Tiering::from_sizes(tier_sizes)?;
        probabilities.validate()?;
        Ok(Self {
            tiering,
            probabilities,
            iterations,
        })
    }

    pub fn from_config(config: &GraphConfig) -> RgciResult<Self> {
        Self::new(
            &config.tier_sizes,
            config.motif_probabilities,
            config.iterations,
        )
    }

    pub fn tiering(&self) -> &Tiering {
        &self.tiering
    }

    /// Grow a graph: `iterations` sweeps, each giving every node of every
    /// tier one draw for a new motif. Complexity is measured at the end.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> RgciResult<CausalGraph> {
        let node_count = self.tiering.node_count();
        let thresholds = self.probabilities.thresholds();
        let mut adjacency = AdjacencyMatrix::new(node_count);

        for _ in 0..self.iterations {
            for (tier, nodes) in self.tiering.tiers().iter().enumerate() {
                for &node in nodes {
                    if let Some(motif) = draw_motif(&self.tiering, thresholds, tier, node, rng)? {
                        motif.apply(&mut adjacency)?;
                    }
                }
            }
        }

        let complexity = complexity::measure(&adjacency);
        tracing::debug!(
            tiers = self.tiering.len(),
            nodes = node_count,
            edges = adjacency.edge_count(),
            chains = complexity.chain_count,
            forks = complexity.fork_count,
            colliders = complexity.collider_count,
            "synthesized tiered DAG"
        );

        Ok(CausalGraph {
            nodes: (0..node_count).collect(),
            tiering: self.tiering.clone(),
            adjacency,
            complexity,
        })
    }
}

/// Build a DAG from tier sizes in one call.
pub fn generate_dag<R: Rng + ?Sized>(
    tier_sizes: &[usize],
    probabilities: MotifProbabilities,
    iterations: usize,
    rng: &mut R,
) -> RgciResult<CausalGraph> {
    DagSynthesizer::new(tier_sizes, probabilities, iterations)?.generate(rng)
}

/// One growth draw for `node` in `tier`.
///
/// `thresholds` are the cumulative motif probabilities. Returns `None` when
/// the draw lands on "do nothing", or on a fork in the last tier or a
/// collider in the first tier. Fails when `tier` is outside the layout or
/// `node` is not one of its nodes.
pub fn draw_motif<R: Rng + ?Sized>(
    tiering: &Tiering,
    thresholds: [f64; 3],
    tier: usize,
    node: usize,
    rng: &mut R,
) -> RgciResult<Option<Motif>> {
    let Some(members) = tiering.tier(tier) else {
        return Err(SynthError::TierOutOfRange {
            tier,
            tier_count: tiering.len(),
        }
        .into());
    };
    if !members.contains(&node) {
        return Err(SynthError::NodeNotInTier { node, tier }.into());
    }

    let last = tiering.len() - 1;
    let state: f64 = rng.gen();

    if state < thresholds[0] {
        let nodes = if tier == 0 {
            let (a, b) = distinct_tiers(rng, 1..tiering.len());
            [node, pick_node(rng, tiering, a), pick_node(rng, tiering, b)]
        } else if tier == last {
            let (a, b) = distinct_tiers(rng, 0..last);
            [pick_node(rng, tiering, a), pick_node(rng, tiering, b), node]
        } else {
            let earlier = rng.gen_range(0..tier);
            let later = rng.gen_range(tier + 1..tiering.len());
            [
                pick_node(rng, tiering, earlier),
                node,
                pick_node(rng, tiering, later),
            ]
        };
        Ok(Some(Motif::Chain { nodes }))
    } else if state < thresholds[1] {
        if tier == last {
            return Ok(None);
        }
        let (x, y) = sorted_pair(rng, tier + 1..tiering.len());
        Ok(Some(Motif::Fork {
            source: node,
            targets: [pick_node(rng, tiering, x), pick_node(rng, tiering, y)],
        }))
    } else if state < thresholds[2] {
        if tier == 0 {
            return Ok(None);
        }
        let (x, y) = sorted_pair(rng, 0..tier);
        Ok(Some(Motif::Collider {
            sources: [pick_node(rng, tiering, x), pick_node(rng, tiering, y)],
            sink: node,
        }))
    } else {
        Ok(None)
    }
}

/// Two different tiers from `range`, ascending.
fn distinct_tiers<R: Rng + ?Sized>(rng: &mut R, range: Range<usize>) -> (usize, usize) {
    let picked = index::sample(rng, range.len(), 2);
    let (a, b) = (range.start + picked.index(0), range.start + picked.index(1));
    (a.min(b), a.max(b))
}

/// Two tiers drawn independently from `range` (possibly equal), ascending.
fn sorted_pair<R: Rng + ?Sized>(rng: &mut R, range: Range<usize>) -> (usize, usize) {
    let a = rng.gen_range(range.clone());
    let b = rng.gen_range(range);
    (a.min(b), a.max(b))
}

fn pick_node<R: Rng + ?Sized>(rng: &mut R, tiering: &Tiering, tier: usize) -> usize {
    let nodes = &tiering.tiers()[tier];
    nodes[rng.gen_range(0..nodes.len())]
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rgci_core::RgciError;

    use super::*;

    fn seeded_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn draw_chain(tiering: &Tiering, tier: usize, node: usize, rng: &mut StdRng) -> [usize; 3] {
        match draw_motif(tiering, [1.0, 1.0, 1.0], tier, node, rng).unwrap() {
            Some(Motif::Chain { nodes }) => nodes,
            other => panic!("expected chain, got {other:?}"),
        }
    }

    #[test]
    fn zero_iterations_yield_empty_graph() {
        let graph = generate_dag(&[1, 2, 1], MotifProbabilities::default(), 0, &mut seeded_rng()).unwrap();
        assert_eq!(graph.nodes, vec![0, 1, 2, 3]);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.complexity.chain_count, 0);
        assert_eq!(graph.complexity.avg_in_degree, 0.0);
    }

    #[test]
    fn chain_only_from_first_tier_goes_forward() {
        let tiering = Tiering::from_sizes(&[1, 1, 1, 1]).unwrap();
        let mut rng = seeded_rng();
        for _ in 0..50 {
            let [a, b, c] = draw_chain(&tiering, 0, 0, &mut rng);
            assert_eq!(a, 0);
            assert!(a < b && b < c, "chain {a}->{b}->{c} not increasing");
        }
    }

    #[test]
    fn chain_into_last_tier_ends_at_node() {
        let tiering = Tiering::from_sizes(&[1, 1, 1]).unwrap();
        let mut rng = seeded_rng();
        for _ in 0..50 {
            let [a, b, c] = draw_chain(&tiering, 2, 2, &mut rng);
            assert_eq!([a, b, c], [0, 1, 2]);
        }
    }

    #[test]
    fn chain_through_middle_tier_keeps_node_in_the_middle() {
        let tiering = Tiering::from_sizes(&[2, 2, 2]).unwrap();
        let mut rng = seeded_rng();
        for node in [2, 3] {
            for _ in 0..50 {
                let [a, b, c] = draw_chain(&tiering, 1, node, &mut rng);
                assert_eq!(b, node);
                assert_eq!(tiering.tier_of(a), Some(0));
                assert_eq!(tiering.tier_of(c), Some(2));
            }
        }
    }

    #[test]
    fn draw_rejects_bad_tier_or_node() {
        let tiering = Tiering::from_sizes(&[1, 1, 1]).unwrap();
        let mut rng = seeded_rng();
        let err = draw_motif(&tiering, [1.0, 1.0, 1.0], 5, 0, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            RgciError::Synth(SynthError::TierOutOfRange { tier: 5, tier_count: 3 })
        ));
        let err = draw_motif(&tiering, [1.0, 1.0, 1.0], 1, 0, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            RgciError::Synth(SynthError::NodeNotInTier { node: 0, tier: 1 })
        ));
    }

    #[test]
    fn fork_in_last_tier_and_collider_in_first_tier_do_nothing() {
        let tiering = Tiering::from_sizes(&[1, 1, 1]).unwrap();
        let mut rng = seeded_rng();
        for _ in 0..20 {
            assert!(draw_motif(&tiering, [0.0, 1.0, 1.0], 2, 2, &mut rng).unwrap().is_none());
            assert!(draw_motif(&tiering, [0.0, 0.0, 1.0], 0, 0, &mut rng).unwrap().is_none());
        }
    }

    #[test]
    fn zero_probabilities_never_grow() {
        let mut rng = seeded_rng();
        let graph = generate_dag(&[2, 2, 2], MotifProbabilities::new(0.0, 0.0, 0.0), 10, &mut rng).unwrap();
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn invalid_shapes_are_rejected() {
        let mut rng = seeded_rng();
        assert!(generate_dag(&[2, 2], MotifProbabilities::default(), 1, &mut rng).is_err());
        assert!(generate_dag(&[2, 0, 2], MotifProbabilities::default(), 1, &mut rng).is_err());
        assert!(generate_dag(&[2, 2, 2], MotifProbabilities::new(0.6, 0.6, 0.0), 1, &mut rng).is_err());
    }
}
