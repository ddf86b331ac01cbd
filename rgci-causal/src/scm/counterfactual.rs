//! Counterfactual query generation: do-operator interventions over the SCM.

use rand::seq::index;
use rand::Rng;

use rgci_core::errors::{RgciResult, SynthError};
use rgci_core::models::{AdjacencyMatrix, CounterfactualQuery, Tiering};

use super::{assign_operators, evaluate, render_equations};

/// Build a counterfactual query with up to `whatif_count` interventions.
///
/// - clue: every root of `adjacency`;
/// - outcome: last-tier nodes with at least one parent;
/// - candidates: every other node, in tier order.
///
/// `min(whatif_count, candidates)` nodes are sampled without replacement.
/// Asking for more than the pool holds is not an error; check
/// [`CounterfactualQuery::sampled_count`] when the exact count matters.
///
/// The factual world is evaluated on `adjacency`. The counterfactual world
/// is evaluated on a copy with the intervened nodes' incoming edges removed,
/// flipping each intervened node relative to its factual value.
pub fn build_counterfactual_query<R: Rng + ?Sized>(
    tiering: &Tiering,
    adjacency: &AdjacencyMatrix,
    whatif_count: usize,
    rng: &mut R,
) -> RgciResult<CounterfactualQuery> {
    if tiering.node_count() != adjacency.size() {
        return Err(SynthError::DimensionMismatch {
            what: "tiering node count",
            expected: adjacency.size(),
            actual: tiering.node_count(),
        }
        .into());
    }

    let in_degrees = adjacency.in_degrees();
    let clue = adjacency.roots();
    let outcome: Vec<usize> = tiering
        .last()
        .iter()
        .copied()
        .filter(|&node| in_degrees[node] > 0)
        .collect();
    let candidates: Vec<usize> = tiering.nodes().filter(|node| !outcome.contains(node)).collect();

    let program = assign_operators(adjacency, rng);

    let amount = whatif_count.min(candidates.len());
    if amount < whatif_count {
        tracing::debug!(
            requested = whatif_count,
            sampled = amount,
            "intervention count clamped to candidate pool"
        );
    }
    let intervened: Vec<usize> = index::sample(rng, candidates.len(), amount)
        .into_iter()
        .map(|i| candidates[i])
        .collect();

    let severed = adjacency.without_incoming(&intervened);
    let factual = evaluate(adjacency, &program, &[], None)?;
    let counterfactual = evaluate(&severed, &program, &intervened, Some(&factual))?;

    let factual_equations = render_equations(adjacency, &program, &[], None)?;
    let counterfactual_equations = render_equations(&severed, &program, &intervened, Some(&factual))?;

    Ok(CounterfactualQuery {
        whatif_requested: whatif_count,
        program,
        clue,
        intervened,
        outcome,
        factual,
        counterfactual,
        factual_equations,
        counterfactual_equations,
    })
}
