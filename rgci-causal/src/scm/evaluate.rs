//! Direct interpretation of operator programs.

use rgci_core::errors::{RgciResult, SynthError};
use rgci_core::models::{AdjacencyMatrix, Assignment, Combinator, NodeProgram, OperatorProgram, OperatorStep};

use crate::graph::topological_order;

/// Evaluate every node of `adjacency` under `program`.
///
/// Nodes are visited in topological order:
/// - an intervened node takes `!prior[node]`, or `true` without a prior;
/// - a root takes `true`;
/// - any other node applies its steps to its parents in ascending index
///   order. `And` binds tighter than `Or`, so `not a and b or c` reads as
///   `((not a) and b) or c`.
///
/// A non-intervened node whose step count differs from its in-degree in
/// `adjacency` is a `ProgramMismatch`.
pub fn evaluate(
    adjacency: &AdjacencyMatrix,
    program: &OperatorProgram,
    intervened: &[usize],
    prior: Option<&Assignment>,
) -> RgciResult<Assignment> {
    let size = adjacency.size();
    if program.len() != size {
        return Err(SynthError::DimensionMismatch {
            what: "operator program",
            expected: size,
            actual: program.len(),
        }
        .into());
    }
    if let Some(prior) = prior {
        if prior.len() != size {
            return Err(SynthError::DimensionMismatch {
                what: "prior assignment",
                expected: size,
                actual: prior.len(),
            }
            .into());
        }
    }

    let mut is_intervened = vec![false; size];
    for &node in intervened {
        adjacency.check_node(node)?;
        is_intervened[node] = true;
    }

    let mut values = vec![true; size];
    for node in topological_order(adjacency)? {
        if is_intervened[node] {
            values[node] = prior.and_then(|p| p.get(node)).map_or(true, |value| !value);
            continue;
        }

        let parents: Vec<usize> = adjacency.parents(node).collect();
        let node_program = &program.0[node];
        check_node_program(node, node_program, parents.len())?;
        values[node] = match node_program {
            NodeProgram::Free => true,
            NodeProgram::Equation(steps) => combine(steps, parents.iter().map(|&parent| values[parent])),
        };
    }

    Ok(Assignment(values))
}

/// A `Free` program needs a root; an `Equation` needs one step per parent
/// and must be well formed.
pub(crate) fn check_node_program(
    node: usize,
    program: &NodeProgram,
    parent_count: usize,
) -> RgciResult<()> {
    match program {
        NodeProgram::Free if parent_count == 0 => Ok(()),
        NodeProgram::Equation(steps) if steps.len() == parent_count => {
            if program.is_well_formed() {
                Ok(())
            } else {
                Err(SynthError::MalformedProgram { node }.into())
            }
        }
        other => Err(SynthError::ProgramMismatch {
            node,
            expected: parent_count,
            actual: other.steps().len(),
        }
        .into()),
    }
}

/// OR over the AND-groups formed by consecutive `And` combinators.
fn combine(steps: &[OperatorStep], inputs: impl Iterator<Item = bool>) -> bool {
    let mut result = false;
    let mut group = true;
    for (step, input) in steps.iter().zip(inputs) {
        group &= step.operator.apply(input);
        if step.then != Some(Combinator::And) {
            result |= group;
            group = true;
        }
    }
    result
}
