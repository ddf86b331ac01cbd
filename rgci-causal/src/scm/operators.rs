//! Random operator programs.

use rand::Rng;

use rgci_core::models::{
    AdjacencyMatrix, Combinator, EdgeOperator, NodeProgram, OperatorProgram, OperatorStep,
};

/// Draw a program for every node of `adjacency`.
///
/// A node with `d > 0` parents gets `d` steps with a uniform `Not`/`Identity`
/// operator each, joined by `d - 1` uniform `And`/`Or` combinators. Roots
/// are `Free`.
pub fn assign_operators<R: Rng + ?Sized>(adjacency: &AdjacencyMatrix, rng: &mut R) -> OperatorProgram {
    let programs = adjacency
        .in_degrees()
        .into_iter()
        .map(|degree| {
            if degree == 0 {
                return NodeProgram::Free;
            }
            let mut steps = Vec::with_capacity(degree);
            for k in 0..degree {
                let operator = if rng.gen::<bool>() {
                    EdgeOperator::Not
                } else {
                    EdgeOperator::Identity
                };
                let then = if k + 1 < degree {
                    Some(if rng.gen::<bool>() {
                        Combinator::And
                    } else {
                        Combinator::Or
                    })
                } else {
                    None
                };
                steps.push(OperatorStep { operator, then });
            }
            NodeProgram::Equation(steps)
        })
        .collect();
    OperatorProgram(programs)
}
