//! Plain-text listing of the structural equations, one line per node.

use rgci_core::constants::NODE_LABEL_PREFIX;
use rgci_core::errors::{RgciResult, SynthError};
use rgci_core::models::{AdjacencyMatrix, Assignment, EdgeOperator, NodeProgram, OperatorProgram};

use super::evaluate::check_node_program;

/// Variable name used for `node` in equation listings.
pub fn node_label(node: usize) -> String {
    format!("{NODE_LABEL_PREFIX}{node}")
}

/// Render the equations `evaluate` would apply, e.g.
///
/// ```text
/// v0 = true
/// v1 = not v0
/// v3 = v1 and not v2
/// ```
///
/// Roots render as `true`. Intervened nodes render as their forced value:
/// `!prior[node]`, or `true` without a prior. A program that does not fit
/// the graph fails exactly as it would in `evaluate`.
pub fn render_equations(
    adjacency: &AdjacencyMatrix,
    program: &OperatorProgram,
    intervened: &[usize],
    prior: Option<&Assignment>,
) -> RgciResult<String> {
    if program.len() != adjacency.size() {
        return Err(SynthError::DimensionMismatch {
            what: "operator program",
            expected: adjacency.size(),
            actual: program.len(),
        }
        .into());
    }

    let mut lines = Vec::with_capacity(adjacency.size());
    for (node, node_program) in program.iter().enumerate() {
        let label = node_label(node);
        if intervened.contains(&node) {
            let forced = prior.and_then(|p| p.get(node)).map_or(true, |value| !value);
            lines.push(format!("{label} = {forced}"));
            continue;
        }
        check_node_program(node, node_program, adjacency.in_degree(node))?;
        match node_program {
            NodeProgram::Free => lines.push(format!("{label} = true")),
            NodeProgram::Equation(steps) => {
                let mut expr = String::new();
                for (step, parent) in steps.iter().zip(adjacency.parents(node)) {
                    if step.operator == EdgeOperator::Not {
                        expr.push_str("not ");
                    }
                    expr.push_str(&node_label(parent));
                    if let Some(combinator) = step.then {
                        expr.push(' ');
                        expr.push_str(combinator.keyword());
                        expr.push(' ');
                    }
                }
                lines.push(format!("{label} = {expr}"));
            }
        }
    }
    Ok(lines.join("\n"))
}
