//! Per-node boolean operator programs for the structural causal model.

use serde::{Deserialize, Serialize};

/// Operator applied to one incoming edge before combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeOperator {
    Not,
    Identity,
}

impl EdgeOperator {
    pub fn apply(self, value: bool) -> bool {
        match self {
            Self::Not => !value,
            Self::Identity => value,
        }
    }
}

/// Combinator joining one edge literal with the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combinator {
    And,
    Or,
}

impl Combinator {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

/// One incoming edge of a node: its operator, then the combinator that
/// links it to the next edge (`None` on the last edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperatorStep {
    pub operator: EdgeOperator,
    pub then: Option<Combinator>,
}

/// How a node's value is derived.
///
/// `Equation` step `k` belongs to the node's `k`-th parent in ascending
/// index order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "steps", rename_all = "snake_case")]
pub enum NodeProgram {
    /// Root node: a free variable with no structural parents.
    Free,
    Equation(Vec<OperatorStep>),
}

impl NodeProgram {
    pub fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }

    pub fn steps(&self) -> &[OperatorStep] {
        match self {
            Self::Free => &[],
            Self::Equation(steps) => steps,
        }
    }

    /// Every step but the last carries a combinator; the last carries none.
    pub fn is_well_formed(&self) -> bool {
        match self {
            Self::Free => true,
            Self::Equation(steps) => {
                let Some((last, init)) = steps.split_last() else {
                    return false;
                };
                last.then.is_none() && init.iter().all(|step| step.then.is_some())
            }
        }
    }
}

/// One `NodeProgram` per node, indexed by node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperatorProgram(pub Vec<NodeProgram>);

impl OperatorProgram {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, node: usize) -> Option<&NodeProgram> {
        self.0.get(node)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeProgram> {
        self.0.iter()
    }
}
