//! Structural causal model over the synthesized DAG.
//!
//! Each non-root node gets a random boolean equation over its parents.
//! The same program is evaluated on the factual graph and on the graph
//! with intervened nodes cut from their parents.

pub mod counterfactual;
pub mod evaluate;
pub mod operators;
pub mod render;

pub use counterfactual::build_counterfactual_query;
pub use evaluate::evaluate;
pub use operators::assign_operators;
pub use render::{node_label, render_equations};
