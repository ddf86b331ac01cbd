//! Tiered DAG synthesis, structural complexity, and acyclicity checks.

pub mod acyclicity;
pub mod complexity;
pub mod synthesizer;

pub use acyclicity::{find_cycles, topological_order, to_digraph};
pub use complexity::measure;
pub use synthesizer::{draw_motif, generate_dag, DagSynthesizer};
