//! # rgci-causal
//!
//! The generator engine. Synthesizes tiered random DAGs from chain, fork,
//! and collider motifs, then derives ground truth from them: causal and
//! backdoor path sets for confounding queries, and factual/counterfactual
//! boolean assignments from a random structural causal model.

pub mod confound;
pub mod engine;
pub mod graph;
pub mod paths;
pub mod scm;
pub mod sweep;

pub use confound::build_confound_query;
pub use engine::{CausalSynthEngine, SynthInstance};
pub use graph::{generate_dag, DagSynthesizer};
pub use paths::find_all_paths;
pub use scm::{assign_operators, build_counterfactual_query, evaluate, render_equations};
pub use sweep::{generate_sweep, Identified, SweepInstance};
