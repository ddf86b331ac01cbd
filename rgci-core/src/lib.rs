//! # rgci-core
//!
//! Foundation crate for the rgci causal-structure generator.
//! Defines the graph, query, and structural-equation records, plus errors,
//! config, tracing setup, and constants. `rgci-causal` builds on top of this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::RgciConfig;
pub use errors::{RgciError, RgciResult};
pub use models::{
    AdjacencyMatrix, Assignment, CausalGraph, ComplexityMetrics, ConfoundQuery,
    CounterfactualQuery, Motif, MotifProbabilities, NodeProgram, OperatorProgram, Tiering,
};
