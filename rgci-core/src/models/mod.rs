//! Records produced by the generator and read by downstream consumers.

pub mod adjacency;
pub mod confound_query;
pub mod counterfactual_query;
pub mod graph;
pub mod motif;
pub mod program;
pub mod tiering;

pub use adjacency::AdjacencyMatrix;
pub use confound_query::{ConfoundQuery, PairPaths, Path};
pub use counterfactual_query::{Assignment, CounterfactualQuery};
pub use graph::{CausalGraph, ComplexityMetrics};
pub use motif::{Motif, MotifProbabilities};
pub use program::{Combinator, EdgeOperator, NodeProgram, OperatorProgram, OperatorStep};
pub use tiering::Tiering;
