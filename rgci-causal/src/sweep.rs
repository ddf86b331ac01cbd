//! Condition sweep: batch generation over shape × probabilities ×
//! iterations × graph ordinal, in parallel with per-instance random streams.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use rgci_core::config::SweepConfig;
use rgci_core::errors::{ConfigError, RgciResult};
use rgci_core::models::{CausalGraph, ConfoundQuery, CounterfactualQuery};

use crate::confound::build_confound_query;
use crate::graph::generate_dag;
use crate::scm::build_counterfactual_query;

/// A query tagged with its sweep id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identified<T> {
    pub id: String,
    pub query: T,
}

/// One graph of a sweep with all of its queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepInstance {
    /// `{group}{shape}{probs:02}{iterations:02}{ordinal:02}`.
    pub graph_id: String,
    pub graph: CausalGraph,
    /// One per causal distance; id is `graph_id` + 3 digits.
    pub confound_queries: Vec<Identified<ConfoundQuery>>,
    /// One per whatif count; id is `graph_id` + 2 digits.
    pub counterfactual_queries: Vec<Identified<CounterfactualQuery>>,
}

#[derive(Debug, Clone, Copy)]
struct Condition {
    shape: usize,
    probabilities: usize,
    iterations: usize,
    ordinal: usize,
}

/// Generate every instance of the sweep, in enumeration order.
///
/// Instance `i` draws from `StdRng` seeded by `(config.seed, i)`, so the
/// output is identical for any thread count.
pub fn generate_sweep(config: &SweepConfig) -> RgciResult<Vec<SweepInstance>> {
    config.validate()?;

    let mut conditions = Vec::with_capacity(config.graph_count());
    for shape in 0..config.graph_shapes.len() {
        for probabilities in 0..config.motif_probabilities.len() {
            for iterations in 0..config.iterations.len() {
                for ordinal in 0..config.graphs_per_condition {
                    conditions.push(Condition {
                        shape,
                        probabilities,
                        iterations,
                        ordinal,
                    });
                }
            }
        }
    }

    let span = tracing::info_span!(
        "rgci.sweep",
        shape_group = config.shape_group,
        graphs = conditions.len()
    );
    let _guard = span.enter();

    let run = || -> RgciResult<Vec<SweepInstance>> {
        conditions
            .par_iter()
            .enumerate()
            .map(|(index, condition)| {
                let mut rng = StdRng::seed_from_u64(instance_seed(config.seed, index));
                generate_instance(config, condition, &mut rng)
            })
            .collect()
    };

    let instances = match config.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                field: "sweep.threads".to_string(),
                message: e.to_string(),
            })?
            .install(run)?,
        None => run()?,
    };

    tracing::info!(instances = instances.len(), "sweep finished");
    Ok(instances)
}

fn generate_instance(
    config: &SweepConfig,
    condition: &Condition,
    rng: &mut StdRng,
) -> RgciResult<SweepInstance> {
    let graph = generate_dag(
        &config.graph_shapes[condition.shape],
        config.motif_probabilities[condition.probabilities],
        config.iterations[condition.iterations],
        rng,
    )?;
    let graph_id = graph_id(config.shape_group, condition);

    let confound_queries = config
        .causal_distances
        .iter()
        .map(|&distance| {
            Ok(Identified {
                id: format!("{graph_id}{}", distance_code(distance)),
                query: build_confound_query(&graph.tiering, &graph.adjacency, distance)?,
            })
        })
        .collect::<RgciResult<Vec<_>>>()?;

    let mut counterfactual_queries = Vec::with_capacity(config.whatif_counts.len());
    for &whatif in &config.whatif_counts {
        counterfactual_queries.push(Identified {
            id: format!("{graph_id}{whatif:02}"),
            query: build_counterfactual_query(&graph.tiering, &graph.adjacency, whatif, rng)?,
        });
    }

    Ok(SweepInstance {
        graph_id,
        graph,
        confound_queries,
        counterfactual_queries,
    })
}

fn instance_seed(seed: u64, index: usize) -> u64 {
    seed ^ (index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

fn graph_id(shape_group: u32, condition: &Condition) -> String {
    format!(
        "{shape_group}{}{:02}{:02}{:02}",
        condition.shape, condition.probabilities, condition.iterations, condition.ordinal
    )
}

/// `100` for distance 1, otherwise `0` + the truncated percentage.
fn distance_code(distance: f64) -> String {
    if distance == 1.0 {
        "100".to_string()
    } else {
        format!("0{:02}", (distance * 100.0) as u32)
    }
}
