use serde::{Deserialize, Serialize};

use super::defaults;
use super::validation::{
    require_axis, validate_causal_distance, validate_probabilities, validate_shape,
};
use crate::constants::{MAX_SHAPE_GROUP, MAX_SWEEP_AXIS_LEN, MAX_SWEEP_SHAPES};
use crate::errors::ConfigError;
use crate::models::MotifProbabilities;

/// Grid of conditions for batch generation.
///
/// Every combination of shape × probabilities × iterations gets
/// `graphs_per_condition` graphs; every graph gets one confounding query
/// per causal distance and one counterfactual query per whatif count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Leading digit of every generated id.
    pub shape_group: u32,
    pub graph_shapes: Vec<Vec<usize>>,
    pub motif_probabilities: Vec<MotifProbabilities>,
    pub iterations: Vec<usize>,
    pub graphs_per_condition: usize,
    pub causal_distances: Vec<f64>,
    pub whatif_counts: Vec<usize>,
    /// Base seed; each instance derives its own stream from it.
    pub seed: u64,
    /// Worker threads. `None` uses rayon's global pool.
    pub threads: Option<usize>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            shape_group: defaults::DEFAULT_SHAPE_GROUP,
            graph_shapes: vec![vec![1; 5], vec![2; 5], vec![3; 5]],
            motif_probabilities: vec![MotifProbabilities::default()],
            iterations: defaults::DEFAULT_SWEEP_ITERATIONS.to_vec(),
            graphs_per_condition: defaults::DEFAULT_GRAPHS_PER_CONDITION,
            causal_distances: vec![defaults::DEFAULT_CAUSAL_DISTANCE],
            whatif_counts: defaults::DEFAULT_SWEEP_WHATIF_COUNTS.to_vec(),
            seed: defaults::DEFAULT_SEED,
            threads: None,
        }
    }
}

impl SweepConfig {
    /// Number of graphs the sweep produces.
    pub fn graph_count(&self) -> usize {
        self.graph_shapes.len()
            * self.motif_probabilities.len()
            * self.iterations.len()
            * self.graphs_per_condition
    }

    /// Every axis non-empty, within the id scheme, and holding valid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shape_group > MAX_SHAPE_GROUP {
            return Err(ConfigError::ValidationFailed {
                field: "sweep.shape_group".to_string(),
                message: format!(
                    "{} does not fit the single id digit (max {MAX_SHAPE_GROUP})",
                    self.shape_group
                ),
            });
        }
        require_axis("sweep.graph_shapes", self.graph_shapes.len(), MAX_SWEEP_SHAPES)?;
        require_axis(
            "sweep.motif_probabilities",
            self.motif_probabilities.len(),
            MAX_SWEEP_AXIS_LEN,
        )?;
        require_axis("sweep.iterations", self.iterations.len(), MAX_SWEEP_AXIS_LEN)?;
        require_axis(
            "sweep.graphs_per_condition",
            self.graphs_per_condition,
            MAX_SWEEP_AXIS_LEN,
        )?;
        require_axis(
            "sweep.causal_distances",
            self.causal_distances.len(),
            MAX_SWEEP_AXIS_LEN,
        )?;
        require_axis("sweep.whatif_counts", self.whatif_counts.len(), MAX_SWEEP_AXIS_LEN)?;

        for shape in &self.graph_shapes {
            validate_shape("sweep.graph_shapes", shape)?;
        }
        for probabilities in &self.motif_probabilities {
            validate_probabilities("sweep.motif_probabilities", probabilities)?;
        }
        for &distance in &self.causal_distances {
            validate_causal_distance("sweep.causal_distances", distance)?;
        }
        if let Some(&count) = self.whatif_counts.iter().find(|&&c| c >= MAX_SWEEP_AXIS_LEN) {
            return Err(ConfigError::ValidationFailed {
                field: "sweep.whatif_counts".to_string(),
                message: format!("{count} does not fit the two-digit id scheme"),
            });
        }
        if self.threads == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "sweep.threads".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
