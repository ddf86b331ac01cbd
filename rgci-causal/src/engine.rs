//! CausalSynthEngine: owns a validated config and coordinates synthesis,
//! confounding queries, and counterfactual queries.

use rand::Rng;
use serde::{Deserialize, Serialize};

use rgci_core::errors::RgciResult;
use rgci_core::models::{CausalGraph, ConfoundQuery, CounterfactualQuery};
use rgci_core::RgciConfig;

use crate::confound::build_confound_query;
use crate::graph::DagSynthesizer;
use crate::scm::build_counterfactual_query;
use crate::sweep::{generate_sweep, SweepInstance};

/// One graph with both of its queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthInstance {
    pub graph: CausalGraph,
    pub confound: ConfoundQuery,
    pub counterfactual: CounterfactualQuery,
}

/// The main generator facade.
#[derive(Debug, Clone)]
pub struct CausalSynthEngine {
    config: RgciConfig,
    synthesizer: DagSynthesizer,
}

impl CausalSynthEngine {
    /// Validate `config` and prepare the graph synthesizer.
    pub fn new(config: RgciConfig) -> RgciResult<Self> {
        config.validate()?;
        let synthesizer = DagSynthesizer::from_config(&config.graph)?;
        Ok(Self {
            config,
            synthesizer,
        })
    }

    pub fn config(&self) -> &RgciConfig {
        &self.config
    }

    /// Synthesize a graph with the configured shape and density.
    pub fn generate_graph<R: Rng + ?Sized>(&self, rng: &mut R) -> RgciResult<CausalGraph> {
        self.synthesizer.generate(rng)
    }

    /// Confounding query at the configured causal distance.
    pub fn confound_query(&self, graph: &CausalGraph) -> RgciResult<ConfoundQuery> {
        build_confound_query(
            &graph.tiering,
            &graph.adjacency,
            self.config.query.causal_distance,
        )
    }

    /// Counterfactual query with the configured intervention count.
    pub fn counterfactual_query<R: Rng + ?Sized>(
        &self,
        graph: &CausalGraph,
        rng: &mut R,
    ) -> RgciResult<CounterfactualQuery> {
        build_counterfactual_query(
            &graph.tiering,
            &graph.adjacency,
            self.config.query.whatif_count,
            rng,
        )
    }

    /// Graph plus both queries, all drawn from `rng`.
    pub fn generate_instance<R: Rng + ?Sized>(&self, rng: &mut R) -> RgciResult<SynthInstance> {
        let graph = self.generate_graph(rng)?;
        let confound = self.confound_query(&graph)?;
        let counterfactual = self.counterfactual_query(&graph, rng)?;
        Ok(SynthInstance {
            graph,
            confound,
            counterfactual,
        })
    }

    /// Run the configured condition sweep.
    pub fn sweep(&self) -> RgciResult<Vec<SweepInstance>> {
        generate_sweep(&self.config.sweep)
    }
}
