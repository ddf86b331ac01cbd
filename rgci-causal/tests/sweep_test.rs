//! Integration tests for the condition sweep and the engine facade.

use rand::rngs::StdRng;
use rand::SeedableRng;

use rgci_causal::{generate_sweep, CausalSynthEngine};
use rgci_core::config::SweepConfig;
use rgci_core::models::MotifProbabilities;
use rgci_core::RgciConfig;

fn small_sweep(threads: Option<usize>) -> SweepConfig {
    SweepConfig {
        shape_group: 0,
        graph_shapes: vec![vec![1, 1, 1, 1], vec![2, 2, 2]],
        motif_probabilities: vec![MotifProbabilities::default()],
        iterations: vec![1, 2],
        graphs_per_condition: 3,
        causal_distances: vec![1.0, 0.5],
        whatif_counts: vec![1, 2],
        seed: 7,
        threads,
    }
}

#[test]
fn ids_follow_enumeration_order() {
    let instances = generate_sweep(&small_sweep(Some(2))).unwrap();
    assert_eq!(instances.len(), 12);

    assert_eq!(instances[0].graph_id, "00000000");
    assert_eq!(instances[1].graph_id, "00000001");
    assert_eq!(instances[3].graph_id, "00000100");

    let last = &instances[11];
    assert_eq!(last.graph_id, "01000102");
    assert_eq!(last.graph.tiering.sizes(), vec![2, 2, 2]);

    let confound_ids: Vec<_> = last.confound_queries.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(confound_ids, ["01000102100", "01000102050"]);
    let counterfactual_ids: Vec<_> =
        last.counterfactual_queries.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(counterfactual_ids, ["0100010201", "0100010202"]);
}

#[test]
fn output_is_independent_of_thread_count() {
    let serial = generate_sweep(&small_sweep(Some(1))).unwrap();
    let parallel = generate_sweep(&small_sweep(Some(4))).unwrap();
    let global = generate_sweep(&small_sweep(None)).unwrap();
    assert_eq!(serial, parallel);
    assert_eq!(serial, global);
}

#[test]
fn invalid_sweep_is_rejected() {
    let mut config = small_sweep(None);
    config.causal_distances = vec![0.0];
    assert!(generate_sweep(&config).is_err());

    assert!(generate_sweep(&small_sweep(Some(0))).is_err());

    let mut config = small_sweep(None);
    config.shape_group = 12;
    assert!(generate_sweep(&config).is_err());

    let mut config = small_sweep(None);
    config.graph_shapes = vec![vec![1, 1]];
    assert!(generate_sweep(&config).is_err());
}

#[test]
fn engine_builds_full_instances() {
    let engine = CausalSynthEngine::new(RgciConfig::default()).unwrap();
    let instance = engine.generate_instance(&mut StdRng::seed_from_u64(42)).unwrap();

    assert_eq!(instance.graph.node_count(), 10);
    assert_eq!(instance.confound.causal_distance, 1.0);
    assert_eq!(instance.confound.treatment, vec![2, 3]);
    assert_eq!(instance.confound.outcome, vec![6, 7]);
    assert_eq!(instance.counterfactual.whatif_requested, 1);

    let again = engine.generate_instance(&mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(instance, again);
    assert_eq!(
        serde_json::to_string(&instance.confound).unwrap(),
        serde_json::to_string(&again.confound).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&instance.counterfactual).unwrap(),
        serde_json::to_string(&again.counterfactual).unwrap()
    );
}

#[test]
fn engine_rejects_invalid_config() {
    let mut config = RgciConfig::default();
    config.query.causal_distance = 1.5;
    assert!(CausalSynthEngine::new(config).is_err());
}

#[test]
fn engine_runs_configured_sweep() {
    rgci_core::tracing::init_tracing_with_filter("rgci_causal=debug");
    let config = RgciConfig {
        sweep: small_sweep(None),
        ..RgciConfig::default()
    };
    let engine = CausalSynthEngine::new(config).unwrap();
    assert_eq!(engine.sweep().unwrap().len(), 12);
}
