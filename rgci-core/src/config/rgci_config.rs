//! Top-level rgci configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::validation::{validate_causal_distance, validate_probabilities, validate_shape};
use super::{GraphConfig, QueryConfig, SweepConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`RGCI_*`)
/// 2. The TOML file handed to [`RgciConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RgciConfig {
    pub graph: GraphConfig,
    pub query: QueryConfig,
    pub sweep: SweepConfig,
}

impl RgciConfig {
    /// Load configuration: defaults, then `path` if given, then env.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded rgci config");
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `RGCI_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply `RGCI_*` overrides from an arbitrary lookup.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = parse_var(&lookup, "RGCI_SEED")? {
            self.sweep.seed = seed;
        }
        if let Some(iterations) = parse_var(&lookup, "RGCI_ITERATIONS")? {
            self.graph.iterations = iterations;
        }
        if let Some(whatif_count) = parse_var(&lookup, "RGCI_WHATIF_COUNT")? {
            self.query.whatif_count = whatif_count;
        }
        if let Some(causal_distance) = parse_var(&lookup, "RGCI_CAUSAL_DISTANCE")? {
            self.query.causal_distance = causal_distance;
        }
        if let Some(threads) = parse_var(&lookup, "RGCI_THREADS")? {
            self.sweep.threads = Some(threads);
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_shape("graph.tier_sizes", &self.graph.tier_sizes)?;
        validate_probabilities("graph.motif_probabilities", &self.graph.motif_probabilities)?;
        validate_causal_distance("query.causal_distance", self.query.causal_distance)?;

        self.sweep.validate()
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                field: key.to_string(),
                message: e.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_validate() {
        let config = RgciConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.graph.tier_sizes, vec![2, 2, 2, 2, 2]);
        assert_eq!(config.sweep.graph_count(), 3 * 4 * 50);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = RgciConfig::from_toml(
            r#"
            [graph]
            tier_sizes = [1, 2, 1]

            [graph.motif_probabilities]
            chain = 0.3

            [sweep]
            whatif_counts = [2]
            "#,
        )
        .unwrap();
        assert_eq!(config.graph.tier_sizes, vec![1, 2, 1]);
        assert_eq!(config.graph.motif_probabilities.chain, 0.3);
        assert_eq!(config.graph.motif_probabilities.fork, 0.1);
        assert_eq!(config.graph.iterations, 3);
        assert_eq!(config.sweep.whatif_counts, vec![2]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn negative_whatif_count_fails_to_parse() {
        let err = RgciConfig::from_toml("[query]\nwhatif_count = -1\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn two_tier_shape_is_rejected() {
        let mut config = RgciConfig::default();
        config.graph.tier_sizes = vec![3, 3];
        match config.validate().unwrap_err() {
            ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "graph.tier_sizes"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn causal_distance_bounds() {
        let mut config = RgciConfig::default();
        config.query.causal_distance = 0.0;
        assert!(config.validate().is_err());
        config.query.causal_distance = 1.0;
        assert!(config.validate().is_ok());
        config.sweep.causal_distances = vec![0.5, 1.2];
        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_sweep_axis_is_rejected() {
        let mut config = RgciConfig::default();
        config.sweep.graphs_per_condition = 101;
        assert!(config.validate().is_err());
        config.sweep.graphs_per_condition = 0;
        assert!(config.validate().is_err());

        let mut config = RgciConfig::default();
        config.sweep.shape_group = 9;
        assert!(config.validate().is_ok());
        config.sweep.shape_group = 10;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationFailed { field, .. }) if field == "sweep.shape_group"
        ));
    }

    #[test]
    fn env_overrides_win() {
        let vars: HashMap<&str, &str> = [
            ("RGCI_SEED", "7"),
            ("RGCI_WHATIF_COUNT", "4"),
            ("RGCI_CAUSAL_DISTANCE", "0.5"),
        ]
        .into_iter()
        .collect();
        let mut config = RgciConfig::default();
        config
            .apply_overrides_from(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.sweep.seed, 7);
        assert_eq!(config.query.whatif_count, 4);
        assert_eq!(config.query.causal_distance, 0.5);
        assert_eq!(config.graph.iterations, 3);
    }

    #[test]
    fn malformed_env_value_is_reported() {
        let mut config = RgciConfig::default();
        let err = config
            .apply_overrides_from(|key| (key == "RGCI_THREADS").then(|| "many".to_string()))
            .unwrap_err();
        match err {
            ConfigError::InvalidValue { field, .. } => assert_eq!(field, "RGCI_THREADS"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_reported() {
        let err = RgciConfig::load(Some(Path::new("/nonexistent/rgci.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }
}
