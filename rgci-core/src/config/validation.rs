//! Field validators shared by the config sections.

use crate::errors::{ConfigError, SynthError};
use crate::models::{MotifProbabilities, Tiering};

fn synth_failure(field: &str, err: SynthError) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: err.to_string(),
    }
}

pub(crate) fn validate_shape(field: &str, sizes: &[usize]) -> Result<(), ConfigError> {
    Tiering::from_sizes(sizes)
        .map(|_| ())
        .map_err(|e| synth_failure(field, e))
}

pub(crate) fn validate_probabilities(
    field: &str,
    probabilities: &MotifProbabilities,
) -> Result<(), ConfigError> {
    probabilities.validate().map_err(|e| synth_failure(field, e))
}

pub(crate) fn validate_causal_distance(field: &str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(synth_failure(field, SynthError::InvalidCausalDistance { value }))
    }
}

/// A sweep axis must be non-empty and fit the id scheme.
pub(crate) fn require_axis(field: &str, len: usize, max: usize) -> Result<(), ConfigError> {
    if len == 0 {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must not be empty".to_string(),
        });
    }
    if len > max {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!("{len} entries exceed the id scheme limit of {max}"),
        });
    }
    Ok(())
}
