//! Error types for the rgci workspace.

pub mod config_error;
pub mod synth_error;

pub use config_error::ConfigError;
pub use synth_error::SynthError;

/// Top-level error: every subsystem error converts into this.
#[derive(Debug, thiserror::Error)]
pub enum RgciError {
    #[error(transparent)]
    Synth(#[from] SynthError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type RgciResult<T> = Result<T, RgciError>;
