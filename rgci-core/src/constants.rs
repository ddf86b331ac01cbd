//! Shared constants for the rgci generator.

/// rgci version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum number of tiers a graph shape must have.
pub const MIN_TIERS: usize = 3;

/// Sweep axes indexed with two decimal digits in instance ids.
pub const MAX_SWEEP_AXIS_LEN: usize = 100;

/// The graph-shape index is a single digit in instance ids.
pub const MAX_SWEEP_SHAPES: usize = 10;

/// The shape group is the leading single digit of instance ids.
pub const MAX_SHAPE_GROUP: u32 = 9;

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "RGCI_LOG";

/// Prefix used when rendering node variables in equation listings.
pub const NODE_LABEL_PREFIX: &str = "v";
