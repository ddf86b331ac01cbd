//! Compiled defaults, mirroring the reference data-generation settings.

pub const DEFAULT_TIER_SIZES: [usize; 5] = [2, 2, 2, 2, 2];
pub const DEFAULT_CHAIN_PROBABILITY: f64 = 0.1;
pub const DEFAULT_FORK_PROBABILITY: f64 = 0.1;
pub const DEFAULT_COLLIDER_PROBABILITY: f64 = 0.1;
pub const DEFAULT_ITERATIONS: usize = 3;

pub const DEFAULT_CAUSAL_DISTANCE: f64 = 1.0;
pub const DEFAULT_WHATIF_COUNT: usize = 1;

pub const DEFAULT_SHAPE_GROUP: u32 = 0;
pub const DEFAULT_SWEEP_ITERATIONS: [usize; 4] = [3, 4, 5, 6];
pub const DEFAULT_GRAPHS_PER_CONDITION: usize = 50;
pub const DEFAULT_SWEEP_WHATIF_COUNTS: [usize; 3] = [1, 2, 3];
pub const DEFAULT_SEED: u64 = 42;
