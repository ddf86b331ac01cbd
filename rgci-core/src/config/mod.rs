//! Configuration for rgci.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod defaults;
pub mod graph_config;
pub mod query_config;
pub mod rgci_config;
pub mod sweep_config;
mod validation;

pub use graph_config::GraphConfig;
pub use query_config::QueryConfig;
pub use rgci_config::RgciConfig;
pub use sweep_config::SweepConfig;
