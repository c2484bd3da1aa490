//! Command implementations

pub mod solve;

pub use solve::{ChainGroups, SolveConfig, collect_chains};
