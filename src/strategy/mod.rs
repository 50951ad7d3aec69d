//! Player strategies.
//!
//! - [`Strategy`]: the six-call contract the engine drives
//! - [`OccupancyView`]: the owner-only board view given after placement
//! - [`StrategyRegistry`]: id to constructor mapping
//! - [`AutoStrategy`]: the built-in reference strategy

pub mod auto;
pub mod contract;
pub mod registry;

pub use auto::AutoStrategy;
pub use contract::{OccupancyView, Strategy};
pub use registry::{StrategyFactory, StrategyRegistry};
