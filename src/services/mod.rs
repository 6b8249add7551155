//! Service discovery, filtering and scaling

pub mod resolver;
pub mod scaler;
pub mod target;

#[cfg(test)]
pub(crate) mod testing;

pub use resolver::{name_universe, ServiceFilter, ServiceResolver};
pub use scaler::ScalingExecutor;
pub use target::{matches_environment, ServiceTarget};
