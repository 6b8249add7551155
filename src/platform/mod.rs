//! Container platform boundary
//!
//! This module provides:
//! - The [`ContainerPlatform`] trait: the three control-plane capabilities the
//!   resolver and executor need (list clusters, list services, register a
//!   scalable target)
//! - [`AwsPlatform`], the ECS + Application Auto Scaling implementation
//!
//! Everything above this module talks to the trait, so tests swap in an
//! in-memory platform.

pub mod aws;
pub mod error;

use std::fmt;
use std::future::Future;

pub use aws::AwsPlatform;
pub use error::{PlatformError, Result};

/// Application Auto Scaling namespace for ECS services
pub const ECS_SERVICE_NAMESPACE: &str = "ecs";

/// Scalable dimension for an ECS service's desired task count
pub const ECS_DESIRED_COUNT_DIMENSION: &str = "ecs:service:DesiredCount";

/// Minimum/maximum capacity forwarded to the autoscaling control plane.
///
/// `min > max` is accepted as-is; the control plane decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityBounds {
    pub min: i32,
    pub max: i32,
}

impl CapacityBounds {
    pub const DEFAULT_MIN: i32 = 1;
    pub const DEFAULT_MAX: i32 = 2;

    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

impl Default for CapacityBounds {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }
}

impl fmt::Display for CapacityBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.min, self.max)
    }
}

/// One `RegisterScalableTarget` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalingRequest {
    pub namespace: &'static str,
    pub resource_id: String,
    pub dimension: &'static str,
    pub bounds: CapacityBounds,
}

impl ScalingRequest {
    /// Request targeting an ECS service's desired count
    pub fn ecs_service(resource_id: impl Into<String>, bounds: CapacityBounds) -> Self {
        Self {
            namespace: ECS_SERVICE_NAMESPACE,
            resource_id: resource_id.into(),
            dimension: ECS_DESIRED_COUNT_DIMENSION,
            bounds,
        }
    }
}

/// Control-plane capabilities consumed by the resolver and the executor.
///
/// Calls are awaited one at a time; implementations need not be `Sync`.
pub trait ContainerPlatform {
    /// Identifiers (ARNs) of every cluster visible to the caller, in listing order
    fn list_clusters(&self) -> impl Future<Output = Result<Vec<String>>>;

    /// Identifiers (ARNs) of the services running in `cluster`, in listing order
    fn list_services(&self, cluster: &str) -> impl Future<Output = Result<Vec<String>>>;

    /// Register (or re-register) a scalable target. Idempotent on the control plane.
    fn register_scalable_target(
        &self,
        request: &ScalingRequest,
    ) -> impl Future<Output = Result<()>>;
}
